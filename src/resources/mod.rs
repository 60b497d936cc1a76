pub mod config;
mod environment;

pub use config::{AutopilotConfig, InnerLoopGains, PhysicsConfig, PidGains, RateLimits};
pub use environment::{
    AtmosphereConfig, AtmosphereProperties, AtmosphereType, EnvironmentConfig, EnvironmentModel,
    EnvironmentSample, TurbulenceConfig, WindConfig,
};
