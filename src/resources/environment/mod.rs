mod config;
mod environment;

pub use config::{
    AtmosphereConfig, AtmosphereProperties, AtmosphereType, EnvironmentConfig, TurbulenceConfig,
    WindConfig,
};
pub use environment::{EnvironmentModel, EnvironmentSample};
