pub mod autopilot;
pub mod physics;

pub use autopilot::{AutopilotConfig, InnerLoopGains, PidGains, RateLimits};
pub use physics::PhysicsConfig;
