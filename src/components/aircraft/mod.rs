pub mod config;
pub mod state;

pub use config::{
    AeroCoefficients, AircraftConfig, AircraftConfigBuilder, AircraftGeometry,
    CoefficientIncrement, ConfigError, ControlForceCoefficients, ControlPower, DeviceIncrements,
    MassModel, MomentsOfInertia, PropulsionConfig,
};
pub use state::{Attitude, ControlState, FlapSetting, InitialConditions, RigidBodyState};
