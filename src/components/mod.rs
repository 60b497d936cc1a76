pub mod aerodynamics;
pub mod aircraft;
pub mod autopilot;
pub mod controls;
pub mod physics;
pub mod snapshot;

pub use aerodynamics::AirData;
pub use aircraft::{
    AeroCoefficients, AircraftConfig, AircraftConfigBuilder, AircraftGeometry, Attitude,
    CoefficientIncrement, ConfigError, ControlForceCoefficients, ControlPower, ControlState,
    DeviceIncrements, FlapSetting, InitialConditions, MassModel, MomentsOfInertia,
    PropulsionConfig, RigidBodyState,
};
pub use autopilot::{AutopilotCommand, AutopilotLimits, AutopilotStatus, AutopilotTargets};
pub use controls::{AutopilotTargetsUpdate, ControlDemand, ControlInputs, ControlLimits};
pub use physics::{AerodynamicForces, ForceBreakdown, ForceCategory, ForceDiagnostics};
pub use snapshot::{AircraftSnapshot, Airspeeds, Alarms, StateSnapshot};
