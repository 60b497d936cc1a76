//! Six-degree-of-freedom flight dynamics for fixed-wing aircraft.
//!
//! [`FlightSimulation`] owns one aircraft and advances it in fixed steps.
//! It can be driven directly or through [`FlightDynamicsPlugin`] inside a
//! Bevy app.

pub mod components;
pub mod plugins;
pub mod resources;
pub mod simulation;
pub mod systems;
pub mod utils;

pub use components::{
    AircraftConfig, AircraftSnapshot, AutopilotStatus, AutopilotTargetsUpdate, ControlInputs,
    FlapSetting, InitialConditions, RigidBodyState, StateSnapshot,
};
pub use plugins::{FlightDynamicsPlugin, FlightDynamicsSet};
pub use resources::{AutopilotConfig, EnvironmentConfig, PhysicsConfig};
pub use simulation::{FlightSimulation, FlightSimulationBuilder};
pub use systems::{AutopilotStrategy, PidController, TrimError};
