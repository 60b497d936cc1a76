pub mod aerodynamics;
pub mod controller;
pub mod physics;
pub mod propulsion;
pub mod reporter;
pub mod trim;

pub use aerodynamics::{calculate_aerodynamic_forces, calculate_air_data};
pub use controller::{
    AutopilotContext, AutopilotController, AutopilotStrategy, ControlShaper, PidAutopilot,
    PidController,
};
pub use physics::{calculate_gravitational_forces, euler_rates, integrate_state, sum_forces};
pub use propulsion::calculate_propulsion_forces;
pub use reporter::{calculate_airspeeds, indicated_airspeed, AlarmThresholds, StateReporter};
pub use trim::{trim_level_flight, LevelFlightProblem, TrialForces, TrimError, TrimResult};
