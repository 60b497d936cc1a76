mod problem;
mod solver;

pub use problem::{LevelFlightProblem, TrialForces};
pub use solver::{trim_level_flight, TrimError, TrimResult};
