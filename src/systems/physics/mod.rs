mod force_calculator;
mod gravity;
mod integrator;

pub use force_calculator::sum_forces;
pub use gravity::calculate_gravitational_forces;
pub use integrator::{euler_rates, integrate_state};
