mod flight_dynamics;

pub use flight_dynamics::{flight_dynamics_system, FlightDynamicsPlugin, FlightDynamicsSet};
