use flyer_fdm::{
    components::{AircraftConfig, InitialConditions},
    resources::{EnvironmentConfig, PhysicsConfig, TurbulenceConfig},
    simulation::FlightSimulation,
};
use serde_json::{json, Value};

/// Narrow-body airliner trimmed at 10,000 ft and 280 kt
pub fn create_test_simulation() -> FlightSimulation {
    FlightSimulation::default()
}

/// Simulation trimmed at the given altitude (m) and true airspeed (m/s)
pub fn create_simulation_at(config: AircraftConfig, altitude: f64, airspeed: f64) -> FlightSimulation {
    FlightSimulation::builder(config)
        .initial_conditions(InitialConditions {
            altitude,
            airspeed,
            ..Default::default()
        })
        .build()
}

/// Default aircraft with a fixed timestep other than the default
pub fn create_simulation_with_timestep(timestep: f64) -> FlightSimulation {
    FlightSimulation::builder(AircraftConfig::default())
        .physics(PhysicsConfig {
            timestep,
            ..Default::default()
        })
        .build()
}

/// Default aircraft in seeded turbulence
pub fn create_turbulent_simulation(seed: u64) -> FlightSimulation {
    FlightSimulation::builder(AircraftConfig::default())
        .environment(EnvironmentConfig::default().with_turbulence(TurbulenceConfig {
            intensity: 2.0,
            correlation_time: 1.0,
            seed,
        }))
        .build()
}

/// Loosely typed aircraft description as an embedding script would send it
pub fn create_test_aircraft_json() -> Value {
    json!({
        "name": "test_twin",
        "wingArea": 70.0,
        "wingSpan": 28.0,
        "maxLiftCoefficient": 1.5,
        "engineCount": 2,
        "maxThrustPerEngine": "60000",
        "emptyWeight": 20000,
        "fuelWeight": 4000,
        "payloadWeight": 3000,
        "controlPower": { "roll": 4.0e5, "pitch": 6.0e5, "yaw": 3.0e5 },
        "momentOfInertia": { "roll": 3.0e5, "pitch": 9.0e5, "yaw": 1.1e6 },
    })
}
