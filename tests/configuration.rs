mod common;

use std::io::Write;

use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use flyer_fdm::{
    components::{AircraftConfig, AircraftConfigBuilder, ConfigError},
    resources::{AutopilotConfig, EnvironmentConfig, PhysicsConfig, WindConfig},
    ControlInputs, FlightSimulation,
};
use serde_json::json;

use common::{assert_snapshot_valid, create_test_aircraft_json, run_ticks};

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_empty_description_flies_with_defaults() {
    let config = AircraftConfigBuilder::from_json(&json!({})).build();
    assert_eq!(config, AircraftConfig::default());

    let mut sim = FlightSimulation::new(config);
    for snapshot in run_ticks(&mut sim, 60, &ControlInputs::new()) {
        assert_snapshot_valid(&snapshot);
    }
}

#[test]
fn test_garbage_description_never_produces_nan() {
    let config = AircraftConfigBuilder::from_json(&json!({
        "wingArea": "NaN",
        "wingSpan": null,
        "maxLiftCoefficient": -1.0,
        "engineCount": "two",
        "emptyWeight": {},
        "controlPower": "strong",
        "momentOfInertia": { "pitch": 0.0 },
    }))
    .build();

    let defaults = AircraftConfig::default();
    assert_eq!(config.geometry, defaults.geometry);
    assert_eq!(config.aero.max_lift_coefficient, defaults.aero.max_lift_coefficient);
    assert_eq!(config.propulsion.engine_count, defaults.propulsion.engine_count);
    assert_eq!(config.mass.moment_of_inertia, defaults.mass.moment_of_inertia);

    let mut sim = FlightSimulation::new(config);
    for snapshot in run_ticks(&mut sim, 60, &ControlInputs::new()) {
        assert_snapshot_valid(&snapshot);
    }
}

#[test]
fn test_huge_weights_keep_a_finite_mass() {
    let config = AircraftConfigBuilder::from_json(&json!({
        "emptyWeight": 1e308,
        "fuelWeight": 1e308,
    }))
    .build();
    assert!(config.mass().is_finite() && config.mass() > 0.0);

    let mut sim = FlightSimulation::new(config);
    let start = sim.get_aircraft_state().airspeeds.true_airspeed;
    for snapshot in run_ticks(&mut sim, 60, &ControlInputs::new()) {
        assert_snapshot_valid(&snapshot);
    }
    assert!(sim.diagnostics().forces.total_force.iter().all(|f| f.is_finite()));
    assert_relative_eq!(
        sim.get_aircraft_state().airspeeds.true_airspeed,
        start,
        max_relative = 0.01
    );
}

#[test]
fn test_json_file_loads() {
    let file = write_temp(".json", &create_test_aircraft_json().to_string());

    let config = AircraftConfig::from_file(file.path()).unwrap();

    assert_eq!(config.name, "test_twin");
    assert_relative_eq!(config.geometry.wing_area, 70.0);
    assert_relative_eq!(config.propulsion.max_thrust_per_engine, 60_000.0);
    assert_relative_eq!(config.mass(), 27_000.0);
    assert_relative_eq!(config.mass.moment_of_inertia.pitch, 9.0e5);
}

#[test]
fn test_yaml_file_loads() {
    let file = write_temp(
        ".yaml",
        "preset: regional_turboprop\n\
         name: yaml_turboprop\n\
         payloadWeight: 2500\n\
         controlPower:\n  roll: 150000\n",
    );

    let config = AircraftConfig::from_file(file.path()).unwrap();
    let base = AircraftConfig::regional_turboprop();

    assert_eq!(config.name, "yaml_turboprop");
    assert_relative_eq!(config.mass.payload_weight, 2500.0);
    assert_relative_eq!(config.control_power.roll, 150_000.0);
    assert_relative_eq!(config.control_power.pitch, base.control_power.pitch);
    assert_eq!(config.geometry, base.geometry);
}

#[test]
fn test_unparsable_yaml_is_an_error() {
    let file = write_temp(".yml", "wingArea: [unterminated\n");

    let result = AircraftConfig::from_file(file.path());
    assert!(matches!(result, Err(ConfigError::YamlError(_))));
}

#[test]
fn test_loaded_config_trims() {
    let file = write_temp(".json", &create_test_aircraft_json().to_string());
    let config = AircraftConfig::from_file(file.path()).unwrap();

    let sim = FlightSimulation::builder(config)
        .initial_conditions(flyer_fdm::InitialConditions {
            altitude: 2000.0,
            airspeed: 110.0,
            ..Default::default()
        })
        .build();
    let weight = sim.config().weight(sim.physics_config().gravity);

    assert!((sim.diagnostics().forces.total_force.z / weight).abs() < 1e-6);
}

#[test]
fn test_physics_and_autopilot_configs_from_yaml() {
    let physics: PhysicsConfig = serde_yaml::from_str("timestep: 0.01\nmax_substeps: 5\n").unwrap();
    assert_relative_eq!(physics.timestep, 0.01);
    assert_eq!(physics.max_substeps, 5);
    assert_relative_eq!(physics.gravity, PhysicsConfig::default().gravity);

    let autopilot: AutopilotConfig = serde_yaml::from_str("{}").unwrap();
    assert_eq!(autopilot, AutopilotConfig::default());

    let environment: EnvironmentConfig = serde_yaml::from_str(
        "wind_model_config:\n  Constant:\n    velocity: [5.0, 0.0, 0.0]\n",
    )
    .unwrap();
    assert!(matches!(
        environment.wind_model_config,
        WindConfig::Constant { .. }
    ));
}
