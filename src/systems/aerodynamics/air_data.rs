use nalgebra::Vector3;

use crate::components::{AirData, RigidBodyState};
use crate::resources::EnvironmentSample;
use crate::utils::{body_to_earth, deg_to_rad, MAX_ANGLE_OF_ATTACK, MAX_SIDESLIP};

const MIN_AIRSPEED_THRESHOLD: f64 = 1e-6;

/// Derives air-relative flow quantities from the rigid-body state.
///
/// # Arguments
/// * `state` - Current rigid-body state (body-frame ground velocity).
/// * `environment` - Air properties and earth-frame wind at the aircraft.
///
/// # Returns
/// `AirData` with α clamped to ±60° and β to ±45°. Both angles are zero
/// when there is no relative flow.
pub fn calculate_air_data(state: &RigidBodyState, environment: &EnvironmentSample) -> AirData {
    let attitude = &state.attitude;
    let to_body = body_to_earth(attitude.roll, attitude.pitch, attitude.yaw).inverse();
    let wind_body = to_body * environment.wind;
    let relative_velocity = state.velocity - wind_body;
    let airspeed = relative_velocity.norm();

    let (alpha, beta) = if airspeed > MIN_AIRSPEED_THRESHOLD {
        (
            calculate_alpha(&relative_velocity),
            calculate_beta(&relative_velocity),
        )
    } else {
        (0.0, 0.0)
    };

    let mach = if environment.speed_of_sound > 0.0 {
        airspeed / environment.speed_of_sound
    } else {
        0.0
    };

    AirData {
        true_airspeed: airspeed,
        alpha,
        beta,
        dynamic_pressure: 0.5 * environment.density * airspeed * airspeed,
        density: environment.density,
        mach,
        relative_velocity,
        wind_velocity: wind_body,
    }
}

fn calculate_alpha(relative_velocity: &Vector3<f64>) -> f64 {
    let limit = deg_to_rad(MAX_ANGLE_OF_ATTACK);
    relative_velocity
        .z
        .atan2(relative_velocity.x)
        .clamp(-limit, limit)
}

fn calculate_beta(relative_velocity: &Vector3<f64>) -> f64 {
    let limit = deg_to_rad(MAX_SIDESLIP);
    let longitudinal = (relative_velocity.x.powi(2) + relative_velocity.z.powi(2)).sqrt();
    relative_velocity
        .y
        .atan2(longitudinal)
        .clamp(-limit, limit)
}
