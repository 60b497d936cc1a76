use argmin::core::{Executor, State};
use argmin::solver::brent::BrentRoot;
use bevy::log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::problem::LevelFlightProblem;
use crate::components::{AircraftConfig, ControlState, RigidBodyState};
use crate::resources::{EnvironmentSample, PhysicsConfig};
use crate::utils::{body_to_earth, MIN_AIRSPEED};

/// Search bracket for the trim angle of attack (rad).
const ALPHA_BRACKET: (f64, f64) = (-0.2, 0.5);
const ALPHA_TOLERANCE: f64 = 1e-12;
const MAX_ITERATIONS: u64 = 100;
/// Largest acceptable |Fz| / W at the solution.
const RESIDUAL_TOLERANCE: f64 = 1e-6;

#[derive(Error, Debug)]
pub enum TrimError {
    #[error("Invalid trim condition: {0}")]
    InvalidCondition(String),
    #[error("Trim solver failed: {0}")]
    Solver(String),
    #[error("Trim did not converge, residual {residual:.3e}")]
    NotConverged { residual: f64 },
}

/// Level-flight trim solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrimResult {
    /// Angle of attack (rad).
    pub alpha: f64,
    /// Pitch attitude (rad), equal to `alpha`.
    pub pitch: f64,
    /// Throttle that nulls the body-x force, clamped to [0, 1].
    pub throttle: f64,
    /// Elevator position the aerodynamic model uses to null its pitching moment.
    pub elevator_trim: f64,
    /// Normalised body-x force left when the throttle saturates.
    pub residual_x: f64,
    /// Initial state flying the trimmed condition in the given wind.
    pub state: RigidBodyState,
}

/// Solves for the wings-level attitude and throttle holding altitude.
///
/// # Arguments
/// * `config` - Aircraft configuration.
/// * `physics` - Physics configuration (gravity).
/// * `environment` - Air at the trim altitude. Wind is added to the
///   returned state but not to the balance.
/// * `altitude` - Altitude (m).
/// * `airspeed` - True airspeed (m/s).
/// * `heading` - Heading (rad).
/// * `controls` - Discrete device positions used during the solve.
pub fn trim_level_flight(
    config: &AircraftConfig,
    physics: &PhysicsConfig,
    environment: &EnvironmentSample,
    altitude: f64,
    airspeed: f64,
    heading: f64,
    controls: &ControlState,
) -> Result<TrimResult, TrimError> {
    if !airspeed.is_finite() || airspeed < MIN_AIRSPEED {
        return Err(TrimError::InvalidCondition(format!(
            "airspeed {airspeed} m/s"
        )));
    }
    if !altitude.is_finite() || !heading.is_finite() {
        return Err(TrimError::InvalidCondition(
            "non-finite altitude or heading".to_string(),
        ));
    }

    let problem = LevelFlightProblem {
        aircraft_config: config,
        physics_config: physics,
        environment: *environment,
        altitude,
        airspeed,
        heading,
        controls: ControlState {
            pitch: 0.0,
            roll: 0.0,
            yaw: 0.0,
            ..*controls
        },
    };

    let solver = BrentRoot::new(ALPHA_BRACKET.0, ALPHA_BRACKET.1, ALPHA_TOLERANCE);
    let result = Executor::new(problem.clone(), solver)
        .configure(|state| state.max_iters(MAX_ITERATIONS))
        .run()
        .map_err(|e| TrimError::Solver(e.to_string()))?;

    let alpha = result
        .state()
        .get_param()
        .copied()
        .ok_or_else(|| TrimError::Solver("no parameter returned".to_string()))?;

    let residual = problem.residual(alpha);
    if !residual.is_finite() || residual.abs() > RESIDUAL_TOLERANCE {
        return Err(TrimError::NotConverged { residual });
    }

    let forces = problem.evaluate(alpha);
    let full_thrust = config.propulsion.available_thrust(environment.density);
    let drag_x = forces.aerodynamics.force.x + forces.gravity.x;
    let throttle = if full_thrust > 0.0 {
        (-drag_x / full_thrust).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let residual_x = (drag_x + throttle * full_thrust) / problem.weight();

    let mut state = forces.state;
    let attitude = state.attitude;
    let to_body = body_to_earth(attitude.roll, attitude.pitch, attitude.yaw).inverse();
    state.velocity += to_body * environment.wind;

    info!(
        "Trimmed at {:.0} m, {:.1} m/s: alpha {:.4} rad, throttle {:.3}",
        altitude, airspeed, alpha, throttle
    );

    Ok(TrimResult {
        alpha,
        pitch: alpha,
        throttle,
        elevator_trim: forces.aerodynamics.elevator_trim,
        residual_x,
        state,
    })
}
