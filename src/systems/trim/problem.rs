use argmin::core::{CostFunction, Error as ArgminError};
use nalgebra::Vector3;

use crate::components::{AerodynamicForces, AircraftConfig, Attitude, ControlState, RigidBodyState};
use crate::resources::{EnvironmentSample, PhysicsConfig};
use crate::systems::{
    calculate_aerodynamic_forces, calculate_air_data, calculate_gravitational_forces,
};

/// Wings-level, constant-altitude flight at a given airspeed.
///
/// For a trial angle of attack the pitch attitude equals α, so the flight
/// path is horizontal. The residual is the body-z force over weight.
#[derive(Debug, Clone)]
pub struct LevelFlightProblem<'a> {
    pub aircraft_config: &'a AircraftConfig,
    pub physics_config: &'a PhysicsConfig,
    pub environment: EnvironmentSample,
    pub altitude: f64,
    pub airspeed: f64,
    pub heading: f64,
    pub controls: ControlState,
}

/// Forces evaluated at one trial angle of attack.
#[derive(Debug, Clone, Copy)]
pub struct TrialForces {
    pub state: RigidBodyState,
    pub aerodynamics: AerodynamicForces,
    pub gravity: Vector3<f64>,
}

impl LevelFlightProblem<'_> {
    pub fn weight(&self) -> f64 {
        self.aircraft_config.weight(self.physics_config.gravity)
    }

    /// Rigid-body state flying level at angle of attack `alpha` in still air.
    pub fn state_at(&self, alpha: f64) -> RigidBodyState {
        let mut state = RigidBodyState {
            velocity: Vector3::new(
                self.airspeed * alpha.cos(),
                0.0,
                self.airspeed * alpha.sin(),
            ),
            attitude: Attitude::new(0.0, alpha, self.heading),
            ..Default::default()
        };
        state.set_altitude(self.altitude);
        state
    }

    pub fn evaluate(&self, alpha: f64) -> TrialForces {
        let state = self.state_at(alpha);
        let still_air = EnvironmentSample {
            wind: Vector3::zeros(),
            ..self.environment
        };
        let air_data = calculate_air_data(&state, &still_air);
        let aerodynamics =
            calculate_aerodynamic_forces(self.aircraft_config, &air_data, &self.controls, self.weight());
        let gravity = calculate_gravitational_forces(
            self.aircraft_config.mass(),
            self.physics_config.gravity,
            state.attitude.pitch,
        );

        TrialForces {
            state,
            aerodynamics,
            gravity,
        }
    }

    /// Normalised body-z force at `alpha`. Thrust has no z component.
    pub fn residual(&self, alpha: f64) -> f64 {
        let forces = self.evaluate(alpha);
        (forces.aerodynamics.force.z + forces.gravity.z) / self.weight()
    }
}

impl CostFunction for LevelFlightProblem<'_> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, alpha: &Self::Param) -> Result<Self::Output, ArgminError> {
        let residual = self.residual(*alpha);
        if residual.is_finite() {
            Ok(residual)
        } else {
            Err(ArgminError::msg(format!(
                "non-finite trim residual at alpha {alpha}"
            )))
        }
    }
}
