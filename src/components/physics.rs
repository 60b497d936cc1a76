use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::AirData;

/// Source of a force contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Propulsive,
    Gravitational,
}

/// Aerodynamic forces and moments in the body frame, with the intermediate
/// coefficients that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AerodynamicForces {
    pub force: Vector3<f64>,
    /// Roll, pitch and yaw moments including control and trim (N·m).
    pub moment: Vector3<f64>,
    pub lift: f64,
    pub drag: f64,
    pub side_force: f64,
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
    /// Pitching moment from lift and drag alone (N·m).
    pub pitching_moment: f64,
    /// Elevator position that would null `pitching_moment`, in [-1, 1].
    pub elevator_trim: f64,
}

impl Default for AerodynamicForces {
    fn default() -> Self {
        Self {
            force: Vector3::zeros(),
            moment: Vector3::zeros(),
            lift: 0.0,
            drag: 0.0,
            side_force: 0.0,
            lift_coefficient: 0.0,
            drag_coefficient: 0.0,
            pitching_moment: 0.0,
            elevator_trim: 0.0,
        }
    }
}

/// Per-category body-frame forces and their sums for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceBreakdown {
    pub aerodynamic: Vector3<f64>,
    pub propulsion: Vector3<f64>,
    pub gravity: Vector3<f64>,
    pub total_force: Vector3<f64>,
    pub total_moment: Vector3<f64>,
    /// Body angular acceleration (rad/s²).
    pub angular_acceleration: Vector3<f64>,
}

impl Default for ForceBreakdown {
    fn default() -> Self {
        Self {
            aerodynamic: Vector3::zeros(),
            propulsion: Vector3::zeros(),
            gravity: Vector3::zeros(),
            total_force: Vector3::zeros(),
            total_moment: Vector3::zeros(),
            angular_acceleration: Vector3::zeros(),
        }
    }
}

impl ForceBreakdown {
    pub fn get(&self, category: ForceCategory) -> Vector3<f64> {
        match category {
            ForceCategory::Aerodynamic => self.aerodynamic,
            ForceCategory::Propulsive => self.propulsion,
            ForceCategory::Gravitational => self.gravity,
        }
    }
}

/// Intermediate force computations for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceDiagnostics {
    pub air_data: AirData,
    pub aerodynamics: AerodynamicForces,
    pub forces: ForceBreakdown,
}
