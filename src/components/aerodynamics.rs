use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Air-relative flow quantities for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirData {
    /// True airspeed (m/s).
    pub true_airspeed: f64,
    /// Angle of attack α (rad).
    pub alpha: f64,
    /// Sideslip angle β (rad).
    pub beta: f64,
    /// Dynamic pressure (Pa).
    pub dynamic_pressure: f64,
    /// Air density (kg/m³).
    pub density: f64,
    /// Mach number.
    pub mach: f64,
    /// Body-frame velocity relative to the air mass (m/s).
    pub relative_velocity: Vector3<f64>,
    /// Wind in the body frame (m/s).
    pub wind_velocity: Vector3<f64>,
}

impl Default for AirData {
    fn default() -> Self {
        Self {
            true_airspeed: 0.0,
            alpha: 0.0,
            beta: 0.0,
            dynamic_pressure: 0.0,
            density: crate::utils::ISA_SEA_LEVEL_DENSITY,
            mach: 0.0,
            relative_velocity: Vector3::zeros(),
            wind_velocity: Vector3::zeros(),
        }
    }
}
