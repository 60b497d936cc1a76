use bevy::log::warn;
use bevy::prelude::Resource;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::GRAVITY;

/// Configuration for the fixed-step physics integration.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed integration step (s).
    pub timestep: f64,
    /// Maximum fixed steps run for one external `advance` call.
    pub max_substeps: u32,
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
    /// Multiplicative damping applied to p, q, r every step.
    pub angular_damping: Vector3<f64>,
    /// Distance pitch is kept from ±π/2 (rad).
    pub pitch_singularity_margin: f64,
    pub max_velocity: f64,
    pub max_angular_velocity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 60.0,
            max_substeps: 30,
            gravity: GRAVITY,
            angular_damping: Vector3::new(0.95, 0.95, 0.95),
            pitch_singularity_margin: 0.05,
            max_velocity: 400.0,      // m/s
            max_angular_velocity: 3.0, // rad/s
        }
    }
}

impl PhysicsConfig {
    /// Largest pitch magnitude allowed in the state (rad).
    pub fn max_pitch(&self) -> f64 {
        std::f64::consts::FRAC_PI_2 - self.pitch_singularity_margin
    }

    /// Replaces out-of-range values with their defaults.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut config = self;

        if !(config.timestep.is_finite() && config.timestep > 0.0 && config.timestep <= 0.1) {
            warn!("Invalid physics timestep {}, using {}", config.timestep, defaults.timestep);
            config.timestep = defaults.timestep;
        }
        if config.max_substeps == 0 {
            config.max_substeps = 1;
        }
        if !(config.gravity.is_finite() && config.gravity > 0.0) {
            warn!("Invalid gravity {}, using {}", config.gravity, defaults.gravity);
            config.gravity = defaults.gravity;
        }
        if !config
            .angular_damping
            .iter()
            .all(|d| d.is_finite() && *d > 0.0 && *d <= 1.0)
        {
            warn!("Angular damping must be in (0, 1], using defaults");
            config.angular_damping = defaults.angular_damping;
        }
        let margin = config.pitch_singularity_margin;
        if !(margin.is_finite() && margin > 0.0 && margin < std::f64::consts::FRAC_PI_4) {
            config.pitch_singularity_margin = defaults.pitch_singularity_margin;
        }
        if !(config.max_velocity.is_finite() && config.max_velocity > 0.0) {
            config.max_velocity = defaults.max_velocity;
        }
        if !(config.max_angular_velocity.is_finite() && config.max_angular_velocity > 0.0) {
            config.max_angular_velocity = defaults.max_angular_velocity;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_replaces_invalid_values() {
        let config = PhysicsConfig {
            timestep: f64::NAN,
            max_substeps: 0,
            angular_damping: Vector3::new(0.9, 1.5, 0.9),
            ..Default::default()
        }
        .sanitized();

        let defaults = PhysicsConfig::default();
        assert_eq!(config.timestep, defaults.timestep);
        assert_eq!(config.max_substeps, 1);
        assert_eq!(config.angular_damping, defaults.angular_damping);
    }
}
