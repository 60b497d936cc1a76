use serde::{Deserialize, Serialize};

use crate::utils::ISA_SEA_LEVEL_DENSITY;

/// Engine installation: a number of identical engines producing thrust along body +x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropulsionConfig {
    pub engine_count: u32,
    /// Sea-level static thrust of a single engine (N).
    pub max_thrust_per_engine: f64,
    /// Exponent of the density ratio used to derate thrust with altitude.
    pub density_exponent: f64,
}

impl Default for PropulsionConfig {
    fn default() -> Self {
        Self::narrow_body()
    }
}

impl PropulsionConfig {
    pub fn narrow_body() -> Self {
        Self {
            engine_count: 2,
            max_thrust_per_engine: 120_000.0,
            density_exponent: 0.7,
        }
    }

    pub fn light_single() -> Self {
        Self {
            engine_count: 1,
            max_thrust_per_engine: 2_800.0,
            density_exponent: 0.7,
        }
    }

    pub fn regional_turboprop() -> Self {
        Self {
            engine_count: 2,
            max_thrust_per_engine: 25_000.0,
            density_exponent: 0.7,
        }
    }

    /// Combined sea-level thrust of all engines (N).
    pub fn max_total_thrust(&self) -> f64 {
        self.engine_count as f64 * self.max_thrust_per_engine
    }

    /// Available thrust at full throttle for the given air density (N).
    ///
    /// # Arguments
    /// * `density` - Local air density (kg/m³).
    pub fn available_thrust(&self, density: f64) -> f64 {
        let density_ratio = (density / ISA_SEA_LEVEL_DENSITY).max(0.0);
        self.max_total_thrust() * density_ratio.powf(self.density_exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sea_level_thrust() {
        let propulsion = PropulsionConfig::narrow_body();
        assert_relative_eq!(propulsion.available_thrust(ISA_SEA_LEVEL_DENSITY), 240_000.0);
    }

    #[test]
    fn test_thrust_derates_with_density() {
        let propulsion = PropulsionConfig::narrow_body();
        let high = propulsion.available_thrust(0.9);
        assert!(high < propulsion.max_total_thrust());
        assert_relative_eq!(
            high,
            240_000.0 * (0.9 / ISA_SEA_LEVEL_DENSITY).powf(0.7),
            epsilon = 1e-6
        );
    }
}
