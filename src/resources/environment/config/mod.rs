mod atmosphere;
mod wind;

pub use atmosphere::{AtmosphereConfig, AtmosphereProperties, AtmosphereType};
pub use wind::WindConfig;

use serde::{Deserialize, Serialize};

/// First-order Gauss-Markov gusts added to the mean wind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurbulenceConfig {
    /// Standard deviation of each gust component (m/s).
    pub intensity: f64,
    /// Correlation time of the gusts (s).
    pub correlation_time: f64,
    pub seed: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub wind_model_config: WindConfig,
    pub atmosphere_config: AtmosphereConfig,
    pub turbulence: Option<TurbulenceConfig>,
}

impl EnvironmentConfig {
    pub fn new(wind_config: WindConfig, atmosphere_config: AtmosphereConfig) -> Self {
        Self {
            wind_model_config: wind_config,
            atmosphere_config,
            turbulence: None,
        }
    }

    pub fn with_constant_wind(wind_speed: f64, bearing: f64) -> Self {
        Self {
            wind_model_config: WindConfig::from_bearing(wind_speed, bearing),
            ..Default::default()
        }
    }

    pub fn with_logarithmic_wind(d: f64, z0: f64, u_star: f64, bearing: f64) -> Self {
        Self {
            wind_model_config: WindConfig::Logarithmic {
                d,
                z0,
                u_star,
                bearing,
            },
            ..Default::default()
        }
    }

    pub fn with_turbulence(mut self, turbulence: TurbulenceConfig) -> Self {
        self.turbulence = Some(turbulence);
        self
    }
}
