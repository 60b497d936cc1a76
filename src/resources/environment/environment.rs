use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::config::{EnvironmentConfig, TurbulenceConfig};
use crate::utils::{AIR_GAS_CONSTANT, AIR_HEAT_CAPACITY_RATIO};

/// Environment conditions seen by the aircraft at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSample {
    pub temperature: f64,
    pub pressure: f64,
    pub density: f64,
    pub speed_of_sound: f64,
    /// Wind including gusts, earth frame (m/s).
    pub wind: Vector3<f64>,
}

impl Default for EnvironmentSample {
    fn default() -> Self {
        EnvironmentModel::new(EnvironmentConfig::default()).sample(0.0)
    }
}

/// Atmosphere and wind model advanced once per physics step.
///
/// Sampling is read-only; only [`step`](Self::step) advances the gust state,
/// so any number of force evaluations within a step see the same air.
#[derive(Debug, Clone)]
pub struct EnvironmentModel {
    config: EnvironmentConfig,
    rng: ChaCha8Rng,
    gust: Vector3<f64>,
}

impl EnvironmentModel {
    pub fn new(config: EnvironmentConfig) -> Self {
        let seed = config.turbulence.as_ref().map_or(0, |t| t.seed);
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            gust: Vector3::zeros(),
        }
    }

    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    /// Current gust velocity, earth frame (m/s).
    pub fn gust(&self) -> Vector3<f64> {
        self.gust
    }

    /// Restores the gust state and random sequence to their initial values.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    pub fn sample(&self, altitude: f64) -> EnvironmentSample {
        let air = self.config.atmosphere_config.properties(altitude);
        let speed_of_sound = (AIR_HEAT_CAPACITY_RATIO * AIR_GAS_CONSTANT * air.temperature).sqrt();

        EnvironmentSample {
            temperature: air.temperature,
            pressure: air.pressure,
            density: air.density,
            speed_of_sound,
            wind: self.config.wind_model_config.velocity(altitude) + self.gust,
        }
    }

    /// Advances the turbulence by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        let Some(turbulence) = self.config.turbulence.clone() else {
            return;
        };
        if dt <= 0.0 || turbulence.correlation_time <= 0.0 {
            return;
        }

        let TurbulenceConfig {
            intensity,
            correlation_time,
            ..
        } = turbulence;

        let decay = (-dt / correlation_time).exp();
        let drive = intensity * (1.0 - decay * decay).sqrt();
        for i in 0..3 {
            let noise = self.standard_normal();
            self.gust[i] = self.gust[i] * decay + drive * noise;
        }
    }

    /// Box-Muller sample from N(0, 1).
    fn standard_normal(&mut self) -> f64 {
        let u1: f64 = 1.0 - self.rng.gen::<f64>();
        let u2: f64 = self.rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}
