use serde::{Deserialize, Serialize};

use crate::utils::{
    AIR_GAS_CONSTANT, GRAVITY, ISA_LAPSE_RATE, ISA_MAX_ALTITUDE, ISA_MIN_ALTITUDE,
    ISA_SEA_LEVEL_DENSITY, ISA_SEA_LEVEL_PRESSURE, ISA_SEA_LEVEL_TEMP, ISA_TROPOPAUSE_ALTITUDE,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereConfig {
    pub model_type: AtmosphereType,
    pub sea_level_density: f64,
    pub sea_level_temperature: f64,
    pub sea_level_pressure: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtmosphereType {
    /// Sea-level properties at every altitude.
    Constant,
    /// International Standard Atmosphere up to 20 km.
    Standard,
}

/// Thermodynamic state of the air at one altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereProperties {
    /// Kelvin.
    pub temperature: f64,
    /// Pascal.
    pub pressure: f64,
    /// kg/m³.
    pub density: f64,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            model_type: AtmosphereType::Standard,
            sea_level_density: ISA_SEA_LEVEL_DENSITY,
            sea_level_temperature: ISA_SEA_LEVEL_TEMP,
            sea_level_pressure: ISA_SEA_LEVEL_PRESSURE,
        }
    }
}

impl AtmosphereConfig {
    pub fn constant() -> Self {
        Self {
            model_type: AtmosphereType::Constant,
            ..Default::default()
        }
    }

    /// Air properties at the given geometric altitude (m).
    ///
    /// The standard model has a linear temperature lapse in the troposphere
    /// and an isothermal layer above 11 km. Altitude is clamped to the
    /// modelled band.
    pub fn properties(&self, altitude: f64) -> AtmosphereProperties {
        match self.model_type {
            AtmosphereType::Constant => AtmosphereProperties {
                temperature: self.sea_level_temperature,
                pressure: self.sea_level_pressure,
                density: self.sea_level_density,
            },
            AtmosphereType::Standard => self.standard(altitude),
        }
    }

    fn standard(&self, altitude: f64) -> AtmosphereProperties {
        let altitude = if altitude.is_finite() {
            altitude.clamp(ISA_MIN_ALTITUDE, ISA_MAX_ALTITUDE)
        } else {
            0.0
        };

        let t0 = self.sea_level_temperature;
        let p0 = self.sea_level_pressure;
        let exponent = -GRAVITY / (ISA_LAPSE_RATE * AIR_GAS_CONSTANT);

        let (temperature, pressure) = if altitude <= ISA_TROPOPAUSE_ALTITUDE {
            let t = t0 + ISA_LAPSE_RATE * altitude;
            (t, p0 * (t / t0).powf(exponent))
        } else {
            let t11 = t0 + ISA_LAPSE_RATE * ISA_TROPOPAUSE_ALTITUDE;
            let p11 = p0 * (t11 / t0).powf(exponent);
            let p = p11
                * (-GRAVITY * (altitude - ISA_TROPOPAUSE_ALTITUDE) / (AIR_GAS_CONSTANT * t11)).exp();
            (t11, p)
        };

        // Scale so a non-standard sea-level density is honoured at the surface.
        let isa_density = pressure / (AIR_GAS_CONSTANT * temperature);
        let surface_density = p0 / (AIR_GAS_CONSTANT * t0);
        let density = isa_density * self.sea_level_density / surface_density;

        AtmosphereProperties {
            temperature,
            pressure,
            density,
        }
    }
}
