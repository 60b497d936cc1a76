mod aero_coef;
mod builder;
mod control;
mod geometry;
mod loader;
mod mass;
mod propulsion;

pub use aero_coef::{
    AeroCoefficients, CoefficientIncrement, ControlForceCoefficients, DeviceIncrements,
};
pub use builder::AircraftConfigBuilder;
pub use control::ControlPower;
pub use geometry::AircraftGeometry;
pub use loader::ConfigError;
pub use mass::{MassModel, MomentsOfInertia};
pub use propulsion::PropulsionConfig;

use bevy::prelude::Component;
use serde::{Deserialize, Serialize};

/// Static, validated parameters of a simulated aircraft.
///
/// Read-only for the lifetime of a simulation. Use [`AircraftConfigBuilder`]
/// to merge partial or untrusted input over these defaults.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    pub name: String,
    pub geometry: AircraftGeometry,
    pub aero: AeroCoefficients,
    pub propulsion: PropulsionConfig,
    pub control_power: ControlPower,
    pub mass: MassModel,
    /// Maximum operating Mach number, used for the overspeed alarm.
    pub max_mach: f64,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self {
            name: "narrow_body".to_string(),
            geometry: AircraftGeometry::narrow_body(),
            aero: AeroCoefficients::narrow_body(),
            propulsion: PropulsionConfig::narrow_body(),
            control_power: ControlPower::narrow_body(),
            mass: MassModel::narrow_body(),
            max_mach: 0.82,
        }
    }
}

impl AircraftConfig {
    pub fn light_single() -> Self {
        Self {
            name: "light_single".to_string(),
            geometry: AircraftGeometry::light_single(),
            aero: AeroCoefficients::light_single(),
            propulsion: PropulsionConfig::light_single(),
            control_power: ControlPower::light_single(),
            mass: MassModel::light_single(),
            max_mach: 0.25,
        }
    }

    pub fn regional_turboprop() -> Self {
        Self {
            name: "regional_turboprop".to_string(),
            geometry: AircraftGeometry::regional_turboprop(),
            aero: AeroCoefficients::regional_turboprop(),
            propulsion: PropulsionConfig::regional_turboprop(),
            control_power: ControlPower::regional_turboprop(),
            mass: MassModel::regional_turboprop(),
            max_mach: 0.55,
        }
    }

    /// Looks up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "narrow_body" => Some(Self::default()),
            "light_single" => Some(Self::light_single()),
            "regional_turboprop" => Some(Self::regional_turboprop()),
            _ => None,
        }
    }

    /// Total mass (kg).
    pub fn mass(&self) -> f64 {
        self.mass.total()
    }

    /// Weight for the given gravitational acceleration (N).
    pub fn weight(&self, gravity: f64) -> f64 {
        self.mass() * gravity
    }

    /// 1-g clean stall speed in true airspeed for the given density (m/s).
    ///
    /// # Arguments
    /// * `density` - Air density (kg/m³).
    /// * `gravity` - Gravitational acceleration (m/s²).
    pub fn stall_speed(&self, density: f64, gravity: f64) -> f64 {
        let denominator = density * self.geometry.wing_area * self.aero.max_lift_coefficient;
        if denominator <= 0.0 {
            return 0.0;
        }
        (2.0 * self.weight(gravity) / denominator).sqrt()
    }
}
