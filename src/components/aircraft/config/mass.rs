use serde::{Deserialize, Serialize};

/// Principal moments of inertia about the body axes (kg·m²).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentsOfInertia {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

/// Mass breakdown of the aircraft. Weights are masses in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MassModel {
    /// Operating empty weight (kg).
    pub empty_weight: f64,
    /// Fuel on board (kg).
    pub fuel_weight: f64,
    /// Passengers and cargo (kg).
    pub payload_weight: f64,
    /// Principal moments of inertia (kg·m²).
    pub moment_of_inertia: MomentsOfInertia,
}

impl Default for MassModel {
    fn default() -> Self {
        Self::narrow_body()
    }
}

impl MassModel {
    /// Creates a new `MassModel` from its weight breakdown and principal inertias.
    ///
    /// # Arguments
    /// * `empty_weight` - Operating empty weight (kg).
    /// * `fuel_weight` - Fuel load (kg).
    /// * `payload_weight` - Payload (kg).
    /// * `inertia` - Moments of inertia about the roll, pitch and yaw axes (kg·m²).
    pub fn new(
        empty_weight: f64,
        fuel_weight: f64,
        payload_weight: f64,
        inertia: MomentsOfInertia,
    ) -> Self {
        Self {
            empty_weight,
            fuel_weight,
            payload_weight,
            moment_of_inertia: inertia,
        }
    }

    /// Total mass: empty + fuel + payload (kg).
    pub fn total(&self) -> f64 {
        self.empty_weight + self.fuel_weight + self.payload_weight
    }

    pub fn narrow_body() -> Self {
        Self::new(
            41_413.0,
            20_000.0,
            15_000.0,
            MomentsOfInertia {
                roll: 1.2e6,
                pitch: 3.0e6,
                yaw: 4.0e6,
            },
        )
    }

    pub fn light_single() -> Self {
        Self::new(
            767.0,
            120.0,
            170.0,
            MomentsOfInertia {
                roll: 1285.3,
                pitch: 1824.9,
                yaw: 2666.9,
            },
        )
    }

    pub fn regional_turboprop() -> Self {
        Self::new(
            13_500.0,
            4_000.0,
            5_000.0,
            MomentsOfInertia {
                roll: 2.1e5,
                pitch: 4.0e5,
                yaw: 5.8e5,
            },
        )
    }
}
