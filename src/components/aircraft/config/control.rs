use serde::{Deserialize, Serialize};

/// Moment produced per unit control input about each body axis (N·m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPower {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Default for ControlPower {
    fn default() -> Self {
        Self::narrow_body()
    }
}

impl ControlPower {
    pub fn narrow_body() -> Self {
        Self {
            roll: 1.2e6,
            pitch: 1.5e6,
            yaw: 1.0e6,
        }
    }

    pub fn light_single() -> Self {
        Self {
            roll: 1_200.0,
            pitch: 1_000.0,
            yaw: 1_200.0,
        }
    }

    pub fn regional_turboprop() -> Self {
        Self {
            roll: 2.0e5,
            pitch: 2.5e5,
            yaw: 2.5e5,
        }
    }
}
