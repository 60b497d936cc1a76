use serde::{Deserialize, Serialize};

/// Values held by the autopilot. SI units: m, m/s (true airspeed), rad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AutopilotTargets {
    pub altitude: f64,
    pub speed: f64,
    pub heading: f64,
}

/// Authority limits for the autopilot commands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutopilotLimits {
    /// Maximum commanded pitch attitude (rad).
    pub max_pitch: f64,
    /// Minimum commanded pitch attitude (rad).
    pub min_pitch: f64,
    pub max_throttle: f64,
    pub min_throttle: f64,
    /// Maximum commanded bank angle (rad).
    pub max_bank: f64,
}

impl Default for AutopilotLimits {
    fn default() -> Self {
        Self {
            max_pitch: 0.26,
            min_pitch: -0.17,
            max_throttle: 1.0,
            min_throttle: 0.0,
            max_bank: 0.5,
        }
    }
}

/// Commands produced by an autopilot strategy for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AutopilotCommand {
    pub throttle: f64,
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
    /// Pitch attitude demanded of the inner loop (rad).
    pub pitch_attitude: f64,
    /// Bank angle demanded of the inner loop (rad).
    pub bank_angle: f64,
}

/// Externally visible autopilot state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutopilotStatus {
    pub engaged: bool,
    pub strategy: String,
    pub targets: AutopilotTargets,
    pub limits: AutopilotLimits,
    pub altitude_error: f64,
    pub speed_error: f64,
    pub heading_error: f64,
    pub command: AutopilotCommand,
}
