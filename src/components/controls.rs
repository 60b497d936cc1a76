use bevy::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::components::FlapSetting;

/// Partial update of the autopilot targets. SI units: m, m/s, rad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AutopilotTargetsUpdate {
    pub altitude: Option<f64>,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
}

/// Inputs supplied by the embedding game loop for one tick.
///
/// Continuous channels left as `None` hold their previous value. The
/// remaining fields are one-shot commands applied before the tick runs.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInputs {
    pub throttle: Option<f64>,
    pub pitch: Option<f64>,
    pub roll: Option<f64>,
    pub yaw: Option<f64>,
    #[serde(default)]
    pub reset: bool,
    pub autopilot: Option<bool>,
    pub targets: Option<AutopilotTargetsUpdate>,
    pub flaps: Option<FlapSetting>,
    pub air_brakes: Option<bool>,
    pub gear: Option<bool>,
}

impl ControlInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_throttle(mut self, throttle: f64) -> Self {
        self.throttle = Some(throttle);
        self
    }

    pub fn with_pitch(mut self, pitch: f64) -> Self {
        self.pitch = Some(pitch);
        self
    }

    pub fn with_roll(mut self, roll: f64) -> Self {
        self.roll = Some(roll);
        self
    }

    pub fn with_yaw(mut self, yaw: f64) -> Self {
        self.yaw = Some(yaw);
        self
    }

    pub fn with_autopilot(mut self, engaged: bool) -> Self {
        self.autopilot = Some(engaged);
        self
    }

    pub fn with_targets(mut self, targets: AutopilotTargetsUpdate) -> Self {
        self.targets = Some(targets);
        self
    }

    pub fn with_flaps(mut self, flaps: FlapSetting) -> Self {
        self.flaps = Some(flaps);
        self
    }

    pub fn with_reset(mut self) -> Self {
        self.reset = true;
        self
    }

    /// Clears the one-shot fields after they have been applied.
    pub fn clear_commands(&mut self) {
        self.reset = false;
        self.autopilot = None;
        self.targets = None;
        self.flaps = None;
        self.air_brakes = None;
        self.gear = None;
    }
}

/// Continuous control demand before limiting and rate shaping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlDemand {
    pub throttle: f64,
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

impl ControlDemand {
    /// Merges new inputs over this demand. Missing or non-finite channels
    /// keep their previous value.
    pub fn merged(&self, inputs: &ControlInputs) -> Self {
        fn pick(input: Option<f64>, previous: f64) -> f64 {
            input.filter(|v| v.is_finite()).unwrap_or(previous)
        }

        Self {
            throttle: pick(inputs.throttle, self.throttle),
            pitch: pick(inputs.pitch, self.pitch),
            roll: pick(inputs.roll, self.roll),
            yaw: pick(inputs.yaw, self.yaw),
        }
    }
}

/// Physical actuator limits shared by manual and autopilot control paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlLimits {
    pub surface_min: f64,
    pub surface_max: f64,
    pub throttle_min: f64,
    pub throttle_max: f64,
}

impl Default for ControlLimits {
    fn default() -> Self {
        Self {
            surface_min: -1.0,
            surface_max: 1.0,
            throttle_min: 0.0,
            throttle_max: 1.0,
        }
    }
}

impl ControlLimits {
    pub fn surface(&self, value: f64) -> f64 {
        value.clamp(self.surface_min, self.surface_max)
    }

    pub fn throttle(&self, value: f64) -> f64 {
        value.clamp(self.throttle_min, self.throttle_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_commands_keeps_continuous_inputs() {
        let mut inputs = ControlInputs::new()
            .with_throttle(0.5)
            .with_autopilot(true)
            .with_flaps(FlapSetting::Takeoff)
            .with_reset();

        inputs.clear_commands();

        assert_eq!(inputs.throttle, Some(0.5));
        assert!(!inputs.reset);
        assert_eq!(inputs.autopilot, None);
        assert_eq!(inputs.flaps, None);
    }

    #[test]
    fn test_demand_holds_missing_and_non_finite_channels() {
        let previous = ControlDemand {
            throttle: 0.4,
            pitch: 0.1,
            roll: -0.2,
            yaw: 0.0,
        };
        let inputs = ControlInputs {
            throttle: Some(f64::NAN),
            pitch: Some(0.3),
            roll: None,
            yaw: Some(f64::INFINITY),
            ..Default::default()
        };

        let merged = previous.merged(&inputs);
        assert_eq!(merged.throttle, 0.4);
        assert_eq!(merged.pitch, 0.3);
        assert_eq!(merged.roll, -0.2);
        assert_eq!(merged.yaw, 0.0);
    }

    #[test]
    fn test_deserialize_partial_inputs() {
        let inputs: ControlInputs =
            serde_json::from_str(r#"{ "throttle": 0.7, "autopilot": true }"#).unwrap();
        assert_eq!(inputs.throttle, Some(0.7));
        assert_eq!(inputs.autopilot, Some(true));
        assert_eq!(inputs.pitch, None);
        assert!(!inputs.reset);
    }
}
