use serde::{Deserialize, Serialize};

use crate::components::AutopilotLimits;

/// Gains and bounds for a single PID loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidGains {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
    /// Symmetric bound on the integral accumulator.
    pub integral_limit: f64,
    pub output_min: f64,
    pub output_max: f64,
}

impl PidGains {
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self {
            kp,
            ki,
            kd,
            integral_limit: f64::INFINITY,
            output_min: f64::NEG_INFINITY,
            output_max: f64::INFINITY,
        }
    }

    pub fn with_integral_limit(mut self, limit: f64) -> Self {
        self.integral_limit = limit.abs();
        self
    }

    pub fn with_output_limits(mut self, min: f64, max: f64) -> Self {
        self.output_min = min;
        self.output_max = max;
        self
    }
}

/// Maximum change per second of each command after limiting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateLimits {
    pub throttle: f64,
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            throttle: 0.5,
            pitch: 2.0,
            roll: 2.0,
            yaw: 2.0,
        }
    }
}

/// Attitude-hold gains turning pitch and bank commands into surface commands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InnerLoopGains {
    pub pitch_attitude: f64,
    pub pitch_rate: f64,
    pub bank_angle: f64,
    pub roll_rate: f64,
    /// Rudder per unit aileron command.
    pub turn_coordination: f64,
}

impl Default for InnerLoopGains {
    fn default() -> Self {
        Self {
            pitch_attitude: 4.0,
            pitch_rate: 0.5,
            bank_angle: 2.0,
            roll_rate: 0.5,
            turn_coordination: 0.1,
        }
    }
}

/// Tuning of the PID autopilot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopilotConfig {
    /// Altitude error (m) to pitch attitude offset (rad).
    pub altitude: PidGains,
    /// Airspeed error (m/s) to throttle change per step.
    pub speed: PidGains,
    /// Heading error (rad) to bank angle (rad).
    pub heading: PidGains,
    pub inner_loop: InnerLoopGains,
    pub limits: AutopilotLimits,
    pub rate_limits: RateLimits,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        let limits = AutopilotLimits::default();
        Self {
            altitude: PidGains::new(0.0015, 0.000_05, 0.004)
                .with_integral_limit(500.0)
                .with_output_limits(limits.min_pitch, limits.max_pitch),
            speed: PidGains::new(0.000_083, 0.000_002, 0.000_83)
                .with_integral_limit(200.0)
                .with_output_limits(-0.01, 0.01),
            heading: PidGains::new(1.0, 0.01, 0.2)
                .with_integral_limit(1.0)
                .with_output_limits(-limits.max_bank, limits.max_bank),
            inner_loop: InnerLoopGains::default(),
            limits,
            rate_limits: RateLimits::default(),
        }
    }
}
