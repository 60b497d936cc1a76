use serde::{Deserialize, Serialize};

use crate::resources::PidGains;

/// Single-loop PID controller with integral anti-windup and output clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PidController {
    gains: PidGains,
    integral: f64,
    previous_error: f64,
    last_output: f64,
}

impl PidController {
    pub fn new(gains: PidGains) -> Self {
        Self {
            gains,
            integral: 0.0,
            previous_error: 0.0,
            last_output: 0.0,
        }
    }

    /// Runs one update from a setpoint and a measurement.
    pub fn calculate(&mut self, setpoint: f64, measured: f64, dt: f64) -> f64 {
        self.calculate_error(setpoint - measured, dt)
    }

    /// Runs one update from a precomputed error, e.g. a wrapped heading error.
    ///
    /// A non-finite error or a non-positive `dt` leaves the controller state
    /// untouched and returns the previous output.
    pub fn calculate_error(&mut self, error: f64, dt: f64) -> f64 {
        if !error.is_finite() || !dt.is_finite() || dt <= 0.0 {
            return self.last_output;
        }

        let limit = self.gains.integral_limit;
        self.integral = (self.integral + error * dt).clamp(-limit, limit);
        let derivative = (error - self.previous_error) / dt;
        self.previous_error = error;

        let output = self.gains.kp * error + self.gains.ki * self.integral + self.gains.kd * derivative;
        self.last_output = output.clamp(self.gains.output_min, self.gains.output_max);
        self.last_output
    }

    /// Clears the integral and the previous error. Gains are kept.
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.previous_error = 0.0;
        self.last_output = 0.0;
    }

    pub fn gains(&self) -> &PidGains {
        &self.gains
    }

    pub fn integral(&self) -> f64 {
        self.integral
    }

    pub fn previous_error(&self) -> f64 {
        self.previous_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_proportional_only() {
        let mut pid = PidController::new(PidGains::new(2.0, 0.0, 0.0));
        assert_relative_eq!(pid.calculate(10.0, 7.0, 0.1), 6.0);
    }

    #[test]
    fn test_integral_accumulates_error_dt() {
        let mut pid = PidController::new(PidGains::new(0.0, 1.0, 0.0));
        pid.calculate_error(2.0, 0.5);
        pid.calculate_error(2.0, 0.5);
        assert_relative_eq!(pid.integral(), 2.0);
    }

    #[test]
    fn test_derivative_uses_previous_error() {
        let mut pid = PidController::new(PidGains::new(0.0, 0.0, 1.0));
        pid.calculate_error(1.0, 0.1);
        let output = pid.calculate_error(1.5, 0.1);
        assert_relative_eq!(output, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_anti_windup_bounds_integral() {
        let gains = PidGains::new(0.1, 0.5, 0.0).with_integral_limit(10.0);
        let mut pid = PidController::new(gains);

        for _ in 0..100_000 {
            pid.calculate_error(1_000.0, 1.0 / 60.0);
            assert!(pid.integral().abs() <= 10.0);
        }
        assert_relative_eq!(pid.integral(), 10.0);
    }

    #[test]
    fn test_output_is_clamped() {
        let gains = PidGains::new(1.0, 0.0, 0.0).with_output_limits(-0.5, 0.25);
        let mut pid = PidController::new(gains);
        assert_eq!(pid.calculate_error(100.0, 0.1), 0.25);
        assert_eq!(pid.calculate_error(-100.0, 0.1), -0.5);
    }

    #[test]
    fn test_reset_keeps_gains() {
        let gains = PidGains::new(1.0, 1.0, 1.0);
        let mut pid = PidController::new(gains);
        pid.calculate_error(3.0, 0.1);

        pid.reset();

        assert_eq!(pid.integral(), 0.0);
        assert_eq!(pid.previous_error(), 0.0);
        assert_eq!(pid.gains(), &gains);
    }

    #[test]
    fn test_invalid_samples_are_ignored() {
        let mut pid = PidController::new(PidGains::new(1.0, 1.0, 0.0));
        let output = pid.calculate_error(1.0, 0.1);

        assert_eq!(pid.calculate_error(f64::NAN, 0.1), output);
        assert_eq!(pid.calculate_error(1.0, 0.0), output);
        assert_eq!(pid.calculate_error(1.0, -1.0), output);
        assert_relative_eq!(pid.integral(), 0.1);
    }
}
