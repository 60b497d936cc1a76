use bevy::log::warn;
use serde::{Deserialize, Serialize};

use crate::components::{AirData, AircraftConfig, Airspeeds, Alarms, RigidBodyState};
use crate::utils::{deg_to_rad, ISA_SEA_LEVEL_DENSITY};

/// Thresholds for the cockpit alarms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlarmThresholds {
    /// Bank angle magnitude (rad).
    pub max_bank: f64,
    /// Pitch angle magnitude (rad).
    pub max_pitch: f64,
    /// Descent rate (m/s, positive down).
    pub max_descent_rate: f64,
    /// Time the descent rate must be exceeded before alarming (s).
    pub descent_duration: f64,
    /// Stall warning at this multiple of the 1-g stall speed.
    pub stall_margin: f64,
}

impl Default for AlarmThresholds {
    fn default() -> Self {
        Self {
            max_bank: deg_to_rad(60.0),
            max_pitch: deg_to_rad(45.0),
            max_descent_rate: 30.0,
            descent_duration: 3.0,
            stall_margin: 1.1,
        }
    }
}

/// Indicated airspeed from true airspeed via the density ratio.
pub fn indicated_airspeed(true_airspeed: f64, density: f64) -> f64 {
    true_airspeed * (density.max(0.0) / ISA_SEA_LEVEL_DENSITY).sqrt()
}

/// Derived speeds for the snapshot.
pub fn calculate_airspeeds(state: &RigidBodyState, air_data: &AirData) -> Airspeeds {
    let earth_velocity = state.earth_velocity();
    Airspeeds {
        true_airspeed: air_data.true_airspeed,
        indicated_airspeed: indicated_airspeed(air_data.true_airspeed, air_data.density),
        ground_speed: earth_velocity.xy().norm(),
        mach: air_data.mach,
        vertical_speed: -earth_velocity.z,
    }
}

/// Evaluates alarms each step. Tracks how long the descent limit has been
/// exceeded and latches the crash flag.
#[derive(Debug, Clone, Default)]
pub struct StateReporter {
    thresholds: AlarmThresholds,
    descent_timer: f64,
    crashed: bool,
}

impl StateReporter {
    pub fn new(thresholds: AlarmThresholds) -> Self {
        Self {
            thresholds,
            descent_timer: 0.0,
            crashed: false,
        }
    }

    pub fn thresholds(&self) -> &AlarmThresholds {
        &self.thresholds
    }

    pub fn is_crashed(&self) -> bool {
        self.crashed
    }

    pub fn reset(&mut self) {
        self.descent_timer = 0.0;
        self.crashed = false;
    }

    /// Updates the stateful alarms after a step of `dt` seconds.
    pub fn update(
        &mut self,
        state: &RigidBodyState,
        airspeeds: &Airspeeds,
        config: &AircraftConfig,
        gravity: f64,
        dt: f64,
    ) -> Alarms {
        if !self.crashed && state.altitude() <= 0.0 {
            self.crashed = true;
            warn!(
                "Ground contact at {:.1} m/s descent, {:.1} m/s airspeed",
                -airspeeds.vertical_speed, airspeeds.true_airspeed
            );
        }

        if -airspeeds.vertical_speed > self.thresholds.max_descent_rate {
            self.descent_timer += dt;
        } else {
            self.descent_timer = 0.0;
        }

        self.alarms(state, airspeeds, config, gravity)
    }

    /// Alarm flags for the current state without advancing any timers.
    pub fn alarms(
        &self,
        state: &RigidBodyState,
        airspeeds: &Airspeeds,
        config: &AircraftConfig,
        gravity: f64,
    ) -> Alarms {
        let thresholds = &self.thresholds;
        let stall_speed = config.stall_speed(ISA_SEA_LEVEL_DENSITY, gravity);

        Alarms {
            crashed: self.crashed,
            stall_warning: !self.crashed
                && airspeeds.indicated_airspeed < thresholds.stall_margin * stall_speed,
            overspeed: airspeeds.mach > config.max_mach,
            excessive_bank: state.attitude.roll.abs() > thresholds.max_bank,
            excessive_pitch: state.attitude.pitch.abs() > thresholds.max_pitch,
            excessive_descent: self.descent_timer >= thresholds.descent_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Attitude;
    use crate::utils::GRAVITY;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn cruise_state() -> RigidBodyState {
        let mut state = RigidBodyState {
            velocity: Vector3::new(144.0, 0.0, 0.0),
            ..Default::default()
        };
        state.set_altitude(3048.0);
        state
    }

    fn airspeeds(true_airspeed: f64, vertical_speed: f64) -> Airspeeds {
        Airspeeds {
            true_airspeed,
            indicated_airspeed: indicated_airspeed(true_airspeed, 0.9046),
            ground_speed: true_airspeed,
            mach: true_airspeed / 328.4,
            vertical_speed,
        }
    }

    #[test]
    fn test_indicated_airspeed_ratio() {
        assert_relative_eq!(indicated_airspeed(100.0, ISA_SEA_LEVEL_DENSITY), 100.0);
        assert_relative_eq!(
            indicated_airspeed(144.0, 0.9046),
            144.0 * (0.9046_f64 / 1.225).sqrt()
        );
    }

    #[test]
    fn test_cruise_has_no_alarms() {
        let mut reporter = StateReporter::default();
        let alarms = reporter.update(
            &cruise_state(),
            &airspeeds(144.0, 0.0),
            &AircraftConfig::default(),
            GRAVITY,
            1.0 / 60.0,
        );
        assert!(!alarms.any());
    }

    #[test]
    fn test_attitude_alarms() {
        let mut state = cruise_state();
        state.attitude = Attitude::new(deg_to_rad(65.0), deg_to_rad(-50.0), 0.0);
        let alarms = StateReporter::default().alarms(
            &state,
            &airspeeds(144.0, 0.0),
            &AircraftConfig::default(),
            GRAVITY,
        );
        assert!(alarms.excessive_bank);
        assert!(alarms.excessive_pitch);
    }

    #[test]
    fn test_stall_and_overspeed() {
        let reporter = StateReporter::default();
        let config = AircraftConfig::default();
        let slow = reporter.alarms(&cruise_state(), &airspeeds(70.0, 0.0), &config, GRAVITY);
        let fast = reporter.alarms(&cruise_state(), &airspeeds(300.0, 0.0), &config, GRAVITY);

        assert!(slow.stall_warning);
        assert!(!slow.overspeed);
        assert!(fast.overspeed);
        assert!(!fast.stall_warning);
    }

    #[test]
    fn test_descent_alarm_needs_sustained_descent() {
        let mut reporter = StateReporter::default();
        let config = AircraftConfig::default();
        let dt = 1.0 / 60.0;

        for _ in 0..120 {
            let alarms = reporter.update(&cruise_state(), &airspeeds(144.0, -40.0), &config, GRAVITY, dt);
            assert!(!alarms.excessive_descent);
        }
        let mut alarms = Alarms::default();
        for _ in 0..61 {
            alarms = reporter.update(&cruise_state(), &airspeeds(144.0, -40.0), &config, GRAVITY, dt);
        }
        assert!(alarms.excessive_descent);

        let alarms = reporter.update(&cruise_state(), &airspeeds(144.0, -5.0), &config, GRAVITY, dt);
        assert!(!alarms.excessive_descent);
    }

    #[test]
    fn test_crash_latches_until_reset() {
        let mut reporter = StateReporter::default();
        let config = AircraftConfig::default();
        let mut state = cruise_state();
        state.set_altitude(-0.5);

        assert!(reporter.update(&state, &airspeeds(80.0, -10.0), &config, GRAVITY, 0.1).crashed);

        state.set_altitude(100.0);
        assert!(reporter.update(&state, &airspeeds(80.0, 0.0), &config, GRAVITY, 0.1).crashed);

        reporter.reset();
        assert!(!reporter.update(&state, &airspeeds(80.0, 0.0), &config, GRAVITY, 0.1).crashed);
    }
}
