use bevy::log::warn;

use crate::components::{AutopilotLimits, ControlDemand, ControlLimits, ControlState};
use crate::resources::RateLimits;
use crate::utils::rate_limit;

/// Input smoothing stage shared by the manual and autopilot paths.
///
/// Demands are first clamped to the actuator limits, then each channel moves
/// from its current position by at most its rate limit times `dt`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlShaper {
    pub limits: ControlLimits,
    pub rates: RateLimits,
}

impl ControlShaper {
    pub fn new(limits: ControlLimits, rates: RateLimits) -> Self {
        Self { limits, rates }
    }

    /// Shaper whose throttle range is the overlap of the actuator range and
    /// the autopilot throttle limits, so manual and autopilot demands share
    /// the same bounds. Disjoint ranges keep the actuator range.
    pub fn with_autopilot_limits(
        limits: ControlLimits,
        autopilot: &AutopilotLimits,
        rates: RateLimits,
    ) -> Self {
        let throttle_min = limits.throttle_min.max(autopilot.min_throttle);
        let throttle_max = limits.throttle_max.min(autopilot.max_throttle);
        if throttle_min > throttle_max {
            warn!(
                "Autopilot throttle range [{}, {}] is outside the actuator range [{}, {}]",
                autopilot.min_throttle, autopilot.max_throttle, limits.throttle_min, limits.throttle_max
            );
            return Self::new(limits, rates);
        }

        Self::new(
            ControlLimits {
                throttle_min,
                throttle_max,
                ..limits
            },
            rates,
        )
    }

    /// Clamps a demand to the actuator limits. Non-finite channels become
    /// the neutral value of that channel.
    pub fn limit(&self, demand: &ControlDemand) -> ControlDemand {
        let limits = &self.limits;
        let sanitize = |v: f64| if v.is_finite() { v } else { 0.0 };
        ControlDemand {
            throttle: limits.throttle(sanitize(demand.throttle)),
            pitch: limits.surface(sanitize(demand.pitch)),
            roll: limits.surface(sanitize(demand.roll)),
            yaw: limits.surface(sanitize(demand.yaw)),
        }
    }

    /// Moves the current controls toward the limited demand.
    pub fn apply(&self, current: &ControlState, demand: &ControlDemand, dt: f64) -> ControlState {
        let target = self.limit(demand);
        let rates = &self.rates;
        ControlState {
            throttle: rate_limit(current.throttle, target.throttle, rates.throttle, dt),
            pitch: rate_limit(current.pitch, target.pitch, rates.pitch, dt),
            roll: rate_limit(current.roll, target.roll, rates.roll, dt),
            yaw: rate_limit(current.yaw, target.yaw, rates.yaw, dt),
            ..*current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_demands_are_clamped() {
        let shaper = ControlShaper::default();
        let limited = shaper.limit(&ControlDemand {
            throttle: 1.5,
            pitch: -3.0,
            roll: f64::NAN,
            yaw: 0.4,
        });

        assert_eq!(limited.throttle, 1.0);
        assert_eq!(limited.pitch, -1.0);
        assert_eq!(limited.roll, 0.0);
        assert_eq!(limited.yaw, 0.4);
    }

    #[test]
    fn test_autopilot_throttle_limits_bound_manual_demands() {
        let autopilot = AutopilotLimits {
            min_throttle: 0.2,
            max_throttle: 0.9,
            ..Default::default()
        };
        let shaper = ControlShaper::with_autopilot_limits(
            ControlLimits::default(),
            &autopilot,
            RateLimits::default(),
        );

        let high = shaper.limit(&ControlDemand {
            throttle: 1.0,
            ..Default::default()
        });
        let low = shaper.limit(&ControlDemand {
            throttle: 0.0,
            ..Default::default()
        });
        assert_eq!(high.throttle, 0.9);
        assert_eq!(low.throttle, 0.2);
    }

    #[test]
    fn test_disjoint_throttle_ranges_keep_actuator_range() {
        let autopilot = AutopilotLimits {
            min_throttle: 1.5,
            max_throttle: 2.0,
            ..Default::default()
        };
        let shaper = ControlShaper::with_autopilot_limits(
            ControlLimits::default(),
            &autopilot,
            RateLimits::default(),
        );
        assert_eq!(shaper.limits, ControlLimits::default());
    }

    #[test]
    fn test_rate_limited_step() {
        let shaper = ControlShaper::default();
        let demand = ControlDemand {
            throttle: 1.0,
            pitch: 1.0,
            roll: -1.0,
            yaw: 0.01,
        };

        let shaped = shaper.apply(&ControlState::default(), &demand, 0.1);

        assert_relative_eq!(shaped.throttle, 0.05);
        assert_relative_eq!(shaped.pitch, 0.2);
        assert_relative_eq!(shaped.roll, -0.2);
        assert_relative_eq!(shaped.yaw, 0.01);
    }

    #[test]
    fn test_discrete_controls_pass_through() {
        let shaper = ControlShaper::default();
        let current = ControlState {
            gear_down: true,
            air_brakes: true,
            ..Default::default()
        };

        let shaped = shaper.apply(&current, &ControlDemand::default(), 1.0 / 60.0);

        assert!(shaped.gear_down);
        assert!(shaped.air_brakes);
    }
}
