use nalgebra::Vector3;

use crate::components::{ControlState, PropulsionConfig};

/// Calculates the propulsive force in the BODY frame.
///
/// Thrust is `throttle · engines · max thrust · (ρ/ρ₀)^n` along body +x.
///
/// # Arguments
/// * `propulsion` - Engine installation.
/// * `controls` - Current controls; only the throttle is read.
/// * `density` - Local air density (kg/m³).
pub fn calculate_propulsion_forces(
    propulsion: &PropulsionConfig,
    controls: &ControlState,
    density: f64,
) -> Vector3<f64> {
    let throttle = controls.throttle.clamp(0.0, 1.0);
    Vector3::new(throttle * propulsion.available_thrust(density), 0.0, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ISA_SEA_LEVEL_DENSITY;
    use approx::assert_relative_eq;

    #[test]
    fn test_thrust_scales_with_throttle() {
        let propulsion = PropulsionConfig::narrow_body();
        let controls = ControlState {
            throttle: 0.5,
            ..Default::default()
        };
        let thrust = calculate_propulsion_forces(&propulsion, &controls, ISA_SEA_LEVEL_DENSITY);

        assert_relative_eq!(thrust.x, 120_000.0);
        assert_eq!(thrust.y, 0.0);
        assert_eq!(thrust.z, 0.0);
    }

    #[test]
    fn test_thrust_derates_with_altitude() {
        let propulsion = PropulsionConfig::narrow_body();
        let controls = ControlState {
            throttle: 1.0,
            ..Default::default()
        };
        let sea_level = calculate_propulsion_forces(&propulsion, &controls, 1.225);
        let cruise = calculate_propulsion_forces(&propulsion, &controls, 0.9046);

        assert!(cruise.x < sea_level.x);
        assert_relative_eq!(cruise.x / sea_level.x, (0.9046_f64 / 1.225).powf(0.7));
    }

    #[test]
    fn test_idle_produces_no_thrust() {
        let thrust = calculate_propulsion_forces(
            &PropulsionConfig::narrow_body(),
            &ControlState::default(),
            1.0,
        );
        assert_eq!(thrust, Vector3::zeros());
    }
}
