use nalgebra::Vector3;

/// Weight resolved into the BODY frame using pitch only.
///
/// Roll does not redistribute weight between the y and z axes.
///
/// # Arguments
/// * `mass` - Aircraft mass (kg).
/// * `gravity` - Gravitational acceleration (m/s²).
/// * `pitch` - Pitch angle θ (rad).
pub fn calculate_gravitational_forces(mass: f64, gravity: f64, pitch: f64) -> Vector3<f64> {
    let weight = mass * gravity;
    let (sin_theta, cos_theta) = pitch.sin_cos();
    Vector3::new(-weight * sin_theta, 0.0, weight * cos_theta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_level_weight_acts_down() {
        let force = calculate_gravitational_forces(1000.0, 9.80665, 0.0);
        assert_relative_eq!(force, Vector3::new(0.0, 0.0, 9806.65));
    }

    #[test]
    fn test_nose_up_weight_slows_aircraft() {
        let pitch = 0.2_f64;
        let force = calculate_gravitational_forces(1000.0, 10.0, pitch);
        assert_relative_eq!(force.x, -10_000.0 * pitch.sin());
        assert_relative_eq!(force.z, 10_000.0 * pitch.cos());
        assert_relative_eq!(force.norm(), 10_000.0, epsilon = 1e-9);
    }
}
