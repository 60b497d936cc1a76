use nalgebra::Vector3;

use crate::components::{AerodynamicForces, ForceBreakdown, MomentsOfInertia};

/// Sums the body-frame contributions and converts the net moment into an
/// angular acceleration about each principal axis.
///
/// Only the aerodynamic model produces moments; thrust acts through the
/// centre of gravity.
pub fn sum_forces(
    aerodynamics: &AerodynamicForces,
    propulsion: Vector3<f64>,
    gravity: Vector3<f64>,
    inertia: &MomentsOfInertia,
) -> ForceBreakdown {
    let total_moment = aerodynamics.moment;
    let angular_acceleration = Vector3::new(
        total_moment.x / inertia.roll,
        total_moment.y / inertia.pitch,
        total_moment.z / inertia.yaw,
    );

    ForceBreakdown {
        aerodynamic: aerodynamics.force,
        propulsion,
        gravity,
        total_force: aerodynamics.force + propulsion + gravity,
        total_moment,
        angular_acceleration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ForceCategory;
    use approx::assert_relative_eq;

    #[test]
    fn test_forces_are_summed_per_category() {
        let aerodynamics = AerodynamicForces {
            force: Vector3::new(-10.0, 1.0, -500.0),
            moment: Vector3::new(100.0, 300.0, -400.0),
            ..Default::default()
        };
        let inertia = MomentsOfInertia {
            roll: 10.0,
            pitch: 100.0,
            yaw: 200.0,
        };
        let breakdown = sum_forces(
            &aerodynamics,
            Vector3::new(50.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 490.0),
            &inertia,
        );

        assert_relative_eq!(breakdown.total_force, Vector3::new(40.0, 1.0, -10.0));
        assert_relative_eq!(breakdown.angular_acceleration, Vector3::new(10.0, 3.0, -2.0));
        assert_eq!(
            breakdown.get(ForceCategory::Propulsive),
            Vector3::new(50.0, 0.0, 0.0)
        );
    }
}
