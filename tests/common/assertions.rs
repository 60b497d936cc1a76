use flyer_fdm::components::{RigidBodyState, StateSnapshot};
use flyer_fdm::utils::{deg_to_rad, MAX_ANGLE_OF_ATTACK, MAX_SIDESLIP};
use nalgebra::Vector3;

fn assert_vector_finite(vector: &Vector3<f64>, what: &str) {
    assert!(
        vector.iter().all(|v| v.is_finite()),
        "{what} is not finite: {vector:?}"
    );
}

/// Assert that a rigid-body state is finite and inside the gimbal limits
#[track_caller]
pub fn assert_state_valid(state: &RigidBodyState) {
    assert_vector_finite(&state.position, "Position");
    assert_vector_finite(&state.velocity, "Velocity");
    assert_vector_finite(&state.angular_rates, "Angular rates");

    let attitude = &state.attitude;
    assert!(attitude.roll.is_finite(), "Roll is not finite");
    assert!(attitude.yaw.is_finite(), "Yaw is not finite");
    assert!(
        attitude.pitch.abs() < std::f64::consts::FRAC_PI_2,
        "Pitch {} reached the singularity",
        attitude.pitch
    );
}

/// Assert that every reported quantity is finite and the flow angles are
/// inside their clamps
#[track_caller]
pub fn assert_snapshot_valid(snapshot: &StateSnapshot) {
    assert!(snapshot.time.is_finite(), "Time is not finite");
    assert!(snapshot.altitude.is_finite(), "Altitude is not finite");
    assert_vector_finite(&snapshot.position, "Position");
    assert_vector_finite(&snapshot.velocity, "Velocity");
    assert_vector_finite(&snapshot.earth_velocity, "Earth velocity");
    assert_vector_finite(&snapshot.forces.total_force, "Total force");
    assert_vector_finite(&snapshot.forces.total_moment, "Total moment");

    let airspeeds = &snapshot.airspeeds;
    assert!(airspeeds.true_airspeed.is_finite() && airspeeds.true_airspeed >= 0.0);
    assert!(airspeeds.indicated_airspeed.is_finite());
    assert!(airspeeds.mach.is_finite());

    assert!(snapshot.alpha.abs() <= deg_to_rad(MAX_ANGLE_OF_ATTACK) + 1e-12);
    assert!(snapshot.beta.abs() <= deg_to_rad(MAX_SIDESLIP) + 1e-12);

    let controls = &snapshot.controls;
    assert!((0.0..=1.0).contains(&controls.throttle));
    for surface in [controls.pitch, controls.roll, controls.yaw] {
        assert!((-1.0..=1.0).contains(&surface), "Surface {surface} out of range");
    }
}

/// Assert that `actual` is within `tolerance` of `expected`
#[track_caller]
pub fn assert_within(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{what}: {actual} not within {tolerance} of {expected}"
    );
}
