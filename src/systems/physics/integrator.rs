use nalgebra::Vector3;

use crate::components::{Attitude, ForceBreakdown, RigidBodyState};
use crate::resources::PhysicsConfig;
use crate::utils::{body_to_earth, finite_or, normalize_angle};

/// Advances the rigid-body state by one step using semi-implicit Euler.
///
/// Velocities are updated first and the updated values drive the attitude
/// and position updates. Body velocity is carried with the body axes.
///
/// # Arguments
/// - `state`: The state to advance in place.
/// - `forces`: Summed body-frame forces and angular accelerations.
/// - `mass`: Aircraft mass (kg).
/// - `config`: Damping, gimbal margin and velocity limits.
/// - `dt`: The timestep duration (in seconds).
pub fn integrate_state(
    state: &mut RigidBodyState,
    forces: &ForceBreakdown,
    mass: f64,
    config: &PhysicsConfig,
    dt: f64,
) {
    let acceleration = forces.total_force / mass;
    state.velocity += acceleration * dt;

    state.angular_rates += forces.angular_acceleration * dt;
    state.angular_rates.component_mul_assign(&config.angular_damping);

    apply_velocity_limits(state, config.max_velocity, config.max_angular_velocity);

    let rates = euler_rates(&state.attitude, &state.angular_rates, config.max_pitch());
    let attitude = &mut state.attitude;
    attitude.roll = normalize_angle(attitude.roll + rates.x * dt);
    attitude.pitch = (attitude.pitch + rates.y * dt).clamp(-config.max_pitch(), config.max_pitch());
    attitude.yaw = normalize_angle(attitude.yaw + rates.z * dt);

    let earth_velocity = body_to_earth(attitude.roll, attitude.pitch, attitude.yaw) * state.velocity;
    state.position += earth_velocity * dt;
}

/// Euler angle rates (φ̇, θ̇, ψ̇) from body rates.
///
/// The pitch used in the `tan` and `1/cos` terms is kept `max_pitch` away
/// from the singularity.
pub fn euler_rates(attitude: &Attitude, body_rates: &Vector3<f64>, max_pitch: f64) -> Vector3<f64> {
    let (p, q, r) = (body_rates.x, body_rates.y, body_rates.z);
    let (sin_phi, cos_phi) = attitude.roll.sin_cos();
    let theta = attitude.pitch.clamp(-max_pitch, max_pitch);

    let phi_dot = p + theta.tan() * (q * sin_phi + r * cos_phi);
    let theta_dot = q * cos_phi - r * sin_phi;
    let psi_dot = (q * sin_phi + r * cos_phi) / theta.cos();

    Vector3::new(phi_dot, theta_dot, psi_dot)
}

/// Applies velocity and angular velocity limits to prevent excessive motion.
fn apply_velocity_limits(
    state: &mut RigidBodyState,
    max_velocity: f64,
    max_angular_velocity: f64,
) {
    let velocity_norm = state.velocity.norm();
    if velocity_norm > max_velocity {
        state.velocity *= max_velocity / velocity_norm;
    }

    let angular_velocity_norm = state.angular_rates.norm();
    if angular_velocity_norm > max_angular_velocity {
        state.angular_rates *= max_angular_velocity / angular_velocity_norm;
    }

    // A non-finite component can only come from non-finite forces.
    for v in state.velocity.iter_mut().chain(state.angular_rates.iter_mut()) {
        *v = finite_or(*v, 0.0);
    }
}
