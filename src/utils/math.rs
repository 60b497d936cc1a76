use nalgebra::Rotation3;
use std::f64::consts::{PI, TAU};

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wraps an angle into the half-open interval (-π, π].
///
/// Angles already inside the interval are returned untouched, which keeps the
/// operation exactly idempotent. Non-finite input maps to zero.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    if angle > -PI && angle <= PI {
        return angle;
    }

    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Returns `value` if finite, otherwise `fallback`.
#[inline]
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Rotation taking body-frame (FRD) vectors into the earth frame (NED).
///
/// Standard aerospace Z-Y-X sequence: yaw `psi`, then pitch `theta`, then roll `phi`.
pub fn body_to_earth(phi: f64, theta: f64, psi: f64) -> Rotation3<f64> {
    Rotation3::from_euler_angles(phi, theta, psi)
}

/// Moves `current` towards `target` by at most `max_rate * dt`.
#[inline]
pub fn rate_limit(current: f64, target: f64, max_rate: f64, dt: f64) -> f64 {
    let max_step = (max_rate * dt).abs();
    current + (target - current).clamp(-max_step, max_step)
}
