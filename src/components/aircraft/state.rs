use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{body_to_earth, normalize_angle, MPS_TO_KNOTS, METERS_TO_FEET};

/// Euler angles of the body frame relative to the earth frame (radians).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Attitude {
    /// Roll angle φ, positive right wing down.
    pub roll: f64,
    /// Pitch angle θ, positive nose up.
    pub pitch: f64,
    /// Yaw angle ψ, the heading from north, positive clockwise.
    pub yaw: f64,
}

impl Attitude {
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Wraps every angle into (−π, π].
    pub fn normalized(self) -> Self {
        Self {
            roll: normalize_angle(self.roll),
            pitch: normalize_angle(self.pitch),
            yaw: normalize_angle(self.yaw),
        }
    }
}

/// Kinematic state of the rigid body.
///
/// Position is in the earth frame (north, east, down), so altitude is
/// `-position.z`. Velocity and angular rates are in the body frame
/// (forward, right, down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBodyState {
    pub position: Vector3<f64>,
    /// Body-frame velocity over the ground (u, v, w) in m/s.
    pub velocity: Vector3<f64>,
    pub attitude: Attitude,
    /// Body-frame angular rates (p, q, r) in rad/s.
    pub angular_rates: Vector3<f64>,
}

impl Default for RigidBodyState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: Attitude::default(),
            angular_rates: Vector3::zeros(),
        }
    }
}

impl RigidBodyState {
    pub fn altitude(&self) -> f64 {
        -self.position.z
    }

    pub fn set_altitude(&mut self, altitude: f64) {
        self.position.z = -altitude;
    }

    /// Velocity in the earth frame (m/s).
    pub fn earth_velocity(&self) -> Vector3<f64> {
        let attitude = &self.attitude;
        body_to_earth(attitude.roll, attitude.pitch, attitude.yaw) * self.velocity
    }

    /// Rate of climb, positive up (m/s).
    pub fn vertical_speed(&self) -> f64 {
        -self.earth_velocity().z
    }

    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|v| v.is_finite())
            && self.velocity.iter().all(|v| v.is_finite())
            && self.angular_rates.iter().all(|v| v.is_finite())
            && self.attitude.roll.is_finite()
            && self.attitude.pitch.is_finite()
            && self.attitude.yaw.is_finite()
    }
}

/// Discrete flap positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlapSetting {
    #[default]
    Retracted,
    Takeoff,
    Landing,
}

impl FlapSetting {
    pub fn detent(self) -> u8 {
        match self {
            FlapSetting::Retracted => 0,
            FlapSetting::Takeoff => 1,
            FlapSetting::Landing => 2,
        }
    }

    /// Maps an untyped detent index, clamping out-of-range values.
    pub fn from_detent(detent: i64) -> Self {
        match detent {
            i64::MIN..=0 => FlapSetting::Retracted,
            1 => FlapSetting::Takeoff,
            _ => FlapSetting::Landing,
        }
    }
}

/// Control positions applied to the force model this tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    /// Throttle lever position [0, 1].
    pub throttle: f64,
    /// Elevator command [-1, 1], positive nose up.
    pub pitch: f64,
    /// Aileron command [-1, 1], positive right wing down.
    pub roll: f64,
    /// Rudder command [-1, 1], positive nose right.
    pub yaw: f64,
    pub flaps: FlapSetting,
    pub air_brakes: bool,
    pub gear_down: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            throttle: 0.0,
            pitch: 0.0,
            roll: 0.0,
            yaw: 0.0,
            flaps: FlapSetting::Retracted,
            air_brakes: false,
            gear_down: false,
        }
    }
}

/// Starting point of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    /// Altitude above sea level (m).
    pub altitude: f64,
    /// True airspeed (m/s).
    pub airspeed: f64,
    /// Heading (rad).
    pub heading: f64,
    /// Solve for the level-flight attitude and throttle before starting.
    pub trim: bool,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            altitude: 10_000.0 / METERS_TO_FEET,
            airspeed: 280.0 / MPS_TO_KNOTS,
            heading: 0.0,
            trim: true,
        }
    }
}
