use bevy::prelude::Component;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{
    components::{Attitude, AutopilotStatus, ControlState, ForceBreakdown},
    resources::EnvironmentSample,
    utils::{rad_to_deg, METERS_TO_FEET, MPS_TO_FPM, MPS_TO_KNOTS},
};

/// Derived speeds (m/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Airspeeds {
    pub true_airspeed: f64,
    pub indicated_airspeed: f64,
    pub ground_speed: f64,
    pub mach: f64,
    /// Rate of climb, positive up.
    pub vertical_speed: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarms {
    /// Latched on ground contact until the simulation is reset.
    pub crashed: bool,
    pub stall_warning: bool,
    pub overspeed: bool,
    pub excessive_bank: bool,
    pub excessive_pitch: bool,
    pub excessive_descent: bool,
}

impl Alarms {
    pub fn any(&self) -> bool {
        self.crashed
            || self.stall_warning
            || self.overspeed
            || self.excessive_bank
            || self.excessive_pitch
            || self.excessive_descent
    }
}

/// Read-only projection of the simulation after a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Simulated time (s).
    pub time: f64,
    pub tick: u64,
    /// Earth-frame position, north-east-down (m).
    pub position: Vector3<f64>,
    pub altitude: f64,
    /// Body-frame velocity (m/s).
    pub velocity: Vector3<f64>,
    /// Earth-frame velocity (m/s).
    pub earth_velocity: Vector3<f64>,
    pub attitude: Attitude,
    pub angular_rates: Vector3<f64>,
    pub airspeeds: Airspeeds,
    pub alpha: f64,
    pub beta: f64,
    pub controls: ControlState,
    pub forces: ForceBreakdown,
    pub environment: EnvironmentSample,
    pub autopilot: AutopilotStatus,
    pub alarms: Alarms,
}

impl StateSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn altitude_feet(&self) -> f64 {
        self.altitude * METERS_TO_FEET
    }

    pub fn true_airspeed_knots(&self) -> f64 {
        self.airspeeds.true_airspeed * MPS_TO_KNOTS
    }

    pub fn indicated_airspeed_knots(&self) -> f64 {
        self.airspeeds.indicated_airspeed * MPS_TO_KNOTS
    }

    pub fn vertical_speed_fpm(&self) -> f64 {
        self.airspeeds.vertical_speed * MPS_TO_FPM
    }

    /// Heading in degrees, [0, 360).
    pub fn heading_degrees(&self) -> f64 {
        rad_to_deg(self.attitude.yaw).rem_euclid(360.0)
    }
}

/// Latest snapshot of an entity driven by the flight dynamics plugin.
#[derive(Component, Debug, Clone)]
pub struct AircraftSnapshot(pub StateSnapshot);
