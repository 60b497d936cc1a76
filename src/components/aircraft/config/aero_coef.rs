use serde::{Deserialize, Serialize};

use crate::components::FlapSetting;

/// Lift and drag characteristics of the clean wing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AeroCoefficients {
    /// Maximum lift coefficient before stall.
    pub max_lift_coefficient: f64,
    /// Lift curve slope (per radian).
    pub lift_curve_slope: f64,
    /// Zero-lift drag coefficient.
    pub zero_lift_drag: f64,
    /// Induced drag factor, `CD = CD0 + k·CL²`.
    pub induced_drag_factor: f64,
    /// Angle of attack added to the geometric one when computing slope lift (rad).
    pub trim_alpha_offset: f64,
    /// Sideforce slope with sideslip (per radian).
    pub side_force_slope: f64,
    /// Aerodynamic centre offset from the centre of gravity, in mean chords.
    pub aero_center_offset: f64,
    /// Fraction of the aerodynamic pitching moment cancelled by elevator trim.
    pub trim_effectiveness: f64,
    #[serde(default)]
    pub control_forces: ControlForceCoefficients,
    #[serde(default)]
    pub devices: DeviceIncrements,
}

/// Lift and drag increments applied for one flap detent.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoefficientIncrement {
    pub delta_lift: f64,
    pub delta_drag: f64,
}

/// Increments for the high-lift and drag devices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceIncrements {
    pub flaps_takeoff: CoefficientIncrement,
    pub flaps_landing: CoefficientIncrement,
    /// Deployed air brakes dump lift (negative `delta_lift`) and add drag.
    pub air_brakes: CoefficientIncrement,
    /// Extra drag with the gear down.
    pub gear_drag: f64,
}

/// Aerodynamic force coefficients per unit control deflection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlForceCoefficients {
    /// Lift coefficient per unit pitch input.
    pub pitch_lift: f64,
    /// Sideforce coefficient per unit yaw input.
    pub yaw_side_force: f64,
    /// Sideforce coefficient per unit roll input.
    pub roll_side_force: f64,
}

impl Default for AeroCoefficients {
    fn default() -> Self {
        Self::narrow_body()
    }
}

impl AeroCoefficients {
    pub fn narrow_body() -> Self {
        Self {
            max_lift_coefficient: 1.6,
            lift_curve_slope: 5.5,
            zero_lift_drag: 0.025,
            induced_drag_factor: 0.045,
            trim_alpha_offset: 0.035,
            side_force_slope: -0.6,
            aero_center_offset: 0.1,
            trim_effectiveness: 0.9,
            control_forces: ControlForceCoefficients::default(),
            devices: DeviceIncrements::default(),
        }
    }

    pub fn light_single() -> Self {
        Self {
            max_lift_coefficient: 1.5,
            lift_curve_slope: 5.0,
            zero_lift_drag: 0.027,
            induced_drag_factor: 0.054,
            trim_alpha_offset: 0.03,
            side_force_slope: -0.4,
            aero_center_offset: 0.1,
            trim_effectiveness: 0.9,
            control_forces: ControlForceCoefficients::default(),
            devices: DeviceIncrements::default(),
        }
    }

    pub fn regional_turboprop() -> Self {
        Self {
            max_lift_coefficient: 1.8,
            lift_curve_slope: 5.3,
            zero_lift_drag: 0.028,
            induced_drag_factor: 0.04,
            trim_alpha_offset: 0.035,
            side_force_slope: -0.5,
            aero_center_offset: 0.1,
            trim_effectiveness: 0.9,
            control_forces: ControlForceCoefficients::default(),
            devices: DeviceIncrements::default(),
        }
    }
}

impl Default for DeviceIncrements {
    fn default() -> Self {
        Self {
            flaps_takeoff: CoefficientIncrement {
                delta_lift: 0.3,
                delta_drag: 0.02,
            },
            flaps_landing: CoefficientIncrement {
                delta_lift: 0.7,
                delta_drag: 0.06,
            },
            air_brakes: CoefficientIncrement {
                delta_lift: -0.2,
                delta_drag: 0.04,
            },
            gear_drag: 0.015,
        }
    }
}

impl DeviceIncrements {
    /// Lift and drag increment for the given flap detent.
    pub fn flap_increment(&self, flaps: FlapSetting) -> CoefficientIncrement {
        match flaps {
            FlapSetting::Retracted => CoefficientIncrement::default(),
            FlapSetting::Takeoff => self.flaps_takeoff,
            FlapSetting::Landing => self.flaps_landing,
        }
    }
}

impl Default for ControlForceCoefficients {
    fn default() -> Self {
        Self {
            pitch_lift: 0.02,
            yaw_side_force: 0.01,
            roll_side_force: 0.005,
        }
    }
}
