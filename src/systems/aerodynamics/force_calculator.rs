use nalgebra::Vector3;

use crate::components::{AerodynamicForces, AirData, AircraftConfig, ControlState};
use crate::utils::MIN_AIRSPEED;

/// Weight given to the lift-curve estimate when blending with the
/// weight-balancing lift coefficient.
const LIFT_CURVE_BLEND: f64 = 0.2;
const MIN_REQUIRED_LIFT_COEFFICIENT: f64 = 0.1;
const MIN_BLENDED_LIFT_COEFFICIENT: f64 = 0.3;

/// Calculates aerodynamic forces and moments in the BODY frame.
///
/// The lift coefficient blends the coefficient needed to carry the current
/// weight with the lift-curve estimate at the current angle of attack. At
/// zero α the clean wing never carries less than the weight; away from it
/// the lift-curve slope sets how lift changes. High-lift and drag devices
/// then add their increments. Lift and drag are
/// resolved from wind axes into body axes through α.
///
/// # Arguments
/// * `config` - Aircraft configuration.
/// * `air_data` - Air data for this tick.
/// * `controls` - Control positions for this tick.
/// * `weight` - Current weight (N).
///
/// # Returns
/// Forces, moments (including control power and elevator trim) and the
/// coefficients that produced them. All zero below 1 m/s airspeed.
pub fn calculate_aerodynamic_forces(
    config: &AircraftConfig,
    air_data: &AirData,
    controls: &ControlState,
    weight: f64,
) -> AerodynamicForces {
    if air_data.true_airspeed < MIN_AIRSPEED || air_data.dynamic_pressure <= 0.0 {
        return AerodynamicForces::default();
    }

    let aero = &config.aero;
    let alpha = air_data.alpha;
    let beta = air_data.beta;
    let q_s = air_data.dynamic_pressure * config.geometry.wing_area;

    let cl_max = aero.max_lift_coefficient;
    let cl_required = (weight / q_s).clamp(MIN_REQUIRED_LIFT_COEFFICIENT, cl_max);
    let cl_alpha = aero.lift_curve_slope * (alpha + aero.trim_alpha_offset);
    let blended = (1.0 - LIFT_CURVE_BLEND) * cl_required + LIFT_CURVE_BLEND * cl_alpha;
    let level_balanced = cl_required + LIFT_CURVE_BLEND * aero.lift_curve_slope * alpha;
    let cl_clean = blended
        .max(level_balanced)
        .clamp(MIN_BLENDED_LIFT_COEFFICIENT, cl_max);

    let devices = &aero.devices;
    let flaps = devices.flap_increment(controls.flaps);
    let mut lift_coefficient = cl_clean + flaps.delta_lift;
    let mut device_drag = flaps.delta_drag;
    if controls.air_brakes {
        lift_coefficient += devices.air_brakes.delta_lift;
        device_drag += devices.air_brakes.delta_drag;
    }
    if controls.gear_down {
        device_drag += devices.gear_drag;
    }
    let lift_coefficient = lift_coefficient.max(0.0);
    let drag_coefficient = aero.zero_lift_drag
        + aero.induced_drag_factor * lift_coefficient * lift_coefficient
        + device_drag;

    let lift = q_s * lift_coefficient;
    let drag = q_s * drag_coefficient;

    let control_forces = &aero.control_forces;
    let side_force = q_s
        * (aero.side_force_slope * beta
            + control_forces.roll_side_force * controls.roll
            + control_forces.yaw_side_force * controls.yaw);
    let control_lift = q_s * control_forces.pitch_lift * controls.pitch;

    let (sin_alpha, cos_alpha) = alpha.sin_cos();
    let force = Vector3::new(
        lift * sin_alpha - drag * cos_alpha,
        side_force,
        -lift * cos_alpha - drag * sin_alpha - control_lift,
    );

    // Positive nose up. The aerodynamic centre sits aft of the CG.
    let arm = aero.aero_center_offset * config.geometry.mean_chord();
    let pitching_moment = -lift * arm * sin_alpha + drag * arm * cos_alpha;

    let power = &config.control_power;
    let elevator_trim = (-pitching_moment / power.pitch).clamp(-1.0, 1.0);
    let moment = Vector3::new(
        power.roll * controls.roll,
        power.pitch * controls.pitch
            + pitching_moment
            + aero.trim_effectiveness * power.pitch * elevator_trim,
        power.yaw * controls.yaw,
    );

    AerodynamicForces {
        force,
        moment,
        lift,
        drag,
        side_force,
        lift_coefficient,
        drag_coefficient,
        pitching_moment,
        elevator_trim,
    }
}
