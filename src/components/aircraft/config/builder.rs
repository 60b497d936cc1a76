use bevy::log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{AircraftConfig, MassModel};

/// Partial aircraft configuration merged over a base preset.
///
/// Every field is optional. Values that are missing keep the base value,
/// values that are not finite or outside their physical domain are replaced
/// by the base value with a warning. Building never fails.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct AircraftConfigBuilder {
    pub base: Option<AircraftConfig>,
    pub name: Option<String>,
    pub wing_area: Option<f64>,
    pub wing_span: Option<f64>,
    pub max_lift_coefficient: Option<f64>,
    pub lift_curve_slope: Option<f64>,
    pub zero_lift_drag: Option<f64>,
    pub induced_drag_factor: Option<f64>,
    pub trim_alpha_offset: Option<f64>,
    pub engine_count: Option<f64>,
    pub max_thrust_per_engine: Option<f64>,
    pub control_power: [Option<f64>; 3],
    pub moment_of_inertia: [Option<f64>; 3],
    pub empty_weight: Option<f64>,
    pub fuel_weight: Option<f64>,
    pub payload_weight: Option<f64>,
    pub max_mach: Option<f64>,
}

impl AircraftConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(mut self, config: AircraftConfig) -> Self {
        self.base = Some(config);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn wing_area(mut self, area: f64) -> Self {
        self.wing_area = Some(area);
        self
    }

    pub fn wing_span(mut self, span: f64) -> Self {
        self.wing_span = Some(span);
        self
    }

    pub fn max_lift_coefficient(mut self, cl_max: f64) -> Self {
        self.max_lift_coefficient = Some(cl_max);
        self
    }

    pub fn lift_curve_slope(mut self, slope: f64) -> Self {
        self.lift_curve_slope = Some(slope);
        self
    }

    pub fn zero_lift_drag(mut self, cd0: f64) -> Self {
        self.zero_lift_drag = Some(cd0);
        self
    }

    pub fn induced_drag_factor(mut self, k: f64) -> Self {
        self.induced_drag_factor = Some(k);
        self
    }

    pub fn engines(mut self, count: u32, max_thrust_per_engine: f64) -> Self {
        self.engine_count = Some(count as f64);
        self.max_thrust_per_engine = Some(max_thrust_per_engine);
        self
    }

    pub fn control_power(mut self, roll: f64, pitch: f64, yaw: f64) -> Self {
        self.control_power = [Some(roll), Some(pitch), Some(yaw)];
        self
    }

    pub fn moment_of_inertia(mut self, roll: f64, pitch: f64, yaw: f64) -> Self {
        self.moment_of_inertia = [Some(roll), Some(pitch), Some(yaw)];
        self
    }

    pub fn weights(mut self, empty: f64, fuel: f64, payload: f64) -> Self {
        self.empty_weight = Some(empty);
        self.fuel_weight = Some(fuel);
        self.payload_weight = Some(payload);
        self
    }

    /// Reads a camelCase configuration object.
    ///
    /// Numbers and numeric strings are accepted. Any other value present for a
    /// known key is recorded as invalid and falls back to its default in
    /// [`build`](Self::build). An optional `"preset"` key selects the base.
    pub fn from_json(value: &Value) -> Self {
        let mut builder = Self::new();

        if let Some(preset) = value.get("preset").and_then(|v| v.as_str()) {
            match AircraftConfig::preset(preset) {
                Some(config) => builder = builder.base(config),
                None => warn!("Unknown aircraft preset '{}', using default", preset),
            }
        }

        if let Some(name) = value.get("name").and_then(|v| v.as_str()) {
            builder = builder.name(name);
        }

        builder.wing_area = read_number(value, &["wingArea"]);
        builder.wing_span = read_number(value, &["wingSpan"]);
        builder.max_lift_coefficient = read_number(value, &["maxLiftCoefficient"]);
        builder.lift_curve_slope = read_number(value, &["liftCurveSlope"]);
        builder.zero_lift_drag = read_number(value, &["zeroLiftDragCoefficient"]);
        builder.induced_drag_factor = read_number(value, &["inducedDragFactor"]);
        builder.trim_alpha_offset = read_number(value, &["trimAlphaOffset"]);
        builder.engine_count = read_number(value, &["engineCount"]);
        builder.max_thrust_per_engine = read_number(value, &["maxThrustPerEngine"]);
        builder.empty_weight = read_number(value, &["emptyWeight"]);
        builder.fuel_weight = read_number(value, &["fuelWeight"]);
        builder.payload_weight = read_number(value, &["payloadWeight"]);
        builder.max_mach = read_number(value, &["maxMach"]);

        for (i, axis) in ["roll", "pitch", "yaw"].iter().enumerate() {
            builder.control_power[i] = read_number(value, &["controlPower", axis]);
            builder.moment_of_inertia[i] = read_number(value, &["momentOfInertia", axis]);
        }

        builder
    }

    pub fn build(self) -> AircraftConfig {
        let mut config = self.base.unwrap_or_default();

        if let Some(name) = self.name {
            config.name = name;
        }

        let geometry = &mut config.geometry;
        geometry.wing_area = checked("wingArea", self.wing_area, geometry.wing_area, positive);
        geometry.wing_span = checked("wingSpan", self.wing_span, geometry.wing_span, positive);

        let aero = &mut config.aero;
        aero.max_lift_coefficient = checked(
            "maxLiftCoefficient",
            self.max_lift_coefficient,
            aero.max_lift_coefficient,
            |v| v >= 0.3,
        );
        aero.lift_curve_slope = checked(
            "liftCurveSlope",
            self.lift_curve_slope,
            aero.lift_curve_slope,
            positive,
        );
        aero.zero_lift_drag = checked(
            "zeroLiftDragCoefficient",
            self.zero_lift_drag,
            aero.zero_lift_drag,
            non_negative,
        );
        aero.induced_drag_factor = checked(
            "inducedDragFactor",
            self.induced_drag_factor,
            aero.induced_drag_factor,
            non_negative,
        );
        aero.trim_alpha_offset = checked(
            "trimAlphaOffset",
            self.trim_alpha_offset,
            aero.trim_alpha_offset,
            |v| v.abs() < 0.5,
        );

        let propulsion = &mut config.propulsion;
        propulsion.engine_count = checked(
            "engineCount",
            self.engine_count,
            propulsion.engine_count as f64,
            |v| (0.0..=16.0).contains(&v),
        )
        .round() as u32;
        propulsion.max_thrust_per_engine = checked(
            "maxThrustPerEngine",
            self.max_thrust_per_engine,
            propulsion.max_thrust_per_engine,
            non_negative,
        );

        let power = &mut config.control_power;
        power.roll = checked("controlPower.roll", self.control_power[0], power.roll, positive);
        power.pitch = checked("controlPower.pitch", self.control_power[1], power.pitch, positive);
        power.yaw = checked("controlPower.yaw", self.control_power[2], power.yaw, positive);

        let base_mass = config.mass;
        let mass = &mut config.mass;
        let inertia = &mut mass.moment_of_inertia;
        inertia.roll = checked(
            "momentOfInertia.roll",
            self.moment_of_inertia[0],
            inertia.roll,
            positive,
        );
        inertia.pitch = checked(
            "momentOfInertia.pitch",
            self.moment_of_inertia[1],
            inertia.pitch,
            positive,
        );
        inertia.yaw = checked(
            "momentOfInertia.yaw",
            self.moment_of_inertia[2],
            inertia.yaw,
            positive,
        );
        mass.empty_weight = checked("emptyWeight", self.empty_weight, mass.empty_weight, positive);
        mass.fuel_weight = checked("fuelWeight", self.fuel_weight, mass.fuel_weight, non_negative);
        mass.payload_weight = checked(
            "payloadWeight",
            self.payload_weight,
            mass.payload_weight,
            non_negative,
        );
        if !usable_mass(mass.total()) {
            let fallback = if usable_mass(base_mass.total()) {
                base_mass
            } else {
                MassModel::default()
            };
            warn!(
                "Invalid aircraft total mass {}, using default weights totalling {}",
                mass.total(),
                fallback.total()
            );
            mass.empty_weight = fallback.empty_weight;
            mass.fuel_weight = fallback.fuel_weight;
            mass.payload_weight = fallback.payload_weight;
        }

        config.max_mach = checked("maxMach", self.max_mach, config.max_mach, positive);

        config
    }
}

fn positive(value: f64) -> bool {
    value > 0.0
}

fn non_negative(value: f64) -> bool {
    value >= 0.0
}

fn usable_mass(total: f64) -> bool {
    total.is_finite() && total > 0.0
}

/// Returns `value` when it is finite and valid, otherwise `fallback`.
fn checked(field: &str, value: Option<f64>, fallback: f64, valid: impl Fn(f64) -> bool) -> f64 {
    match value {
        None => fallback,
        Some(v) if v.is_finite() && valid(v) => v,
        Some(v) => {
            warn!(
                "Invalid aircraft configuration value {} = {}, using default {}",
                field, v, fallback
            );
            fallback
        }
    }
}

/// Reads a nested numeric field. Missing and null give `None`; present values
/// that cannot be read as a number give `Some(NaN)` so they are rejected later.
fn read_number(value: &Value, path: &[&str]) -> Option<f64> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }

    match current {
        Value::Null => None,
        Value::Number(n) => Some(n.as_f64().unwrap_or(f64::NAN)),
        Value::String(s) => Some(s.trim().parse::<f64>().unwrap_or(f64::NAN)),
        _ => Some(f64::NAN),
    }
}
