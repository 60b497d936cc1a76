use std::fmt::Debug;

use bevy::log::info;
use nalgebra::Vector3;

use crate::components::{
    Attitude, AutopilotCommand, AutopilotLimits, AutopilotStatus, AutopilotTargets,
    AutopilotTargetsUpdate,
};
use crate::resources::{AutopilotConfig, InnerLoopGains};
use crate::systems::controller::PidController;
use crate::utils::{normalize_angle, ISA_MAX_ALTITUDE};

/// Aircraft quantities an autopilot law may read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutopilotContext {
    /// Altitude (m).
    pub altitude: f64,
    /// True airspeed (m/s).
    pub airspeed: f64,
    /// Heading (rad).
    pub heading: f64,
    pub attitude: Attitude,
    /// Body rates p, q, r (rad/s).
    pub angular_rates: Vector3<f64>,
    /// Throttle currently applied.
    pub throttle: f64,
}

/// A control law turning targets into control commands.
///
/// The autopilot only touches the aircraft through the commands it returns,
/// so laws can be swapped without changing the force model or integrator.
pub trait AutopilotStrategy: Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Called on engagement; must clear any accumulated controller state.
    fn engage(&mut self, context: &AutopilotContext);

    fn compute(
        &mut self,
        targets: &AutopilotTargets,
        context: &AutopilotContext,
        dt: f64,
    ) -> AutopilotCommand;
}

/// Cascaded PID autopilot.
///
/// Altitude error trims the pitch attitude held since engagement, airspeed
/// error nudges the throttle each step and heading error commands a bank
/// angle. Attitude-hold loops turn the attitude commands into surfaces.
#[derive(Debug, Clone)]
pub struct PidAutopilot {
    altitude: PidController,
    speed: PidController,
    heading: PidController,
    inner_loop: InnerLoopGains,
    limits: AutopilotLimits,
    pitch_reference: f64,
}

impl PidAutopilot {
    pub fn new(config: &AutopilotConfig) -> Self {
        Self {
            altitude: PidController::new(config.altitude),
            speed: PidController::new(config.speed),
            heading: PidController::new(config.heading),
            inner_loop: config.inner_loop,
            limits: config.limits,
            pitch_reference: 0.0,
        }
    }
}

impl AutopilotStrategy for PidAutopilot {
    fn name(&self) -> &str {
        "pid"
    }

    fn engage(&mut self, context: &AutopilotContext) {
        self.altitude.reset();
        self.speed.reset();
        self.heading.reset();
        self.pitch_reference = context.attitude.pitch;
    }

    fn compute(
        &mut self,
        targets: &AutopilotTargets,
        context: &AutopilotContext,
        dt: f64,
    ) -> AutopilotCommand {
        let limits = &self.limits;
        let gains = &self.inner_loop;
        let rates = &context.angular_rates;

        let pitch_offset = self.altitude.calculate(targets.altitude, context.altitude, dt);
        let pitch_attitude =
            (self.pitch_reference + pitch_offset).clamp(limits.min_pitch, limits.max_pitch);
        let pitch = gains.pitch_attitude * (pitch_attitude - context.attitude.pitch)
            - gains.pitch_rate * rates.y;

        let throttle_delta = self.speed.calculate(targets.speed, context.airspeed, dt);
        let throttle =
            (context.throttle + throttle_delta).clamp(limits.min_throttle, limits.max_throttle);

        let heading_error = normalize_angle(targets.heading - context.heading);
        let bank_angle = self
            .heading
            .calculate_error(heading_error, dt)
            .clamp(-limits.max_bank, limits.max_bank);
        let roll = gains.bank_angle * (bank_angle - context.attitude.roll) - gains.roll_rate * rates.x;
        // Rudder follows the bank: positive bank and positive yaw both turn
        // right in body axes (FRD).
        let yaw = gains.turn_coordination * bank_angle;

        AutopilotCommand {
            throttle,
            pitch,
            roll,
            yaw,
            pitch_attitude,
            bank_angle,
        }
    }
}

/// Engagement state machine around an [`AutopilotStrategy`].
#[derive(Debug)]
pub struct AutopilotController {
    engaged: bool,
    targets: AutopilotTargets,
    limits: AutopilotLimits,
    strategy: Box<dyn AutopilotStrategy>,
    command: AutopilotCommand,
    errors: Vector3<f64>,
}

impl AutopilotController {
    pub fn new(config: &AutopilotConfig) -> Self {
        Self::with_strategy(Box::new(PidAutopilot::new(config)), config.limits)
    }

    pub fn with_strategy(strategy: Box<dyn AutopilotStrategy>, limits: AutopilotLimits) -> Self {
        Self {
            engaged: false,
            targets: AutopilotTargets::default(),
            limits,
            strategy,
            command: AutopilotCommand::default(),
            errors: Vector3::zeros(),
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn targets(&self) -> &AutopilotTargets {
        &self.targets
    }

    /// Engages and snaps the targets to the current state. Engaging while
    /// already engaged does nothing.
    pub fn engage(&mut self, context: &AutopilotContext) {
        if self.engaged {
            return;
        }

        self.engaged = true;
        self.targets = AutopilotTargets {
            altitude: context.altitude,
            speed: context.airspeed,
            heading: normalize_angle(context.heading),
        };
        self.errors = Vector3::zeros();
        self.strategy.engage(context);
        info!(
            "Autopilot engaged: altitude {:.1} m, speed {:.1} m/s, heading {:.3} rad",
            self.targets.altitude, self.targets.speed, self.targets.heading
        );
    }

    pub fn disengage(&mut self) {
        if self.engaged {
            self.engaged = false;
            info!("Autopilot disengaged");
        }
    }

    pub fn set_engaged(&mut self, engaged: bool, context: &AutopilotContext) {
        if engaged {
            self.engage(context);
        } else {
            self.disengage();
        }
    }

    /// Applies a partial target update. Non-finite values are ignored,
    /// altitude and speed are kept non-negative and heading is wrapped.
    pub fn update_targets(&mut self, update: &AutopilotTargetsUpdate) {
        if let Some(altitude) = update.altitude.filter(|v| v.is_finite()) {
            self.targets.altitude = altitude.clamp(0.0, ISA_MAX_ALTITUDE);
        }
        if let Some(speed) = update.speed.filter(|v| v.is_finite()) {
            self.targets.speed = speed.max(0.0);
        }
        if let Some(heading) = update.heading.filter(|v| v.is_finite()) {
            self.targets.heading = normalize_angle(heading);
        }
    }

    /// Runs the control law when engaged.
    pub fn compute(&mut self, context: &AutopilotContext, dt: f64) -> Option<AutopilotCommand> {
        if !self.engaged {
            return None;
        }

        self.errors = Vector3::new(
            self.targets.altitude - context.altitude,
            self.targets.speed - context.airspeed,
            normalize_angle(self.targets.heading - context.heading),
        );
        self.command = self.strategy.compute(&self.targets, context, dt);
        Some(self.command)
    }

    pub fn reset(&mut self) {
        self.engaged = false;
        self.targets = AutopilotTargets::default();
        self.command = AutopilotCommand::default();
        self.errors = Vector3::zeros();
    }

    pub fn status(&self) -> AutopilotStatus {
        AutopilotStatus {
            engaged: self.engaged,
            strategy: self.strategy.name().to_string(),
            targets: self.targets,
            limits: self.limits,
            altitude_error: self.errors.x,
            speed_error: self.errors.y,
            heading_error: self.errors.z,
            command: self.command,
        }
    }
}
