use bevy::log::{debug, error, info, warn};
use bevy::prelude::Component;
use nalgebra::Vector3;

use crate::components::{
    AerodynamicForces, AirData, AircraftConfig, Alarms, Attitude, AutopilotStatus,
    AutopilotTargetsUpdate, ControlDemand, ControlInputs, ControlLimits, ControlState,
    FlapSetting, ForceBreakdown, ForceDiagnostics, InitialConditions, RigidBodyState,
    StateSnapshot,
};
use crate::resources::{
    AutopilotConfig, EnvironmentConfig, EnvironmentModel, EnvironmentSample, PhysicsConfig,
};
use crate::systems::{
    calculate_aerodynamic_forces, calculate_air_data, calculate_airspeeds,
    calculate_gravitational_forces, calculate_propulsion_forces, integrate_state, sum_forces,
    trim_level_flight, AlarmThresholds, AutopilotContext, AutopilotController, AutopilotStrategy,
    ControlShaper, StateReporter,
};
use crate::utils::body_to_earth;

/// Throttle used when the initial condition cannot be trimmed.
const UNTRIMMED_THROTTLE: f64 = 0.5;

/// Builder for [`FlightSimulation`].
#[derive(Debug, Default)]
pub struct FlightSimulationBuilder {
    aircraft: AircraftConfig,
    physics: PhysicsConfig,
    autopilot: AutopilotConfig,
    environment: EnvironmentConfig,
    initial_conditions: InitialConditions,
    alarm_thresholds: AlarmThresholds,
    control_limits: ControlLimits,
    strategy: Option<Box<dyn AutopilotStrategy>>,
}

impl FlightSimulationBuilder {
    pub fn new(aircraft: AircraftConfig) -> Self {
        Self {
            aircraft,
            ..Default::default()
        }
    }

    pub fn physics(mut self, physics: PhysicsConfig) -> Self {
        self.physics = physics;
        self
    }

    pub fn autopilot(mut self, autopilot: AutopilotConfig) -> Self {
        self.autopilot = autopilot;
        self
    }

    pub fn environment(mut self, environment: EnvironmentConfig) -> Self {
        self.environment = environment;
        self
    }

    pub fn initial_conditions(mut self, initial_conditions: InitialConditions) -> Self {
        self.initial_conditions = initial_conditions;
        self
    }

    pub fn alarm_thresholds(mut self, thresholds: AlarmThresholds) -> Self {
        self.alarm_thresholds = thresholds;
        self
    }

    pub fn control_limits(mut self, limits: ControlLimits) -> Self {
        self.control_limits = limits;
        self
    }

    /// Replaces the default PID autopilot law.
    pub fn strategy(mut self, strategy: Box<dyn AutopilotStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn build(self) -> FlightSimulation {
        let physics = self.physics.sanitized();
        let autopilot = match self.strategy {
            Some(strategy) => AutopilotController::with_strategy(strategy, self.autopilot.limits),
            None => AutopilotController::new(&self.autopilot),
        };
        let environment = EnvironmentModel::new(self.environment);

        let mut simulation = FlightSimulation {
            config: self.aircraft,
            physics,
            environment,
            initial_conditions: self.initial_conditions,
            initial_state: RigidBodyState::default(),
            initial_controls: ControlState::default(),
            state: RigidBodyState::default(),
            controls: ControlState::default(),
            manual: ControlDemand::default(),
            shaper: ControlShaper::with_autopilot_limits(
                self.control_limits,
                &self.autopilot.limits,
                self.autopilot.rate_limits,
            ),
            autopilot,
            reporter: StateReporter::new(self.alarm_thresholds),
            environment_sample: EnvironmentSample::default(),
            air_data: AirData::default(),
            aerodynamics: AerodynamicForces::default(),
            forces: ForceBreakdown::default(),
            alarms: Alarms::default(),
            time: 0.0,
            tick: 0,
            accumulator: 0.0,
        };

        let (state, controls) = simulation.initial_condition();
        simulation.initial_state = state;
        simulation.initial_controls = controls;
        simulation.restore_initial();
        simulation
    }
}

/// One simulated aircraft: configuration, state, controls, autopilot and
/// environment, advanced in fixed physics steps.
///
/// Each step runs environment, air data, control law, control shaping,
/// forces, integration and reporting in that order. Nothing outside this
/// type mutates the state except through its methods.
#[derive(Component, Debug)]
pub struct FlightSimulation {
    config: AircraftConfig,
    physics: PhysicsConfig,
    environment: EnvironmentModel,
    initial_conditions: InitialConditions,
    initial_state: RigidBodyState,
    initial_controls: ControlState,
    state: RigidBodyState,
    controls: ControlState,
    /// Manual demand, held between inputs.
    manual: ControlDemand,
    shaper: ControlShaper,
    autopilot: AutopilotController,
    reporter: StateReporter,
    environment_sample: EnvironmentSample,
    air_data: AirData,
    aerodynamics: AerodynamicForces,
    forces: ForceBreakdown,
    alarms: Alarms,
    time: f64,
    tick: u64,
    /// Unsimulated time carried between `advance` calls (s).
    accumulator: f64,
}

impl Default for FlightSimulation {
    fn default() -> Self {
        Self::new(AircraftConfig::default())
    }
}

impl FlightSimulation {
    /// Creates a simulation trimmed at the default initial conditions.
    pub fn new(config: AircraftConfig) -> Self {
        FlightSimulationBuilder::new(config).build()
    }

    pub fn builder(config: AircraftConfig) -> FlightSimulationBuilder {
        FlightSimulationBuilder::new(config)
    }

    pub fn config(&self) -> &AircraftConfig {
        &self.config
    }

    pub fn physics_config(&self) -> &PhysicsConfig {
        &self.physics
    }

    pub fn environment(&self) -> &EnvironmentModel {
        &self.environment
    }

    pub fn initial_conditions(&self) -> &InitialConditions {
        &self.initial_conditions
    }

    pub fn state(&self) -> &RigidBodyState {
        &self.state
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    /// Simulated time (s).
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn is_crashed(&self) -> bool {
        self.reporter.is_crashed()
    }

    /// Replaces the rigid-body state. Non-finite states are rejected.
    pub fn set_state(&mut self, state: RigidBodyState) {
        if !state.is_finite() {
            warn!("Ignoring non-finite aircraft state");
            return;
        }

        let max_pitch = self.physics.max_pitch();
        let mut state = state;
        state.attitude = state.attitude.normalized();
        state.attitude.pitch = state.attitude.pitch.clamp(-max_pitch, max_pitch);
        self.state = state;
        self.refresh();
    }

    /// Applies `inputs` and runs exactly one physics step.
    pub fn update(&mut self, inputs: &ControlInputs) -> StateSnapshot {
        if self.apply_inputs(inputs) {
            return self.snapshot();
        }

        self.step();
        self.snapshot()
    }

    /// Applies `inputs` and advances by `dt` seconds of wall time in fixed
    /// steps. Time left over is carried to the next call; a backlog longer
    /// than `max_substeps` steps is dropped.
    pub fn advance(&mut self, inputs: &ControlInputs, dt: f64) -> StateSnapshot {
        if self.apply_inputs(inputs) {
            return self.snapshot();
        }

        if !dt.is_finite() || dt < 0.0 {
            warn!("Ignoring invalid frame time {}", dt);
            return self.snapshot();
        }

        let timestep = self.physics.timestep;
        // Absorbs rounding when dt comes from a nanosecond Duration.
        let epsilon = timestep * 1e-6;
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator + epsilon >= timestep && steps < self.physics.max_substeps {
            self.step();
            self.accumulator -= timestep;
            steps += 1;
        }

        if self.accumulator + epsilon >= timestep {
            warn!(
                "Simulation falling behind, dropping {:.3} s after {} steps",
                self.accumulator, steps
            );
            self.accumulator = 0.0;
        }
        self.accumulator = self.accumulator.max(0.0);

        self.snapshot()
    }

    /// Snapshot of the current state without advancing.
    pub fn get_aircraft_state(&self) -> StateSnapshot {
        self.snapshot()
    }

    pub fn set_autopilot(&mut self, engaged: bool) {
        if engaged == self.autopilot.is_engaged() {
            return;
        }

        let context = self.autopilot_context();
        self.autopilot.set_engaged(engaged, &context);
        if !engaged {
            // Hand back the surfaces where the autopilot left them.
            self.manual = ControlDemand {
                throttle: self.controls.throttle,
                pitch: self.controls.pitch,
                roll: self.controls.roll,
                yaw: self.controls.yaw,
            };
        }
    }

    pub fn update_autopilot_targets(&mut self, update: &AutopilotTargetsUpdate) {
        self.autopilot.update_targets(update);
    }

    pub fn get_autopilot_status(&self) -> AutopilotStatus {
        self.autopilot.status()
    }

    pub fn set_flaps(&mut self, flaps: FlapSetting) {
        if self.controls.flaps != flaps {
            debug!("Flaps {:?}", flaps);
            self.controls.flaps = flaps;
        }
    }

    pub fn set_air_brakes(&mut self, extended: bool) {
        self.controls.air_brakes = extended;
    }

    pub fn set_gear(&mut self, down: bool) {
        self.controls.gear_down = down;
    }

    /// Returns to the initial conditions, clearing the autopilot, alarms,
    /// turbulence and simulated time.
    pub fn reset(&mut self) {
        self.restore_initial();
        info!(
            "Simulation reset to {:.0} m, {:.1} m/s",
            self.initial_conditions.altitude, self.initial_conditions.airspeed
        );
    }

    /// Aerodynamic forces for the current state and controls.
    pub fn calculate_aerodynamic_forces(&self) -> AerodynamicForces {
        let air_data = calculate_air_data(&self.state, &self.environment_sample);
        calculate_aerodynamic_forces(
            &self.config,
            &air_data,
            &self.controls,
            self.config.weight(self.physics.gravity),
        )
    }

    /// Body-frame thrust for the current throttle and altitude.
    pub fn calculate_propulsion_forces(&self) -> Vector3<f64> {
        calculate_propulsion_forces(
            &self.config.propulsion,
            &self.controls,
            self.environment_sample.density,
        )
    }

    /// Body-frame weight for the current pitch.
    pub fn calculate_gravitational_forces(&self) -> Vector3<f64> {
        calculate_gravitational_forces(
            self.config.mass(),
            self.physics.gravity,
            self.state.attitude.pitch,
        )
    }

    /// Air data and forces for the current state, as the next step would
    /// see them before the environment advances.
    pub fn diagnostics(&self) -> ForceDiagnostics {
        let air_data = calculate_air_data(&self.state, &self.environment_sample);
        let aerodynamics = self.calculate_aerodynamic_forces();
        let forces = sum_forces(
            &aerodynamics,
            self.calculate_propulsion_forces(),
            self.calculate_gravitational_forces(),
            &self.config.mass.moment_of_inertia,
        );

        ForceDiagnostics {
            air_data,
            aerodynamics,
            forces,
        }
    }

    /// Applies the one-shot commands and merges the continuous channels.
    /// Returns true when the inputs requested a reset.
    fn apply_inputs(&mut self, inputs: &ControlInputs) -> bool {
        if inputs.reset {
            self.reset();
            return true;
        }

        if let Some(engaged) = inputs.autopilot {
            self.set_autopilot(engaged);
        }
        if let Some(update) = &inputs.targets {
            self.update_autopilot_targets(update);
        }
        if let Some(flaps) = inputs.flaps {
            self.set_flaps(flaps);
        }
        if let Some(extended) = inputs.air_brakes {
            self.set_air_brakes(extended);
        }
        if let Some(down) = inputs.gear {
            self.set_gear(down);
        }

        let continuous = [inputs.throttle, inputs.pitch, inputs.roll, inputs.yaw];
        if continuous.iter().flatten().any(|v| !v.is_finite()) {
            debug!("Ignoring non-finite control inputs {:?}", continuous);
        }
        self.manual = self.manual.merged(inputs);
        false
    }

    fn step(&mut self) {
        if self.reporter.is_crashed() {
            return;
        }

        let dt = self.physics.timestep;
        let altitude = self.state.altitude();

        self.environment.step(dt);
        self.environment_sample = self.environment.sample(altitude);
        self.air_data = calculate_air_data(&self.state, &self.environment_sample);

        let context = self.autopilot_context();
        let demand = match self.autopilot.compute(&context, dt) {
            Some(command) => ControlDemand {
                throttle: command.throttle,
                pitch: command.pitch,
                roll: command.roll,
                yaw: command.yaw,
            },
            None => self.manual,
        };
        self.controls = self.shaper.apply(&self.controls, &demand, dt);

        self.compute_forces();

        let previous = self.state;
        integrate_state(
            &mut self.state,
            &self.forces,
            self.config.mass(),
            &self.physics,
            dt,
        );
        if !self.state.is_finite() {
            error!("Integration produced a non-finite state at tick {}", self.tick);
            self.state = previous;
        }

        self.time += dt;
        self.tick += 1;

        self.air_data = calculate_air_data(&self.state, &self.environment_sample);
        let airspeeds = calculate_airspeeds(&self.state, &self.air_data);
        self.alarms = self.reporter.update(
            &self.state,
            &airspeeds,
            &self.config,
            self.physics.gravity,
            dt,
        );
    }

    fn compute_forces(&mut self) {
        let weight = self.config.weight(self.physics.gravity);
        self.aerodynamics =
            calculate_aerodynamic_forces(&self.config, &self.air_data, &self.controls, weight);
        let propulsion = calculate_propulsion_forces(
            &self.config.propulsion,
            &self.controls,
            self.environment_sample.density,
        );
        let gravity = calculate_gravitational_forces(
            self.config.mass(),
            self.physics.gravity,
            self.state.attitude.pitch,
        );
        self.forces = sum_forces(
            &self.aerodynamics,
            propulsion,
            gravity,
            &self.config.mass.moment_of_inertia,
        );
    }

    /// Recomputes the derived quantities for the current state without
    /// advancing time.
    fn refresh(&mut self) {
        self.environment_sample = self.environment.sample(self.state.altitude());
        self.air_data = calculate_air_data(&self.state, &self.environment_sample);
        self.compute_forces();
        let airspeeds = calculate_airspeeds(&self.state, &self.air_data);
        self.alarms =
            self.reporter
                .alarms(&self.state, &airspeeds, &self.config, self.physics.gravity);
    }

    fn restore_initial(&mut self) {
        self.state = self.initial_state;
        self.controls = self.initial_controls;
        self.manual = ControlDemand {
            throttle: self.initial_controls.throttle,
            pitch: self.initial_controls.pitch,
            roll: self.initial_controls.roll,
            yaw: self.initial_controls.yaw,
        };
        self.autopilot.reset();
        self.reporter.reset();
        self.environment.reset();
        self.time = 0.0;
        self.tick = 0;
        self.accumulator = 0.0;
        self.refresh();
    }

    /// Initial state and controls, trimmed for level flight when requested.
    fn initial_condition(&self) -> (RigidBodyState, ControlState) {
        let ic = &self.initial_conditions;
        let environment = self.environment.sample(ic.altitude);
        let controls = ControlState::default();

        if ic.trim {
            match trim_level_flight(
                &self.config,
                &self.physics,
                &environment,
                ic.altitude,
                ic.airspeed,
                ic.heading,
                &controls,
            ) {
                Ok(trim) => {
                    return (
                        trim.state,
                        ControlState {
                            throttle: self.shaper.limits.throttle(trim.throttle),
                            ..controls
                        },
                    );
                }
                Err(e) => warn!("Starting untrimmed: {}", e),
            }
        }

        let attitude = Attitude::new(0.0, 0.0, ic.heading).normalized();
        let to_body = body_to_earth(attitude.roll, attitude.pitch, attitude.yaw).inverse();
        let airspeed = if ic.airspeed.is_finite() {
            ic.airspeed.max(0.0)
        } else {
            0.0
        };
        let mut state = RigidBodyState {
            velocity: Vector3::new(airspeed, 0.0, 0.0) + to_body * environment.wind,
            attitude,
            ..Default::default()
        };
        state.set_altitude(if ic.altitude.is_finite() {
            ic.altitude
        } else {
            InitialConditions::default().altitude
        });

        (
            state,
            ControlState {
                throttle: self.shaper.limits.throttle(UNTRIMMED_THROTTLE),
                ..controls
            },
        )
    }

    fn autopilot_context(&self) -> AutopilotContext {
        AutopilotContext {
            altitude: self.state.altitude(),
            airspeed: self.air_data.true_airspeed,
            heading: self.state.attitude.yaw,
            attitude: self.state.attitude,
            angular_rates: self.state.angular_rates,
            throttle: self.controls.throttle,
        }
    }

    fn snapshot(&self) -> StateSnapshot {
        let state = &self.state;
        StateSnapshot {
            time: self.time,
            tick: self.tick,
            position: state.position,
            altitude: state.altitude(),
            velocity: state.velocity,
            earth_velocity: state.earth_velocity(),
            attitude: state.attitude,
            angular_rates: state.angular_rates,
            airspeeds: calculate_airspeeds(state, &self.air_data),
            alpha: self.air_data.alpha,
            beta: self.air_data.beta,
            controls: self.controls,
            forces: self.forces,
            environment: self.environment_sample,
            autopilot: self.autopilot.status(),
            alarms: self.alarms,
        }
    }
}
