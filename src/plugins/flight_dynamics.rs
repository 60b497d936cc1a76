use bevy::prelude::*;

use crate::components::{AircraftSnapshot, ControlInputs};
use crate::resources::PhysicsConfig;
use crate::simulation::FlightSimulation;

/// Flight dynamics stages
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightDynamicsSet {
    /// Applies inputs and advances every simulation.
    Simulate,
    /// Publishes snapshots for downstream systems.
    Report,
}

/// Drives every entity carrying a [`FlightSimulation`] from `FixedUpdate`.
pub struct FlightDynamicsPlugin {
    pub timestep: f64,
}

impl Default for FlightDynamicsPlugin {
    fn default() -> Self {
        Self::from_config(&PhysicsConfig::default())
    }
}

impl FlightDynamicsPlugin {
    pub fn from_config(config: &PhysicsConfig) -> Self {
        Self {
            timestep: config.timestep,
        }
    }
}

impl Plugin for FlightDynamicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_seconds(self.timestep));

        app.configure_sets(
            FixedUpdate,
            (FlightDynamicsSet::Simulate, FlightDynamicsSet::Report).chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                flight_dynamics_system.in_set(FlightDynamicsSet::Simulate),
                log_alarms_system.in_set(FlightDynamicsSet::Report),
            ),
        );
    }
}

/// Advances each simulation by one fixed period and stores its snapshot.
/// One-shot commands in [`ControlInputs`] are consumed.
pub fn flight_dynamics_system(
    mut commands: Commands,
    fixed_time: Res<Time<Fixed>>,
    mut query: Query<(
        Entity,
        &mut FlightSimulation,
        &mut ControlInputs,
        Option<&mut AircraftSnapshot>,
    )>,
) {
    let dt = fixed_time.timestep().as_secs_f64();

    for (entity, mut simulation, mut inputs, snapshot) in query.iter_mut() {
        let latest = simulation.advance(&inputs, dt);
        inputs.clear_commands();

        match snapshot {
            Some(mut snapshot) => snapshot.0 = latest,
            None => {
                commands.entity(entity).insert(AircraftSnapshot(latest));
            }
        }
    }
}

/// Logs active alarms each time a snapshot changes.
fn log_alarms_system(query: Query<(Entity, &AircraftSnapshot), Changed<AircraftSnapshot>>) {
    for (entity, snapshot) in query.iter() {
        let alarms = &snapshot.0.alarms;
        if alarms.any() {
            debug!(
                "{:?} alarms at t={:.2}s: {:?}",
                entity, snapshot.0.time, alarms
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(FlightDynamicsPlugin::default());
        app
    }

    #[test]
    fn test_fixed_update_steps_once_and_publishes_snapshot() {
        let mut app = app();
        let entity = app
            .world_mut()
            .spawn((FlightSimulation::default(), ControlInputs::new()))
            .id();

        app.world_mut().run_schedule(FixedUpdate);
        app.world_mut().run_schedule(FixedUpdate);

        let world = app.world();
        let snapshot = world
            .get::<AircraftSnapshot>(entity)
            .expect("snapshot inserted");
        assert_eq!(snapshot.0.tick, 2);
        assert_eq!(world.get::<FlightSimulation>(entity).unwrap().tick(), 2);
    }

    #[test]
    fn test_one_shot_commands_are_consumed() {
        let mut app = app();
        let entity = app
            .world_mut()
            .spawn((
                FlightSimulation::default(),
                ControlInputs::new().with_autopilot(true).with_throttle(0.4),
            ))
            .id();

        app.world_mut().run_schedule(FixedUpdate);

        let world = app.world();
        let inputs = world.get::<ControlInputs>(entity).unwrap();
        assert_eq!(inputs.autopilot, None);
        assert_eq!(inputs.throttle, Some(0.4));
        assert!(world
            .get::<FlightSimulation>(entity)
            .unwrap()
            .get_autopilot_status()
            .engaged);
    }
}
