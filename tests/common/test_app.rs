use bevy::prelude::*;
use flyer_fdm::{
    components::{AircraftSnapshot, ControlInputs},
    plugins::FlightDynamicsPlugin,
    resources::PhysicsConfig,
    simulation::FlightSimulation,
};

/// Builder for a headless app running the flight dynamics plugin
#[derive(Default)]
pub struct TestAppBuilder {
    simulations: Vec<(FlightSimulation, ControlInputs)>,
    physics_config: Option<PhysicsConfig>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_simulation(mut self, simulation: FlightSimulation, inputs: ControlInputs) -> Self {
        self.simulations.push((simulation, inputs));
        self
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = Some(config);
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins(FlightDynamicsPlugin::from_config(
            &self.physics_config.unwrap_or_default(),
        ));

        let entities = self
            .simulations
            .into_iter()
            .map(|bundle| app.world_mut().spawn(bundle).id())
            .collect();

        TestApp { app, entities }
    }
}

pub struct TestApp {
    pub app: App,
    pub entities: Vec<Entity>,
}

impl TestApp {
    /// Runs the fixed schedule `steps` times
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    pub fn simulation(&self, index: usize) -> &FlightSimulation {
        self.app
            .world()
            .get::<FlightSimulation>(self.entities[index])
            .expect("entity has a simulation")
    }

    pub fn snapshot(&self, index: usize) -> Option<&AircraftSnapshot> {
        self.app.world().get::<AircraftSnapshot>(self.entities[index])
    }

    pub fn inputs_mut(&mut self, index: usize) -> Mut<'_, ControlInputs> {
        self.app
            .world_mut()
            .get_mut::<ControlInputs>(self.entities[index])
            .expect("entity has inputs")
    }
}
