use flyer_fdm::{components::StateSnapshot, ControlInputs, FlightSimulation};

/// Runs `ticks` fixed steps with the same inputs and returns every snapshot
pub fn run_ticks(
    simulation: &mut FlightSimulation,
    ticks: usize,
    inputs: &ControlInputs,
) -> Vec<StateSnapshot> {
    (0..ticks).map(|_| simulation.update(inputs)).collect()
}

/// Runs fixed steps until `condition` holds, up to `max_ticks`
pub fn run_until<F>(
    simulation: &mut FlightSimulation,
    inputs: &ControlInputs,
    max_ticks: usize,
    condition: F,
) -> Option<StateSnapshot>
where
    F: Fn(&StateSnapshot) -> bool,
{
    for _ in 0..max_ticks {
        let snapshot = simulation.update(inputs);
        if condition(&snapshot) {
            return Some(snapshot);
        }
    }
    None
}

/// Number of fixed steps covering `duration` seconds
pub fn ticks_for(simulation: &FlightSimulation, duration: f64) -> usize {
    (duration / simulation.physics_config().timestep).round() as usize
}
