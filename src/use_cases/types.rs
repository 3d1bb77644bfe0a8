// Use-case level inputs/outputs for the simulation loop.

use crate::domain::{DriverInput, VehicleSnapshot};

#[derive(Debug, Clone)]
pub enum SimEvent {
    /// Latest driver controls; replaces whatever snapshot the loop holds.
    Input { input: DriverInput },
    /// Puts the vehicle back at the scene start pose and resumes the sim.
    Reset,
}

/// High-level simulation lifecycle. `Crashed` is terminal until a Reset:
/// the loop stops stepping physics but keeps broadcasting the final state.
#[derive(Debug, Clone)]
pub enum SimState {
    Running,
    Crashed,
}

#[derive(Debug, Clone)]
pub struct SimUpdate {
    pub tick: u64,
    pub vehicle: VehicleSnapshot,
    pub collided: bool,
}
