use crate::domain::Scene;
use crate::use_cases::{SimEvent, SimState, SimUpdate};
use tokio::sync::{broadcast, mpsc, watch};

#[derive(Clone)]
pub struct AppState {
    // Static scene shared with every client on connect.
    pub scene: Scene,
    // Events flowing from the network into the sim loop.
    pub event_tx: mpsc::Sender<SimEvent>,
    // Per-tick updates produced by the sim loop.
    pub update_tx: broadcast::Sender<SimUpdate>,
    // High-level sim lifecycle (running/crashed).
    pub sim_state_tx: watch::Sender<SimState>,
}
