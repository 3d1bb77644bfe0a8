use super::types::{SimEvent, SimState, SimUpdate};
use crate::domain::systems::{collision, kinematics};
use crate::domain::{DriverInput, Scene, VehicleSnapshot};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, info};

/// Authoritative fixed-step simulation loop.
///
/// One task owns the vehicle and the scene; inputs arrive over the mpsc
/// channel and snapshots leave over the broadcast channel, so no state is
/// shared with the network layer. Each tick: drain pending events keeping the
/// latest input, step the kinematics, test collision, broadcast a snapshot.
///
/// On impact the loop enters `Crashed` and stops stepping entirely; only a
/// `Reset` event resumes it.
pub async fn sim_task(
    scene: Scene,
    mut event_rx: mpsc::Receiver<SimEvent>,
    update_tx: broadcast::Sender<SimUpdate>,
    sim_state_tx: watch::Sender<SimState>,
    tick_interval: Duration,
    diag_every_ticks: u64,
) {
    let obstacles = scene.obstacle_polygons();

    let mut vehicle = scene.spawn_vehicle();
    let mut input = DriverInput::default();
    let mut crashed = false;
    let mut tick: u64 = 0;

    let _ = sim_state_tx.send(SimState::Running);

    // Drive the fixed-step loop at the configured tick rate. The kinematics
    // constants are tuned for this cadence (see VehicleTuning).
    let mut interval = tokio::time::interval(tick_interval);

    loop {
        interval.tick().await;

        // Process all pending events; the latest input snapshot wins.
        while let Ok(ev) = event_rx.try_recv() {
            match ev {
                SimEvent::Input { input: latest } => input = latest,
                SimEvent::Reset => {
                    info!("sim reset");
                    vehicle = scene.spawn_vehicle();
                    input = DriverInput::default();
                    crashed = false;
                    let _ = sim_state_tx.send(SimState::Running);
                }
            }
        }

        let mut collided_this_tick = false;
        if !crashed {
            kinematics::step(&mut vehicle, &input);

            // Corner polygon for the pose we just integrated.
            let corners = vehicle.corners();
            if collision::detect(&corners, &obstacles) {
                collided_this_tick = true;
                crashed = true;
                input = DriverInput::default();
                info!(
                    x = vehicle.position.x,
                    y = vehicle.position.y,
                    heading = vehicle.heading,
                    velocity = vehicle.velocity.x,
                    "collision"
                );
                let _ = sim_state_tx.send(SimState::Crashed);
            }
        }

        tick += 1;

        if diag_every_ticks != 0 && tick % diag_every_ticks == 0 {
            debug!(
                tick,
                x = vehicle.position.x,
                y = vehicle.position.y,
                velocity = vehicle.velocity.x,
                acceleration = vehicle.acceleration,
                heading = vehicle.heading,
                steer_angle = vehicle.steer_angle,
                "vehicle state"
            );
        }

        // Broadcast new state. Send errors just mean no client is connected.
        let _ = update_tx.send(SimUpdate {
            tick,
            vehicle: VehicleSnapshot::from(&vehicle),
            collided: collided_this_tick || crashed,
        });
    }
}
