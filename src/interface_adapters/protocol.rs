// Wire protocol DTOs and conversions for client-facing messages.

use crate::domain::{DriverInput, Obstacle, Scene, Vec2, VehicleSnapshot};
use crate::use_cases::{SimState, SimUpdate};
use serde::{Deserialize, Serialize};

/// Messages the server sends to connected clients over the WebSocket.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    // Static scene geometry, sent once after connect so the client can draw
    // the background and parked vehicles.
    Scene(SceneDto),
    // Snapshot of the vehicle for a given tick.
    SimUpdate(SimUpdateDto),
    // Lifecycle transitions (running, crashed).
    SimState(SimStateDto),
}

/// Messages the client sends to the server over the WebSocket.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    // Per-tick driver controls.
    Input(DriverInputDto),
    // Restart after a crash.
    Reset,
}

/// Driver controls payload; every flag defaults to released.
#[derive(Debug, Clone, Deserialize)]
pub struct DriverInputDto {
    #[serde(default)]
    pub forward: bool,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub brake: bool,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
}

impl From<DriverInputDto> for DriverInput {
    fn from(input: DriverInputDto) -> Self {
        Self {
            forward: input.forward,
            reverse: input.reverse,
            brake: input.brake,
            left: input.left,
            right: input.right,
        }
    }
}

/// Static scene geometry for client-side rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SceneDto {
    pub world_width: f32,
    pub world_height: f32,
    pub vehicle_width: f32,
    pub vehicle_height: f32,
    pub obstacles: Vec<ObstacleDto>,
}

impl From<&Scene> for SceneDto {
    fn from(scene: &Scene) -> Self {
        Self {
            world_width: scene.world_width,
            world_height: scene.world_height,
            vehicle_width: scene.vehicle_width,
            vehicle_height: scene.vehicle_height,
            obstacles: scene.obstacles.iter().map(ObstacleDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ObstacleDto {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&Obstacle> for ObstacleDto {
    fn from(o: &Obstacle) -> Self {
        Self {
            x: o.x,
            y: o.y,
            width: o.width,
            height: o.height,
        }
    }
}

/// Snapshot of the sim sent to clients on each tick.
#[derive(Debug, Clone, Serialize)]
pub struct SimUpdateDto {
    pub tick: u64,
    pub vehicle: VehicleStateDto,
    pub collided: bool,
}

impl From<SimUpdate> for SimUpdateDto {
    fn from(update: SimUpdate) -> Self {
        Self {
            tick: update.tick,
            vehicle: VehicleStateDto::from(&update.vehicle),
            collided: update.collided,
        }
    }
}

/// Flattened vehicle state for wire transmission.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleStateDto {
    pub x: f32,
    pub y: f32,
    pub heading: f32,
    pub velocity: f32,
    pub acceleration: f32,
    pub steer_angle: f32,
    // Oriented rectangle corners for the client-side outline overlay.
    pub corners: [[f32; 2]; 4],
}

impl From<&VehicleSnapshot> for VehicleStateDto {
    fn from(v: &VehicleSnapshot) -> Self {
        Self {
            x: v.x,
            y: v.y,
            heading: v.heading,
            velocity: v.velocity,
            acceleration: v.acceleration,
            steer_angle: v.steer_angle,
            corners: v.corners.map(|Vec2 { x, y }| [x, y]),
        }
    }
}

/// Simulation lifecycle state sent to clients for UI flow.
#[derive(Debug, Clone, Serialize)]
pub enum SimStateDto {
    Running,
    Crashed,
}

impl From<SimState> for SimStateDto {
    fn from(state: SimState) -> Self {
        match state {
            SimState::Running => SimStateDto::Running,
            SimState::Crashed => SimStateDto::Crashed,
        }
    }
}
