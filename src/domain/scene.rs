// Static session scene: world extent, vehicle start pose, parked obstacles.
// Built once at startup and held for the whole session.

use crate::domain::state::{Vec2, Vehicle};

/// A parked vehicle, modelled as an axis-aligned rectangle. Immutable for
/// the session.
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Corner polygon in the same winding the vehicle rectangle uses.
    pub fn polygon(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y),
            Vec2::new(self.x + self.width, self.y + self.height),
            Vec2::new(self.x, self.y + self.height),
        ]
    }
}

/// Session constants: world size, vehicle start pose and dimensions, and the
/// parked obstacles.
#[derive(Debug, Clone)]
pub struct Scene {
    pub world_width: f32,
    pub world_height: f32,
    pub vehicle_start: Vec2,
    pub vehicle_heading: f32,
    pub vehicle_width: f32,
    pub vehicle_height: f32,
    pub obstacles: Vec<Obstacle>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            world_width: 400.0,
            world_height: 400.0,
            vehicle_start: Vec2::new(250.0, 200.0),
            vehicle_heading: -90.0,
            vehicle_width: 100.0,
            vehicle_height: 50.0,
            obstacles: vec![
                Obstacle::new(30.0, 40.0, 50.0, 100.0),
                Obstacle::new(30.0, 270.0, 50.0, 100.0),
            ],
        }
    }
}

impl Scene {
    /// Spawns the controllable vehicle at the scene's start pose.
    pub fn spawn_vehicle(&self) -> Vehicle {
        Vehicle::new(
            self.vehicle_start,
            self.vehicle_heading,
            self.vehicle_width,
            self.vehicle_height,
        )
    }

    /// Obstacle polygons, precomputed once per session for the collision test.
    pub fn obstacle_polygons(&self) -> Vec<[Vec2; 4]> {
        self.obstacles.iter().map(Obstacle::polygon).collect()
    }
}
