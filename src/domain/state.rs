// Domain-level simulation entities and input/snapshot types.

use crate::domain::tuning::vehicle::VehicleTuning;

/// Minimal 2D vector in image-space coordinates (y grows downward on screen).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotates the vector by `degrees` using the image-space convention:
    /// a positive angle rotates counterclockwise in math coordinates, which
    /// reads as clockwise with y pointing down.
    pub fn rotated(self, degrees: f32) -> Self {
        let rad = degrees.to_radians();
        let (sin, cos) = rad.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

/// One tick's worth of driver controls.
///
/// Longitudinal priority is forward > reverse > brake > coast; lateral is
/// left > right > center. The sim keeps only the latest snapshot received
/// between ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverInput {
    pub forward: bool,
    pub reverse: bool,
    pub brake: bool,
    pub left: bool,
    pub right: bool,
}

/// Per-tick vehicle state sent to clients and used for diagnostics.
#[derive(Debug, Clone)]
pub struct VehicleSnapshot {
    pub x: f32,
    pub y: f32,
    pub heading: f32,
    pub velocity: f32,
    pub acceleration: f32,
    pub steer_angle: f32,
    /// Oriented bounding rectangle, same points fed to collision detection.
    pub corners: [Vec2; 4],
}

/// The controllable vehicle: pose plus motion state.
///
/// Pose (position, heading) is mutated only by `step`. Velocity is a vector
/// for the local-frame rotation in the position integration, but only the
/// longitudinal x component ever becomes nonzero in this model.
pub struct Vehicle {
    pub position: Vec2,
    /// Heading in degrees, image-space convention.
    pub heading: f32,
    pub velocity: Vec2,
    pub acceleration: f32,
    /// Accumulated steering deflection in degrees. Unbounded while held;
    /// snaps back to 0 the moment neither steering control is pressed.
    pub steer_angle: f32,

    pub width: f32,
    pub height: f32,
    pub tuning: VehicleTuning,
}

impl Vehicle {
    pub fn new(position: Vec2, heading: f32, width: f32, height: f32) -> Self {
        Self {
            position,
            heading,
            velocity: Vec2::default(),
            acceleration: 0.0,
            steer_angle: 0.0,
            width,
            height,
            tuning: VehicleTuning::default(),
        }
    }
}

impl From<&Vehicle> for VehicleSnapshot {
    fn from(v: &Vehicle) -> Self {
        Self {
            x: v.position.x,
            y: v.position.y,
            heading: v.heading,
            velocity: v.velocity.x,
            acceleration: v.acceleration,
            steer_angle: v.steer_angle,
            corners: v.corners(),
        }
    }
}
