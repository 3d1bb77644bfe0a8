// Domain layer: core simulation types and rules.

pub mod scene;
pub mod state;
pub mod systems;
pub mod tuning;

pub use scene::{Obstacle, Scene};
pub use state::{DriverInput, Vec2, Vehicle, VehicleSnapshot};
