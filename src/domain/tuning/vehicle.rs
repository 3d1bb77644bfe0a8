/// Handling tuning for the controllable vehicle.
///
/// Keep this separate from runtime configuration (tick rates, buffer sizes).
///
/// All rates are per tick, not per second: the integration constants below
/// are tuned for the fixed 30 Hz cadence and are deliberately not rescaled
/// by wall-clock dt. Running the loop at a different tick rate changes how
/// the vehicle handles.

#[derive(Debug, Clone, Copy)]
pub struct VehicleTuning {
    /// Longitudinal speed clamp, both directions.
    pub max_speed: f32,

    /// Acceleration added per tick while throttle is held.
    pub throttle_step: f32,

    /// Acceleration applied when throttling against the current direction
    /// of travel (hard brake-to-reverse transition).
    pub counter_throttle: f32,

    /// Acceleration applied by the brake, always against travel direction.
    pub brake_step: f32,

    /// Deceleration applied while coasting with no controls pressed.
    pub coast_step: f32,

    /// Forward speed below which coasting snaps velocity to exactly zero
    /// instead of decaying asymptotically.
    pub coast_snap_threshold: f32,

    /// Steering deflection accumulated per tick while a steering key is held,
    /// in degrees.
    pub steer_step: f32,

    /// Scale applied to the velocity vector when integrating position.
    pub position_scale: f32,

    /// Scale applied to the turn rate (degrees) when integrating heading.
    pub heading_scale: f32,
}

impl Default for VehicleTuning {
    fn default() -> Self {
        Self {
            max_speed: 5.0,
            throttle_step: 0.5,
            counter_throttle: 1.0,
            brake_step: 0.5,
            coast_step: 0.1,
            coast_snap_threshold: 0.1,
            steer_step: 0.1,
            position_scale: 0.3,
            heading_scale: 0.0001,
        }
    }
}
