// Arcade-style vehicle kinematics.
//
// The motion model is an intentional simplification, not a tire/friction
// simulation: a scalar longitudinal acceleration drives velocity.x, the
// velocity vector is rotated from the vehicle's local frame into world space
// for position integration, and an accumulated steering deflection drives a
// sine-based turn-rate approximation of a bicycle model.

use crate::domain::state::{DriverInput, Vec2, Vehicle};

/// Advances the vehicle by one tick.
///
/// Order matters: longitudinal control, then lateral control, then velocity,
/// position and heading integration. Total over all inputs; never fails.
/// Once the vehicle has coasted to a stop, further no-input ticks are no-ops,
/// so calling this after a crash freeze would be harmless as well.
pub fn step(v: &mut Vehicle, input: &DriverInput) {
    let t = v.tuning;

    // Longitudinal control, mutually exclusive by priority.
    // Sign convention follows the image-space heading: throttling forward
    // drives velocity.x negative.
    if input.forward {
        if v.velocity.x > 0.0 {
            // Still rolling the other way: hard counter-thrust first.
            v.acceleration = -t.counter_throttle;
        } else {
            v.acceleration -= t.throttle_step;
        }
    } else if input.reverse {
        if v.velocity.x < 0.0 {
            v.acceleration = t.counter_throttle;
        } else {
            v.acceleration += t.throttle_step;
        }
    } else if input.brake {
        // Brake always pushes against the current direction of travel.
        if v.velocity.x > 0.0 {
            v.acceleration = -t.brake_step;
        } else {
            v.acceleration = t.brake_step;
        }
    } else if v.velocity.x > t.coast_snap_threshold {
        v.acceleration = -t.coast_step;
    } else if v.velocity.x < 0.0 {
        v.acceleration = t.coast_step;
    } else {
        // Close enough to rest: snap to exactly zero to avoid creep.
        v.acceleration = 0.0;
        v.velocity.x = 0.0;
    }

    // Lateral control. Deflection accumulates while held and snaps straight
    // back to center the moment both keys are released.
    if input.left {
        v.steer_angle -= t.steer_step;
    } else if input.right {
        v.steer_angle += t.steer_step;
    } else {
        v.steer_angle = 0.0;
    }

    // Integrate velocity, clamped to the speed limit.
    v.velocity.x = (v.velocity.x + v.acceleration).clamp(-t.max_speed, t.max_speed);

    // Integrate position: local-frame velocity rotated into world space.
    let world_vel = v.velocity.rotated(-v.heading);
    v.position.x += world_vel.x * t.position_scale;
    v.position.y += world_vel.y * t.position_scale;

    // Integrate heading from the steering-driven turn rate.
    v.heading += turn_rate(v).to_degrees() * t.heading_scale;
}

/// Turn rate from the current steering deflection.
///
/// Known sensitivity: a small nonzero deflection makes sin(steer_angle) tiny
/// and the turn rate huge. That instability is part of the model's handling
/// and is left unguarded.
fn turn_rate(v: &Vehicle) -> f32 {
    if v.steer_angle == 0.0 {
        0.0
    } else {
        v.velocity.x / v.steer_angle.to_radians().sin()
    }
}

impl Vehicle {
    /// Corners of the oriented bounding rectangle for the current pose.
    ///
    /// Winding is top-left, top-right, bottom-right, bottom-left of the
    /// unrotated rectangle, each rotated by `-heading` about the center.
    /// Valid for the pose as of the last `step`; used for both the collision
    /// test and the client-side outline.
    pub fn corners(&self) -> [Vec2; 4] {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        let local = [
            Vec2::new(-hw, -hh),
            Vec2::new(hw, -hh),
            Vec2::new(hw, hh),
            Vec2::new(-hw, hh),
        ];
        local.map(|c| {
            let r = c.rotated(-self.heading);
            Vec2::new(r.x + self.position.x, r.y + self.position.y)
        })
    }
}
