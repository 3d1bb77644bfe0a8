use drive_sim::domain::systems::kinematics;
use drive_sim::domain::{DriverInput, Scene, Vec2, Vehicle};

fn start_vehicle() -> Vehicle {
    Scene::default().spawn_vehicle()
}

fn hold(forward: bool, reverse: bool, brake: bool, left: bool, right: bool) -> DriverInput {
    DriverInput {
        forward,
        reverse,
        brake,
        left,
        right,
    }
}

#[test]
fn no_input_from_rest_changes_nothing() {
    let mut v = start_vehicle();
    let coast = DriverInput::default();

    for _ in 0..30 {
        kinematics::step(&mut v, &coast);
        assert_eq!(v.acceleration, 0.0);
        assert_eq!(v.velocity.x, 0.0);
        assert_eq!(v.velocity.y, 0.0);
        assert_eq!(v.position, Vec2::new(250.0, 200.0));
        assert_eq!(v.heading, -90.0);
        assert_eq!(v.steer_angle, 0.0);
    }
}

#[test]
fn coast_down_reaches_exactly_zero() {
    let mut v = start_vehicle();
    v.velocity.x = 5.0;
    let coast = DriverInput::default();

    let mut reached_zero = false;
    for _ in 0..80 {
        let before = v.velocity.x;
        kinematics::step(&mut v, &coast);
        let after = v.velocity.x;

        // Decay never flips the vehicle into sustained reverse motion.
        assert!(after > -1e-3, "overshoot past zero: {after}");
        if before > 0.1 {
            assert!(after < before, "decay should be monotone while rolling");
            assert!((before - after) < 0.11, "decay step should stay at 0.1");
        }
        if after == 0.0 {
            reached_zero = true;
            break;
        }
    }
    assert!(reached_zero, "coast-down should snap to exactly zero");

    // Once stopped, further no-input ticks are no-ops.
    for _ in 0..10 {
        kinematics::step(&mut v, &coast);
        assert_eq!(v.velocity.x, 0.0);
        assert_eq!(v.acceleration, 0.0);
    }
}

#[test]
fn velocity_is_clamped_in_both_directions() {
    let mut v = start_vehicle();
    let forward = hold(true, false, false, false, false);
    for _ in 0..50 {
        kinematics::step(&mut v, &forward);
        assert!(v.velocity.x.abs() <= v.tuning.max_speed);
    }
    assert_eq!(v.velocity.x, -v.tuning.max_speed);

    let mut v = start_vehicle();
    let reverse = hold(false, true, false, false, false);
    for _ in 0..50 {
        kinematics::step(&mut v, &reverse);
        assert!(v.velocity.x.abs() <= v.tuning.max_speed);
    }
    assert_eq!(v.velocity.x, v.tuning.max_speed);
}

#[test]
fn brake_opposes_travel_direction() {
    let mut v = start_vehicle();
    v.velocity.x = 5.0;
    kinematics::step(&mut v, &hold(false, false, true, false, false));
    assert_eq!(v.acceleration, -0.5);
    assert!(v.velocity.x < 5.0);

    let mut v = start_vehicle();
    v.velocity.x = -5.0;
    kinematics::step(&mut v, &hold(false, false, true, false, false));
    assert_eq!(v.acceleration, 0.5);
    assert!(v.velocity.x > -5.0);
}

#[test]
fn steering_accumulates_while_held() {
    let mut v = start_vehicle();
    let right = hold(false, false, false, false, true);
    for _ in 0..5 {
        kinematics::step(&mut v, &right);
    }
    assert!((v.steer_angle - 0.5).abs() < 1e-5);

    let left = hold(false, false, false, true, false);
    for _ in 0..8 {
        kinematics::step(&mut v, &left);
    }
    assert!((v.steer_angle - (0.5 - 0.8)).abs() < 1e-5);
}

#[test]
fn releasing_steering_recenters_immediately() {
    let mut v = start_vehicle();
    let left = hold(false, false, false, true, false);
    for _ in 0..42 {
        kinematics::step(&mut v, &left);
    }
    assert!(v.steer_angle != 0.0);

    kinematics::step(&mut v, &DriverInput::default());
    assert_eq!(v.steer_angle, 0.0);
}

#[test]
fn corners_at_start_pose_form_upright_rectangle() {
    // At the -90 degree start heading the 100x50 rectangle reads as 50 wide
    // and 100 tall on screen, centered on the start position.
    let v = start_vehicle();
    let corners = v.corners();

    let expected = [
        Vec2::new(275.0, 150.0),
        Vec2::new(275.0, 250.0),
        Vec2::new(225.0, 250.0),
        Vec2::new(225.0, 150.0),
    ];
    for (got, want) in corners.iter().zip(expected.iter()) {
        assert!(
            (got.x - want.x).abs() < 1e-3 && (got.y - want.y).abs() < 1e-3,
            "corner {got:?} != {want:?}"
        );
    }
}

#[test]
fn forward_from_start_heading_moves_up_screen() {
    let mut v = start_vehicle();
    let forward = hold(true, false, false, false, false);
    for _ in 0..20 {
        kinematics::step(&mut v, &forward);
    }
    assert!(v.position.y < 200.0, "forward at -90 heading should climb");
    // No steering input, so the lateral drift is only trig rounding.
    assert!((v.position.x - 250.0).abs() < 0.1);
}
