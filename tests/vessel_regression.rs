//! Vessel Controller Regression Tests
//!
//! These tests pin the integration behavior of the vessel controller: the
//! thrust/friction equilibrium, the geometric yaw-rate decay, and the
//! chase-camera smoothing. All use the default tuning so a constant change
//! shows up here.
//!
//! # Running tests
//! ```bash
//! cargo test vessel_regression
//! ```

use bevy::math::Vec3;
use regatta::vessel::{InputSnapshot, VesselController};

// ==================== HELPER FUNCTIONS ====================

/// Key state with only the forward key held.
fn forward_only() -> InputSnapshot {
    InputSnapshot {
        forward: true,
        ..Default::default()
    }
}

/// Key state with forward and port held (accelerate while turning left).
fn forward_and_port() -> InputSnapshot {
    InputSnapshot {
        forward: true,
        port: true,
        ..Default::default()
    }
}

/// Advance `frames` steps with the given key state, stepping elapsed time
/// as if running at 60 fps.
fn run_frames(
    controller: &mut VesselController,
    input: InputSnapshot,
    frames: u32,
    start_elapsed: f32,
) -> f32 {
    let mut elapsed = start_elapsed;
    for _ in 0..frames {
        elapsed += 1.0 / 60.0;
        controller.advance(elapsed, input);
    }
    elapsed
}

// ==================== TESTS ====================

#[test]
fn test_single_step_from_rest() {
    let mut controller = VesselController::default();
    let before = controller.position;

    let frame = controller.advance(0.0, forward_only());

    // Friction on zero speed is zero, so one step yields exactly one unit
    // of thrust.
    assert_eq!(controller.speed, controller.tuning.accel);

    // The position moved by speed along the vessel's forward axis.
    let forward = frame.vessel.rotation * Vec3::NEG_Z;
    let delta = controller.position - before - Vec3::Y * controller.tuning.deck_height;
    assert!(
        (delta - forward * controller.tuning.accel).length() < 1e-6,
        "position delta {delta:?} should be speed along forward {forward:?}"
    );

    // No turn key: heading unchanged.
    assert_eq!(controller.yaw_rate, 0.0);
}

#[test]
fn test_forward_speed_rises_monotonically_to_equilibrium() {
    let mut controller = VesselController::default();
    let tuning = controller.tuning;
    let equilibrium = tuning.accel / (1.0 - tuning.linear_friction);

    let mut previous = 0.0;
    let mut elapsed = 0.0;
    for _ in 0..2000 {
        elapsed += 1.0 / 60.0;
        controller.advance(elapsed, forward_only());
        assert!(
            controller.speed >= previous - 1e-6,
            "speed must not dip on the way to equilibrium: {} < {}",
            controller.speed,
            previous
        );
        assert!(
            controller.speed <= equilibrium + 1e-4,
            "speed {} overshot equilibrium {}",
            controller.speed,
            equilibrium
        );
        previous = controller.speed;
    }

    assert!(
        (controller.speed - equilibrium).abs() < 1e-3,
        "after 2000 frames speed {} should sit at equilibrium {}",
        controller.speed,
        equilibrium
    );
}

#[test]
fn test_yaw_rate_decays_geometrically_after_release() {
    let mut controller = VesselController::default();

    // Get underway, then wind up the yaw rate.
    let elapsed = run_frames(&mut controller, forward_only(), 120, 0.0);
    let elapsed = run_frames(&mut controller, forward_and_port(), 30, elapsed);
    let initial = controller.yaw_rate;
    assert!(initial > 0.0, "turn input should have built up yaw rate");

    // Release everything: pure exponential decay, frame by frame.
    let mut expected = initial;
    let mut elapsed = elapsed;
    for _ in 0..30 {
        elapsed += 1.0 / 60.0;
        controller.advance(elapsed, InputSnapshot::default());
        expected *= controller.tuning.rot_friction;
        assert!(
            (controller.yaw_rate - expected).abs() <= expected.abs() * 1e-4 + 1e-9,
            "yaw rate {} deviates from geometric decay {}",
            controller.yaw_rate,
            expected
        );
    }
    assert!(controller.yaw_rate < initial * 0.25);
}

#[test]
fn test_turning_requires_minimum_speed() {
    let mut controller = VesselController::default();
    let port_only = InputSnapshot {
        port: true,
        ..Default::default()
    };

    // From rest the rudder is dead.
    run_frames(&mut controller, port_only, 60, 0.0);
    assert_eq!(controller.yaw_rate, 0.0, "turning must be gated on speed");

    // Underway it bites.
    let elapsed = run_frames(&mut controller, forward_only(), 120, 1.0);
    assert!(controller.speed > controller.tuning.min_turn_speed);
    run_frames(&mut controller, forward_and_port(), 60, elapsed);
    assert!(controller.yaw_rate > 0.0);
}

#[test]
fn test_yaw_rate_clamped() {
    let mut controller = VesselController::default();
    let elapsed = run_frames(&mut controller, forward_only(), 200, 0.0);
    run_frames(&mut controller, forward_and_port(), 500, elapsed);
    assert!(
        controller.yaw_rate <= controller.tuning.max_yaw_rate + 1e-9,
        "yaw rate {} exceeded clamp {}",
        controller.yaw_rate,
        controller.tuning.max_yaw_rate
    );
}

#[test]
fn test_astern_brakes_but_never_reverses() {
    let mut controller = VesselController::default();
    let astern_only = InputSnapshot {
        astern: true,
        ..Default::default()
    };

    // Braking from rest does nothing.
    run_frames(&mut controller, astern_only, 30, 0.0);
    assert_eq!(controller.speed, 0.0, "astern from rest must hold at zero");

    // Braking while underway sheds speed faster than coasting, and still
    // bottoms out at zero.
    let elapsed = run_frames(&mut controller, forward_only(), 200, 1.0);
    assert!(controller.speed > 0.5);
    run_frames(&mut controller, astern_only, 600, elapsed);
    assert_eq!(controller.speed, 0.0, "sustained braking must reach zero");
}

#[test]
fn test_speed_clamped_at_max() {
    let mut controller = VesselController::default();
    controller.speed = 10.0; // force an out-of-range state
    controller.advance(0.0, forward_only());
    assert!(
        controller.speed <= controller.tuning.max_speed,
        "speed {} exceeded clamp {}",
        controller.speed,
        controller.tuning.max_speed
    );
}

#[test]
fn test_camera_smoothing_filters_target_jumps() {
    let mut controller = VesselController::default();
    controller.camera.position = Vec3::ZERO;
    controller.camera.smoothing = 0.1;

    let frame = controller.advance(0.0, InputSnapshot::default());

    // One step covers exactly a tenth of the gap to the derived target.
    let target = controller.position + frame.vessel.rotation * controller.tuning.camera_offset;
    let expected = target * 0.1;
    assert!(
        (frame.camera_position - expected).length() < 1e-4,
        "camera {:?} should be a tenth of the way to {:?}",
        frame.camera_position,
        target
    );

    // The look-at target is the vessel lifted by a fixed amount.
    assert!(
        (frame.camera_look_at
            - (controller.position + Vec3::Y * controller.tuning.look_at_lift))
            .length()
            < 1e-6
    );
}

#[test]
fn test_deck_height_is_fixed() {
    let mut controller = VesselController::default();
    let mut elapsed = run_frames(&mut controller, forward_only(), 300, 0.0);
    for _ in 0..60 {
        elapsed += 1.0 / 60.0;
        let frame = controller.advance(elapsed, forward_only());
        // The hull pitches while driving, so the integrated y drifts within
        // a frame, but each step re-seats the deck before integrating.
        assert!(
            (frame.vessel.translation.y - controller.tuning.deck_height).abs()
                < controller.tuning.max_speed,
            "vessel left the water line: y = {}",
            frame.vessel.translation.y
        );
    }
}
