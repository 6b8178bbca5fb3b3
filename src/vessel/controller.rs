//! Vessel kinematics and chase-camera derivation.
//!
//! One fixed control step per displayed frame: thrust and friction are
//! per-frame constants rather than dt-scaled, which keeps the feel directly
//! tunable. `elapsed` seconds only drive the idle rocking, which must stay
//! continuous across frames.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

/// Pressed-state of the four steering keys for one frame. Anything not
/// reported is "not pressed".
#[derive(Clone, Copy, Debug, Default)]
pub struct InputSnapshot {
    pub forward: bool,
    pub astern: bool,
    pub port: bool,
    pub starboard: bool,
}

/// Tunable constants for the vessel and its camera.
#[derive(Clone, Copy, Debug)]
pub struct VesselTuning {
    /// Thrust added per frame while the forward key is held.
    pub accel: f32,
    /// Per-frame multiplicative speed decay.
    pub linear_friction: f32,
    pub max_speed: f32,
    /// Turning is dead below this forward speed.
    pub min_turn_speed: f32,
    /// Yaw-rate change per frame while a turn key is held.
    pub rot_accel: f32,
    /// Per-frame multiplicative yaw-rate decay when no turn key is held.
    pub rot_friction: f32,
    pub max_yaw_rate: f32,
    /// Roll added per unit of yaw rate while turning.
    pub bank_factor: f32,
    /// The hull sits at this fixed height; there is no heave.
    pub deck_height: f32,
    /// Camera offset in the vessel's local frame (above and behind).
    pub camera_offset: Vec3,
    /// One-pole low-pass factor for the camera position.
    pub camera_smoothing: f32,
    /// The look-at target is the vessel position lifted by this much.
    pub look_at_lift: f32,
}

impl Default for VesselTuning {
    fn default() -> Self {
        Self {
            accel: 0.02,
            linear_friction: 0.98,
            max_speed: 4.0,
            min_turn_speed: 0.1,
            rot_accel: 0.0005,
            rot_friction: 0.95,
            max_yaw_rate: 0.005,
            bank_factor: 1.5,
            deck_height: 5.0,
            camera_offset: Vec3::new(0.0, 100.0, 250.0),
            camera_smoothing: 0.1,
            look_at_lift: 30.0,
        }
    }
}

/// Smoothed camera position: the only cross-frame camera state.
#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    pub position: Vec3,
    pub smoothing: f32,
}

impl CameraRig {
    pub fn new(position: Vec3, smoothing: f32) -> Self {
        Self {
            position,
            smoothing,
        }
    }

    /// One-pole low-pass step toward `target`; returns the new position.
    /// Filters out the vessel's own rocking so the camera does not inherit
    /// the oscillation.
    pub fn follow(&mut self, target: Vec3) -> Vec3 {
        self.position += (target - self.position) * self.smoothing;
        self.position
    }
}

/// Per-frame output of [`VesselController::advance`].
#[derive(Clone, Copy, Debug)]
pub struct VesselFrame {
    pub vessel: Transform,
    pub camera_position: Vec3,
    pub camera_look_at: Vec3,
}

/// Integrates key input into the vessel pose and derives the chase camera.
///
/// Mutated exactly once per frame by the drive system; the renderer only
/// reads the resulting transforms.
#[derive(Resource, Clone, Copy, Debug)]
pub struct VesselController {
    pub speed: f32,
    pub yaw_rate: f32,
    pub yaw: f32,
    pub position: Vec3,
    pub camera: CameraRig,
    pub tuning: VesselTuning,
}

impl Default for VesselController {
    fn default() -> Self {
        let tuning = VesselTuning::default();
        Self {
            speed: 0.0,
            yaw_rate: 0.0,
            yaw: -FRAC_PI_2,
            position: Vec3::ZERO,
            camera: CameraRig::new(Vec3::new(30.0, 30.0, 100.0), tuning.camera_smoothing),
            tuning,
        }
    }
}

impl VesselController {
    /// Advance one control step.
    ///
    /// Friction is applied before thrust, so a single step from rest with
    /// the forward key held yields exactly `accel` of speed and the
    /// friction-equilibrium speed is `accel / (1 - linear_friction)`.
    pub fn advance(&mut self, elapsed: f32, input: InputSnapshot) -> VesselFrame {
        let tuning = self.tuning;

        self.speed *= tuning.linear_friction;
        if input.forward {
            self.speed += tuning.accel;
        }
        if input.astern {
            // Brake only: the clamp below floors at zero, no reverse.
            self.speed -= tuning.accel;
        }
        self.speed = self.speed.clamp(0.0, tuning.max_speed);

        let underway = self.speed > tuning.min_turn_speed;
        if input.port && underway {
            self.yaw_rate += tuning.rot_accel;
        } else if input.starboard && underway {
            self.yaw_rate -= tuning.rot_accel;
        } else {
            self.yaw_rate *= tuning.rot_friction;
        }
        self.yaw_rate = self.yaw_rate.clamp(-tuning.max_yaw_rate, tuning.max_yaw_rate);
        self.yaw += self.yaw_rate;

        // Idle rock: two sinusoids per axis at incommensurate rates, so the
        // motion never visibly loops. Banking tilts into the turn.
        let pitch = (elapsed * 1.2).cos() * 0.035 + (elapsed * 1.8).cos() * 0.045;
        let roll = (elapsed * 1.0).sin() * 0.035
            + (elapsed * 2.2).sin() * 0.045
            + self.yaw_rate * tuning.bank_factor;
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, pitch, roll);

        self.position.y = tuning.deck_height;
        self.position += rotation * Vec3::NEG_Z * self.speed;

        let camera_target = self.position + rotation * tuning.camera_offset;
        let camera_position = self.camera.follow(camera_target);

        VesselFrame {
            vessel: Transform::from_translation(self.position).with_rotation(rotation),
            camera_position,
            camera_look_at: self.position + Vec3::Y * tuning.look_at_lift,
        }
    }
}
