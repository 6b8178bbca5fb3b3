//! Regatta - Main Entry
//!
//! An animated Gerstner-wave ocean with a keyboard-steered vessel and a
//! smoothed chase camera.

use bevy::prelude::*;
use regatta::ocean::OceanPlugin;
use regatta::ui::TuningPlugin;
use regatta::vessel::{ChaseCamera, VesselController, VesselPlugin};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Regatta".into(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(OceanPlugin)
        .add_plugins(VesselPlugin)
        .add_plugins(TuningPlugin)
        .add_systems(Startup, setup_camera)
        .add_systems(Update, log_frame)
        .run();
}

/// Set up the chase camera
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        ChaseCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 55.0_f32.to_radians(),
            near: 1.0,
            far: 20_000.0,
            ..default()
        }),
        Transform::from_xyz(30.0, 30.0, 100.0),
    ));
    commands.insert_resource(FrameCounter(0));
}

/// Frame counter for logging
#[derive(Resource)]
struct FrameCounter(u32);

/// Log a heartbeat with the vessel state every N frames
fn log_frame(mut counter: ResMut<FrameCounter>, controller: Res<VesselController>) {
    counter.0 += 1;
    if counter.0 % 600 == 0 {
        info!(
            "Frame {}: speed {:.2}, position ({:.1}, {:.1})",
            counter.0, controller.speed, controller.position.x, controller.position.z
        );
    }
}
