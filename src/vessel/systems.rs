//! Bevy-facing side of the vessel: spawning, asset fallback, and the
//! per-frame drive system that feeds the controller.

use bevy::{asset::LoadState, gltf::GltfAssetLabel, prelude::*};
use std::f32::consts::FRAC_PI_2;

use super::controller::{InputSnapshot, VesselController};

/// Marker for the vessel root entity the controller steers.
#[derive(Component)]
pub struct Vessel;

/// Marker for the loaded model child under the vessel root.
#[derive(Component)]
pub struct VesselModel;

/// Marker for the chase camera.
#[derive(Component)]
pub struct ChaseCamera;

/// Scale applied to the loaded ship model.
const MODEL_SCALE: f32 = 8.0;

impl InputSnapshot {
    /// Snapshot the steering keys. Missing entries read as released.
    pub fn from_keyboard(keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            forward: keyboard.pressed(KeyCode::KeyW),
            astern: keyboard.pressed(KeyCode::KeyS),
            port: keyboard.pressed(KeyCode::KeyA),
            starboard: keyboard.pressed(KeyCode::KeyD),
        }
    }
}

/// Spawn the vessel root with the ship model as a child.
pub fn spawn_vessel(mut commands: Commands, asset_server: Res<AssetServer>) {
    let scene: Handle<Scene> =
        asset_server.load(GltfAssetLabel::Scene(0).from_asset("models/ship.glb"));

    commands
        .spawn((
            Vessel,
            Transform::from_rotation(Quat::from_rotation_y(-FRAC_PI_2)),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                VesselModel,
                SceneRoot(scene),
                Transform::from_scale(Vec3::splat(MODEL_SCALE)),
            ));
        });
}

/// If the ship model fails to load, swap in a box hull so the scene always
/// has a renderable vessel. The frame loop never halts on a missing asset.
pub fn substitute_fallback_hull(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    models: Query<(Entity, &Parent, &SceneRoot), With<VesselModel>>,
) {
    for (entity, parent, scene) in &models {
        let LoadState::Failed(error) = asset_server.load_state(scene.0.id()) else {
            continue;
        };
        warn!("vessel model failed to load ({error}); substituting box hull");

        commands.entity(entity).despawn_recursive();
        let hull = commands
            .spawn((
                Mesh3d(meshes.add(Cuboid::new(20.0, 5.0, 50.0))),
                MeshMaterial3d(materials.add(Color::srgb_u8(0x8b, 0x45, 0x13))),
                Transform::from_xyz(0.0, 2.5, 0.0),
            ))
            .id();
        commands.entity(parent.get()).add_child(hull);
    }
}

/// Advance the controller with this frame's key state and write the
/// resulting vessel and camera transforms.
pub fn drive_vessel(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut controller: ResMut<VesselController>,
    mut vessel: Query<&mut Transform, (With<Vessel>, Without<ChaseCamera>)>,
    mut camera: Query<&mut Transform, (With<ChaseCamera>, Without<Vessel>)>,
) {
    let input = InputSnapshot::from_keyboard(&keyboard);
    let frame = controller.advance(time.elapsed_secs(), input);

    if let Ok(mut transform) = vessel.get_single_mut() {
        *transform = frame.vessel;
    }
    if let Ok(mut transform) = camera.get_single_mut() {
        *transform = Transform::from_translation(frame.camera_position)
            .looking_at(frame.camera_look_at, Vec3::Y);
    }
}
