//! Ocean module - Gerstner wave surface and its shading material.
//!
//! The plugin owns the surface mesh, the material asset, the generated
//! noise texture, and the sun light. Per frame it snapshots the tuning
//! resources plus the clock into the material uniform; the GPU does the
//! rest.

mod material;
mod texture;
pub mod waves;

use bevy::{
    pbr::{NotShadowCaster, NotShadowReceiver},
    prelude::*,
};

pub use material::{OceanMaterial, OceanMaterialKey, OceanUniform};
pub use texture::water_normal_texture;

use crate::settings::{SkySettings, WaterSettings};

/// Side length of the ocean plane in world units.
pub const OCEAN_EXTENT: f32 = 1_048_576.0;
/// Plane subdivisions: 511 splits give a 512 x 512 quad grid, the
/// tessellation the vertex displacement is evaluated at.
pub const OCEAN_SUBDIVISIONS: u32 = 511;
/// Side length of the generated noise texture in texels.
const NOISE_TEXTURE_SIZE: u32 = 512;
/// Perlin seed for the noise texture; any value works, this one is fixed so
/// the surface looks identical across runs.
const NOISE_SEED: u32 = 7;

/// Plugin that spawns the water surface and keeps its shading inputs live.
pub struct OceanPlugin;

impl Plugin for OceanPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<OceanMaterial>::default())
            .init_resource::<WaterSettings>()
            .init_resource::<SkySettings>()
            .add_systems(Startup, spawn_ocean)
            .add_systems(Update, (update_ocean_material, update_sun));
    }
}

/// Handle to the single live ocean material, so the update systems can
/// rewrite its uniform in place.
#[derive(Resource)]
pub struct OceanMaterialHandle(pub Handle<OceanMaterial>);

/// Marker for the sun's directional light.
#[derive(Component)]
pub struct Sun;

fn spawn_ocean(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<OceanMaterial>>,
    mut images: ResMut<Assets<Image>>,
    water: Res<WaterSettings>,
    sky: Res<SkySettings>,
) {
    let normals = images.add(water_normal_texture(NOISE_TEXTURE_SIZE, NOISE_SEED));
    let material = materials.add(OceanMaterial::new(&water, &sky, normals));
    commands.insert_resource(OceanMaterialHandle(material.clone()));

    commands.spawn((
        Mesh3d(meshes.add(
            Plane3d::default()
                .mesh()
                .size(OCEAN_EXTENT, OCEAN_EXTENT)
                .subdivisions(OCEAN_SUBDIVISIONS),
        )),
        MeshMaterial3d(material),
        // The surface shades itself; keeping it out of the shadow passes
        // avoids a 1M-unit shadow caster.
        NotShadowCaster,
        NotShadowReceiver,
    ));

    commands.spawn((
        Sun,
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::default().looking_to(-sky.sun_direction(), Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
    });
    commands.insert_resource(ClearColor(Color::srgb(0.53, 0.74, 0.92)));

    info!(
        "ocean surface spawned: {OCEAN_EXTENT} x {OCEAN_EXTENT} units, \
         {OCEAN_SUBDIVISIONS} subdivisions"
    );
}

/// Refresh the material uniform from the clock and the tuning resources.
/// Runs every frame: time always advances, and folding the settings into
/// the same write keeps panel edits a single code path.
fn update_ocean_material(
    time: Res<Time>,
    water: Res<WaterSettings>,
    sky: Res<SkySettings>,
    handle: Res<OceanMaterialHandle>,
    mut materials: ResMut<Assets<OceanMaterial>>,
) {
    let Some(material) = materials.get_mut(&handle.0) else {
        return;
    };
    material.uniform = OceanUniform::from_settings(&water, &sky, time.elapsed_secs());
    material.wireframe = water.wireframe;
}

/// Re-aim the directional light when the sun placement changes.
fn update_sun(sky: Res<SkySettings>, mut suns: Query<&mut Transform, With<Sun>>) {
    if !sky.is_changed() {
        return;
    }
    for mut transform in &mut suns {
        *transform = Transform::default().looking_to(-sky.sun_direction(), Vec3::Y);
    }
}
