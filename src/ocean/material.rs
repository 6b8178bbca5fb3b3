//! Ocean surface material.
//!
//! The shading program is declared as data: the uniform block, the noise
//! texture binding, and the two WGSL entry points live on this asset and
//! bevy owns compilation and binding. The app only ever rewrites the
//! uniform values each frame.

use bevy::{
    pbr::{MaterialPipeline, MaterialPipelineKey},
    prelude::*,
    render::{
        mesh::MeshVertexBufferLayoutRef,
        render_resource::{
            AsBindGroup, PolygonMode, RenderPipelineDescriptor, ShaderRef, ShaderType,
            SpecializedMeshPipelineError,
        },
    },
};

use crate::settings::{SkySettings, WaterSettings};

/// Uniform block for the ocean shader. Layout must match the `OceanUniform`
/// struct in `assets/shaders/ocean.wgsl`: six vec4s then four scalars.
#[derive(Clone, Copy, Debug, ShaderType)]
pub struct OceanUniform {
    /// Wave A packed as (direction.x, direction.y, steepness, wavelength).
    pub wave_a: Vec4,
    pub wave_b: Vec4,
    pub wave_c: Vec4,
    /// Unit vector toward the sun; w unused.
    pub sun_direction: Vec4,
    /// Sunlight color; w unused.
    pub sun_color: Vec4,
    /// Scatter tint in rgb, surface alpha in w.
    pub water_color: Vec4,
    /// Seconds since startup.
    pub time: f32,
    /// Noise-sampling frequency multiplier.
    pub size: f32,
    /// Reflection distortion magnitude.
    pub distortion_scale: f32,
    pub _pad: f32,
}

impl OceanUniform {
    /// Snapshot the live tuning state into shader-ready values.
    pub fn from_settings(water: &WaterSettings, sky: &SkySettings, time: f32) -> Self {
        Self {
            wave_a: water.waves[0].packed(),
            wave_b: water.waves[1].packed(),
            wave_c: water.waves[2].packed(),
            sun_direction: sky.sun_direction().extend(0.0),
            sun_color: water.sun_color.extend(0.0),
            water_color: water.water_color.extend(water.alpha),
            time,
            size: water.size,
            distortion_scale: water.distortion_scale,
            _pad: 0.0,
        }
    }
}

/// The water surface material: Gerstner displacement in the vertex stage,
/// noise-perturbed normals with a Schlick Fresnel blend in the fragment
/// stage.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
#[bind_group_data(OceanMaterialKey)]
pub struct OceanMaterial {
    #[uniform(0)]
    pub uniform: OceanUniform,
    /// Tileable normal-like noise, repeat-addressed.
    #[texture(1)]
    #[sampler(2)]
    pub normal_texture: Handle<Image>,
    /// Debug toggle; flows into the pipeline key so flipping it
    /// respecializes the pipeline.
    pub wireframe: bool,
}

impl OceanMaterial {
    pub fn new(water: &WaterSettings, sky: &SkySettings, normal_texture: Handle<Image>) -> Self {
        Self {
            uniform: OceanUniform::from_settings(water, sky, 0.0),
            normal_texture,
            wireframe: water.wireframe,
        }
    }
}

/// Pipeline key data for [`OceanMaterial`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OceanMaterialKey {
    wireframe: bool,
}

impl From<&OceanMaterial> for OceanMaterialKey {
    fn from(material: &OceanMaterial) -> Self {
        Self {
            wireframe: material.wireframe,
        }
    }
}

impl Material for OceanMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/ocean.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/ocean.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        if key.bind_group_data.wireframe {
            descriptor.primitive.polygon_mode = PolygonMode::Line;
        }
        Ok(())
    }
}
