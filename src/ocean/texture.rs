//! Procedural water-normal noise texture.
//!
//! The fragment shader tiles this texture at four scales, so it must wrap
//! without seams. Sampling Perlin noise on a torus (each axis mapped to a
//! circle in 4D) makes both edges meet exactly.

use bevy::{
    asset::RenderAssetUsages,
    image::{Image, ImageAddressMode, ImageFilterMode, ImageSampler, ImageSamplerDescriptor},
    render::render_resource::{Extent3d, TextureDimension, TextureFormat},
};
use noise::{NoiseFn, Perlin};
use std::f64::consts::TAU;

/// Noise feature size relative to the texture; larger = choppier.
const LOOP_RADIUS: f64 = 2.0;

/// Build the tileable noise texture sampled by the ocean shader.
///
/// R and G carry horizontal perturbation centered on 0.5; B is biased
/// upward so the decoded normal keeps a positive vertical component. The
/// shader folds four samples back to signed range.
pub fn water_normal_texture(size: u32, seed: u32) -> Image {
    let red = Perlin::new(seed);
    let green = Perlin::new(seed.wrapping_add(1));
    let blue = Perlin::new(seed.wrapping_add(2));

    let mut texels: Vec<[u8; 4]> = Vec::with_capacity((size * size) as usize);
    for y in 0..size {
        for x in 0..size {
            let u = x as f64 / size as f64 * TAU;
            let v = y as f64 / size as f64 * TAU;
            let p = [
                u.cos() * LOOP_RADIUS,
                u.sin() * LOOP_RADIUS,
                v.cos() * LOOP_RADIUS,
                v.sin() * LOOP_RADIUS,
            ];
            texels.push([
                channel(0.5 + 0.5 * red.get(p) as f32),
                channel(0.5 + 0.5 * green.get(p) as f32),
                channel(0.8 + 0.2 * blue.get(p) as f32),
                255,
            ]);
        }
    }

    let mut image = Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        bytemuck::cast_slice(&texels).to_vec(),
        TextureFormat::Rgba8Unorm,
        RenderAssetUsages::RENDER_WORLD,
    );
    image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        mag_filter: ImageFilterMode::Linear,
        min_filter: ImageFilterMode::Linear,
        ..Default::default()
    });
    image
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}
