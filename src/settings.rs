//! Live tuning state for the water surface and the sun.
//!
//! These resources are the single source of truth for everything the tuning
//! panel can touch. The ocean systems re-read them every frame and rewrite
//! the material uniform, so edits take effect on the next draw. Nothing here
//! is persisted; defaults come back on restart.

use bevy::prelude::*;

use crate::ocean::waves::WaveComponent;

/// Water surface configuration.
///
/// Value ranges are enforced by the tuning panel's sliders, not here: the
/// wave math will happily produce degenerate output for a non-positive
/// wavelength, so the slider lower bound is the guard.
#[derive(Resource, Clone)]
pub struct WaterSettings {
    /// The three wave components, in decreasing wavelength.
    pub waves: [WaveComponent; 3],
    /// Reflection distortion magnitude.
    pub distortion_scale: f32,
    /// Noise-sampling frequency multiplier.
    pub size: f32,
    /// Output alpha of the surface.
    pub alpha: f32,
    /// Scatter tint blended in at non-grazing angles.
    pub water_color: Vec3,
    /// Sunlight color for the specular and diffuse terms.
    pub sun_color: Vec3,
    /// Debug toggle: draw the displaced surface as lines. Rendering mode
    /// only, no effect on the wave model.
    pub wireframe: bool,
}

impl Default for WaterSettings {
    fn default() -> Self {
        Self {
            waves: [
                WaveComponent::new(0.0, 0.4, 60.0),
                WaveComponent::new(30.0, 0.4, 30.0),
                WaveComponent::new(60.0, 0.4, 15.0),
            ],
            distortion_scale: 8.0,
            size: 1.0,
            alpha: 1.0,
            water_color: Vec3::new(0.0, 0.118, 0.059),
            sun_color: Vec3::ONE,
            wireframe: false,
        }
    }
}

/// Sun placement in the sky, shared by the directional light and the water
/// shader's reflection environment.
#[derive(Resource, Clone)]
pub struct SkySettings {
    /// Degrees above the horizon.
    pub elevation_deg: f32,
    /// Degrees around the vertical axis.
    pub azimuth_deg: f32,
}

impl Default for SkySettings {
    fn default() -> Self {
        Self {
            elevation_deg: 2.0,
            azimuth_deg: 180.0,
        }
    }
}

impl SkySettings {
    /// Unit vector pointing from the origin toward the sun, from spherical
    /// coordinates with the polar angle measured down from +Y.
    pub fn sun_direction(&self) -> Vec3 {
        let phi = (90.0 - self.elevation_deg).to_radians();
        let theta = self.azimuth_deg.to_radians();
        Vec3::new(
            phi.sin() * theta.sin(),
            phi.cos(),
            phi.sin() * theta.cos(),
        )
    }
}
