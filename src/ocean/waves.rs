//! Closed-form Gerstner wave math.
//!
//! This is the CPU reference for the displacement the vertex shader applies
//! on the GPU. Both sides must agree on the phase convention:
//! `f = k * (d . p - c * t)` with `k = 2PI / wavelength` and deep-water
//! phase speed `c = sqrt(g / k)`.

use bevy::prelude::*;
use std::f32::consts::TAU;

/// Gravitational acceleration used by the dispersion relation.
pub const GRAVITY: f32 = 9.8;

/// Reflectance at normal incidence for the water surface.
pub const RF0: f32 = 0.3;

/// One additive trochoidal wave component.
///
/// Amplitude is not stored: it is `steepness / k`, so steepness caps crest
/// sharpness independently of wavelength. Steepness values whose summed
/// amplitudes fold the surface produce self-intersecting geometry; that is
/// an accepted visual artifact, not validated here.
#[derive(Clone, Copy, Debug)]
pub struct WaveComponent {
    /// Travel direction in degrees, converted to a unit vector by `direction()`.
    pub direction_deg: f32,
    /// Crest sharpness, 0-1.
    pub steepness: f32,
    /// Crest-to-crest distance in world units. Must stay > 0; the tuning
    /// panel's slider bound guards this, the math does not.
    pub wavelength: f32,
}

impl WaveComponent {
    pub fn new(direction_deg: f32, steepness: f32, wavelength: f32) -> Self {
        Self {
            direction_deg,
            steepness,
            wavelength,
        }
    }

    /// Unit travel direction on the horizontal plane, `(sin th, cos th)`.
    pub fn direction(&self) -> Vec2 {
        let theta = self.direction_deg.to_radians();
        Vec2::new(theta.sin(), theta.cos())
    }

    /// Wavenumber `k = 2PI / wavelength`.
    pub fn wavenumber(&self) -> f32 {
        TAU / self.wavelength
    }

    /// Deep-water phase speed `c = sqrt(g / k)`.
    pub fn phase_speed(&self) -> f32 {
        (GRAVITY / self.wavenumber()).sqrt()
    }

    /// Peak displacement `a = steepness / k`.
    pub fn amplitude(&self) -> f32 {
        self.steepness / self.wavenumber()
    }

    /// Temporal period: the time for one full crest to pass a fixed point.
    pub fn period(&self) -> f32 {
        self.wavelength / self.phase_speed()
    }

    /// Displacement of the reference-plane point `p = (x, z)` at `time`,
    /// as `(dx, dy, dz)` in a Y-up world. The horizontal components pull
    /// the surface toward the crest; the vertical one is the sine height.
    pub fn displacement(&self, p: Vec2, time: f32) -> Vec3 {
        let k = self.wavenumber();
        let c = self.phase_speed();
        let d = self.direction();
        let f = k * (d.dot(p) - c * time);
        let a = self.steepness / k;
        Vec3::new(d.x * a * f.cos(), a * f.sin(), d.y * a * f.cos())
    }

    /// The uniform encoding consumed by the shader:
    /// `(direction.x, direction.y, steepness, wavelength)`.
    pub fn packed(&self) -> Vec4 {
        let d = self.direction();
        Vec4::new(d.x, d.y, self.steepness, self.wavelength)
    }
}

/// Total surface displacement: the sum of all components' contributions.
pub fn surface_displacement(waves: &[WaveComponent], p: Vec2, time: f32) -> Vec3 {
    waves
        .iter()
        .map(|wave| wave.displacement(p, time))
        .sum()
}

/// Schlick Fresnel reflectance for the water surface.
///
/// `cos_theta` is the cosine of the angle between the eye direction and the
/// surface normal: 1 at normal incidence (minimum reflectance, exactly
/// `RF0`), 0 at grazing (reflectance 1).
pub fn fresnel(cos_theta: f32) -> f32 {
    RF0 + (1.0 - RF0) * (1.0 - cos_theta).powi(5)
}
