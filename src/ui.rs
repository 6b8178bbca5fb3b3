//! Tuning panel for the sky and water parameters.
//!
//! Slider bounds are the validation layer: the wave model itself accepts
//! any number, so degenerate values (wavelength <= 0) are excluded here.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::settings::{SkySettings, WaterSettings};

/// Plugin that draws the live tuning window.
pub struct TuningPlugin;

impl Plugin for TuningPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Update, tuning_panel);
    }
}

fn tuning_panel(
    mut contexts: EguiContexts,
    mut water: ResMut<WaterSettings>,
    mut sky: ResMut<SkySettings>,
) {
    egui::Window::new("Tuning")
        .default_width(280.0)
        .show(contexts.ctx_mut(), |ui| {
            egui::CollapsingHeader::new("Sky")
                .default_open(true)
                .show(ui, |ui| {
                    ui.add(
                        egui::Slider::new(&mut sky.elevation_deg, 0.0..=90.0).text("Elevation"),
                    );
                    ui.add(
                        egui::Slider::new(&mut sky.azimuth_deg, -180.0..=180.0).text("Azimuth"),
                    );
                });

            egui::CollapsingHeader::new("Water")
                .default_open(true)
                .show(ui, |ui| {
                    ui.add(
                        egui::Slider::new(&mut water.distortion_scale, 0.0..=8.0)
                            .text("Distortion scale"),
                    );
                    ui.add(egui::Slider::new(&mut water.size, 0.1..=10.0).text("Size"));
                    ui.checkbox(&mut water.wireframe, "Wireframe");
                });

            for (label, wave) in ["Wave A", "Wave B", "Wave C"]
                .into_iter()
                .zip(water.waves.iter_mut())
            {
                egui::CollapsingHeader::new(label)
                    .default_open(true)
                    .show(ui, |ui| {
                        ui.add(
                            egui::Slider::new(&mut wave.direction_deg, 0.0..=359.0)
                                .text("Direction"),
                        );
                        ui.add(
                            egui::Slider::new(&mut wave.steepness, 0.0..=1.0).text("Steepness"),
                        );
                        ui.add(
                            egui::Slider::new(&mut wave.wavelength, 1.0..=100.0)
                                .text("Wavelength"),
                        );
                    });
            }
        });
}
