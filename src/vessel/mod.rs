//! Vessel module - player-controlled vessel and its chase camera.

pub mod controller;
mod systems;

use bevy::prelude::*;

pub use controller::{CameraRig, InputSnapshot, VesselController, VesselFrame, VesselTuning};
pub use systems::{ChaseCamera, Vessel, VesselModel};

/// Plugin that spawns the vessel and steers it from keyboard input.
pub struct VesselPlugin;

impl Plugin for VesselPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VesselController>()
            .add_systems(Startup, systems::spawn_vessel)
            .add_systems(
                Update,
                (systems::substitute_fallback_hull, systems::drive_vessel),
            );
    }
}
