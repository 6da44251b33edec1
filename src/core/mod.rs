//! Core domain: camera and engine-wide physics settings.

mod systems;

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (systems::setup_camera, systems::apply_world_settings),
        );
    }
}
