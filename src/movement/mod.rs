//! Movement domain: capsule character controller and its avian adapter.

mod bootstrap;
mod components;
pub mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
pub mod geometry;
mod resources;
mod systems;


use bevy::prelude::*;

pub use components::*;
pub use controller::{Candidate, ContactWorld, Footprint, StepContext, StepOutput, step};
pub use resources::*;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(Startup, bootstrap::spawn_player)
            .add_systems(
                Update,
                (systems::read_input, systems::latch_input).chain(),
            )
            .add_systems(
                FixedUpdate,
                (
                    systems::verify_controller_body,
                    systems::step_controllers,
                    systems::sync_visual_facing,
                )
                    .chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room)
            .add_systems(Update, (dev::reset_player, dev::draw_controller_gizmos));
    }
}
