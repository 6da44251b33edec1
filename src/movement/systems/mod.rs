//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::verify_controller_body;
pub(crate) use input::{latch_input, read_input};
pub(crate) use movement::{step_controllers, sync_visual_facing};
