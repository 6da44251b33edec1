//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{InputLatch, MovementInput, Player};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.axis = x;
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space)
        || keyboard.just_pressed(KeyCode::KeyW)
        || keyboard.just_pressed(KeyCode::ArrowUp);
}

/// Hands the frame's input to every player controller. Never clears a
/// pending jump; only the physics step does that.
pub(crate) fn latch_input(
    input: Res<MovementInput>,
    mut query: Query<&mut InputLatch, With<Player>>,
) {
    for mut latch in &mut query {
        latch.sample(input.axis, input.jump_just_pressed);
    }
}
