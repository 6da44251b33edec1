//! Movement domain: player bootstrap from the loaded controller config.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::movement::{
    CapsuleBody, CharacterController, GameLayer, InputLatch, MovementState, MovementTuning,
    Player, PlayerVisual,
};

/// Spawn the player from config data.
/// Physics lives on the root entity; sprites hang off a mirrored visual child.
pub(crate) fn spawn_player(mut commands: Commands, config: Res<ControllerConfig>) {
    let body = CapsuleBody::from_size(config.body.width, config.body.height);
    let tuning = MovementTuning::from(&config.tuning);
    let spawn = config.spawn.position();

    info!(
        "Spawning player at {:?}: speed={}, jump_height={}, max_reach={}, capsule={}x{}",
        spawn,
        tuning.speed,
        tuning.jump_height,
        tuning.max_reachable_height(),
        config.body.width,
        body.height()
    );

    commands
        .spawn((
            // Identity & Movement
            (
                Player,
                CharacterController,
                MovementState::default(),
                InputLatch::default(),
                tuning,
            ),
            Transform::from_translation(spawn.extend(0.0)),
            Visibility::default(),
            // Physics
            (
                RigidBody::Kinematic,
                body.collider(),
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Wall, GameLayer::Sensor],
                ),
            ),
        ))
        .with_children(|parent| {
            parent
                .spawn((PlayerVisual, Transform::default(), Visibility::default()))
                .with_children(|visual| {
                    visual.spawn(Sprite {
                        color: Color::srgb(0.9, 0.9, 0.9),
                        custom_size: Some(Vec2::new(config.body.width, body.height())),
                        ..default()
                    });
                    // Eye marker so facing is visible
                    visual.spawn((
                        Sprite {
                            color: Color::srgb(0.15, 0.15, 0.2),
                            custom_size: Some(Vec2::splat(config.body.width * 0.2)),
                            ..default()
                        },
                        Transform::from_xyz(config.body.width * 0.25, body.height() * 0.3, 0.1),
                    ));
                });
        });
}
