//! Movement domain: debug-only test room and controller overlay.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::movement::{
    CapsuleBody, GameLayer, Ground, InputLatch, MovementState, Player, Wall,
};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    let mut solid = |marker_is_wall: bool, center: Vec2, size: Vec2, color: Color| {
        let mut entity = commands.spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(-1.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
        ));
        if marker_is_wall {
            entity.insert((Wall, wall_layers));
        } else {
            entity.insert((Ground, ground_layers));
        }
    };

    // Ground, top surface at y = 0
    solid(false, Vec2::new(0.0, -0.5), Vec2::new(30.0, 1.0), ground_color);

    // Walls
    solid(true, Vec2::new(-15.5, 9.0), Vec2::new(1.0, 20.0), wall_color);
    solid(true, Vec2::new(15.5, 9.0), Vec2::new(1.0, 20.0), wall_color);

    // Platforms, reachable with a single jump from the one below
    solid(false, Vec2::new(-6.0, 3.25), Vec2::new(5.0, 0.5), platform_color);
    solid(false, Vec2::new(5.0, 6.25), Vec2::new(5.0, 0.5), platform_color);

    // Overlapping ledge pair: standing on the seam produces two floor contacts
    solid(false, Vec2::new(-2.0, 9.0), Vec2::new(3.0, 0.5), platform_color);
    solid(false, Vec2::new(0.5, 9.2), Vec2::new(3.0, 0.5), platform_color);

    // Low step to push into from the side
    solid(true, Vec2::new(-11.0, 0.5), Vec2::new(1.0, 1.0), wall_color);

    // Boulder
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::splat(1.5)),
            ..default()
        },
        Transform::from_xyz(10.0, 0.5, -1.0),
        RigidBody::Static,
        Collider::circle(0.75),
        ground_layers,
    ));

    // Trigger zone, never blocks movement
    commands.spawn((
        Sprite {
            color: Color::srgba(0.3, 0.6, 0.9, 0.25),
            custom_size: Some(Vec2::new(2.0, 3.0)),
            ..default()
        },
        Transform::from_xyz(-7.0, 1.5, -2.0),
        Sensor,
        Collider::rectangle(2.0, 3.0),
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));
}

/// Press R to put the player back at the configured spawn point.
pub(crate) fn reset_player(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<ControllerConfig>,
    mut query: Query<(&mut Transform, &mut MovementState, &mut InputLatch), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }

    for (mut transform, mut state, mut latch) in &mut query {
        transform.translation = config.spawn.position().extend(transform.translation.z);
        *state = MovementState::default();
        *latch = InputLatch::default();
        info!("Player reset to {:?}", config.spawn.position());
    }
}

/// Capsule outline colored by jump state, plus a velocity arrow.
pub(crate) fn draw_controller_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &CapsuleBody, &MovementState)>,
) {
    for (transform, body, state) in &query {
        let position = transform.translation.truncate();
        let color = if state.on_ground {
            Color::srgb(0.2, 0.9, 0.3)
        } else if state.double_jump_available {
            Color::srgb(0.95, 0.85, 0.2)
        } else {
            Color::srgb(0.95, 0.25, 0.2)
        };

        gizmos.primitive_2d(
            &Capsule2d::new(body.radius, body.half_segment * 2.0),
            Isometry2d::from_translation(position),
            color,
        );
        gizmos.arrow_2d(position, position + state.velocity * 0.1, color);
    }
}
