//! Movement domain: fixed-rate controller stepping and visual facing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::collisions::AvianContacts;
use crate::movement::{
    CapsuleBody, CharacterController, Facing, GameLayer, InputLatch, MovementState,
    MovementTuning, PlayerVisual, StepContext, step,
};

type ControllerItem<'a> = (
    Entity,
    &'a Collider,
    &'a CapsuleBody,
    &'a MovementTuning,
    &'a mut MovementState,
    &'a mut InputLatch,
    &'a mut Transform,
);

pub(crate) fn step_controllers(
    time: Res<Time<Fixed>>,
    gravity: Res<Gravity>,
    spatial_query: SpatialQuery,
    colliders: Query<(&'static Collider, &'static Position, Has<Sensor>)>,
    mut controllers: Query<ControllerItem<'static>, With<CharacterController>>,
) {
    let ctx = StepContext {
        gravity: gravity.0,
        dt: time.timestep().as_secs_f32(),
    };
    let filter = SpatialQueryFilter::from_mask([
        GameLayer::Ground,
        GameLayer::Wall,
        GameLayer::Player,
        GameLayer::Sensor,
    ]);

    for (entity, collider, body, tuning, mut state, mut latch, mut transform) in &mut controllers {
        let world = AvianContacts {
            spatial_query: &spatial_query,
            colliders: &colliders,
            filter: &filter,
            own_entity: entity,
            own_collider: collider,
        };

        let output = step(
            tuning,
            *body,
            &mut state,
            &mut latch,
            transform.translation.truncate(),
            &ctx,
            &world,
        );

        transform.translation += output.translation.extend(0.0);

        if output.landed {
            debug!(
                "Landed: on_ground={}, double_jump_available={}",
                state.on_ground, state.double_jump_available
            );
        } else if output.left_ground {
            debug!(
                "Left ground: on_ground={}, double_jump_available={}",
                state.on_ground, state.double_jump_available
            );
        }
        if output.facing_flipped {
            debug!("Facing {:?}", state.facing);
        }
    }
}

/// Mirrors the horizontal scale of visual children to match facing.
pub(crate) fn sync_visual_facing(
    parent_query: Query<(&MovementState, &Children), Changed<MovementState>>,
    mut child_query: Query<&mut Transform, With<PlayerVisual>>,
) {
    for (state, children) in &parent_query {
        let sign = match state.facing {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        };

        for child in children.iter() {
            if let Ok(mut transform) = child_query.get_mut(child) {
                transform.scale.x = transform.scale.x.abs() * sign;
            }
        }
    }
}
