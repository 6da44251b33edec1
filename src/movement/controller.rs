//! Movement domain: fixed-step capsule controller.
//!
//! One call to [`step`] runs a full physics tick: jump, horizontal motion,
//! gravity, semi-implicit Euler integration, penetration resolution and
//! facing. Engine state (gravity, timestep, the collision world) comes in
//! through [`StepContext`] and [`ContactWorld`]; the resulting translation
//! and facing flip go back out through [`StepOutput`] for the host to apply.

use std::cmp::Ordering;

use bevy::prelude::*;

use crate::movement::geometry::Separation;
use crate::movement::{
    CapsuleBody, ContactOrder, Facing, InputLatch, MovementState, MovementTuning,
};

/// Horizontal speed that must be exceeded before facing is reconsidered.
pub const FACING_DEADZONE: f32 = 0.01;

/// A contact only counts as ground while vertical velocity is below this.
pub const GROUND_VELOCITY_THRESHOLD: f32 = 0.01;

/// Per-tick simulation parameters supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepContext {
    pub gravity: Vec2,
    pub dt: f32,
}

/// The body's footprint for overlap and distance queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub position: Vec2,
    pub body: CapsuleBody,
}

/// One shape returned by the overlap query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<S> {
    pub shape: S,
    /// The body's own collider.
    pub is_self: bool,
    /// Trigger/sensor shapes never block movement.
    pub is_trigger: bool,
}

/// Collision collaborator consumed by the controller.
pub trait ContactWorld {
    type Shape: Copy + Ord;

    /// Every shape intersecting `footprint`, the body's own shape included.
    fn overlapping(&self, footprint: &Footprint) -> Vec<Candidate<Self::Shape>>;

    /// Distance query between `shape` and the body at `footprint`.
    fn separation(&self, shape: Self::Shape, footprint: &Footprint) -> Separation;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepOutput {
    /// Total displacement this tick: integration plus every push-out.
    pub translation: Vec2,
    pub facing_flipped: bool,
    pub contacts_resolved: usize,
    pub landed: bool,
    pub left_ground: bool,
}

/// Runs one physics tick for a single controller.
pub fn step<W: ContactWorld>(
    tuning: &MovementTuning,
    body: CapsuleBody,
    state: &mut MovementState,
    latch: &mut InputLatch,
    position: Vec2,
    ctx: &StepContext,
    world: &W,
) -> StepOutput {
    let was_on_ground = state.on_ground;

    apply_jump(tuning, state, latch, ctx);
    apply_horizontal(tuning, state, latch.move_input, ctx.dt);
    state.velocity.y += ctx.gravity.y * ctx.dt;

    let integrated = position + state.velocity * ctx.dt;
    let (resolved, contacts_resolved) =
        resolve_contacts(tuning.contact_order, body, state, integrated, ctx.dt, world);

    let facing_flipped = update_facing(state);

    StepOutput {
        translation: resolved - position,
        facing_flipped,
        contacts_resolved,
        landed: state.on_ground && !was_on_ground,
        left_ground: !state.on_ground && was_on_ground,
    }
}

/// Grounded jump or double jump, consuming the latch when either fires.
pub(crate) fn apply_jump(
    tuning: &MovementTuning,
    state: &mut MovementState,
    latch: &mut InputLatch,
    ctx: &StepContext,
) {
    if state.on_ground {
        // Drop residual fall and push-out velocity so jump height is exact
        state.velocity.y = 0.0;

        if latch.consume_jump() {
            state.velocity.y = tuning.jump_velocity(ctx.gravity.y);
            debug!("Ground jump: vy={}", state.velocity.y);
        }
    } else if state.double_jump_available && latch.jump_requested {
        latch.consume_jump();
        state.velocity.y = tuning.jump_velocity(ctx.gravity.y);
        state.double_jump_available = false;
        debug!("Double jump: vy={}", state.velocity.y);
    }
}

/// Moves horizontal velocity toward the input target without overshooting.
pub(crate) fn apply_horizontal(
    tuning: &MovementTuning,
    state: &mut MovementState,
    move_input: f32,
    dt: f32,
) {
    let (target, rate) = if move_input != 0.0 {
        (
            tuning.speed * move_input,
            tuning.acceleration(state.on_ground),
        )
    } else {
        (0.0, tuning.deceleration(state.on_ground))
    };

    state.velocity.x = move_towards(state.velocity.x, target, rate * dt);
}

pub(crate) fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if current < target {
        (current + max_delta).min(target)
    } else {
        (current - max_delta).max(target)
    }
}

/// Pushes the body out of every genuine overlap and reclassifies ground.
/// Returns the resolved position and the number of corrections applied.
pub(crate) fn resolve_contacts<W: ContactWorld>(
    order: ContactOrder,
    body: CapsuleBody,
    state: &mut MovementState,
    mut position: Vec2,
    dt: f32,
    world: &W,
) -> (Vec2, usize) {
    state.on_ground = false;

    let inv_dt = if dt > 0.0 { dt.recip() } else { 0.0 };
    let footprint = Footprint { position, body };

    let mut contacts: Vec<(W::Shape, f32)> = world
        .overlapping(&footprint)
        .into_iter()
        .filter(|c| !c.is_self && !c.is_trigger)
        .map(|c| (c.shape, world.separation(c.shape, &footprint).depth()))
        .collect();

    if order == ContactOrder::DeepestFirst {
        contacts.sort_by(|a, b| match b.1.total_cmp(&a.1) {
            Ordering::Equal => a.0.cmp(&b.0),
            unequal => unequal,
        });
    }

    let mut resolved = 0;
    for (shape, _) in contacts {
        // An earlier push this step may already have cleared this overlap
        let separation = world.separation(shape, &Footprint { position, body });
        if !separation.overlapped {
            continue;
        }

        let push = separation.vector();
        position += push;
        state.velocity += push * inv_dt;
        resolved += 1;

        if is_floor(separation.normal) && state.velocity.y < GROUND_VELOCITY_THRESHOLD {
            state.on_ground = true;
            state.double_jump_available = true;
        }
    }

    (position, resolved)
}

/// Within 90 degrees of straight up.
pub(crate) fn is_floor(normal: Vec2) -> bool {
    normal.dot(Vec2::Y) > 0.0
}

/// Flips facing once horizontal velocity leaves the deadzone the other way.
pub(crate) fn update_facing(state: &mut MovementState) -> bool {
    let wants = if state.velocity.x > FACING_DEADZONE {
        Facing::Right
    } else if state.velocity.x < -FACING_DEADZONE {
        Facing::Left
    } else {
        return false;
    };

    if wants == state.facing {
        return false;
    }

    state.facing = wants;
    true
}
