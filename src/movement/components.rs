//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::geometry::Capsule;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Sensors (triggers) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Sprite child whose horizontal scale mirrors the parent's facing.
#[derive(Component, Debug)]
pub struct PlayerVisual;

/// Marks an entity driven by the capsule controller.
/// The entity must also carry a capsule `Collider`.
#[derive(Component, Debug, Default)]
pub struct CharacterController;

/// Mutable controller state, persisted across physics ticks.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MovementState {
    /// Units per second.
    pub velocity: Vec2,
    /// Recomputed from scratch by every collision pass.
    pub on_ground: bool,
    pub double_jump_available: bool,
    pub facing: Facing,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            on_ground: false,
            double_jump_available: true,
            facing: Facing::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Input handed from the frame tick to the physics tick.
///
/// The axis is overwritten every frame. The jump flag is set-OR by the frame
/// tick and only ever cleared by a physics step that consumes it, so a press
/// that lands between two physics ticks is never lost.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct InputLatch {
    pub move_input: f32,
    pub jump_requested: bool,
}

impl InputLatch {
    pub fn sample(&mut self, axis: f32, jump_just_pressed: bool) {
        self.move_input = if axis.is_finite() {
            axis.clamp(-1.0, 1.0)
        } else {
            0.0
        };
        self.jump_requested |= jump_just_pressed;
    }

    /// Clears the jump request, returning whether one was pending.
    pub fn consume_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_requested)
    }
}

/// Capsule dimensions of a controller body, read from its collider.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CapsuleBody {
    pub radius: f32,
    pub half_segment: f32,
}

impl CapsuleBody {
    /// Builds a body from an overall `width` x `height` capsule, caps included.
    pub fn from_size(width: f32, height: f32) -> Self {
        let radius = width * 0.5;
        Self {
            radius,
            half_segment: (height * 0.5 - radius).max(0.0),
        }
    }

    pub fn from_collider(entity: Entity, collider: &Collider) -> Result<Self, ControllerSetupError> {
        let capsule = collider
            .shape_scaled()
            .as_capsule()
            .ok_or(ControllerSetupError::NotCapsule(entity))?;

        Ok(Self {
            radius: capsule.radius,
            half_segment: capsule.half_height(),
        })
    }

    /// Avian collider matching these dimensions.
    pub fn collider(&self) -> Collider {
        Collider::capsule(self.radius, self.half_segment * 2.0)
    }

    pub fn at(&self, position: Vec2) -> Capsule {
        Capsule::new(position, self.radius, self.half_segment)
    }

    pub fn height(&self) -> f32 {
        (self.half_segment + self.radius) * 2.0
    }
}

/// Structural preconditions checked when a controller is attached.
#[derive(Debug)]
pub enum ControllerSetupError {
    MissingCollider(Entity),
    NotCapsule(Entity),
}

impl std::fmt::Display for ControllerSetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControllerSetupError::MissingCollider(entity) => {
                write!(f, "character controller {entity} has no Collider")
            }
            ControllerSetupError::NotCapsule(entity) => {
                write!(f, "character controller {entity} requires a capsule Collider")
            }
        }
    }
}

impl std::error::Error for ControllerSetupError {}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
