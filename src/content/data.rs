//! Data definitions for the controller RON config.
//!
//! These structs mirror assets/data/controller.ron and are used for
//! deserialization. Runtime components are built from them at spawn.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{ContactOrder, MovementTuning};

/// Current schema of controller.ron.
pub const SCHEMA_VERSION: u32 = 1;

/// Root of controller.ron, kept as a resource after loading.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ControllerConfig {
    pub schema_version: u32,
    pub world: WorldDef,
    pub body: BodyDef,
    pub tuning: TuningDef,
    pub spawn: SpawnDef,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            world: WorldDef::default(),
            body: BodyDef::default(),
            tuning: TuningDef::default(),
            spawn: SpawnDef::default(),
        }
    }
}

// ============================================================================
// World (global gravity and physics rate)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WorldDef {
    pub gravity: (f32, f32),
    pub fixed_hz: f64,
}

impl Default for WorldDef {
    fn default() -> Self {
        Self {
            gravity: (0.0, -9.81),
            fixed_hz: 50.0,
        }
    }
}

impl WorldDef {
    pub fn gravity(&self) -> Vec2 {
        Vec2::new(self.gravity.0, self.gravity.1)
    }
}

// ============================================================================
// Body (capsule, caps included)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BodyDef {
    pub width: f32,
    pub height: f32,
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 2.0,
        }
    }
}

// ============================================================================
// Tuning
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TuningDef {
    pub speed: f32,
    pub walk_acceleration: f32,
    pub air_acceleration: f32,
    pub ground_deceleration: f32,
    pub jump_height: f32,
    #[serde(default)]
    pub contact_order: ContactOrder,
}

impl Default for TuningDef {
    fn default() -> Self {
        let tuning = MovementTuning::default();
        Self {
            speed: tuning.speed,
            walk_acceleration: tuning.walk_acceleration,
            air_acceleration: tuning.air_acceleration,
            ground_deceleration: tuning.ground_deceleration,
            jump_height: tuning.jump_height,
            contact_order: tuning.contact_order,
        }
    }
}

impl From<&TuningDef> for MovementTuning {
    fn from(def: &TuningDef) -> Self {
        Self {
            speed: def.speed,
            walk_acceleration: def.walk_acceleration,
            air_acceleration: def.air_acceleration,
            ground_deceleration: def.ground_deceleration,
            jump_height: def.jump_height,
            contact_order: def.contact_order,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SpawnDef {
    pub x: f32,
    pub y: f32,
}

impl Default for SpawnDef {
    fn default() -> Self {
        Self { x: 0.0, y: 2.0 }
    }
}

impl SpawnDef {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
