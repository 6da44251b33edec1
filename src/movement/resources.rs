//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Author-set tuning for one controller. Read-only at runtime.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MovementTuning {
    /// Max horizontal speed, units per second.
    pub speed: f32,
    /// Horizontal acceleration while grounded.
    pub walk_acceleration: f32,
    /// Horizontal acceleration while airborne.
    pub air_acceleration: f32,
    /// Deceleration when grounded with no horizontal input.
    pub ground_deceleration: f32,
    /// Peak height of a jump, independent of gravity.
    pub jump_height: f32,
    pub contact_order: ContactOrder,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 9.0,
            walk_acceleration: 75.0,
            air_acceleration: 30.0,
            ground_deceleration: 70.0,
            jump_height: 4.0,
            contact_order: ContactOrder::default(),
        }
    }
}

impl MovementTuning {
    /// Launch speed that peaks at `jump_height` under `gravity_y`.
    /// Uses physics formula: v = sqrt(2gh)
    pub fn jump_velocity(&self, gravity_y: f32) -> f32 {
        (2.0 * self.jump_height * gravity_y.abs()).sqrt()
    }

    /// Height reachable with the ground jump plus the double jump fired at apex.
    pub fn max_reachable_height(&self) -> f32 {
        self.jump_height * 2.0
    }

    pub fn acceleration(&self, on_ground: bool) -> f32 {
        if on_ground {
            self.walk_acceleration
        } else {
            self.air_acceleration
        }
    }

    /// No air drag: airborne idle keeps its horizontal velocity.
    pub fn deceleration(&self, on_ground: bool) -> f32 {
        if on_ground {
            self.ground_deceleration
        } else {
            0.0
        }
    }
}

/// Order in which overlapping shapes are resolved within one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum ContactOrder {
    /// Deepest penetration first, ties broken by shape key.
    #[default]
    DeepestFirst,
    /// Whatever order the overlap query returned.
    QueryOrder,
}

/// Raw input sampled once per rendered frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: f32,
    pub jump_just_pressed: bool,
}
