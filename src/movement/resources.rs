//! Movement domain: tuning and input resources.

use avian2d::prelude::PhysicsLayer;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

/// Movement tuning, fixed for a session once loaded.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Horizontal speed in world units per second.
    pub move_speed: f32,
    /// Upward velocity applied on a jump, in world units per second.
    pub jump_velocity: f32,
    /// How far below the probe anchor the ground ray reaches.
    pub ground_check_distance: f32,
    /// Collision-layer bitmask the ground probe tests against.
    pub ground_layers: u32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_velocity: 10.0,
            ground_check_distance: 0.1,
            ground_layers: GameLayer::Ground.to_bits(),
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1]; digital keys land on -1, 0 or 1.
    pub horizontal: f32,
    /// True only on the frame the jump control went down. A held key does
    /// not re-trigger.
    pub jump_pressed: bool,
}
