//! Movement domain: platformer body controller plugin wiring and exports.

mod bootstrap;
mod components;
mod resources;
mod systems;


pub use components::{
    DEFAULT_PROBE_OFFSET, GameLayer, Ground, GroundProbe, GroundSensor, MovementState, Player,
};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_horizontal_movement, apply_jump, detect_ground, ensure_ground_probe, read_input,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, spawn_player)
            // The probe runs last so its result gates the next frame's jump.
            .add_systems(
                Update,
                (read_input, apply_jump, ensure_ground_probe, detect_ground).chain(),
            )
            .add_systems(FixedUpdate, apply_horizontal_movement);
    }
}
