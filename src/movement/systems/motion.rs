//! Movement domain: jump trigger and fixed-rate velocity application.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementInput, MovementState, MovementTuning, Player};

/// Launch the actor when the jump control went down on a grounded frame.
///
/// Grounded-ness is whatever the most recent probe reported. The jump does
/// not flip the state itself; the next probe does.
pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut actors: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    if !input.jump_pressed {
        return;
    }

    for (state, mut velocity) in &mut actors {
        if !state.is_grounded {
            continue;
        }

        velocity.y = tuning.jump_velocity;
        debug!("Jump: velocity.y set to {}", tuning.jump_velocity);
    }
}

/// Apply horizontal velocity on the physics-step cadence.
///
/// The vertical component is never touched here: it belongs to the
/// integrator's gravity and to `apply_jump`.
pub(crate) fn apply_horizontal_movement(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut actors: Query<&mut LinearVelocity, With<Player>>,
) {
    for mut velocity in &mut actors {
        velocity.x = input.horizontal * tuning.move_speed;
    }
}
