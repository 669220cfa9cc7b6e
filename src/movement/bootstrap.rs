//! Movement domain: player bootstrap for the sandbox arena.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundSensor, MovementState, Player};

/// Spawn the controllable body.
///
/// No probe anchor is supplied here; the sensor gets a default one on the
/// first frame. Gravity stays with the physics backend, so the body keeps
/// its default gravity scale.
pub(crate) fn spawn_player(mut commands: Commands) {
    commands.spawn((
        // Identity & movement
        (Player, MovementState::default(), GroundSensor::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(0.6, 1.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(0.6, 1.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}
