//! Sandbox: camera and a static test arena for the body controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

/// Screen pixels per world unit; the arena is authored in meter-sized units.
const PIXELS_PER_UNIT: f32 = 48.0;

pub struct SandboxPlugin;

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, spawn_arena));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_scale(Vec3::splat(1.0 / PIXELS_PER_UNIT)),
    ));
}

/// Ground slab plus a few floating platforms, all on the ground layer.
fn spawn_arena(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // Ground
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(16.0, 1.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -3.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(16.0, 1.0),
        ground_layers,
    ));

    // Platform - left, low
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(3.0, 0.4)),
            ..default()
        },
        Transform::from_xyz(-4.0, -0.8, 0.0),
        RigidBody::Static,
        Collider::rectangle(3.0, 0.4),
        ground_layers,
    ));

    // Platform - right, higher
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(3.0, 0.4)),
            ..default()
        },
        Transform::from_xyz(4.0, 1.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(3.0, 0.4),
        ground_layers,
    ));
}
