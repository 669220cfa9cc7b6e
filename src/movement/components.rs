//! Movement domain: components and physics layers for the body controller.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Grounded/airborne state for one actor.
///
/// `is_grounded` always holds the result of the most recent ground probe and
/// is written only by `detect_ground`.
#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub is_grounded: bool,
}

/// Reference to the entity the ground ray is cast from.
///
/// Hosts may point this at any transform. When left empty, a default anchor
/// is created under the actor on the first frame the sensor exists.
#[derive(Component, Debug, Default)]
pub struct GroundSensor {
    pub probe: Option<Entity>,
}

/// Marker for a probe anchor entity.
#[derive(Component, Debug)]
pub struct GroundProbe;

/// Local offset of an auto-created probe anchor, just below the body origin.
pub const DEFAULT_PROBE_OFFSET: Vec3 = Vec3::new(0.0, -0.5, 0.0);

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;
