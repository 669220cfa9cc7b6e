//! Movement domain: probe anchor creation and grounded-state detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    DEFAULT_PROBE_OFFSET, GroundProbe, GroundSensor, MovementState, MovementTuning, Player,
};

/// Ground-state change derived from two consecutive probe results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GroundTransition {
    Landed,
    LeftGround,
}

/// Compare consecutive probe results. Equal results yield no transition.
pub(crate) fn ground_transition(was_grounded: bool, is_grounded: bool) -> Option<GroundTransition> {
    match (was_grounded, is_grounded) {
        (false, true) => Some(GroundTransition::Landed),
        (true, false) => Some(GroundTransition::LeftGround),
        _ => None,
    }
}

/// Give every new ground sensor a probe anchor if none was assigned.
///
/// The default anchor is parented to the actor at `DEFAULT_PROBE_OFFSET`,
/// just below the body origin, so it follows the actor for its lifetime.
pub(crate) fn ensure_ground_probe(
    mut commands: Commands,
    mut sensors: Query<(Entity, &mut GroundSensor), Added<GroundSensor>>,
) {
    for (actor, mut sensor) in &mut sensors {
        if sensor.probe.is_some() {
            continue;
        }

        let probe = commands
            .spawn((
                GroundProbe,
                Transform::from_translation(DEFAULT_PROBE_OFFSET),
                ChildOf(actor),
            ))
            .id();
        sensor.probe = Some(probe);
        debug!("Created default ground probe for {:?}", actor);
    }
}

/// Cast the ground ray straight down from the probe anchor and record the
/// result. `is_grounded` is only ever written here.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut actors: Query<(&GroundSensor, &mut MovementState), With<Player>>,
    probes: Query<&GlobalTransform, With<GroundProbe>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(tuning.ground_layers);

    for (sensor, mut state) in &mut actors {
        // No resolvable anchor yet: keep the most recent result.
        let Some(anchor) = sensor.probe.and_then(|probe| probes.get(probe).ok()) else {
            continue;
        };

        let ray_origin = anchor.translation().truncate();
        // A non-positive probe distance grounds nothing.
        let hit = tuning.ground_check_distance > 0.0
            && spatial_query
                .cast_ray(
                    ray_origin,
                    Dir2::NEG_Y,
                    tuning.ground_check_distance,
                    true,
                    &ground_filter,
                )
                .is_some();

        let was_grounded = state.is_grounded;
        state.is_grounded = hit;

        match ground_transition(was_grounded, state.is_grounded) {
            Some(GroundTransition::Landed) => debug!("Landed"),
            Some(GroundTransition::LeftGround) => debug!("Left ground"),
            None => {}
        }
    }
}
