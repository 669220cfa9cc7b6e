//! Debug tools: runtime visualization of the ground probe.

use bevy::prelude::*;

use crate::movement::{GroundProbe, GroundSensor, MovementState, MovementTuning};

/// Resource tracking debug visualization state.
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the ground probe ray is drawn.
    pub show_probe: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, toggle_probe_view)
            .add_systems(
                Update,
                draw_ground_probe.run_if(|state: Res<DebugState>| state.show_probe),
            );
    }
}

/// Toggle the probe ray with F1.
fn toggle_probe_view(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) {
        state.show_probe = !state.show_probe;
        info!(
            "Ground probe view: {}",
            if state.show_probe { "on" } else { "off" }
        );
    }
}

/// Draw the probe ray, green when grounded else red.
fn draw_ground_probe(
    mut gizmos: Gizmos,
    tuning: Res<MovementTuning>,
    actors: Query<(&GroundSensor, &MovementState)>,
    probes: Query<&GlobalTransform, With<GroundProbe>>,
) {
    for (sensor, state) in &actors {
        let Some(anchor) = sensor.probe.and_then(|probe| probes.get(probe).ok()) else {
            continue;
        };

        let origin = anchor.translation().truncate();
        let end = origin + Vec2::NEG_Y * tuning.ground_check_distance;
        let color = if state.is_grounded {
            Color::srgb(0.0, 1.0, 0.0)
        } else {
            Color::srgb(1.0, 0.0, 0.0)
        };
        gizmos.line_2d(origin, end, color);
    }
}
