//! Settings: RON-backed movement tuning loaded at startup.

use bevy::prelude::*;
use std::fs;
use std::path::Path;

use crate::movement::MovementTuning;

/// Shipped tuning file, relative to the working directory.
pub const PLAYER_SETTINGS_PATH: &str = "assets/settings/player.ron";

/// Error type for settings loading failures.
#[derive(Debug)]
pub struct SettingsError {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.path, self.message)
    }
}

/// Load movement tuning from a RON file.
pub fn load_movement_tuning(path: &Path) -> Result<MovementTuning, SettingsError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| SettingsError {
        path: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron::from_str(&contents).map_err(|e| SettingsError {
        path: file_name,
        message: format!("Parse error: {}", e),
    })
}

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_settings);
    }
}

/// Replace the default tuning with the shipped file. Missing or malformed
/// settings are not fatal; the defaults stay in place.
fn load_settings(mut commands: Commands) {
    match load_movement_tuning(Path::new(PLAYER_SETTINGS_PATH)) {
        Ok(tuning) => {
            info!(
                "Loaded movement tuning: move_speed={}, jump_velocity={}, ground_check_distance={}",
                tuning.move_speed, tuning.jump_velocity, tuning.ground_check_distance
            );
            commands.insert_resource(tuning);
        }
        Err(e) => {
            warn!("{}; using default movement tuning", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuning_round_trips_through_ron() {
        let tuning: MovementTuning = ron::from_str(
            "(move_speed: 5.0, jump_velocity: 10.0, ground_check_distance: 0.1, ground_layers: 2)",
        )
        .unwrap();
        assert_eq!(tuning.move_speed, 5.0);
        assert_eq!(tuning.jump_velocity, 10.0);
        assert_eq!(tuning.ground_check_distance, 0.1);
        assert_eq!(tuning.ground_layers, 2);
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_missing_fields() {
        let tuning: MovementTuning = ron::from_str("(move_speed: 7.5)").unwrap();
        assert_eq!(tuning.move_speed, 7.5);
        assert_eq!(tuning.jump_velocity, MovementTuning::default().jump_velocity);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(ron::from_str::<MovementTuning>("(move_speed: \"fast\")").is_err());
    }

    #[test]
    fn test_missing_file_reports_io_error() {
        let err = load_movement_tuning(Path::new("no/such/settings.ron")).unwrap_err();
        assert!(err.message.contains("IO error"));
        assert!(err.to_string().contains("no/such/settings.ron"));
    }

    #[test]
    fn test_loads_tuning_from_disk() {
        let path = std::env::temp_dir().join("ledgerun_tuning_test.ron");
        fs::write(&path, "(move_speed: 3.5, jump_velocity: 8.0)").unwrap();

        let tuning = load_movement_tuning(&path).unwrap();
        assert_eq!(tuning.move_speed, 3.5);
        assert_eq!(tuning.jump_velocity, 8.0);

        let _ = fs::remove_file(&path);
    }
}
