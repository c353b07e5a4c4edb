use bevy::prelude::*;
use serde::Deserialize;

/// Player-tunable values, overridable through a JSON file next to the binary.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Linear gain applied to every sound the app plays.
    pub master_volume: f32,
    /// Radians of camera rotation per pixel of mouse drag.
    pub mouse_sensitivity: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            mouse_sensitivity: 0.003,
        }
    }
}

/// File read at startup; absent in the common case.
const SETTINGS_PATH: &str = "settings.json";

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_settings);
    }
}

fn load_settings(mut commands: Commands) {
    let settings = match std::fs::read_to_string(SETTINGS_PATH) {
        Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => settings,
            Err(err) => {
                warn!("Ignoring malformed {SETTINGS_PATH}: {err}");
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    };
    commands.insert_resource(settings);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_keep_defaults_for_missing_fields() {
        let settings: Settings = serde_json::from_str(r#"{"master_volume": 0.5}"#).unwrap();
        assert_eq!(settings.master_volume, 0.5);
        assert_eq!(settings.mouse_sensitivity, Settings::default().mouse_sensitivity);
    }

    #[test]
    fn malformed_settings_fail_to_parse() {
        assert!(serde_json::from_str::<Settings>("{volume}").is_err());
    }
}
