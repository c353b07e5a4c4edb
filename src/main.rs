mod audio;
mod camera;
mod fx;
mod interaction;
mod room;
mod scene_mode;
mod settings;
#[cfg(test)]
mod tests;
mod worlds;

use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
    window::PresentMode,
};

use audio::SoundPlugin;
use camera::CameraPlugin;
use fx::FxPlugin;
use interaction::InteractionPlugin;
use room::RoomPlugin;
use scene_mode::SceneModePlugin;
use settings::SettingsPlugin;
use worlds::WorldsPlugin;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Diorama".to_string(),
                    present_mode: PresentMode::AutoNoVsync,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins((
            FrameTimeDiagnosticsPlugin::default(),
            LogDiagnosticsPlugin::default(),
        ))
        .add_plugins((
            SettingsPlugin,
            SceneModePlugin,
            CameraPlugin,
            RoomPlugin,
            InteractionPlugin,
            WorldsPlugin,
            FxPlugin,
            SoundPlugin,
        ))
        .run();
}
