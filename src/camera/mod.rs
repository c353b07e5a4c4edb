mod systems;

use bevy::prelude::*;

use systems::{orbit_look, setup_camera};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, orbit_look);
    }
}
