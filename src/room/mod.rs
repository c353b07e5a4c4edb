pub mod buttons;
pub mod setup;

use bevy::prelude::*;

pub use setup::LampBulb;

use buttons::animate_buttons;
use setup::{setup_room, swing_lamp};

pub struct RoomPlugin;

impl Plugin for RoomPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_room)
            .add_systems(Update, (animate_buttons, swing_lamp));
    }
}
