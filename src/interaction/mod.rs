pub mod clicks;
pub mod components;
pub mod hover;
pub mod picker;

use bevy::prelude::*;

use clicks::handle_pointer_clicks;
use components::PointerHit;
use hover::update_pad_hover;
use picker::update_pointer_hit;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerHit>().add_systems(
            Update,
            (update_pointer_hit, update_pad_hover, handle_pointer_clicks).chain(),
        );
    }
}
