use bevy::prelude::*;

use crate::fx::BeaconToggled;
use crate::scene_mode::{SceneMode, SwitchPressed};

use super::components::{PickTarget, PointerHit};

/// Routes a left click on whatever the cursor rests on. Beacons only
/// respond while their own world is showing; the bezel and empty space
/// do nothing.
pub fn handle_pointer_clicks(
    mouse_input: Res<ButtonInput<MouseButton>>,
    hit: Res<PointerHit>,
    mode: Res<State<SceneMode>>,
    mut switch_events: EventWriter<SwitchPressed>,
    mut beacon_events: EventWriter<BeaconToggled>,
) {
    if !mouse_input.just_pressed(MouseButton::Left) {
        return;
    }
    let Some((_, target)) = hit.target else {
        return;
    };

    match target {
        PickTarget::SwitchPad(world) => {
            switch_events.send(SwitchPressed { world });
        }
        PickTarget::Beacon(world) if *mode.get() == world.mode() => {
            beacon_events.send(BeaconToggled { world });
        }
        PickTarget::Beacon(_) | PickTarget::PadBezel(_) => {}
    }
}
