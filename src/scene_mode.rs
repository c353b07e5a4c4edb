use bevy::prelude::*;

use crate::audio::SoundBank;
use crate::interaction::clicks::handle_pointer_clicks;
use crate::room::buttons::{ButtonTween, SwitchButton};

/// Which space currently surrounds the room.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneMode {
    #[default]
    Indoor,
    Ocean,
    Mountains,
    Acid,
}

impl SceneMode {
    pub const ALL: [SceneMode; 4] = [
        SceneMode::Indoor,
        SceneMode::Ocean,
        SceneMode::Mountains,
        SceneMode::Acid,
    ];
}

/// The three outdoor worlds a desk button can summon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorldKind {
    Ocean,
    Mountains,
    Acid,
}

impl WorldKind {
    pub const ALL: [WorldKind; 3] = [WorldKind::Ocean, WorldKind::Mountains, WorldKind::Acid];

    pub fn mode(self) -> SceneMode {
        match self {
            WorldKind::Ocean => SceneMode::Ocean,
            WorldKind::Mountains => SceneMode::Mountains,
            WorldKind::Acid => SceneMode::Acid,
        }
    }
}

/// Marker on the root entity of each switchable scene subgraph.
#[derive(Component)]
pub struct ModeRoot(pub SceneMode);

/// Event fired when a desk button is clicked.
#[derive(Event)]
pub struct SwitchPressed {
    pub world: WorldKind,
}

pub struct SceneModePlugin;

impl Plugin for SceneModePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SceneMode>()
            .add_event::<SwitchPressed>()
            .add_systems(Update, handle_switch_press.after(handle_pointer_clicks));
        // The sync runs on every transition so membership never drifts.
        for mode in SceneMode::ALL {
            app.add_systems(OnEnter(mode), sync_mode_roots);
        }
    }
}

/// Shows the subgraph of the mode just entered and hides every other one.
pub fn sync_mode_roots(
    mode: Res<State<SceneMode>>,
    mut roots: Query<(&ModeRoot, &mut Visibility)>,
) {
    for (root, mut visibility) in roots.iter_mut() {
        *visibility = if root.0 == *mode.get() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

/// Reacts to a desk button press: silence everything, play the click,
/// start the pad dip, then either switch to the button's world or come
/// back inside if it is already showing.
pub fn handle_switch_press(
    mut events: EventReader<SwitchPressed>,
    mut commands: Commands,
    mode: Res<State<SceneMode>>,
    mut next_mode: ResMut<NextState<SceneMode>>,
    mut sounds: ResMut<SoundBank>,
    mut buttons: Query<(&SwitchButton, &mut ButtonTween)>,
    time: Res<Time>,
) {
    for event in events.read() {
        sounds.stop_all(&mut commands);
        sounds.play_press(&mut commands);

        for (button, mut tween) in buttons.iter_mut() {
            if button.world == event.world {
                tween.press(time.elapsed_secs());
            }
        }

        if *mode.get() == event.world.mode() {
            next_mode.set(SceneMode::Indoor);
        } else {
            next_mode.set(event.world.mode());
        }
    }
}
