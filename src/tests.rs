//! End-to-end checks of the switching logic on a headless app.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::audio::{Channel, SoundBank};
use crate::fx::{handle_beacon_toggle, BeaconToggled, FxState};
use crate::interaction::clicks::handle_pointer_clicks;
use crate::interaction::components::{PickTarget, PointerHit};
use crate::room::buttons::{ButtonTween, SwitchButton};
use crate::scene_mode::{
    handle_switch_press, sync_mode_roots, ModeRoot, SceneMode, SwitchPressed, WorldKind,
};
use crate::worlds::{
    acid, mountains, ocean, start_mountain_ambience, start_ocean_ambience, SnowField,
};

/// A headless app with the full switching logic but no rendering, audio
/// output or real assets.
fn scenario_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<SceneMode>();
    app.add_event::<SwitchPressed>();
    app.add_event::<BeaconToggled>();
    app.init_resource::<PointerHit>();
    app.insert_resource(ButtonInput::<MouseButton>::default());
    app.insert_resource(SoundBank::default());
    app.insert_resource(FxState::default());
    app.add_systems(
        Update,
        (
            handle_pointer_clicks,
            handle_switch_press,
            handle_beacon_toggle,
        )
            .chain(),
    );
    for mode in SceneMode::ALL {
        app.add_systems(OnEnter(mode), sync_mode_roots);
    }
    app.add_systems(OnEnter(SceneMode::Ocean), start_ocean_ambience);
    app.add_systems(OnExit(SceneMode::Ocean), ocean::reset_ocean_effect);
    app.add_systems(OnEnter(SceneMode::Mountains), start_mountain_ambience);
    app.add_systems(OnExit(SceneMode::Mountains), mountains::reset_mountain_effect);
    app.add_systems(OnExit(SceneMode::Acid), acid::reset_acid_effect);

    let world = app.world_mut();
    world.spawn((ModeRoot(SceneMode::Indoor), Visibility::Visible));
    world.spawn((ModeRoot(SceneMode::Ocean), Visibility::Hidden));
    world.spawn((ModeRoot(SceneMode::Mountains), Visibility::Hidden));
    world.spawn((ModeRoot(SceneMode::Acid), Visibility::Hidden));
    world.spawn((SnowField, Visibility::Hidden));
    for kind in WorldKind::ALL {
        world.spawn((
            SwitchButton::new(kind),
            ButtonTween::default(),
            Transform::default(),
        ));
    }
    app
}

/// Fires a desk button press and settles the resulting transition.
fn press(app: &mut App, world: WorldKind) {
    app.world_mut().send_event(SwitchPressed { world });
    app.update();
    app.update();
}

/// A left click routed through the picker result, then settled.
fn click(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.update();
    let mut input = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
    input.release(MouseButton::Left);
    input.clear();
    app.update();
}

fn click_beacon(app: &mut App, world: WorldKind) {
    app.world_mut().resource_mut::<PointerHit>().target =
        Some((Entity::PLACEHOLDER, PickTarget::Beacon(world)));
    click(app);
    app.world_mut().resource_mut::<PointerHit>().target = None;
}

fn mode(app: &App) -> SceneMode {
    *app.world().resource::<State<SceneMode>>().get()
}

fn playing(app: &App, channel: Channel) -> bool {
    app.world().resource::<SoundBank>().is_playing(channel)
}

fn visible_roots(app: &mut App) -> Vec<SceneMode> {
    let mut query = app.world_mut().query::<(&ModeRoot, &Visibility)>();
    query
        .iter(app.world())
        .filter(|(_, visibility)| **visibility == Visibility::Visible)
        .map(|(root, _)| root.0)
        .collect()
}

fn snow_visibility(app: &mut App) -> Visibility {
    let mut query = app
        .world_mut()
        .query_filtered::<&Visibility, With<SnowField>>();
    *query.single(app.world())
}

#[test]
fn pressing_a_button_switches_out_and_back() {
    let mut app = scenario_app();
    assert_eq!(mode(&app), SceneMode::Indoor);

    press(&mut app, WorldKind::Ocean);
    assert_eq!(mode(&app), SceneMode::Ocean);
    assert!(playing(&app, Channel::Water));
    assert_eq!(visible_roots(&mut app), vec![SceneMode::Ocean]);

    press(&mut app, WorldKind::Ocean);
    assert_eq!(mode(&app), SceneMode::Indoor);
    assert!(!playing(&app, Channel::Water));
    assert_eq!(visible_roots(&mut app), vec![SceneMode::Indoor]);
}

#[test]
fn switching_worlds_directly_swaps_ambience() {
    let mut app = scenario_app();
    press(&mut app, WorldKind::Ocean);
    press(&mut app, WorldKind::Mountains);

    assert_eq!(mode(&app), SceneMode::Mountains);
    assert!(!playing(&app, Channel::Water));
    assert!(playing(&app, Channel::Wind));
    assert_eq!(visible_roots(&mut app), vec![SceneMode::Mountains]);
}

#[test]
fn acid_world_enters_in_silence() {
    let mut app = scenario_app();
    press(&mut app, WorldKind::Acid);

    assert_eq!(mode(&app), SceneMode::Acid);
    for channel in Channel::ALL {
        assert!(!playing(&app, channel));
    }
}

#[test]
fn every_press_silences_all_channels_first() {
    let mut app = scenario_app();
    press(&mut app, WorldKind::Ocean);
    click_beacon(&mut app, WorldKind::Ocean);
    assert!(playing(&app, Channel::Whirlpool));

    // Switching away kills the ambience and the effect loop at once.
    press(&mut app, WorldKind::Acid);
    assert!(!playing(&app, Channel::Water));
    assert!(!playing(&app, Channel::Whirlpool));
}

#[test]
fn pressing_a_pad_starts_only_its_own_tween() {
    let mut app = scenario_app();
    press(&mut app, WorldKind::Acid);

    let mut tweens = app.world_mut().query::<(&SwitchButton, &ButtonTween)>();
    for (button, tween) in tweens.iter(app.world()) {
        assert_eq!(tween.playing, button.world == WorldKind::Acid);
    }
}

#[test]
fn clicking_a_pad_through_the_router_switches_mode() {
    let mut app = scenario_app();
    app.world_mut().resource_mut::<PointerHit>().target = Some((
        Entity::PLACEHOLDER,
        PickTarget::SwitchPad(WorldKind::Mountains),
    ));
    click(&mut app);
    assert_eq!(mode(&app), SceneMode::Mountains);
}

#[test]
fn bezel_and_empty_clicks_do_nothing() {
    let mut app = scenario_app();

    app.world_mut().resource_mut::<PointerHit>().target = Some((
        Entity::PLACEHOLDER,
        PickTarget::PadBezel(WorldKind::Ocean),
    ));
    click(&mut app);
    assert_eq!(mode(&app), SceneMode::Indoor);

    app.world_mut().resource_mut::<PointerHit>().target = None;
    click(&mut app);
    assert_eq!(mode(&app), SceneMode::Indoor);
    for channel in Channel::ALL {
        assert!(!playing(&app, channel));
    }
}

#[test]
fn beacons_only_respond_in_their_own_world() {
    let mut app = scenario_app();

    // From indoors the ocean beacon is inert.
    click_beacon(&mut app, WorldKind::Ocean);
    assert!(!app.world().resource::<FxState>().whirlpool.active);

    press(&mut app, WorldKind::Ocean);
    click_beacon(&mut app, WorldKind::Ocean);
    assert!(app.world().resource::<FxState>().whirlpool.active);
    assert!(playing(&app, Channel::Whirlpool));

    // The mountains beacon stays inert while the ocean is up.
    click_beacon(&mut app, WorldKind::Mountains);
    assert!(!app.world().resource::<FxState>().snow.active);
}

#[test]
fn toggling_twice_restores_and_restamps() {
    let mut app = scenario_app();
    press(&mut app, WorldKind::Ocean);

    click_beacon(&mut app, WorldKind::Ocean);
    let first = app.world().resource::<FxState>().whirlpool;
    assert!(first.active);

    click_beacon(&mut app, WorldKind::Ocean);
    let second = app.world().resource::<FxState>().whirlpool;
    assert!(!second.active);
    assert!(second.started_at >= first.started_at);
    assert!(!playing(&app, Channel::Whirlpool));
}

#[test]
fn leaving_a_world_shuts_its_effect_down() {
    let mut app = scenario_app();
    press(&mut app, WorldKind::Mountains);
    click_beacon(&mut app, WorldKind::Mountains);

    assert!(app.world().resource::<FxState>().snow.active);
    assert!(playing(&app, Channel::Snowfall));
    assert_eq!(snow_visibility(&mut app), Visibility::Inherited);

    press(&mut app, WorldKind::Mountains);
    assert!(!app.world().resource::<FxState>().snow.active);
    assert!(!playing(&app, Channel::Snowfall));
    assert_eq!(snow_visibility(&mut app), Visibility::Hidden);

    // Re-entering starts with the effect off.
    press(&mut app, WorldKind::Mountains);
    assert!(!app.world().resource::<FxState>().snow.active);
}

#[test]
fn ambience_never_layers_water_over_wind() {
    let mut app = scenario_app();
    let sequence = [
        WorldKind::Ocean,
        WorldKind::Mountains,
        WorldKind::Mountains,
        WorldKind::Ocean,
        WorldKind::Acid,
        WorldKind::Mountains,
        WorldKind::Ocean,
    ];
    for world in sequence {
        press(&mut app, world);
        assert!(!(playing(&app, Channel::Water) && playing(&app, Channel::Wind)));
        assert_eq!(visible_roots(&mut app).len(), 1);
    }
}
