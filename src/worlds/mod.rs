pub mod acid;
pub mod components;
pub mod mountains;
pub mod ocean;

use bevy::prelude::*;

pub use components::{Beacon, BeaconLight, SnowField};

use crate::audio::{Channel, SoundBank};
use crate::interaction::components::{PickTarget, PointerHit};
use crate::interaction::picker::update_pointer_hit;
use crate::scene_mode::SceneMode;

use components::{BEACON_BASE_Y, BOB_AMPLITUDE};

/// Warm tint shared by the ambient term in every mode.
const AMBIENT_COLOR: Color = Color::srgb(0.96, 0.97, 0.84);
const AMBIENT_INDOOR: f32 = 50.0;
const AMBIENT_OCEAN: f32 = 100.0;
const AMBIENT_MOUNTAINS: f32 = 750.0;
const AMBIENT_ACID: f32 = 50.0;

pub struct WorldsPlugin;

impl Plugin for WorldsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(AmbientLight {
            color: AMBIENT_COLOR,
            brightness: AMBIENT_INDOOR,
        })
        .add_systems(
            Startup,
            (ocean::setup_ocean, mountains::setup_mountains, acid::setup_acid),
        )
        .add_systems(OnEnter(SceneMode::Ocean), start_ocean_ambience)
        .add_systems(OnExit(SceneMode::Ocean), ocean::reset_ocean_effect)
        .add_systems(OnEnter(SceneMode::Mountains), start_mountain_ambience)
        .add_systems(OnExit(SceneMode::Mountains), mountains::reset_mountain_effect)
        .add_systems(OnExit(SceneMode::Acid), acid::reset_acid_effect)
        .add_systems(
            Update,
            (
                bob_beacons,
                highlight_beacons.after(update_pointer_hit),
                ocean::animate_ocean.run_if(in_state(SceneMode::Ocean)),
                mountains::animate_mountains.run_if(in_state(SceneMode::Mountains)),
            ),
        );
        // The acid tube has no frame animation of its own; its motion
        // lives in the tube shader.
        for mode in SceneMode::ALL {
            app.add_systems(OnEnter(mode), apply_mode_lighting);
        }
    }
}

/// The room stays dim, the mountains get full daylight.
fn apply_mode_lighting(mode: Res<State<SceneMode>>, mut ambient: ResMut<AmbientLight>) {
    ambient.brightness = match mode.get() {
        SceneMode::Indoor => AMBIENT_INDOOR,
        SceneMode::Ocean => AMBIENT_OCEAN,
        SceneMode::Mountains => AMBIENT_MOUNTAINS,
        SceneMode::Acid => AMBIENT_ACID,
    };
}

pub fn start_ocean_ambience(mut commands: Commands, mut sounds: ResMut<SoundBank>) {
    sounds.play_loop(&mut commands, Channel::Water);
}

pub fn start_mountain_ambience(mut commands: Commands, mut sounds: ResMut<SoundBank>) {
    sounds.play_loop(&mut commands, Channel::Wind);
}

/// All beacons float up and down, whichever world is showing.
pub fn bob_beacons(time: Res<Time>, mut beacons: Query<&mut Transform, With<Beacon>>) {
    let t = time.elapsed_secs();
    for mut transform in beacons.iter_mut() {
        transform.translation.y = BEACON_BASE_Y + t.sin() * BOB_AMPLITUDE;
    }
}

/// Beacons burn red under the cursor and sit white otherwise. Their
/// glow lights follow along.
pub fn highlight_beacons(
    hit: Res<PointerHit>,
    beacons: Query<(&Beacon, &MeshMaterial3d<StandardMaterial>)>,
    mut lights: Query<(&BeaconLight, &mut PointLight)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let hovered = match hit.target {
        Some((_, PickTarget::Beacon(world))) => Some(world),
        _ => None,
    };

    for (beacon, handle) in beacons.iter() {
        let Some(material) = materials.get_mut(&handle.0) else {
            continue;
        };
        material.emissive = if hovered == Some(beacon.world) {
            LinearRgba::RED * beacon.hover_emissive
        } else {
            LinearRgba::WHITE * beacon.idle_emissive
        };
    }

    for (light, mut point) in lights.iter_mut() {
        if hovered == Some(light.world) {
            point.color = Color::srgb(1.0, 0.0, 0.0);
            point.intensity = light.hover_lumens;
        } else {
            point.color = Color::WHITE;
            point.intensity = light.idle_lumens;
        }
    }
}
