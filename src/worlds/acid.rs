use bevy::prelude::*;

use crate::audio::{Channel, SoundBank};
use crate::fx::materials::TubeMaterial;
use crate::fx::FxState;
use crate::interaction::components::{PickShape, PickTarget, Pickable};
use crate::scene_mode::{ModeRoot, SceneMode, WorldKind};

use super::components::{beacon_mesh, Beacon, BeaconLight, BEACON_BASE_Y, BEACON_RADIUS};

// Torus the whole world sits inside: ring radius 10, tube radius 8.
const TUBE_INNER: f32 = 2.0;
const TUBE_OUTER: f32 = 18.0;
const TUBE_Y: f32 = -2.5;

const GROUND_Y: f32 = -1.0;
const TOWER_Z: f32 = -50.0;
/// Rooted deep; the tube floor curves away under it.
const TOWER_HEIGHT: f32 = 20.0;

pub fn setup_acid(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut tubes: ResMut<Assets<TubeMaterial>>,
) {
    let tiles = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.78, 0.72),
        perceptual_roughness: 0.5,
        ..default()
    });
    // This beacon only glows under the cursor.
    let beacon_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::BLACK,
        ..default()
    });

    commands
        .spawn((
            ModeRoot(SceneMode::Acid),
            Transform::default(),
            Visibility::Hidden,
            Name::new("acidTube"),
        ))
        .with_children(|world| {
            world.spawn((
                Mesh3d(meshes.add(Torus::new(TUBE_INNER, TUBE_OUTER))),
                MeshMaterial3d(tubes.add(TubeMaterial::default())),
                Transform::from_xyz(0.0, TUBE_Y, 0.0)
                    .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2)),
            ));
            world.spawn((
                DirectionalLight {
                    color: Color::WHITE,
                    illuminance: 5_000.0,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::from_xyz(1.0, 5.0, 2.0).looking_at(Vec3::ZERO, Vec3::Y),
            ));

            // Tiled lighthouse at the far end of the tube.
            world.spawn((
                Mesh3d(meshes.add(ConicalFrustum {
                    radius_top: 2.0,
                    radius_bottom: 3.0,
                    height: TOWER_HEIGHT,
                })),
                MeshMaterial3d(tiles),
                Transform::from_xyz(0.0, GROUND_Y, TOWER_Z),
            ));
            world.spawn((
                Beacon::new(WorldKind::Acid),
                Pickable {
                    target: PickTarget::Beacon(WorldKind::Acid),
                    shape: PickShape::Sphere {
                        radius: BEACON_RADIUS,
                    },
                },
                Mesh3d(meshes.add(beacon_mesh())),
                MeshMaterial3d(beacon_material),
                Transform::from_xyz(0.0, BEACON_BASE_Y, TOWER_Z),
                Name::new("lightHouse3Top"),
            ));
            world.spawn((
                BeaconLight::new(WorldKind::Acid),
                PointLight {
                    color: Color::srgb(0.3, 0.5, 1.0),
                    intensity: 60_000.0,
                    range: 50.0,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::from_xyz(0.0, BEACON_BASE_Y, TOWER_Z + 6.0),
            ));
        });
}

/// Leaving the tube silences the drone and stills the shader.
pub fn reset_acid_effect(
    mut commands: Commands,
    mut fx: ResMut<FxState>,
    mut sounds: ResMut<SoundBank>,
) {
    fx.acid.active = false;
    sounds.stop(&mut commands, Channel::Drone);
}
