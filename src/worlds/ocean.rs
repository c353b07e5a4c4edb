use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::audio::{Channel, SoundBank};
use crate::fx::materials::{SkyMaterial, SunMaterial, WaterMaterial};
use crate::fx::FxState;
use crate::interaction::components::{PickShape, PickTarget, Pickable};
use crate::scene_mode::{ModeRoot, SceneMode, WorldKind};

use super::components::{
    beacon_mesh, Beacon, BeaconLight, OceanSun, SunDisc, BEACON_BASE_Y, BEACON_RADIUS,
};

const GROUND_Y: f32 = -1.0;
const SKY_RADIUS: f32 = 99.0;
/// The dome sits below the horizon so its gradient wraps the water edge.
const SKY_SINK_Y: f32 = -20.0;
const WATER_SIZE: f32 = 205.0;
/// Dense enough grid to resolve the ripple wavelength.
const WATER_SUBDIVISIONS: u32 = 512;
const SUN_RADIUS: f32 = 15.0;
const SUN_ORBIT_RATE: f32 = 0.1;
const TOWER_Z: f32 = -50.0;
const TOWER_HEIGHT: f32 = 10.0;

// Beacon spin rates, radians per second.
const SPIN_YAW: f32 = 0.2;
const SPIN_ROLL: f32 = 0.7;
/// Flat fast spin while the whirlpool churns below.
const WHIRLPOOL_SPIN_YAW: f32 = 12.2;

pub fn setup_ocean(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut water: ResMut<Assets<WaterMaterial>>,
    mut skies: ResMut<Assets<SkyMaterial>>,
    mut suns: ResMut<Assets<SunMaterial>>,
) {
    let rock = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.33, 0.3),
        perceptual_roughness: 0.95,
        ..default()
    });
    let beacon_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 2.0,
        ..default()
    });

    commands
        .spawn((
            ModeRoot(SceneMode::Ocean),
            Transform::default(),
            Visibility::Hidden,
            Name::new("swampOcean"),
        ))
        .with_children(|world| {
            world.spawn((
                Mesh3d(meshes.add(Sphere::new(SKY_RADIUS).mesh().uv(32, 18))),
                MeshMaterial3d(skies.add(SkyMaterial::default())),
                Transform::from_xyz(0.0, SKY_SINK_Y, 0.0),
            ));
            world.spawn((
                Mesh3d(
                    meshes.add(
                        Plane3d::default()
                            .mesh()
                            .size(WATER_SIZE, WATER_SIZE)
                            .subdivisions(WATER_SUBDIVISIONS),
                    ),
                ),
                MeshMaterial3d(water.add(WaterMaterial::default())),
                Transform::from_xyz(0.0, GROUND_Y, 0.0),
            ));
            world.spawn((
                SunDisc,
                Mesh3d(meshes.add(Circle::new(SUN_RADIUS))),
                MeshMaterial3d(suns.add(SunMaterial::default())),
                Transform::from_xyz(0.0, 20.0, 40.0),
            ));
            world.spawn((
                OceanSun,
                DirectionalLight {
                    color: Color::srgb(0.71, 0.92, 0.96),
                    illuminance: 6_000.0,
                    shadows_enabled: true,
                    ..default()
                },
                Transform::from_xyz(0.0, 3.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
            ));

            // Rock lighthouse far out on the water.
            world.spawn((
                Mesh3d(meshes.add(ConicalFrustum {
                    radius_top: 2.0,
                    radius_bottom: 3.0,
                    height: TOWER_HEIGHT,
                })),
                MeshMaterial3d(rock),
                Transform::from_xyz(0.0, GROUND_Y + TOWER_HEIGHT / 2.0, TOWER_Z),
            ));
            world.spawn((
                Beacon::new(WorldKind::Ocean),
                Pickable {
                    target: PickTarget::Beacon(WorldKind::Ocean),
                    shape: PickShape::Sphere {
                        radius: BEACON_RADIUS,
                    },
                },
                Mesh3d(meshes.add(beacon_mesh())),
                MeshMaterial3d(beacon_material),
                Transform::from_xyz(0.0, BEACON_BASE_Y, TOWER_Z),
                Name::new("lightHouseTop"),
            ));
            world.spawn((
                BeaconLight::new(WorldKind::Ocean),
                PointLight {
                    color: Color::srgb(0.3, 0.5, 1.0),
                    intensity: 60_000.0,
                    range: 50.0,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::from_xyz(0.0, BEACON_BASE_Y, TOWER_Z + 2.5),
            ));
        });
}

/// Orbits the sun and spins the beacon. The whirlpool sends the beacon
/// into a fast flat spin while it is active, tilt zeroed.
pub fn animate_ocean(
    time: Res<Time>,
    fx: Res<FxState>,
    mut sun_lights: Query<&mut Transform, (With<OceanSun>, Without<SunDisc>, Without<Beacon>)>,
    mut sun_discs: Query<&mut Transform, (With<SunDisc>, Without<Beacon>)>,
    mut beacons: Query<(&Beacon, &mut Transform)>,
) {
    let t = time.elapsed_secs();
    let phase = t * SUN_ORBIT_RATE;

    for mut transform in sun_lights.iter_mut() {
        transform.translation = Vec3::new(phase.sin() * 5.0, 3.0, phase.cos() * 5.0);
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }
    for mut transform in sun_discs.iter_mut() {
        transform.translation = Vec3::new(phase.sin() * 40.0, 20.0, phase.cos() * 40.0);
        transform.rotation = Quat::from_rotation_y(phase);
    }
    for (beacon, mut transform) in beacons.iter_mut() {
        if beacon.world != WorldKind::Ocean {
            continue;
        }
        transform.rotation = if fx.whirlpool.active {
            Quat::from_rotation_y((t * WHIRLPOOL_SPIN_YAW) % TAU)
        } else {
            Quat::from_euler(
                EulerRot::XYZ,
                (t * SPIN_ROLL) % TAU,
                (t * SPIN_YAW) % TAU,
                0.0,
            )
        };
    }
}

/// Leaving the ocean always shuts the whirlpool down.
pub fn reset_ocean_effect(
    mut commands: Commands,
    mut fx: ResMut<FxState>,
    mut sounds: ResMut<SoundBank>,
) {
    fx.whirlpool.active = false;
    sounds.stop(&mut commands, Channel::Whirlpool);
}
