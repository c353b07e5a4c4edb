use std::f32::consts::TAU;

use bevy::prelude::*;
use bevy::render::{mesh::PrimitiveTopology, render_asset::RenderAssetUsages};

use crate::audio::{Channel, SoundBank};
use crate::fx::materials::{HillsMaterial, SkyMaterial, SnowMaterial};
use crate::fx::FxState;
use crate::interaction::components::{PickShape, PickTarget, Pickable};
use crate::scene_mode::{ModeRoot, SceneMode, WorldKind};

use super::components::{
    beacon_mesh, Beacon, BeaconLight, SnowField, BEACON_BASE_Y, BEACON_RADIUS,
};

const GROUND_Y: f32 = -1.0;
const SKY_RADIUS: f32 = 99.0;
/// Sunk low so only the upper half of the gradient shows over the ridges.
const SKY_SINK_Y: f32 = -50.0;
const HILLS_SIZE: f32 = 200.0;
const TOWER_Z: f32 = -50.0;
/// Tall enough to stay rooted where the terrain dips below the plane.
const TOWER_HEIGHT: f32 = 20.0;

const SPIN_YAW: f32 = 0.2;
const SPIN_ROLL: f32 = 0.7;

// Snow field bounds; the shader wraps flakes through this slab forever.
const SNOW_FLAKES: usize = 8_000;
const SNOW_EXTENT: f32 = 75.0;
const SNOW_FLOOR: f32 = -15.0;
const SNOW_CEILING: f32 = 55.0;
const FLAKE_SIZE: f32 = 0.12;

pub fn setup_mountains(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut hills: ResMut<Assets<HillsMaterial>>,
    mut skies: ResMut<Assets<SkyMaterial>>,
    mut snow: ResMut<Assets<SnowMaterial>>,
) {
    let brick = materials.add(StandardMaterial {
        base_color: Color::srgb(0.48, 0.2, 0.16),
        perceptual_roughness: 0.85,
        ..default()
    });
    let beacon_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 2.0,
        ..default()
    });

    commands
        .spawn((
            ModeRoot(SceneMode::Mountains),
            Transform::default(),
            Visibility::Hidden,
            Name::new("grassMountains"),
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
                            .size(HILLS_SIZE, HILLS_SIZE)
                            .subdivisions(128),
                    ),
                ),
                MeshMaterial3d(hills.add(HillsMaterial::default())),
                Transform::from_xyz(0.0, GROUND_Y, 0.0),
            ));
            world.spawn((
                DirectionalLight {
                    color: Color::srgb(1.0, 1.0, 0.84),
                    illuminance: 10_000.0,
                    shadows_enabled: true,
                    ..default()
                },
                Transform::from_xyz(3.0, 1.0, -2.0).looking_at(Vec3::ZERO, Vec3::Y),
            ));

            // Brick lighthouse up on the ridge, rooted well below it.
            world.spawn((
                Mesh3d(meshes.add(ConicalFrustum {
                    radius_top: 2.0,
                    radius_bottom: 3.0,
                    height: TOWER_HEIGHT,
                })),
                MeshMaterial3d(brick),
                Transform::from_xyz(0.0, GROUND_Y, TOWER_Z),
            ));
            world.spawn((
                Beacon::new(WorldKind::Mountains),
                Pickable {
                    target: PickTarget::Beacon(WorldKind::Mountains),
                    shape: PickShape::Sphere {
                        radius: BEACON_RADIUS,
                    },
                },
                Mesh3d(meshes.add(beacon_mesh())),
                MeshMaterial3d(beacon_material),
                Transform::from_xyz(0.0, BEACON_BASE_Y, TOWER_Z),
                Name::new("lightHouse2Top"),
            ));
            world.spawn((
                BeaconLight::new(WorldKind::Mountains),
                PointLight {
                    color: Color::srgb(0.3, 0.5, 1.0),
                    intensity: 60_000.0,
                    range: 50.0,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::from_xyz(0.0, BEACON_BASE_Y, TOWER_Z + 2.5),
            ));

            // Snow stays hidden until the beacon turns it on.
            world.spawn((
                SnowField,
                Mesh3d(meshes.add(snow_mesh())),
                MeshMaterial3d(snow.add(SnowMaterial::default())),
                Transform::default(),
                Visibility::Hidden,
                Name::new("snow"),
            ));
        });
}

fn lcg(state: &mut u32) -> f32 {
    *state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    (*state >> 8) as f32 / (1 << 24) as f32
}

/// One small triangle per flake, scattered through the snow slab.
fn snow_mesh() -> Mesh {
    let mut positions = Vec::with_capacity(SNOW_FLAKES * 3);
    let mut state = 0x2545_f491_u32;
    for _ in 0..SNOW_FLAKES {
        let x = (lcg(&mut state) - 0.5) * 2.0 * SNOW_EXTENT;
        let y = SNOW_FLOOR + lcg(&mut state) * (SNOW_CEILING - SNOW_FLOOR);
        let z = (lcg(&mut state) - 0.5) * 2.0 * SNOW_EXTENT;
        positions.push([x, y, z]);
        positions.push([x + FLAKE_SIZE, y + FLAKE_SIZE * 1.5, z]);
        positions.push([x - FLAKE_SIZE, y + FLAKE_SIZE * 1.5, z]);
    }
    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
}

pub fn animate_mountains(time: Res<Time>, mut beacons: Query<(&Beacon, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (beacon, mut transform) in beacons.iter_mut() {
        if beacon.world != WorldKind::Mountains {
            continue;
        }
        transform.rotation = Quat::from_euler(
            EulerRot::XYZ,
            (t * SPIN_ROLL) % TAU,
            (t * SPIN_YAW) % TAU,
            0.0,
        );
    }
}

/// Leaving the mountains stops the snowfall and hides the flakes.
pub fn reset_mountain_effect(
    mut commands: Commands,
    mut fx: ResMut<FxState>,
    mut sounds: ResMut<SoundBank>,
    mut snow_fields: Query<&mut Visibility, With<SnowField>>,
) {
    fx.snow.active = false;
    sounds.stop(&mut commands, Channel::Snowfall);
    for mut visibility in snow_fields.iter_mut() {
        *visibility = Visibility::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snow_mesh_has_a_triangle_per_flake() {
        let mesh = snow_mesh();
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|attr| attr.as_float3())
            .unwrap();
        assert_eq!(positions.len(), SNOW_FLAKES * 3);
    }

    #[test]
    fn snow_flakes_stay_inside_the_slab() {
        let mesh = snow_mesh();
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|attr| attr.as_float3())
            .unwrap();
        for [x, y, z] in positions {
            assert!(x.abs() <= SNOW_EXTENT + FLAKE_SIZE);
            assert!(z.abs() <= SNOW_EXTENT + FLAKE_SIZE);
            assert!(*y >= SNOW_FLOOR && *y <= SNOW_CEILING + FLAKE_SIZE * 1.5);
        }
    }
}
