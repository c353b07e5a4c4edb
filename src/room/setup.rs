use bevy::prelude::*;

use crate::interaction::components::{PickShape, PickTarget, Pickable};
use crate::scene_mode::{ModeRoot, SceneMode, WorldKind};

use super::buttons::{ButtonTween, PadLight, SwitchButton, PAD_REST_Y};

// Room shell
pub const ROOM_SIZE: f32 = 5.0;
pub const WALL_HEIGHT: f32 = 2.8;
pub const WALL_THICKNESS: f32 = 0.1;

// Table and buttons
const TABLE_TOP_Y: f32 = 0.5;
const BUTTON_Y: f32 = 0.52;
const PAD_RADIUS: f32 = 0.07;
const PAD_HEIGHT: f32 = 0.07;
const BEZEL_INNER: f32 = 0.03;
const BEZEL_OUTER: f32 = 0.11;

// Ceiling lamp
const LAMP_HEIGHT: f32 = 2.6;
const SWAY_RATE_X: f32 = 0.3;
const SWAY_ARC_X: f32 = 0.3;
const SWAY_RATE_Z: f32 = 0.6;
const SWAY_ARC_Z: f32 = 0.7;

/// Marker for the lamp root that sways from its ceiling anchor.
#[derive(Component)]
pub struct LampSwing;

/// Marker for the glowing bulb, used to attach the hum loop.
#[derive(Component)]
pub struct LampBulb;

pub fn setup_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Materials
    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.42, 0.29, 0.17),
        perceptual_roughness: 0.9,
        ..default()
    });
    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.55, 0.53, 0.47),
        ..default()
    });
    let table_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.36, 0.25, 0.15),
        perceptual_roughness: 0.7,
        ..default()
    });
    let bezel_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.2, 0.2, 0.22),
        metallic: 0.8,
        perceptual_roughness: 0.4,
        ..default()
    });
    let fitting_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.1, 0.1, 0.1),
        metallic: 0.9,
        perceptual_roughness: 0.3,
        ..default()
    });
    let bulb_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 5.0,
        ..default()
    });

    let wall_mesh_x = meshes.add(Cuboid::new(WALL_THICKNESS, WALL_HEIGHT, ROOM_SIZE));
    let wall_mesh_z = meshes.add(Cuboid::new(ROOM_SIZE, WALL_HEIGHT, WALL_THICKNESS));

    // The floor stays under the viewer's feet in every mode. There is
    // no ceiling; the lamp hangs into the open.
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ROOM_SIZE, ROOM_SIZE))),
        MeshMaterial3d(floor_material),
        Transform::default(),
        Name::new("roomFloor"),
    ));

    // Only the walls detach when a world takes over.
    commands
        .spawn((
            ModeRoot(SceneMode::Indoor),
            Transform::default(),
            Visibility::Visible,
            Name::new("walls"),
        ))
        .with_children(|walls| {
            walls.spawn((
                Mesh3d(wall_mesh_z.clone()),
                MeshMaterial3d(wall_material.clone()),
                Transform::from_xyz(0.0, WALL_HEIGHT / 2.0, -ROOM_SIZE / 2.0),
            ));
            walls.spawn((
                Mesh3d(wall_mesh_z),
                MeshMaterial3d(wall_material.clone()),
                Transform::from_xyz(0.0, WALL_HEIGHT / 2.0, ROOM_SIZE / 2.0),
            ));
            walls.spawn((
                Mesh3d(wall_mesh_x.clone()),
                MeshMaterial3d(wall_material.clone()),
                Transform::from_xyz(-ROOM_SIZE / 2.0, WALL_HEIGHT / 2.0, 0.0),
            ));
            walls.spawn((
                Mesh3d(wall_mesh_x),
                MeshMaterial3d(wall_material),
                Transform::from_xyz(ROOM_SIZE / 2.0, WALL_HEIGHT / 2.0, 0.0),
            ));
        });

    // The table and its buttons stay put in every mode.
    let leg_mesh = meshes.add(ConicalFrustum {
        radius_top: 0.02,
        radius_bottom: 0.01,
        height: 0.5,
    });
    let bezel_mesh = meshes.add(Torus::new(BEZEL_INNER, BEZEL_OUTER));
    let pad_mesh = meshes.add(Cylinder::new(PAD_RADIUS, PAD_HEIGHT));

    commands
        .spawn((Transform::default(), Visibility::Visible, Name::new("table")))
        .with_children(|table| {
            table.spawn((
                Mesh3d(meshes.add(Cuboid::new(1.4, 0.03, 0.5))),
                MeshMaterial3d(table_material.clone()),
                Transform::from_xyz(0.0, TABLE_TOP_Y, 0.0),
            ));
            for (x, z) in [(-0.65, -0.2), (-0.65, 0.2), (0.65, -0.2), (0.65, 0.2)] {
                table.spawn((
                    Mesh3d(leg_mesh.clone()),
                    MeshMaterial3d(table_material.clone()),
                    Transform::from_xyz(x, TABLE_TOP_Y / 2.0, z),
                ));
            }

            for (world, x, pad_name) in [
                (WorldKind::Ocean, -0.4, "swampOceanButtonPad"),
                (WorldKind::Mountains, 0.0, "grassMountainsButtonPad"),
                (WorldKind::Acid, 0.4, "acidButtonPad"),
            ] {
                let button = SwitchButton::new(world);
                let glow = button.glow;
                let pad_material = materials.add(StandardMaterial {
                    base_color: glow,
                    emissive: LinearRgba::BLACK,
                    ..default()
                });

                table
                    .spawn((
                        Transform::from_xyz(x, BUTTON_Y, 0.0),
                        Visibility::Visible,
                        Name::new(format!("button-{world:?}")),
                    ))
                    .with_children(|group| {
                        let mut bezel = group.spawn((
                            Mesh3d(bezel_mesh.clone()),
                            MeshMaterial3d(bezel_material.clone()),
                            Transform::default(),
                        ));
                        // Only the ocean bezel takes part in picking, as a
                        // pure occluder in front of its pad.
                        if world == WorldKind::Ocean {
                            bezel.insert((
                                Pickable {
                                    target: PickTarget::PadBezel(world),
                                    shape: PickShape::Box {
                                        half_extents: Vec3::new(
                                            BEZEL_OUTER,
                                            (BEZEL_OUTER - BEZEL_INNER) / 2.0,
                                            BEZEL_OUTER,
                                        ),
                                    },
                                },
                                Name::new("swampOceanButtonBase"),
                            ));
                        }

                        group.spawn((
                            button,
                            ButtonTween::default(),
                            Pickable {
                                target: PickTarget::SwitchPad(world),
                                shape: PickShape::Box {
                                    half_extents: Vec3::new(
                                        PAD_RADIUS,
                                        PAD_HEIGHT / 2.0,
                                        PAD_RADIUS,
                                    ),
                                },
                            },
                            Mesh3d(pad_mesh.clone()),
                            MeshMaterial3d(pad_material),
                            Transform::from_xyz(0.0, PAD_REST_Y, 0.0),
                            Name::new(pad_name),
                        ));

                        group.spawn((
                            PadLight::new(world),
                            PointLight {
                                color: glow,
                                intensity: 0.0,
                                range: 0.8,
                                shadows_enabled: false,
                                ..default()
                            },
                            Transform::from_xyz(0.0, 0.3, 0.0),
                        ));
                    });
            }
        });

    // Swinging ceiling lamp, lit in every mode.
    commands
        .spawn((
            LampSwing,
            Transform::from_xyz(0.0, LAMP_HEIGHT, 0.0),
            Visibility::Visible,
            Name::new("lamp"),
        ))
        .with_children(|lamp| {
            lamp.spawn((
                Mesh3d(meshes.add(Cylinder::new(0.01, 1.5))),
                MeshMaterial3d(fitting_material.clone()),
                Transform::from_xyz(0.0, -0.75, 0.0),
            ));
            // Small joint where the wire meets the shade.
            lamp.spawn((
                Mesh3d(meshes.add(Sphere::new(0.02))),
                MeshMaterial3d(fitting_material.clone()),
                Transform::from_xyz(0.0, -1.4, 0.0),
            ));
            lamp.spawn((
                Mesh3d(meshes.add(ConicalFrustum {
                    radius_top: 0.01,
                    radius_bottom: 0.1,
                    height: 0.2,
                })),
                MeshMaterial3d(fitting_material),
                Transform::from_xyz(0.0, -1.5, 0.0),
            ));
            lamp.spawn((
                LampBulb,
                Mesh3d(meshes.add(Sphere::new(0.04))),
                MeshMaterial3d(bulb_material),
                Transform::from_xyz(0.0, -1.57, 0.0),
            ));
            lamp.spawn((
                SpotLight {
                    color: Color::srgb(0.86, 0.95, 0.96),
                    intensity: 2_000_000.0,
                    range: 50.0,
                    radius: 0.02,
                    shadows_enabled: true,
                    inner_angle: 0.04,
                    outer_angle: 0.2,
                    ..default()
                },
                Transform::from_xyz(0.0, -1.45, 0.0).looking_to(Vec3::NEG_Y, Vec3::Z),
            ));
        });
}

/// Sways the lamp from its anchor, in every mode.
pub fn swing_lamp(time: Res<Time>, mut lamps: Query<&mut Transform, With<LampSwing>>) {
    let t = time.elapsed_secs();
    for mut transform in lamps.iter_mut() {
        transform.rotation = Quat::from_euler(
            EulerRot::XYZ,
            (t * SWAY_RATE_X).sin() * SWAY_ARC_X,
            0.0,
            (t * SWAY_RATE_Z).cos() * SWAY_ARC_Z,
        );
    }
}
