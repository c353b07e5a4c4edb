use bevy::core_pipeline::smaa::Smaa;
use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use crate::settings::Settings;

/// Where the viewer stands, just behind the desk.
const VIEWPOINT: Vec3 = Vec3::new(0.0, 1.0, 1.0);
const FOV: f32 = std::f32::consts::FRAC_PI_4;
const NEAR: f32 = 0.1;
const FAR: f32 = 200.0;
/// How quickly the view eases toward the drag target.
const DAMPING: f32 = 12.0;
const PITCH_LIMIT: f32 = 1.55;
/// Initial downward tilt toward the desk.
const START_PITCH: f32 = -0.45;

/// Damped yaw/pitch look from a fixed viewpoint. No pan, no zoom.
#[derive(Component)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub target_yaw: f32,
    pub target_pitch: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: START_PITCH,
            target_yaw: 0.0,
            target_pitch: START_PITCH,
        }
    }
}

pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV,
            near: NEAR,
            far: FAR,
            ..default()
        }),
        Msaa::Off,
        Smaa::default(),
        SpatialListener::default(),
        OrbitCamera::default(),
        Transform::from_translation(VIEWPOINT)
            .with_rotation(Quat::from_euler(EulerRot::YXZ, 0.0, START_PITCH, 0.0)),
    ));
}

/// Left drag steers the look target; the view eases after it.
pub fn orbit_look(
    time: Res<Time>,
    settings: Res<Settings>,
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut cameras: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    let Ok((mut transform, mut camera)) = cameras.get_single_mut() else {
        mouse_motion.clear();
        return;
    };

    if mouse_input.pressed(MouseButton::Left) {
        for event in mouse_motion.read() {
            camera.target_yaw -= event.delta.x * settings.mouse_sensitivity;
            camera.target_pitch -= event.delta.y * settings.mouse_sensitivity;
            camera.target_pitch = camera.target_pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    } else {
        mouse_motion.clear();
    }

    let blend = (DAMPING * time.delta_secs()).min(1.0);
    camera.yaw += (camera.target_yaw - camera.yaw) * blend;
    camera.pitch += (camera.target_pitch - camera.pitch) * blend;
    transform.rotation = Quat::from_euler(EulerRot::YXZ, camera.yaw, camera.pitch, 0.0);
}
