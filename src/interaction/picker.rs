use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::components::{PickShape, PickTarget, Pickable, PointerHit};

/// Casts a ray through the cursor and records the nearest pickable it
/// crosses. Runs before anything that consumes hover or click state.
pub fn update_pointer_hit(
    mut hit: ResMut<PointerHit>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    pickables: Query<(Entity, &Pickable, &GlobalTransform, &InheritedVisibility)>,
) {
    hit.target = None;
    hit.distance = 0.0;

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let candidates = pickables.iter().map(|(entity, pickable, transform, visibility)| {
        (entity, pickable, transform, visibility.get())
    });
    if let Some((entity, target, distance)) =
        closest_pick(ray.origin, ray.direction.as_vec3(), candidates)
    {
        hit.target = Some((entity, target));
        hit.distance = distance;
    }
}

/// Nearest visible shape along the ray. Hidden targets cannot be hit.
pub(crate) fn closest_pick<'a>(
    origin: Vec3,
    direction: Vec3,
    candidates: impl Iterator<Item = (Entity, &'a Pickable, &'a GlobalTransform, bool)>,
) -> Option<(Entity, PickTarget, f32)> {
    let mut closest: Option<(Entity, PickTarget, f32)> = None;
    for (entity, pickable, transform, visible) in candidates {
        if !visible {
            continue;
        }
        let t = match pickable.shape {
            PickShape::Sphere { radius } => {
                ray_sphere_hit_t(origin, direction, transform.translation(), radius)
            }
            PickShape::Box { half_extents } => {
                ray_obb_hit_t(origin, direction, transform, half_extents)
            }
        };
        let Some(t) = t else {
            continue;
        };
        if closest.map_or(true, |(_, _, best)| t < best) {
            closest = Some((entity, pickable.target, t));
        }
    }
    closest
}

fn ray_obb_hit_t(
    origin: Vec3,
    direction: Vec3,
    transform: &GlobalTransform,
    half_extents: Vec3,
) -> Option<f32> {
    let inv = transform.compute_matrix().inverse();
    let local_origin = inv.transform_point3(origin);
    let local_direction = inv.transform_vector3(direction);
    ray_aabb_hit_t(local_origin, local_direction, -half_extents, half_extents)
}

/// Slab method; returns the nearest non-negative t.
fn ray_aabb_hit_t(origin: Vec3, direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        if direction[axis] == 0.0 {
            if origin[axis] < min[axis] || origin[axis] > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / direction[axis];
        let mut t0 = (min[axis] - origin[axis]) * inv;
        let mut t1 = (max[axis] - origin[axis]) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 {
        return None;
    }
    Some(if t_enter >= 0.0 { t_enter } else { t_exit })
}

fn ray_sphere_hit_t(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_origin = origin - center;
    let a = direction.dot(direction);
    let b = 2.0 * to_origin.dot(direction);
    let c = to_origin.dot(to_origin) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let near = (-b - sqrt_d) / (2.0 * a);
    if near >= 0.0 {
        return Some(near);
    }
    let far = (-b + sqrt_d) / (2.0 * a);
    (far >= 0.0).then_some(far)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene_mode::WorldKind;

    #[test]
    fn slab_hit_from_outside() {
        let t = ray_aabb_hit_t(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::NEG_Z,
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert_eq!(t, Some(4.0));
    }

    #[test]
    fn slab_miss_when_box_is_behind() {
        let t = ray_aabb_hit_t(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::Z,
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert!(t.is_none());
    }

    #[test]
    fn slab_parallel_ray_outside_misses() {
        let t = ray_aabb_hit_t(
            Vec3::new(5.0, 0.0, 5.0),
            Vec3::NEG_Z,
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert!(t.is_none());
    }

    #[test]
    fn sphere_hit_and_miss() {
        let t = ray_sphere_hit_t(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, -10.0), 2.0);
        assert_eq!(t, Some(8.0));

        let miss = ray_sphere_hit_t(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(10.0, 0.0, -10.0), 2.0);
        assert!(miss.is_none());
    }

    #[test]
    fn ray_starting_inside_a_sphere_still_hits() {
        let t = ray_sphere_hit_t(Vec3::ZERO, Vec3::NEG_Z, Vec3::ZERO, 2.0);
        assert_eq!(t, Some(2.0));
    }

    #[test]
    fn nearest_candidate_wins() {
        let pad = Pickable {
            target: PickTarget::SwitchPad(WorldKind::Ocean),
            shape: PickShape::Box {
                half_extents: Vec3::splat(0.5),
            },
        };
        let beacon = Pickable {
            target: PickTarget::Beacon(WorldKind::Ocean),
            shape: PickShape::Sphere { radius: 0.5 },
        };
        let near = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, -5.0));
        let far = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, -9.0));

        let candidates = [
            (Entity::from_raw(1), &beacon, &far, true),
            (Entity::from_raw(2), &pad, &near, true),
        ];
        let (entity, target, distance) =
            closest_pick(Vec3::ZERO, Vec3::NEG_Z, candidates.into_iter()).unwrap();
        assert_eq!(entity, Entity::from_raw(2));
        assert_eq!(target, PickTarget::SwitchPad(WorldKind::Ocean));
        assert!((distance - 4.5).abs() < 1e-4);
    }

    #[test]
    fn hidden_candidates_are_skipped() {
        let pad = Pickable {
            target: PickTarget::SwitchPad(WorldKind::Ocean),
            shape: PickShape::Box {
                half_extents: Vec3::splat(0.5),
            },
        };
        let beacon = Pickable {
            target: PickTarget::Beacon(WorldKind::Mountains),
            shape: PickShape::Sphere { radius: 0.5 },
        };
        let near = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, -5.0));
        let far = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, -9.0));

        let candidates = [
            (Entity::from_raw(1), &pad, &near, false),
            (Entity::from_raw(2), &beacon, &far, true),
        ];
        let (_, target, _) =
            closest_pick(Vec3::ZERO, Vec3::NEG_Z, candidates.into_iter()).unwrap();
        assert_eq!(target, PickTarget::Beacon(WorldKind::Mountains));
    }

    #[test]
    fn occluder_in_front_shadows_the_pad() {
        let bezel = Pickable {
            target: PickTarget::PadBezel(WorldKind::Ocean),
            shape: PickShape::Box {
                half_extents: Vec3::splat(0.5),
            },
        };
        let pad = Pickable {
            target: PickTarget::SwitchPad(WorldKind::Ocean),
            shape: PickShape::Box {
                half_extents: Vec3::splat(0.5),
            },
        };
        let front = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, -4.0));
        let behind = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, -6.0));

        let candidates = [
            (Entity::from_raw(1), &pad, &behind, true),
            (Entity::from_raw(2), &bezel, &front, true),
        ];
        let (_, target, _) =
            closest_pick(Vec3::ZERO, Vec3::NEG_Z, candidates.into_iter()).unwrap();
        assert_eq!(target, PickTarget::PadBezel(WorldKind::Ocean));
    }

    #[test]
    fn rotated_box_is_tested_in_local_space() {
        // A thin slab rotated 90 degrees around Y presents its wide face
        // to a ray along -Z.
        let pickable = Pickable {
            target: PickTarget::SwitchPad(WorldKind::Acid),
            shape: PickShape::Box {
                half_extents: Vec3::new(0.05, 1.0, 1.0),
            },
        };
        let transform = GlobalTransform::from(
            Transform::from_xyz(0.0, 0.0, -5.0)
                .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
        );
        let candidates = [(Entity::from_raw(1), &pickable, &transform, true)];
        let hit = closest_pick(Vec3::ZERO, Vec3::NEG_Z, candidates.into_iter());
        assert!(hit.is_some());
    }
}
