use bevy::prelude::*;

use crate::scene_mode::WorldKind;

/// Typed identity of everything the cursor ray can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    SwitchPad(WorldKind),
    Beacon(WorldKind),
    /// A button's bezel ring. It occludes the pad behind it but never
    /// triggers anything itself.
    PadBezel(WorldKind),
}

/// Analytic shape tested against the cursor ray.
#[derive(Debug, Clone, Copy)]
pub enum PickShape {
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
}

/// Attached to every entity the cursor can hit.
#[derive(Component)]
pub struct Pickable {
    pub target: PickTarget,
    pub shape: PickShape,
}

/// What the cursor ray currently lands on, rebuilt every frame.
#[derive(Resource, Default)]
pub struct PointerHit {
    pub target: Option<(Entity, PickTarget)>,
    pub distance: f32,
}
