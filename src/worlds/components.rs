use bevy::prelude::*;

use crate::scene_mode::WorldKind;

pub const BEACON_RADIUS: f32 = 1.8;
/// Height the beacons bob around, above every tower.
pub const BEACON_BASE_Y: f32 = 12.0;
pub const BOB_AMPLITUDE: f32 = 0.4;

/// A lighthouse beacon. Clicking it toggles its world's effect.
#[derive(Component)]
pub struct Beacon {
    pub world: WorldKind,
    pub idle_emissive: f32,
    pub hover_emissive: f32,
}

impl Beacon {
    pub fn new(world: WorldKind) -> Self {
        let (idle_emissive, hover_emissive) = match world {
            WorldKind::Ocean | WorldKind::Mountains => (2.0, 10.0),
            WorldKind::Acid => (0.0, 1.5),
        };
        Self {
            world,
            idle_emissive,
            hover_emissive,
        }
    }
}

/// The coloured glow light beside a beacon. Hovering the beacon turns
/// it red and bright.
#[derive(Component)]
pub struct BeaconLight {
    pub world: WorldKind,
    pub idle_lumens: f32,
    pub hover_lumens: f32,
}

impl BeaconLight {
    pub fn new(world: WorldKind) -> Self {
        let (idle_lumens, hover_lumens) = match world {
            WorldKind::Ocean | WorldKind::Mountains => (24_000.0, 120_000.0),
            WorldKind::Acid => (0.0, 18_000.0),
        };
        Self {
            world,
            idle_lumens,
            hover_lumens,
        }
    }
}

/// Marker for the visible sun disc orbiting the ocean.
#[derive(Component)]
pub struct SunDisc;

/// Marker for the ocean's orbiting directional light.
#[derive(Component)]
pub struct OceanSun;

/// Marker for the falling-snow mesh, hidden until the effect starts.
#[derive(Component)]
pub struct SnowField;

/// Low-poly beacon mesh shared by all three lighthouses.
pub(crate) fn beacon_mesh() -> Mesh {
    match Sphere::new(BEACON_RADIUS).mesh().ico(1) {
        Ok(mesh) => mesh,
        Err(err) => {
            warn!("Falling back to a uv sphere for beacons: {err}");
            Sphere::new(BEACON_RADIUS).mesh().uv(8, 4)
        }
    }
}
