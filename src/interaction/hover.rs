use bevy::prelude::*;

use crate::room::buttons::{PadLight, SwitchButton};

use super::components::{PickTarget, PointerHit};

/// Lights up the hovered pad and resets every other one.
pub fn update_pad_hover(
    hit: Res<PointerHit>,
    pads: Query<(&SwitchButton, &MeshMaterial3d<StandardMaterial>)>,
    mut lights: Query<(&PadLight, &mut PointLight)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let hovered = match hit.target {
        Some((_, PickTarget::SwitchPad(world))) => Some(world),
        _ => None,
    };

    for (button, material_handle) in pads.iter() {
        let Some(material) = materials.get_mut(&material_handle.0) else {
            continue;
        };
        material.emissive = if hovered == Some(button.world) {
            button.glow.to_linear() * button.hover_boost
        } else {
            LinearRgba::BLACK
        };
    }

    for (light, mut point) in lights.iter_mut() {
        point.intensity = if hovered == Some(light.world) {
            light.lumens
        } else {
            0.0
        };
    }
}
