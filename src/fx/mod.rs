pub mod materials;

use bevy::prelude::*;

use crate::audio::{Channel, SoundBank};
use crate::interaction::clicks::handle_pointer_clicks;
use crate::scene_mode::WorldKind;
use crate::worlds::SnowField;

use materials::{
    FxUniform, HillsMaterial, SkyMaterial, SnowMaterial, SunMaterial, TubeMaterial, WaterMaterial,
};

/// One secondary effect: whether it is on and when it last flipped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EffectState {
    pub active: bool,
    pub started_at: f32,
}

/// Single source of truth for the shader-driven effects. Render
/// materials only ever read values the simulation wrote here.
#[derive(Resource, Debug, Default)]
pub struct FxState {
    pub time: f32,
    pub whirlpool: EffectState,
    pub snow: EffectState,
    pub acid: EffectState,
}

impl FxState {
    pub fn effect(&self, world: WorldKind) -> &EffectState {
        match world {
            WorldKind::Ocean => &self.whirlpool,
            WorldKind::Mountains => &self.snow,
            WorldKind::Acid => &self.acid,
        }
    }

    pub fn effect_mut(&mut self, world: WorldKind) -> &mut EffectState {
        match world {
            WorldKind::Ocean => &mut self.whirlpool,
            WorldKind::Mountains => &mut self.snow,
            WorldKind::Acid => &mut self.acid,
        }
    }

    pub fn uniform_for(&self, world: WorldKind) -> FxUniform {
        let effect = self.effect(world);
        FxUniform {
            time: self.time,
            active: effect.active as u32,
            effect_time: effect.started_at,
            _padding: 0,
        }
    }

    /// For materials that animate with time but have no toggle.
    pub fn base_uniform(&self) -> FxUniform {
        FxUniform {
            time: self.time,
            active: 0,
            effect_time: 0.0,
            _padding: 0,
        }
    }
}

/// Event fired when a lighthouse beacon is clicked in its own world.
#[derive(Event)]
pub struct BeaconToggled {
    pub world: WorldKind,
}

/// The loop that plays while a world's effect is on.
fn effect_channel(world: WorldKind) -> Channel {
    match world {
        WorldKind::Ocean => Channel::Whirlpool,
        WorldKind::Mountains => Channel::Snowfall,
        WorldKind::Acid => Channel::Drone,
    }
}

pub struct FxPlugin;

impl Plugin for FxPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            MaterialPlugin::<WaterMaterial>::default(),
            MaterialPlugin::<HillsMaterial>::default(),
            MaterialPlugin::<TubeMaterial>::default(),
            MaterialPlugin::<SkyMaterial>::default(),
            MaterialPlugin::<SunMaterial>::default(),
            MaterialPlugin::<SnowMaterial>::default(),
        ))
        .init_resource::<FxState>()
        .add_event::<BeaconToggled>()
        .add_systems(
            Update,
            (
                tick_fx_time,
                handle_beacon_toggle.after(handle_pointer_clicks),
                sync_effect_uniforms,
            )
                .chain(),
        );
    }
}

/// The one clock read every effect sees this frame.
pub fn tick_fx_time(time: Res<Time>, mut fx: ResMut<FxState>) {
    fx.time = time.elapsed_secs();
}

/// Flips an effect, stamps the flip time and swaps its loop on or off.
/// The snow mesh only shows while its effect runs.
pub fn handle_beacon_toggle(
    mut events: EventReader<BeaconToggled>,
    mut commands: Commands,
    mut fx: ResMut<FxState>,
    mut sounds: ResMut<SoundBank>,
    time: Res<Time>,
    mut snow_fields: Query<&mut Visibility, With<SnowField>>,
) {
    for event in events.read() {
        let state = fx.effect_mut(event.world);
        state.active = !state.active;
        state.started_at = time.elapsed_secs();
        let active = state.active;

        let channel = effect_channel(event.world);
        if active {
            sounds.play_loop(&mut commands, channel);
        } else {
            sounds.stop(&mut commands, channel);
        }

        if event.world == WorldKind::Mountains {
            for mut visibility in snow_fields.iter_mut() {
                *visibility = if active {
                    Visibility::Inherited
                } else {
                    Visibility::Hidden
                };
            }
        }
    }
}

/// Pushes the effect table into every shader material.
fn sync_effect_uniforms(
    fx: Res<FxState>,
    mut water: ResMut<Assets<WaterMaterial>>,
    mut hills: ResMut<Assets<HillsMaterial>>,
    mut tubes: ResMut<Assets<TubeMaterial>>,
    mut skies: ResMut<Assets<SkyMaterial>>,
    mut suns: ResMut<Assets<SunMaterial>>,
    mut snow: ResMut<Assets<SnowMaterial>>,
) {
    for (_, material) in water.iter_mut() {
        material.fx = fx.uniform_for(WorldKind::Ocean);
    }
    for (_, material) in hills.iter_mut() {
        material.fx = fx.uniform_for(WorldKind::Mountains);
    }
    for (_, material) in tubes.iter_mut() {
        material.fx = fx.uniform_for(WorldKind::Acid);
    }
    for (_, material) in skies.iter_mut() {
        material.fx = fx.base_uniform();
    }
    for (_, material) in suns.iter_mut() {
        material.fx = fx.base_uniform();
    }
    for (_, material) in snow.iter_mut() {
        material.fx = fx.uniform_for(WorldKind::Mountains);
    }
}
