use std::collections::HashMap;

use bevy::audio::Volume;
use bevy::prelude::*;

use crate::room::LampBulb;
use crate::settings::Settings;

/// The looping ambience and effect channels. At most one instance of
/// each plays at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Water,
    Wind,
    Snowfall,
    Drone,
    Whirlpool,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Water,
        Channel::Wind,
        Channel::Snowfall,
        Channel::Drone,
        Channel::Whirlpool,
    ];

    /// Per-channel gain before the master volume is applied.
    fn volume(self) -> f32 {
        match self {
            Channel::Water => 1.0,
            Channel::Wind => 0.1,
            Channel::Snowfall => 0.8,
            Channel::Drone => 0.6,
            Channel::Whirlpool => 1.0,
        }
    }

    fn speed(self) -> f32 {
        match self {
            // The whirlpool sample is pitched down to rumble.
            Channel::Whirlpool => 0.8,
            _ => 1.0,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Channel::Water => "water",
            Channel::Wind => "wind",
            Channel::Snowfall => "snowfall",
            Channel::Drone => "drone",
            Channel::Whirlpool => "whirlpool",
        }
    }
}

/// Loaded sources plus the entity of every currently looping channel.
#[derive(Resource)]
pub struct SoundBank {
    water: Handle<AudioSource>,
    wind: Handle<AudioSource>,
    snowfall: Handle<AudioSource>,
    drone: Handle<AudioSource>,
    whirlpool: Handle<AudioSource>,
    press: Handle<AudioSource>,
    hum: Handle<AudioSource>,
    master_volume: f32,
    live: HashMap<Channel, Entity>,
}

impl Default for SoundBank {
    fn default() -> Self {
        Self {
            water: Handle::default(),
            wind: Handle::default(),
            snowfall: Handle::default(),
            drone: Handle::default(),
            whirlpool: Handle::default(),
            press: Handle::default(),
            hum: Handle::default(),
            master_volume: 1.0,
            live: HashMap::new(),
        }
    }
}

impl SoundBank {
    fn source(&self, channel: Channel) -> Handle<AudioSource> {
        match channel {
            Channel::Water => self.water.clone(),
            Channel::Wind => self.wind.clone(),
            Channel::Snowfall => self.snowfall.clone(),
            Channel::Drone => self.drone.clone(),
            Channel::Whirlpool => self.whirlpool.clone(),
        }
    }

    /// Starts a channel looping. Does nothing if it is already playing.
    pub fn play_loop(&mut self, commands: &mut Commands, channel: Channel) {
        if self.live.contains_key(&channel) {
            return;
        }
        let entity = commands
            .spawn((
                AudioPlayer(self.source(channel)),
                PlaybackSettings::LOOP
                    .with_volume(Volume::new(channel.volume() * self.master_volume))
                    .with_speed(channel.speed()),
                Name::new(channel.name()),
            ))
            .id();
        self.live.insert(channel, entity);
    }

    pub fn stop(&mut self, commands: &mut Commands, channel: Channel) {
        if let Some(entity) = self.live.remove(&channel) {
            commands.entity(entity).despawn();
        }
    }

    pub fn stop_all(&mut self, commands: &mut Commands) {
        for (_, entity) in self.live.drain() {
            commands.entity(entity).despawn();
        }
    }

    pub fn is_playing(&self, channel: Channel) -> bool {
        self.live.contains_key(&channel)
    }

    /// One-shot desk button click; the entity cleans itself up.
    pub fn play_press(&self, commands: &mut Commands) {
        commands.spawn((
            AudioPlayer(self.press.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::new(self.master_volume)),
        ));
    }
}

/// Volume of the bulb hum before master gain.
const HUM_VOLUME: f32 = 0.2;

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_sound_bank)
            .add_systems(PostStartup, attach_lamp_hum);
    }
}

fn setup_sound_bank(mut commands: Commands, asset_server: Res<AssetServer>, settings: Res<Settings>) {
    commands.insert_resource(SoundBank {
        water: asset_server.load("sounds/water.ogg"),
        wind: asset_server.load("sounds/wind.ogg"),
        snowfall: asset_server.load("sounds/snowfall.ogg"),
        drone: asset_server.load("sounds/drone.ogg"),
        whirlpool: asset_server.load("sounds/whirlpool.ogg"),
        press: asset_server.load("sounds/switch.ogg"),
        hum: asset_server.load("sounds/hum.ogg"),
        master_volume: settings.master_volume,
        live: HashMap::new(),
    });
}

/// Hangs a quiet spatial hum on the lamp bulb once the room exists.
fn attach_lamp_hum(
    mut commands: Commands,
    bank: Res<SoundBank>,
    bulbs: Query<Entity, With<LampBulb>>,
) {
    let Ok(bulb) = bulbs.get_single() else {
        return;
    };
    commands.entity(bulb).insert((
        AudioPlayer(bank.hum.clone()),
        PlaybackSettings::LOOP
            .with_volume(Volume::new(HUM_VOLUME * bank.master_volume))
            .with_spatial(true),
    ));
}
