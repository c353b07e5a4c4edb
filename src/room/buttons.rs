use bevy::prelude::*;

use crate::scene_mode::WorldKind;

/// Seconds a press animation takes, dip plus recovery.
pub const PRESS_DURATION: f32 = 0.5;
/// Pad travel speed while animating, in units per second.
pub const PRESS_RATE: f32 = 0.02;
/// Resting height of a pad above its bezel.
pub const PAD_REST_Y: f32 = 0.03;

pub const OCEAN_GLOW: Color = Color::srgb(0.43, 1.0, 0.49);
pub const MOUNTAINS_GLOW: Color = Color::srgb(0.35, 0.55, 1.0);
pub const ACID_GLOW: Color = Color::srgb(1.0, 0.2, 0.2);

/// A clickable desk button pad.
#[derive(Component)]
pub struct SwitchButton {
    pub world: WorldKind,
    pub glow: Color,
    /// Emissive multiplier applied while the cursor rests on the pad.
    pub hover_boost: f32,
}

impl SwitchButton {
    pub fn new(world: WorldKind) -> Self {
        let (glow, hover_boost) = match world {
            WorldKind::Ocean => (OCEAN_GLOW, 3.0),
            WorldKind::Mountains => (MOUNTAINS_GLOW, 3.0),
            WorldKind::Acid => (ACID_GLOW, 2.0),
        };
        Self {
            world,
            glow,
            hover_boost,
        }
    }
}

/// The small coloured light floating over a pad, lit only while hovered.
#[derive(Component)]
pub struct PadLight {
    pub world: WorldKind,
    pub lumens: f32,
}

impl PadLight {
    pub fn new(world: WorldKind) -> Self {
        let lumens = match world {
            WorldKind::Acid => 24_000.0,
            _ => 36_000.0,
        };
        Self { world, lumens }
    }
}

/// Press animation state for one pad. The pad dips for the first half of
/// the duration and rises for the second, then snaps back to its exact
/// rest height so repeated presses never drift.
#[derive(Component, Debug, Clone)]
pub struct ButtonTween {
    pub playing: bool,
    pub started_at: f32,
    pub duration: f32,
    pub rising: bool,
}

impl Default for ButtonTween {
    fn default() -> Self {
        Self {
            playing: false,
            started_at: 0.0,
            duration: PRESS_DURATION,
            rising: false,
        }
    }
}

impl ButtonTween {
    /// (Re)starts the dip. A press mid-animation begins a fresh cycle.
    pub fn press(&mut self, now: f32) {
        self.playing = true;
        self.rising = false;
        self.started_at = now;
    }

    /// Steps the animation and returns the pad's new local height.
    pub fn advance(&mut self, y: f32, now: f32, dt: f32) -> f32 {
        if !self.playing {
            return y;
        }
        let elapsed = now - self.started_at;
        if elapsed >= self.duration {
            self.playing = false;
            self.rising = false;
            return PAD_REST_Y;
        }
        if elapsed < self.duration * 0.5 {
            y - PRESS_RATE * dt
        } else {
            self.rising = true;
            y + PRESS_RATE * dt
        }
    }
}

pub fn animate_buttons(time: Res<Time>, mut pads: Query<(&mut Transform, &mut ButtonTween)>) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();
    for (mut transform, mut tween) in pads.iter_mut() {
        transform.translation.y = tween.advance(transform.translation.y, now, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn run_to_completion(tween: &mut ButtonTween, mut y: f32, start: f32) -> f32 {
        let mut now = start;
        while tween.playing {
            now += DT;
            y = tween.advance(y, now, DT);
        }
        y
    }

    #[test]
    fn press_dips_then_settles_exactly_at_rest() {
        let mut tween = ButtonTween::default();
        tween.press(0.0);

        let mut y = PAD_REST_Y;
        let mut now = 0.0;
        let mut lowest = y;
        while tween.playing {
            now += DT;
            y = tween.advance(y, now, DT);
            lowest = lowest.min(y);
        }

        assert!(lowest < PAD_REST_Y);
        assert_eq!(y, PAD_REST_Y);
        assert!(!tween.playing);
        assert!(!tween.rising);
    }

    #[test]
    fn settles_exactly_for_any_duration() {
        for duration in [0.1, 0.5, 2.0] {
            let mut tween = ButtonTween {
                duration,
                ..Default::default()
            };
            tween.press(5.0);
            assert_eq!(run_to_completion(&mut tween, PAD_REST_Y, 5.0), PAD_REST_Y);
        }
    }

    #[test]
    fn second_half_rises() {
        let mut tween = ButtonTween::default();
        tween.press(0.0);
        let y = tween.advance(PAD_REST_Y, PRESS_DURATION * 0.6, DT);
        assert!(tween.rising);
        assert!(y > PAD_REST_Y);
    }

    #[test]
    fn repress_mid_flight_restarts_the_cycle() {
        let mut tween = ButtonTween::default();
        tween.press(0.0);
        tween.advance(PAD_REST_Y, 0.3, DT);
        assert!(tween.rising);

        tween.press(0.3);
        assert!(tween.playing);
        assert!(!tween.rising);

        let y = tween.advance(PAD_REST_Y, 0.31, DT);
        assert!(y < PAD_REST_Y);
        assert_eq!(run_to_completion(&mut tween, y, 0.31), PAD_REST_Y);
    }

    #[test]
    fn idle_tween_leaves_height_alone() {
        let mut tween = ButtonTween::default();
        assert_eq!(tween.advance(0.05, 1.0, DT), 0.05);
    }
}
