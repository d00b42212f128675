use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use gf_core::geometry::{BoundingBox, Size};

use crate::needs::{MAX_NEED_VALUE, sanitize_delta};

/// Movement tuning for the wander state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct WanderConfig {
    /// Speed in pixels per second when fully rested.
    pub base_speed: f32,
    /// Fraction of `base_speed` left when the sleep need is at its maximum.
    pub sleep_factor: f32,
    /// Distance kept between targets and the arena edge.
    pub edge_margin: f32,
    /// A creature this close to its target has arrived.
    pub arrival_threshold: f32,
    /// Shortest pause after arriving, in seconds.
    pub pause_min: f32,
    /// Longest pause after arriving, in seconds.
    pub pause_max: f32,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            base_speed: 50.0,
            sleep_factor: 0.25,
            edge_margin: 10.0,
            arrival_threshold: 5.0,
            pause_min: 1.0,
            pause_max: 3.0,
        }
    }
}

impl WanderConfig {
    /// Speed scaled linearly from `base_speed` (rested) down to
    /// `base_speed * sleep_factor` (exhausted).
    pub fn effective_speed(&self, sleep_need: f32) -> f32 {
        let sleep_ratio = (sleep_need / MAX_NEED_VALUE).clamp(0.0, 1.0);
        self.base_speed * (1.0 - sleep_ratio * (1.0 - self.sleep_factor))
    }
}

/// The three wander states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WanderMode {
    /// Freshly created; leaves this state on the first step and never returns.
    Idle,
    /// Walking toward a target.
    Moving,
    /// Resting after arrival until the pause timer runs out.
    Paused,
}

/// Horizontal direction the sprite is drawn facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    /// Mirrored sprite.
    Left,
    /// Sprite as drawn.
    #[default]
    Right,
}

impl Facing {
    /// Return `true` for [`Facing::Left`].
    pub fn is_left(self) -> bool {
        self == Self::Left
    }
}

/// A state change produced by one step of the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WanderEvent {
    /// A new target was picked and the creature started moving.
    TargetChosen(Vec2),
    /// The creature reached its target and will pause for this many seconds.
    Arrived {
        /// Length of the pause.
        pause: f32,
    },
    /// Horizontal travel direction reversed.
    Turned(Facing),
}

/// Randomised point-to-point movement inside a rectangular arena.
///
/// The float `position` is authoritative; the integer bounding box is derived
/// from it by truncation after clamping to `[0, bounds - size]`.
#[derive(Debug, Clone)]
pub struct Wanderer {
    config: WanderConfig,
    mode: WanderMode,
    target: Option<Vec2>,
    pause_timer: f32,
    position: Vec2,
    bounds: Size,
    size: Size,
    facing: Facing,
}

impl Wanderer {
    /// Create an idle wanderer for a sprite of `size` inside `bounds`.
    pub fn new(config: WanderConfig, position: Vec2, size: Size, bounds: Size) -> Self {
        let mut wanderer = Self {
            config,
            mode: WanderMode::Idle,
            target: None,
            pause_timer: 0.0,
            position,
            bounds,
            size,
            facing: Facing::default(),
        };
        wanderer.clamp_position();
        wanderer
    }

    /// Current state.
    pub fn mode(&self) -> WanderMode {
        self.mode
    }

    /// Where the creature is heading, while moving.
    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    /// Seconds of pause left.
    pub fn pause_timer(&self) -> f32 {
        self.pause_timer
    }

    /// Sub-pixel top-left position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Which way the sprite faces.
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Arena size.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Sprite footprint.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Movement tuning.
    pub fn config(&self) -> &WanderConfig {
        &self.config
    }

    /// Integer projection of the position, used for drawing.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_position(self.position, self.size)
    }

    /// Largest legal top-left position on each axis, never negative.
    pub fn max_position(&self) -> Vec2 {
        (self.bounds.as_vec2() - self.size.as_vec2()).max(Vec2::ZERO)
    }

    /// Resize the arena. The position and any pending target are pulled
    /// inside the new limits so the creature can still arrive.
    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
        self.clamp_position();
        if let Some(target) = self.target {
            let (lo, hi) = self.target_range();
            self.target = Some(target.clamp(lo, hi));
        }
    }

    /// Move to `position` directly, clamped to the arena. Used when spawning.
    pub fn place(&mut self, position: Vec2) {
        self.position = position;
        self.clamp_position();
    }

    /// Inclusive range targets are drawn from: the arena shrunk by the edge
    /// margin on every side and by the sprite footprint on the far sides.
    ///
    /// When the arena is too small the range collapses to a single point at
    /// the margin, pulled back inside the legal positions.
    pub fn target_range(&self) -> (Vec2, Vec2) {
        let margin = Vec2::splat(self.config.edge_margin);
        let max = self.max_position();
        let lo = margin.min(max);
        let hi = (max - margin).max(lo);
        (lo, hi)
    }

    /// Draw a uniformly random target inside [`Self::target_range`].
    pub fn pick_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let (lo, hi) = self.target_range();
        Vec2::new(draw_axis(rng, lo.x, hi.x), draw_axis(rng, lo.y, hi.y))
    }

    /// Advance the state machine by one frame.
    ///
    /// `sleep_need` scales the speed; see [`WanderConfig::effective_speed`].
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        delta_time: f32,
        sleep_need: f32,
        rng: &mut R,
    ) -> Option<WanderEvent> {
        let dt = sanitize_delta(delta_time);
        match self.mode {
            WanderMode::Idle => Some(self.start_moving(rng)),
            WanderMode::Moving => self.step_moving(dt, sleep_need, rng),
            WanderMode::Paused => {
                self.pause_timer -= dt;
                if self.pause_timer <= 0.0 {
                    self.pause_timer = 0.0;
                    Some(self.start_moving(rng))
                } else {
                    None
                }
            }
        }
    }

    fn start_moving<R: Rng + ?Sized>(&mut self, rng: &mut R) -> WanderEvent {
        let target = self.pick_target(rng);
        self.target = Some(target);
        self.mode = WanderMode::Moving;
        WanderEvent::TargetChosen(target)
    }

    fn step_moving<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        sleep_need: f32,
        rng: &mut R,
    ) -> Option<WanderEvent> {
        let Some(target) = self.target else {
            return Some(self.start_moving(rng));
        };

        let to_target = target - self.position;
        let distance = to_target.length();
        if distance <= self.config.arrival_threshold {
            let pause = draw_axis(rng, self.config.pause_min, self.config.pause_max);
            self.pause_timer = pause;
            self.target = None;
            self.mode = WanderMode::Paused;
            return Some(WanderEvent::Arrived { pause });
        }

        // Never step past the target, or large deltas would oscillate around it.
        let travel = (self.config.effective_speed(sleep_need) * dt).min(distance);
        self.position += to_target / distance * travel;
        let turned = self.face_towards(to_target.x);
        self.clamp_position();
        turned.map(WanderEvent::Turned)
    }

    fn face_towards(&mut self, dx: f32) -> Option<Facing> {
        let wanted = if dx < 0.0 {
            Facing::Left
        } else if dx > 0.0 {
            Facing::Right
        } else {
            return None;
        };
        if wanted == self.facing {
            return None;
        }
        self.facing = wanted;
        Some(wanted)
    }

    fn clamp_position(&mut self) {
        if !self.position.is_finite() {
            self.position = Vec2::ZERO;
        }
        self.position = self.position.clamp(Vec2::ZERO, self.max_position());
    }
}

fn draw_axis<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..=hi) } else { lo }
}
