use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound of every need channel.
pub const MAX_NEED_VALUE: f32 = 100.0;

/// The four need channels. Higher values mean a more urgent, unmet need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedKind {
    /// Wants affection.
    Love,
    /// Wants to play.
    Play,
    /// Wants food.
    Food,
    /// Wants rest. Also slows wandering.
    Sleep,
}

impl NeedKind {
    /// All channels in storage order.
    pub const ALL: [NeedKind; 4] = [Self::Love, Self::Play, Self::Food, Self::Sleep];

    /// Position of this channel in per-need tables.
    pub const fn index(self) -> usize {
        match self {
            Self::Love => 0,
            Self::Play => 1,
            Self::Food => 2,
            Self::Sleep => 3,
        }
    }
}

impl fmt::Display for NeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Love => write!(f, "love"),
            Self::Play => write!(f, "play"),
            Self::Food => write!(f, "food"),
            Self::Sleep => write!(f, "sleep"),
        }
    }
}

/// A player action that lowers one need by a fixed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Lowers food by 15.
    Feed,
    /// Lowers love by 25.
    GiveLove,
    /// Lowers play by 30.
    Play,
    /// Lowers sleep by 40.
    Sleep,
}

impl Action {
    /// All actions, in the order the need channels are stored.
    pub const ALL: [Action; 4] = [Self::GiveLove, Self::Play, Self::Feed, Self::Sleep];

    /// The channel this action satisfies.
    pub const fn need(self) -> NeedKind {
        match self {
            Self::Feed => NeedKind::Food,
            Self::GiveLove => NeedKind::Love,
            Self::Play => NeedKind::Play,
            Self::Sleep => NeedKind::Sleep,
        }
    }

    /// How much the need drops.
    pub const fn amount(self) -> f32 {
        match self {
            Self::Feed => 15.0,
            Self::GiveLove => 25.0,
            Self::Play => 30.0,
            Self::Sleep => 40.0,
        }
    }

    /// Parse an action name such as `feed` or `give_love`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "feed" => Some(Self::Feed),
            "give_love" | "love" => Some(Self::GiveLove),
            "play" => Some(Self::Play),
            "sleep" => Some(Self::Sleep),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feed => write!(f, "feed"),
            Self::GiveLove => write!(f, "give love"),
            Self::Play => write!(f, "play"),
            Self::Sleep => write!(f, "sleep"),
        }
    }
}

/// Decay rates and thresholds shared by every creature built from it.
#[derive(Debug, Clone, PartialEq)]
pub struct NeedsConfig {
    /// Rise per second for each channel, indexed by [`NeedKind::index`].
    pub decay_rates: [f32; 4],
    /// A need crossing this value upward is reported as urgent.
    pub urgent_threshold: f32,
}

impl Default for NeedsConfig {
    fn default() -> Self {
        Self {
            decay_rates: [2.0, 3.0, 4.0, 1.5],
            urgent_threshold: 80.0,
        }
    }
}

impl NeedsConfig {
    /// Rise per second for one channel.
    pub fn rate(&self, need: NeedKind) -> f32 {
        self.decay_rates[need.index()]
    }
}

/// Current levels of the four channels, each within `0..=MAX_NEED_VALUE`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Needs {
    levels: [f32; 4],
}

impl Needs {
    /// All needs fully met (zero).
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from explicit levels. Values are clamped.
    pub fn with_levels(love: f32, play: f32, food: f32, sleep: f32) -> Self {
        let mut needs = Self::new();
        needs.set(NeedKind::Love, love);
        needs.set(NeedKind::Play, play);
        needs.set(NeedKind::Food, food);
        needs.set(NeedKind::Sleep, sleep);
        needs
    }

    /// Level of one channel.
    pub fn get(&self, need: NeedKind) -> f32 {
        self.levels[need.index()]
    }

    /// Overwrite one channel, clamped to the valid range.
    pub fn set(&mut self, need: NeedKind, value: f32) {
        self.levels[need.index()] = clamp_need(value);
    }

    /// Let every channel rise for `delta_time` seconds.
    ///
    /// Non-positive or non-finite deltas leave the needs untouched.
    pub fn decay(&mut self, config: &NeedsConfig, delta_time: f32) {
        let dt = sanitize_delta(delta_time);
        for need in NeedKind::ALL {
            let level = &mut self.levels[need.index()];
            *level = clamp_need(*level + config.rate(need) * dt);
        }
    }

    /// Lower one channel by `amount`, not below zero. Returns the new level.
    pub fn satisfy(&mut self, need: NeedKind, amount: f32) -> f32 {
        let level = &mut self.levels[need.index()];
        *level = clamp_need(*level - amount.max(0.0));
        *level
    }

    /// `100 - mean(needs)`, floored at zero.
    pub fn happiness(&self) -> f32 {
        let sum: f32 = self.levels.iter().sum();
        (MAX_NEED_VALUE - sum / self.levels.len() as f32).max(0.0)
    }

    /// Fill ratio for a bar, optionally inverted so a full bar means a met need.
    pub fn ratio(&self, need: NeedKind, invert: bool) -> f32 {
        let ratio = self.get(need) / MAX_NEED_VALUE;
        if invert { 1.0 - ratio } else { ratio }
    }

    /// Channels at or above `threshold`.
    pub fn urgent_needs(&self, threshold: f32) -> Vec<NeedKind> {
        NeedKind::ALL
            .into_iter()
            .filter(|n| self.get(*n) >= threshold)
            .collect()
    }
}

fn clamp_need(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, MAX_NEED_VALUE)
}

/// Frame deltas below zero or not finite count as no time passing.
pub(crate) fn sanitize_delta(delta_time: f32) -> f32 {
    if delta_time.is_finite() && delta_time > 0.0 {
        delta_time
    } else {
        0.0
    }
}
