use gf_core::geometry::Size;

use crate::creature::DisplayFlags;
use crate::needs::NeedsConfig;
use crate::wander::WanderConfig;

/// Default arena size in pixels.
pub const DEFAULT_BOUNDS: Size = Size::new(800, 600);

/// Configuration for a gameplay session.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for deterministic wandering.
    pub seed: u64,
    /// Arena creatures wander in.
    pub bounds: Size,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
    /// Presentation toggles applied to every creature added.
    pub display: DisplayFlags,
    /// Needs tuning for every creature added.
    pub needs: NeedsConfig,
    /// Movement tuning for every creature added.
    pub wander: WanderConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bounds: DEFAULT_BOUNDS,
            max_events: 0,
            display: DisplayFlags::default(),
            needs: NeedsConfig::default(),
            wander: WanderConfig::default(),
        }
    }
}

impl SimConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the arena size.
    pub fn with_bounds(mut self, width: u32, height: u32) -> Self {
        self.bounds = Size::new(width, height);
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Set the presentation toggles.
    pub fn with_display(mut self, display: DisplayFlags) -> Self {
        self.display = display;
        self
    }

    /// Set the needs tuning.
    pub fn with_needs(mut self, needs: NeedsConfig) -> Self {
        self.needs = needs;
        self
    }

    /// Set the movement tuning.
    pub fn with_wander(mut self, wander: WanderConfig) -> Self {
        self.wander = wander;
        self
    }
}
