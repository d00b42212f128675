use std::any::Any;
use std::fmt;

use glam::Vec2;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use gf_core::creature::{Appearance, CreatureId, CreatureProfile, Rgb, Species};
use gf_core::geometry::{BoundingBox, Size};

use crate::needs::{Action, NeedKind, Needs, NeedsConfig};
use crate::wander::{Facing, WanderConfig, WanderEvent, Wanderer};

/// Bar colour per need channel, indexed by [`NeedKind::index`].
const BAR_COLORS: [Rgb; 4] = [
    Rgb(255, 105, 180),
    Rgb(255, 215, 0),
    Rgb(50, 205, 50),
    Rgb(100, 149, 237),
];

/// Colour the renderer uses for a need bar.
pub fn bar_color(need: NeedKind) -> Rgb {
    BAR_COLORS[need.index()]
}

/// Per-creature presentation toggles. They gate what is drawn and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFlags {
    /// Draw the four need bars.
    pub show_bars: bool,
    /// Draw the name label.
    pub show_name: bool,
    /// Draw the description label.
    pub show_description: bool,
    /// Bars show how met a need is instead of how urgent.
    pub invert_bars: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            show_bars: true,
            show_name: true,
            show_description: true,
            invert_bars: true,
        }
    }
}

/// Read-only snapshot of a creature's needs and happiness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatureStatus {
    /// Which creature this describes.
    pub id: CreatureId,
    /// Display name.
    pub name: String,
    /// Variant.
    pub species: Species,
    /// Derived happiness in `0..=100`. Not rounded.
    pub happiness: f32,
    /// Love need.
    pub love_need: f32,
    /// Play need.
    pub play_need: f32,
    /// Food need.
    pub food_need: f32,
    /// Sleep need.
    pub sleep_need: f32,
}

impl CreatureStatus {
    /// Level of one channel.
    pub fn need(&self, need: NeedKind) -> f32 {
        match need {
            NeedKind::Love => self.love_need,
            NeedKind::Play => self.play_need,
            NeedKind::Food => self.food_need,
            NeedKind::Sleep => self.sleep_need,
        }
    }

    /// Happiness rounded to the nearest whole number, for labels.
    pub fn happiness_rounded(&self) -> u32 {
        self.happiness.round() as u32
    }
}

/// What a player action did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActionOutcome {
    /// The creature acted on.
    pub creature: CreatureId,
    /// The action taken.
    pub action: Action,
    /// The need it lowered.
    pub need: NeedKind,
    /// Need level before.
    pub before: f32,
    /// Need level after.
    pub after: f32,
    /// Happiness after.
    pub happiness: f32,
}

/// One need bar, ready to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarState {
    /// Channel shown.
    pub need: NeedKind,
    /// Raw level.
    pub value: f32,
    /// Fill fraction in `0..=1`, already inverted if requested.
    pub ratio: f32,
    /// Fill colour.
    pub color: Rgb,
}

/// Everything the renderer needs to draw one creature. Owned; holds no
/// references into the simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawState {
    /// Which creature this is.
    pub id: CreatureId,
    /// Variant, selects the sprite.
    pub species: Species,
    /// Where to draw.
    pub bbox: BoundingBox,
    /// Sprite colours.
    pub appearance: Appearance,
    /// Mirror the sprite when facing left.
    pub facing: Facing,
    /// Vertical sprite offset in pixels (negative is up). Does not move the box.
    pub lift: f32,
    /// Name label, when enabled.
    pub name: Option<String>,
    /// Description label, when enabled.
    pub description: Option<String>,
    /// Need bars, empty when disabled.
    pub bars: Vec<BarState>,
    /// Current happiness.
    pub happiness: f32,
}

/// Changes produced by one creature frame, for the session's event log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Wander state change, if any.
    pub wander: Option<WanderEvent>,
    /// Needs that crossed the urgent threshold this frame.
    pub newly_urgent: Vec<NeedKind>,
}

/// State shared by every creature variant: identity, needs, movement, display.
#[derive(Debug, Clone)]
pub struct CreatureCore {
    profile: CreatureProfile,
    needs: Needs,
    needs_config: NeedsConfig,
    wanderer: Wanderer,
    display: DisplayFlags,
}

impl CreatureCore {
    /// Build a creature with default tuning at `position` inside `bounds`.
    pub fn new(profile: CreatureProfile, position: Vec2, bounds: Size) -> Self {
        Self::with_configs(
            profile,
            position,
            bounds,
            NeedsConfig::default(),
            WanderConfig::default(),
        )
    }

    /// Build a creature with explicit tuning.
    pub fn with_configs(
        profile: CreatureProfile,
        position: Vec2,
        bounds: Size,
        needs_config: NeedsConfig,
        wander_config: WanderConfig,
    ) -> Self {
        let wanderer = Wanderer::new(wander_config, position, profile.size, bounds);
        Self {
            profile,
            needs: Needs::new(),
            needs_config,
            wanderer,
            display: DisplayFlags::default(),
        }
    }

    /// Fixed identity.
    pub fn profile(&self) -> &CreatureProfile {
        &self.profile
    }

    /// Current needs.
    pub fn needs(&self) -> &Needs {
        &self.needs
    }

    /// Mutable needs, for scripted setups.
    pub fn needs_mut(&mut self) -> &mut Needs {
        &mut self.needs
    }

    /// Decay tuning.
    pub fn needs_config(&self) -> &NeedsConfig {
        &self.needs_config
    }

    /// Movement state.
    pub fn wanderer(&self) -> &Wanderer {
        &self.wanderer
    }

    /// Mutable movement state.
    pub fn wanderer_mut(&mut self) -> &mut Wanderer {
        &mut self.wanderer
    }

    /// Presentation toggles.
    pub fn display(&self) -> DisplayFlags {
        self.display
    }

    /// Mutable presentation toggles.
    pub fn display_mut(&mut self) -> &mut DisplayFlags {
        &mut self.display
    }

    /// One frame: decay needs first, then wander with the fresh sleep need.
    pub fn step(&mut self, delta_time: f32, rng: &mut dyn RngCore) -> FrameReport {
        let threshold = self.needs_config.urgent_threshold;
        let before = self.needs;
        self.needs.decay(&self.needs_config, delta_time);
        let newly_urgent = NeedKind::ALL
            .into_iter()
            .filter(|n| before.get(*n) < threshold && self.needs.get(*n) >= threshold)
            .collect();

        let sleep_need = self.needs.get(NeedKind::Sleep);
        let wander = self.wanderer.step(delta_time, sleep_need, rng);
        FrameReport {
            wander,
            newly_urgent,
        }
    }

    /// Apply a player action to the needs.
    pub fn perform(&mut self, action: Action) -> ActionOutcome {
        let need = action.need();
        let before = self.needs.get(need);
        let after = self.needs.satisfy(need, action.amount());
        ActionOutcome {
            creature: self.profile.id,
            action,
            need,
            before,
            after,
            happiness: self.needs.happiness(),
        }
    }

    /// Snapshot of needs and happiness.
    pub fn status(&self) -> CreatureStatus {
        CreatureStatus {
            id: self.profile.id,
            name: self.profile.name.clone(),
            species: self.profile.species,
            happiness: self.needs.happiness(),
            love_need: self.needs.get(NeedKind::Love),
            play_need: self.needs.get(NeedKind::Play),
            food_need: self.needs.get(NeedKind::Food),
            sleep_need: self.needs.get(NeedKind::Sleep),
        }
    }

    /// Drawing snapshot with the display toggles applied.
    pub fn draw_state(&self) -> DrawState {
        let display = self.display;
        let bars = if display.show_bars {
            NeedKind::ALL
                .into_iter()
                .map(|need| BarState {
                    need,
                    value: self.needs.get(need),
                    ratio: self.needs.ratio(need, display.invert_bars),
                    color: bar_color(need),
                })
                .collect()
        } else {
            Vec::new()
        };
        DrawState {
            id: self.profile.id,
            species: self.profile.species,
            bbox: self.wanderer.bounding_box(),
            appearance: self.profile.appearance,
            facing: self.wanderer.facing(),
            lift: 0.0,
            name: display.show_name.then(|| self.profile.name.clone()),
            description: display
                .show_description
                .then(|| self.profile.description.clone()),
            bars,
            happiness: self.needs.happiness(),
        }
    }
}

/// The shared contract of every creature variant: one update per frame,
/// player actions, and read-only snapshots for the UI.
pub trait Creature: fmt::Debug {
    /// Shared state.
    fn core(&self) -> &CreatureCore;

    /// Mutable shared state.
    fn core_mut(&mut self) -> &mut CreatureCore;

    /// Which variant this is.
    fn species(&self) -> Species;

    /// Unique id.
    fn id(&self) -> CreatureId {
        self.core().profile().id
    }

    /// Display name.
    fn name(&self) -> &str {
        &self.core().profile().name
    }

    /// Advance one frame and report what changed.
    fn step(&mut self, delta_time: f32, rng: &mut dyn RngCore) -> FrameReport {
        self.core_mut().step(delta_time, rng)
    }

    /// Advance one frame.
    fn update(&mut self, delta_time: f32, rng: &mut dyn RngCore) {
        self.step(delta_time, rng);
    }

    /// Apply any player action.
    fn perform(&mut self, action: Action) -> ActionOutcome {
        self.core_mut().perform(action)
    }

    /// Lower food by 15.
    fn feed(&mut self) -> ActionOutcome {
        self.perform(Action::Feed)
    }

    /// Lower love by 25.
    fn give_love(&mut self) -> ActionOutcome {
        self.perform(Action::GiveLove)
    }

    /// Lower play by 30.
    fn play(&mut self) -> ActionOutcome {
        self.perform(Action::Play)
    }

    /// Lower sleep by 40.
    fn sleep(&mut self) -> ActionOutcome {
        self.perform(Action::Sleep)
    }

    /// Snapshot of needs and happiness.
    fn get_status(&self) -> CreatureStatus {
        self.core().status()
    }

    /// Drawing snapshot.
    fn draw_state(&self) -> DrawState {
        self.core().draw_state()
    }

    /// Resize the arena this creature wanders in.
    fn set_wander_bounds(&mut self, width: u32, height: u32) {
        self.core_mut()
            .wanderer_mut()
            .set_bounds(Size::new(width, height));
    }

    /// Presentation toggles.
    fn display(&self) -> DisplayFlags {
        self.core().display()
    }

    /// Mutable presentation toggles.
    fn display_mut(&mut self) -> &mut DisplayFlags {
        self.core_mut().display_mut()
    }

    /// Support downcasting to the concrete variant.
    fn as_any(&self) -> &dyn Any;

    /// Support downcasting to the concrete variant.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A unicorn. Walks the meadow using the shared contract unchanged.
#[derive(Debug, Clone)]
pub struct Unicorn {
    core: CreatureCore,
}

impl Unicorn {
    /// Create a unicorn from shared state.
    pub fn new(core: CreatureCore) -> Self {
        Self { core }
    }
}

impl Creature for Unicorn {
    fn core(&self) -> &CreatureCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut CreatureCore {
        &mut self.core
    }
    fn species(&self) -> Species {
        Species::Unicorn
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Height of the fairy's hover bob in pixels.
const FLUTTER_AMPLITUDE: f32 = 3.0;
/// Hover bobs per second.
const FLUTTER_HZ: f32 = 1.5;

/// A fairy. Same needs and wandering as a unicorn, drawn bobbing in the air.
#[derive(Debug, Clone)]
pub struct Fairy {
    core: CreatureCore,
    flutter_phase: f32,
}

impl Fairy {
    /// Create a fairy from shared state.
    pub fn new(core: CreatureCore) -> Self {
        Self {
            core,
            flutter_phase: 0.0,
        }
    }

    /// Current hover offset; negative is up.
    pub fn lift(&self) -> f32 {
        -FLUTTER_AMPLITUDE * (self.flutter_phase * std::f32::consts::TAU).sin().abs()
    }
}

impl Creature for Fairy {
    fn core(&self) -> &CreatureCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut CreatureCore {
        &mut self.core
    }
    fn species(&self) -> Species {
        Species::Fairy
    }

    fn step(&mut self, delta_time: f32, rng: &mut dyn RngCore) -> FrameReport {
        let report = self.core.step(delta_time, rng);
        if delta_time.is_finite() && delta_time > 0.0 {
            self.flutter_phase = (self.flutter_phase + delta_time * FLUTTER_HZ).fract();
        }
        report
    }

    fn draw_state(&self) -> DrawState {
        DrawState {
            lift: self.lift(),
            ..self.core.draw_state()
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Instantiate the variant matching the profile's species.
pub fn spawn(core: CreatureCore) -> Box<dyn Creature> {
    match core.profile().species {
        Species::Unicorn => Box::new(Unicorn::new(core)),
        Species::Fairy => Box::new(Fairy::new(core)),
    }
}
