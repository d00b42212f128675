use glam::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;

use gf_core::creature::{CreatureId, CreatureProfile};
use gf_core::geometry::Size;
use gf_core::player::{PlayerData, PlayerManager};
use gf_core::roster::Roster;

use crate::clock::FrameClock;
use crate::config::SimConfig;
use crate::creature::{
    ActionOutcome, Creature, CreatureCore, CreatureStatus, DisplayFlags, DrawState, spawn,
};
use crate::error::{SimError, SimResult};
use crate::event::{EventLog, SimEvent, SimEventKind};
use crate::needs::Action;
use crate::wander::WanderEvent;

/// A gameplay session: every creature, the player, and the shared RNG.
///
/// The frame driver calls [`Simulation::update`] once per frame and reads
/// [`Simulation::draw_states`] to render. Creatures are updated in the order
/// they were added.
pub struct Simulation {
    config: SimConfig,
    clock: FrameClock,
    rng: StdRng,
    events: EventLog,
    creatures: Vec<Box<dyn Creature>>,
    player: PlayerManager,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("frame", &self.clock.frame())
            .field("creatures", &self.creatures.len())
            .field("events", &self.events.len())
            .finish()
    }
}

impl Simulation {
    /// Create an empty session.
    pub fn new(config: SimConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        let events = EventLog::new(config.max_events);
        Self {
            config,
            clock: FrameClock::new(),
            rng,
            events,
            creatures: Vec::new(),
            player: PlayerManager::default(),
        }
    }

    /// Create a session populated from a roster. Roster creatures are free.
    pub fn with_roster(config: SimConfig, roster: &Roster) -> SimResult<Self> {
        let mut sim = Self::new(config);
        for profile in roster.profiles()? {
            sim.add(profile)?;
        }
        Ok(sim)
    }

    /// Replace the player's starting data.
    pub fn with_player(mut self, data: PlayerData) -> Self {
        self.player = PlayerManager::new(data);
        self
    }

    /// Add a creature at a random legal spot in the arena.
    pub fn add(&mut self, profile: CreatureProfile) -> SimResult<CreatureId> {
        profile.validate()?;
        let id = profile.id;
        let mut core = CreatureCore::with_configs(
            profile,
            Vec2::ZERO,
            self.config.bounds,
            self.config.needs.clone(),
            self.config.wander.clone(),
        );
        let start = core.wanderer().pick_target(&mut self.rng);
        core.wanderer_mut().place(start);
        *core.display_mut() = self.config.display;

        let creature = spawn(core);
        let description = format!("{} the {} arrives", creature.name(), creature.species());
        log::info!("{description} at ({:.0}, {:.0})", start.x, start.y);
        self.creatures.push(creature);
        self.emit(SimEventKind::CreatureAdded { creature: id }, description);
        Ok(id)
    }

    /// Buy a creature with the player's currency, then add it.
    pub fn adopt(&mut self, profile: CreatureProfile) -> SimResult<CreatureId> {
        profile.validate()?;
        let decision = self.player.adopt(&profile)?;
        let name = profile.name.clone();
        let id = self.add(profile)?;
        self.emit(
            SimEventKind::Adopted {
                creature: id,
                cost: decision.cost,
            },
            format!("{name} adopted for {}", decision.cost),
        );
        Ok(id)
    }

    /// Advance every creature by one frame of `delta_time` seconds.
    pub fn update(&mut self, delta_time: f32) {
        let frame = self.clock.advance(delta_time);

        for creature in &mut self.creatures {
            let report = creature.step(delta_time, &mut self.rng);
            let id = creature.id();

            for need in report.newly_urgent {
                self.events.push(SimEvent::new(
                    frame,
                    SimEventKind::NeedUrgent { creature: id, need },
                    format!("{} urgently needs {need}", creature.name()),
                ));
            }

            let Some(event) = report.wander else {
                continue;
            };
            let (kind, description) = match event {
                WanderEvent::TargetChosen(target) => (
                    SimEventKind::TargetChosen { creature: id, target },
                    format!(
                        "{} wanders toward ({:.0}, {:.0})",
                        creature.name(),
                        target.x,
                        target.y
                    ),
                ),
                WanderEvent::Arrived { pause } => (
                    SimEventKind::Arrived { creature: id },
                    format!("{} stops to rest for {pause:.1}s", creature.name()),
                ),
                WanderEvent::Turned(facing) => (
                    SimEventKind::Turned {
                        creature: id,
                        facing,
                    },
                    format!(
                        "{} turns {}",
                        creature.name(),
                        if facing.is_left() { "left" } else { "right" }
                    ),
                ),
            };
            log::debug!("frame {frame}: {description}");
            self.events.push(SimEvent::new(frame, kind, description));
        }
    }

    /// Step `seconds` of simulated time at a fixed `fps`. Returns the number of frames run.
    pub fn run_for(&mut self, seconds: f32, fps: u32) -> SimResult<u64> {
        if fps == 0 {
            return Err(SimError::InvalidConfig("fps must be positive".into()));
        }
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "cannot run for {seconds} seconds"
            )));
        }
        let frames = (f64::from(seconds) * f64::from(fps)).round() as u64;
        let dt = 1.0 / fps as f32;
        for _ in 0..frames {
            self.update(dt);
        }
        Ok(frames)
    }

    /// Apply a player action to one creature.
    pub fn act(&mut self, id: CreatureId, action: Action) -> SimResult<ActionOutcome> {
        let creature = self
            .creatures
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or(SimError::CreatureNotFound(id))?;
        let outcome = creature.perform(action);
        let description = format!(
            "{}: {action} lowers {} {:.0} -> {:.0}",
            creature.name(),
            outcome.need,
            outcome.before,
            outcome.after
        );
        self.emit(
            SimEventKind::ActionApplied {
                creature: id,
                action,
                need: outcome.need,
                before: outcome.before,
                after: outcome.after,
            },
            description,
        );
        Ok(outcome)
    }

    /// Apply a player action to the creature with this name.
    pub fn act_by_name(&mut self, name: &str, action: Action) -> SimResult<ActionOutcome> {
        let id = self
            .find_by_name(name)
            .map(|c| c.id())
            .ok_or_else(|| SimError::UnknownName(name.to_string()))?;
        self.act(id, action)
    }

    /// Snapshot of one creature.
    pub fn status(&self, id: CreatureId) -> SimResult<CreatureStatus> {
        self.creature(id)
            .map(|c| c.get_status())
            .ok_or(SimError::CreatureNotFound(id))
    }

    /// Snapshots of every creature, in insertion order.
    pub fn statuses(&self) -> Vec<CreatureStatus> {
        self.creatures.iter().map(|c| c.get_status()).collect()
    }

    /// Drawing snapshots of every creature, in insertion order.
    pub fn draw_states(&self) -> Vec<DrawState> {
        self.creatures.iter().map(|c| c.draw_state()).collect()
    }

    /// Resize the arena for every current and future creature.
    pub fn set_wander_bounds(&mut self, width: u32, height: u32) {
        let bounds = Size::new(width, height);
        if bounds == self.config.bounds {
            return;
        }
        log::info!("wander bounds {} -> {bounds}", self.config.bounds);
        self.config.bounds = bounds;
        for creature in &mut self.creatures {
            creature.set_wander_bounds(width, height);
        }
    }

    /// Current arena size.
    pub fn bounds(&self) -> Size {
        self.config.bounds
    }

    /// Apply presentation toggles to every current and future creature.
    pub fn set_display(&mut self, display: DisplayFlags) {
        self.config.display = display;
        for creature in &mut self.creatures {
            *creature.display_mut() = display;
        }
    }

    /// Session-wide presentation toggles.
    pub fn display(&self) -> DisplayFlags {
        self.config.display
    }

    /// Look up a creature.
    pub fn creature(&self, id: CreatureId) -> Option<&dyn Creature> {
        self.creatures
            .iter()
            .find(|c| c.id() == id)
            .map(|c| c.as_ref())
    }

    /// Look up a creature mutably.
    pub fn creature_mut(&mut self, id: CreatureId) -> Option<&mut (dyn Creature + 'static)> {
        self.creatures
            .iter_mut()
            .find(|c| c.id() == id)
            .map(|c| c.as_mut())
    }

    /// Look up a creature as its concrete variant.
    pub fn get<T: Creature + 'static>(&self, id: CreatureId) -> Option<&T> {
        self.creature(id)?.as_any().downcast_ref::<T>()
    }

    /// Look up a creature by name, case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Option<&dyn Creature> {
        self.creatures
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .map(|c| c.as_ref())
    }

    /// Ids of every creature, in insertion order.
    pub fn ids(&self) -> Vec<CreatureId> {
        self.creatures.iter().map(|c| c.id()).collect()
    }

    /// Number of creatures.
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Return `true` if the session has no creatures.
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// The event log.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// The frame clock.
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// The player's economy.
    pub fn player(&self) -> &PlayerData {
        self.player.data()
    }

    /// Return the current frame number.
    pub fn current_frame(&self) -> u64 {
        self.clock.frame()
    }

    fn emit(&mut self, kind: SimEventKind, description: impl Into<String>) {
        self.events
            .push(SimEvent::new(self.clock.frame(), kind, description));
    }
}
