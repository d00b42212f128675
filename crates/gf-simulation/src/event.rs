use glam::Vec2;

use gf_core::creature::CreatureId;

use crate::needs::{Action, NeedKind};
use crate::wander::Facing;

/// What kind of simulation event occurred.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEventKind {
    // Session
    /// A creature joined the session.
    CreatureAdded {
        /// The new creature.
        creature: CreatureId,
    },
    /// The player bought a creature.
    Adopted {
        /// The adopted creature.
        creature: CreatureId,
        /// What it cost.
        cost: u32,
    },

    // Needs
    /// A player action lowered a need.
    ActionApplied {
        /// The creature acted on.
        creature: CreatureId,
        /// The action taken.
        action: Action,
        /// The need it lowered.
        need: NeedKind,
        /// Level before the action.
        before: f32,
        /// Level after the action.
        after: f32,
    },
    /// A need rose past the urgent threshold.
    NeedUrgent {
        /// The creature in need.
        creature: CreatureId,
        /// The urgent need.
        need: NeedKind,
    },

    // Wander
    /// A creature picked a new wander target.
    TargetChosen {
        /// The wandering creature.
        creature: CreatureId,
        /// Top-left position it heads for.
        target: Vec2,
    },
    /// A creature reached its target and paused.
    Arrived {
        /// The creature that arrived.
        creature: CreatureId,
    },
    /// A creature reversed horizontal direction.
    Turned {
        /// The creature that turned.
        creature: CreatureId,
        /// Its new facing.
        facing: Facing,
    },
}

impl SimEventKind {
    /// The creature this event is about.
    pub fn creature(&self) -> CreatureId {
        match self {
            Self::CreatureAdded { creature }
            | Self::Adopted { creature, .. }
            | Self::ActionApplied { creature, .. }
            | Self::NeedUrgent { creature, .. }
            | Self::TargetChosen { creature, .. }
            | Self::Arrived { creature }
            | Self::Turned { creature, .. } => *creature,
        }
    }

    /// Return `true` for wander bookkeeping events, which are frequent and rarely interesting.
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            Self::TargetChosen { .. } | Self::Arrived { .. } | Self::Turned { .. }
        )
    }
}

/// A record of something that happened during simulation.
#[derive(Debug, Clone)]
pub struct SimEvent {
    /// The frame when this event occurred.
    pub frame: u64,
    /// The specific kind of event that occurred.
    pub kind: SimEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl SimEvent {
    /// Create a new simulation event with the given frame, kind, and description.
    pub fn new(frame: u64, kind: SimEventKind, description: impl Into<String>) -> Self {
        Self {
            frame,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during a session.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<SimEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Return all events that occurred at the given frame.
    pub fn events_at_frame(&self, frame: u64) -> Vec<&SimEvent> {
        self.events.iter().filter(|e| e.frame == frame).collect()
    }

    /// Return all events about the given creature.
    pub fn events_for_creature(&self, id: CreatureId) -> Vec<&SimEvent> {
        self.events
            .iter()
            .filter(|e| e.kind.creature() == id)
            .collect()
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
