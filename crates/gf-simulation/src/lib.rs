//! Frame-stepped creature simulation for Glimmerfield.
//!
//! Each frame the driver passes the elapsed time to [`Simulation::update`].
//! Every creature first decays its needs, then advances its wander state
//! machine with a speed scaled by how tired it is. Player actions lower a
//! single need. The renderer reads owned [`DrawState`] snapshots and never
//! touches simulation state directly.

/// Frame counter and elapsed time.
pub mod clock;
/// Configuration types for a session.
pub mod config;
/// The creature contract and its unicorn and fairy variants.
pub mod creature;
/// Error types for the simulation crate.
pub mod error;
/// Simulation event types and the event log.
pub mod event;
/// Needs model: four decaying channels and derived happiness.
pub mod needs;
/// Top-level session orchestrator.
pub mod simulation;
/// Wander state machine: idle, moving, paused.
pub mod wander;

/// Re-export of [`clock::FrameClock`].
pub use clock::FrameClock;
/// Re-export of [`config::SimConfig`].
pub use config::SimConfig;
/// Re-exports of the creature contract and snapshots.
pub use creature::{
    ActionOutcome, BarState, Creature, CreatureCore, CreatureStatus, DisplayFlags, DrawState,
    Fairy, Unicorn,
};
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of [`event::EventLog`], [`event::SimEvent`], and [`event::SimEventKind`].
pub use event::{EventLog, SimEvent, SimEventKind};
/// Re-exports of the needs model.
pub use needs::{Action, NeedKind, Needs, NeedsConfig};
/// Re-export of [`simulation::Simulation`].
pub use simulation::Simulation;
/// Re-exports of the wander state machine.
pub use wander::{Facing, WanderConfig, WanderEvent, WanderMode, Wanderer};
