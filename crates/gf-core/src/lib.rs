//! Core types for Glimmerfield: creature profiles, rosters, and the player economy.
//!
//! This crate holds the plain data that the simulation is built from. It has
//! no notion of time or randomness; the `gf-simulation` crate turns profiles
//! into living creatures.

/// Creature identity: species, ids, colours, and profiles.
pub mod creature;
/// Error types used throughout the crate.
pub mod error;
/// Integer bounding boxes and arena sizes.
pub mod geometry;
/// Player currency, reputation, level, and purchase decisions.
pub mod player;
/// Roster files describing which creatures a session starts with.
pub mod roster;

/// Re-export creature identity types.
pub use creature::{Appearance, CreatureId, CreatureProfile, Rgb, Species};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export geometry types.
pub use geometry::{BoundingBox, Size};
/// Re-export player economy types.
pub use player::{Decision, PlayerData, PlayerManager};
/// Re-export roster types.
pub use roster::{Roster, RosterEntry};
