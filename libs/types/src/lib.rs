//! Types library for the live scoreboard
//!
//! This library provides the core type definitions shared by the scoreboard
//! service and its front ends: match identity, match state, the events that
//! drive it, and the error taxonomy.
//!
//! # Modules
//! - `ids`: Structural match identity (`MatchKey`)
//! - `game`: Ongoing match state (`Match`)
//! - `event`: Start / update / finish instructions
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod game;
pub mod event;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::game::*;
    pub use crate::event::*;
    pub use crate::errors::*;
}
