//! Scoreboard front ends
//!
//! Translate operator input into scoreboard events and render the summary.
//! None of this is part of the scoreboard core; it only uses the public
//! `Scoreboard` API.
//!
//! # Modules
//! - `console` — Interactive text menu
//! - `demo` — Seeded five-match demonstration
//! - `replay` — Apply newline-delimited JSON events from a file

pub mod console;
pub mod demo;
pub mod replay;

/// Crate version constant
pub const VERSION: &str = "0.1.0";
