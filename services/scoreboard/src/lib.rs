//! Scoreboard Service
//!
//! In-memory live scoreboard. Tracks ongoing matches, applies start / update
//! / finish events and produces a ranked summary at any time.
//!
//! **Components:**
//! - `registry`: ongoing matches keyed by (home, away), with team exclusivity
//! - `processor`: dispatches one event to the registry
//! - `interceptor`: ordered chain wrapping every event (logging, metrics, ...)
//! - `ranking`: total-score ordering with a deterministic tie-break
//!
//! **Key Invariants:**
//! - At most one ongoing match per identity key
//! - A team plays in at most one ongoing match
//! - Scores are never negative
//! - A rejected event changes nothing

pub mod config;
pub mod interceptor;
pub mod logging;
pub mod metrics;
pub mod processor;
pub mod ranking;
pub mod registry;
pub mod scoreboard;

pub use config::ScoreboardConfig;
pub use interceptor::{from_fn, Interceptor, Next};
pub use logging::LoggingInterceptor;
pub use metrics::{MetricsInterceptor, MetricsSnapshot};
pub use ranking::TieBreak;
pub use registry::MatchRegistry;
pub use scoreboard::Scoreboard;
