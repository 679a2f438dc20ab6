//! Identity types for scoreboard entities
//!
//! A match is identified by the ordered pair of team names exactly as given
//! by the event that started it. No normalization or case folding happens:
//! "A vs B" and "B vs A" are different matches.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity key of an ongoing match
///
/// Structural (home, away) pair used directly as a map key, so team names
/// containing separators like `" vs "` can never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchKey {
    pub home: String,
    pub away: String,
}

impl MatchKey {
    /// Create a key from home and away team names
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}
