//! Ongoing match state
//!
//! A `Match` exists only while it is being played. It is created by a start
//! event, its scores are replaced by update events, and a finish event
//! removes it. There is no finished state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single ongoing match with its current score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u64,
    pub away_score: u64,
    /// Registry-issued creation sequence, strictly increasing.
    /// This is the start marker used to break ranking ties.
    pub started_seq: u64,
    /// Wall-clock creation time. Informational only.
    pub started_at: DateTime<Utc>,
}

impl Match {
    /// Create a new match with zero scores
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        started_seq: u64,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_score: 0,
            away_score: 0,
            started_seq,
            started_at,
        }
    }

    /// Combined score of both sides, the primary ranking key
    pub fn total_score(&self) -> u64 {
        self.home_score.saturating_add(self.away_score)
    }

    /// Check whether `team` plays in this match, in either role
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }
}

/// Renders as `<home> <homeScore> - <away> <awayScore>`
impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Match {
        Match::new("Spain", "Brazil", 1, Utc::now())
    }

    #[test]
    fn test_new_match_has_zero_scores() {
        let m = sample();
        assert_eq!(m.home_score, 0);
        assert_eq!(m.away_score, 0);
        assert_eq!(m.total_score(), 0);
    }

    #[test]
    fn test_total_score() {
        let mut m = sample();
        m.home_score = 10;
        m.away_score = 2;
        assert_eq!(m.total_score(), 12);
    }

    #[test]
    fn test_display() {
        let mut m = sample();
        m.home_score = 10;
        m.away_score = 2;
        assert_eq!(m.to_string(), "Spain 10 - Brazil 2");
    }

    #[test]
    fn test_involves_either_role() {
        let m = sample();
        assert!(m.involves("Spain"));
        assert!(m.involves("Brazil"));
        assert!(!m.involves("Italy"));
    }
}
