//! Match registry
//!
//! Owns every ongoing match, keyed by its structural identity. All
//! mutations and snapshot reads go through a single lock, so the registry
//! invariants hold under concurrent callers:
//! - at most one ongoing match per identity key
//! - a team plays in at most one ongoing match, in either role
//! - scores are never negative
//! - stored team names are exactly those of the start event

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::Mutex;
use tracing::debug;
use types::errors::ScoreboardError;
use types::game::Match;
use types::ids::MatchKey;

/// Registry of ongoing matches
pub struct MatchRegistry {
    state: Mutex<RegistryState>,
}

struct RegistryState {
    matches: HashMap<MatchKey, Match>,
    /// Next start marker to hand out
    next_sequence: u64,
}

impl RegistryState {
    fn is_playing(&self, team: &str) -> bool {
        self.matches.values().any(|m| m.involves(team))
    }
}

impl MatchRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RegistryState {
                matches: HashMap::new(),
                next_sequence: 1,
            }),
        }
    }

    /// Start a new match with zero scores
    ///
    /// An identity collision is reported before any team-busy check. The
    /// home team is checked against every ongoing match before the away team.
    pub fn start(&self, home: &str, away: &str) -> Result<(), ScoreboardError> {
        let mut state = self.state.lock();
        let key = MatchKey::new(home, away);

        if state.matches.contains_key(&key) {
            return Err(ScoreboardError::AlreadyOngoing {
                home: home.to_string(),
                away: away.to_string(),
            });
        }
        if state.is_playing(home) {
            return Err(ScoreboardError::HomeTeamBusy {
                team: home.to_string(),
            });
        }
        if state.is_playing(away) {
            return Err(ScoreboardError::AwayTeamBusy {
                team: away.to_string(),
            });
        }

        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state
            .matches
            .insert(key, Match::new(home, away, sequence, Utc::now()));

        debug!(home, away, sequence, "Match registered");
        Ok(())
    }

    /// Replace both scores of an ongoing match
    ///
    /// Negative scores are rejected before the match is looked up.
    pub fn update(
        &self,
        home: &str,
        away: &str,
        home_score: i64,
        away_score: i64,
    ) -> Result<(), ScoreboardError> {
        let (Ok(new_home), Ok(new_away)) = (u64::try_from(home_score), u64::try_from(away_score))
        else {
            return Err(ScoreboardError::InvalidScore {
                home_score,
                away_score,
            });
        };

        let mut state = self.state.lock();
        let game = state
            .matches
            .get_mut(&MatchKey::new(home, away))
            .ok_or_else(|| ScoreboardError::NotFound {
                home: home.to_string(),
                away: away.to_string(),
            })?;

        game.home_score = new_home;
        game.away_score = new_away;

        debug!(home, away, home_score = new_home, away_score = new_away, "Score replaced");
        Ok(())
    }

    /// Remove an ongoing match. There is no record kept afterwards.
    pub fn finish(&self, home: &str, away: &str) -> Result<(), ScoreboardError> {
        let mut state = self.state.lock();
        let removed = state
            .matches
            .remove(&MatchKey::new(home, away))
            .ok_or_else(|| ScoreboardError::NotFound {
                home: home.to_string(),
                away: away.to_string(),
            })?;

        debug!(
            home,
            away,
            home_score = removed.home_score,
            away_score = removed.away_score,
            "Match removed"
        );
        Ok(())
    }

    /// Point-in-time copy of all ongoing matches, in no particular order
    pub fn snapshot(&self) -> Vec<Match> {
        self.state.lock().matches.values().cloned().collect()
    }

    /// Copy of a single ongoing match
    pub fn get(&self, home: &str, away: &str) -> Option<Match> {
        self.state.lock().matches.get(&MatchKey::new(home, away)).cloned()
    }

    /// Check whether `team` currently plays in any ongoing match
    pub fn is_playing(&self, team: &str) -> bool {
        self.state.lock().is_playing(team)
    }

    /// Number of ongoing matches
    pub fn len(&self) -> usize {
        self.state.lock().matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}
