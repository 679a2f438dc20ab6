//! Error types for the scoreboard
//!
//! Every failure is a value returned to the caller. A returned error always
//! means no state change happened.

use thiserror::Error;

/// Reasons an event is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreboardError {
    #[error("unknown event type: {0}")]
    UnknownEventType(String),

    #[error("the game is already ongoing: {home} vs {away}")]
    AlreadyOngoing { home: String, away: String },

    #[error("home team already playing: {team}")]
    HomeTeamBusy { team: String },

    #[error("away team already playing: {team}")]
    AwayTeamBusy { team: String },

    #[error("game not found: {home} vs {away}")]
    NotFound { home: String, away: String },

    #[error("score cannot be negative: {home_score}:{away_score}")]
    InvalidScore { home_score: i64, away_score: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ScoreboardError::NotFound {
            home: "A".to_string(),
            away: "B".to_string(),
        };
        assert_eq!(err.to_string(), "game not found: A vs B");
    }

    #[test]
    fn test_invalid_score_display() {
        let err = ScoreboardError::InvalidScore {
            home_score: -1,
            away_score: 0,
        };
        assert!(err.to_string().starts_with("score cannot be negative"));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_team_busy_names_team() {
        let err = ScoreboardError::HomeTeamBusy {
            team: "Spain".to_string(),
        };
        assert_eq!(err.to_string(), "home team already playing: Spain");
    }
}
