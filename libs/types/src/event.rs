//! Events that drive the scoreboard
//!
//! An event is an immutable instruction: start a match, replace its score,
//! or finish it. The kind is kept open (`EventKind::Unknown`) so that events
//! arriving from a front end or a JSON feed with an unrecognized kind reach
//! the processor and are rejected there, instead of failing to parse.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of an event
///
/// Serialized as `"start"`, `"update"` or `"finish"`. Any other string
/// deserializes to `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Start,
    Update,
    Finish,
    Unknown(UnknownKind),
}

/// Label of an unrecognized kind
///
/// Only built by `EventKind::from`, so it never holds `"start"`, `"update"`
/// or `"finish"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownKind(String);

impl UnknownKind {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl EventKind {
    /// Wire / log label of the kind
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Start => "start",
            EventKind::Update => "update",
            EventKind::Finish => "finish",
            EventKind::Unknown(raw) => raw.as_str(),
        }
    }
}

impl From<String> for EventKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "start" => EventKind::Start,
            "update" => EventKind::Update,
            "finish" => EventKind::Finish,
            _ => EventKind::Unknown(UnknownKind(raw)),
        }
    }
}

impl From<&str> for EventKind {
    fn from(raw: &str) -> Self {
        EventKind::from(raw.to_string())
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Unknown(raw) => raw.0,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instruction to change the state of one match
///
/// Scores are only meaningful for `Update`. They are signed so that a
/// negative score can be expressed and rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub home_score: i64,
    #[serde(default)]
    pub away_score: i64,
}

impl Event {
    /// Start a new match between `home` and `away`
    pub fn start(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self::with_kind(EventKind::Start, home, away)
    }

    /// Replace the score of an ongoing match
    pub fn update(
        home: impl Into<String>,
        away: impl Into<String>,
        home_score: i64,
        away_score: i64,
    ) -> Self {
        Self {
            home_score,
            away_score,
            ..Self::with_kind(EventKind::Update, home, away)
        }
    }

    /// Finish (remove) an ongoing match
    pub fn finish(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self::with_kind(EventKind::Finish, home, away)
    }

    /// Build an event of an arbitrary kind with zero scores
    pub fn with_kind(
        kind: impl Into<EventKind>,
        home: impl Into<String>,
        away: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            home_team: home.into(),
            away_team: away.into(),
            home_score: 0,
            away_score: 0,
        }
    }
}
