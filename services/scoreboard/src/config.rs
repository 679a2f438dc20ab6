//! Scoreboard configuration

use serde::Deserialize;

use crate::ranking::TieBreak;

pub const DEFAULT_SUMMARY_HEADER: &str = "Game Summary:";

/// Configuration for a scoreboard instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreboardConfig {
    /// Ordering among matches with the same total score.
    pub tie_break: TieBreak,
    /// First line of the summary report.
    pub summary_header: String,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::default(),
            summary_header: DEFAULT_SUMMARY_HEADER.to_string(),
        }
    }
}

impl ScoreboardConfig {
    /// Parse a JSON configuration document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
