//! Summary ranking
//!
//! Orders ongoing matches by combined score, highest first. Matches with the
//! same total are ordered by their start marker in the configured direction,
//! which makes the order total and deterministic.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use types::game::Match;

/// Direction of the start-marker tie-break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Among equal totals, the most recently started match comes first
    #[default]
    MostRecentFirst,
    /// Among equal totals, the earliest started match comes first
    EarliestFirst,
}

impl TieBreak {
    fn compare(self, a: &Match, b: &Match) -> Ordering {
        match self {
            TieBreak::MostRecentFirst => b.started_seq.cmp(&a.started_seq),
            TieBreak::EarliestFirst => a.started_seq.cmp(&b.started_seq),
        }
    }
}

/// Sort matches for the summary
///
/// Uses a stable sort, so inputs that are equal on both keys keep their
/// relative order.
pub fn rank(mut matches: Vec<Match>, tie_break: TieBreak) -> Vec<Match> {
    matches.sort_by(|a, b| {
        b.total_score()
            .cmp(&a.total_score())
            .then_with(|| tie_break.compare(a, b))
    });
    matches
}

/// Render ranked matches as a numbered list under `header`
///
/// Every line, the header included, ends with a newline.
pub fn render_summary(header: &str, ranked: &[Match]) -> String {
    let mut summary = String::with_capacity(header.len() + 1 + ranked.len() * 32);
    summary.push_str(header);
    summary.push('\n');

    for (index, game) in ranked.iter().enumerate() {
        summary.push_str(&format!("{}. {}\n", index + 1, game));
    }

    summary
}
