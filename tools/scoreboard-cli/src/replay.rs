//! Event feed replay
//!
//! Reads one JSON event per line and applies it to a scoreboard. Blank lines
//! are skipped. Lines that fail to parse and events the scoreboard rejects
//! are counted and logged, and replay continues with the next line.

use std::io::BufRead;

use scoreboard::Scoreboard;
use serde::Serialize;
use tracing::{info, warn};
use types::event::Event;

/// Outcome counts of a replay run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReplayReport {
    pub applied: usize,
    pub rejected: usize,
    pub malformed: usize,
}

/// Apply every event in `reader` to `board`
pub fn replay_events(board: &Scoreboard, reader: impl BufRead) -> std::io::Result<ReplayReport> {
    let mut report = ReplayReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let event: Event = match serde_json::from_str(trimmed) {
            Ok(event) => event,
            Err(err) => {
                warn!(line = index + 1, error = %err, "Skipping malformed event");
                report.malformed += 1;
                continue;
            }
        };

        match board.handle_event(&event) {
            Ok(()) => report.applied += 1,
            Err(_) => report.rejected += 1,
        }
    }

    info!(
        applied = report.applied,
        rejected = report.rejected,
        malformed = report.malformed,
        "Replay finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_replay_counts() {
        let feed = r#"
{"kind":"start","home_team":"Spain","away_team":"Brazil"}
{"kind":"update","home_team":"Spain","away_team":"Brazil","home_score":1,"away_score":0}
{"kind":"update","home_team":"Spain","away_team":"Brazil","home_score":-1,"away_score":0}
{"kind":"pause","home_team":"Spain","away_team":"Brazil"}
not json

{"kind":"start","home_team":"Italy"}
"#;
        let board = Scoreboard::new();
        let report = replay_events(&board, Cursor::new(feed)).unwrap();

        assert_eq!(report, ReplayReport { applied: 2, rejected: 2, malformed: 2 });
        assert_eq!(board.summary(), "Game Summary:\n1. Spain 1 - Brazil 0\n");
    }
}
