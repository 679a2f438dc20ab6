//! Replay of a recorded event feed
//!
//! Writes the demo events to a newline-delimited JSON file, replays the file
//! into a fresh scoreboard and checks that both boards agree.

use std::fs::File;
use std::io::{BufReader, Write};

use scoreboard::Scoreboard;
use scoreboard_cli::demo::demo_events;
use scoreboard_cli::replay::{replay_events, ReplayReport};
use types::event::Event;

#[test]
fn test_recorded_feed_reproduces_board() {
    let mut feed = tempfile::NamedTempFile::new().unwrap();
    for event in demo_events() {
        writeln!(feed, "{}", serde_json::to_string(&event).unwrap()).unwrap();
    }
    writeln!(feed, "{}", serde_json::to_string(&Event::finish("Germany", "France")).unwrap()).unwrap();
    feed.flush().unwrap();

    let replayed = Scoreboard::new();
    let report = replay_events(&replayed, BufReader::new(File::open(feed.path()).unwrap())).unwrap();
    assert_eq!(report, ReplayReport { applied: 11, rejected: 0, malformed: 0 });

    let direct = Scoreboard::new();
    for event in demo_events() {
        direct.handle_event(&event).unwrap();
    }
    direct.handle_event(&Event::finish("Germany", "France")).unwrap();

    assert_eq!(replayed.summary(), direct.summary());
    assert_eq!(
        replayed.summary(),
        "Game Summary:\n\
         1. Uruguay 6 - Italy 6\n\
         2. Spain 10 - Brazil 2\n\
         3. Mexico 0 - Canada 5\n\
         4. Austria 3 - Australia 1\n"
    );
}

#[test]
fn test_replaying_twice_rejects_duplicate_starts() {
    let mut feed = tempfile::NamedTempFile::new().unwrap();
    writeln!(feed, r#"{{"kind":"start","home_team":"A","away_team":"B"}}"#).unwrap();
    feed.flush().unwrap();

    let board = Scoreboard::new();
    let first = replay_events(&board, BufReader::new(File::open(feed.path()).unwrap())).unwrap();
    let second = replay_events(&board, BufReader::new(File::open(feed.path()).unwrap())).unwrap();

    assert_eq!(first.applied, 1);
    assert_eq!(second.rejected, 1);
    assert_eq!(board.len(), 1);
}
