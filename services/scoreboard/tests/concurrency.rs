//! Concurrency test
//!
//! Many threads submit conflicting events to one shared scoreboard. The
//! registry lock must keep team exclusivity and identity uniqueness intact.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use scoreboard::{MetricsInterceptor, Scoreboard};
use types::event::Event;

const TEAMS: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

#[test]
fn test_concurrent_starts_keep_teams_exclusive() {
    let metrics = Arc::new(MetricsInterceptor::new());
    let mut board = Scoreboard::new();
    board.register_interceptor(Arc::clone(&metrics));
    let board = Arc::new(board);

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let board = Arc::clone(&board);
            thread::spawn(move || {
                for round in 0..200 {
                    let home = TEAMS[(worker + round) % TEAMS.len()];
                    let away = TEAMS[(worker + round * 3 + 1) % TEAMS.len()];
                    if home == away {
                        continue;
                    }
                    let _ = board.handle_event(&Event::start(home, away));
                    let _ = board.handle_event(&Event::update(home, away, round as i64, 1));
                    if round % 3 == 0 {
                        let _ = board.handle_event(&Event::finish(home, away));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let ongoing = board.registry().snapshot();
    let mut seen = HashSet::new();
    for game in &ongoing {
        assert!(seen.insert(game.home_team.clone()), "{} plays twice", game.home_team);
        assert!(seen.insert(game.away_team.clone()), "{} plays twice", game.away_team);
    }
    assert!(ongoing.len() <= TEAMS.len() / 2);

    let counts = metrics.snapshot();
    assert_eq!(counts.started - counts.finished, ongoing.len() as u64);
}

#[test]
fn test_concurrent_readers_see_consistent_summary() {
    let board = Arc::new(Scoreboard::new());
    board.handle_event(&Event::start("A", "B")).unwrap();

    let writer = {
        let board = Arc::clone(&board);
        thread::spawn(move || {
            for score in 0..500 {
                board.handle_event(&Event::update("A", "B", score, score)).unwrap();
            }
        })
    };
    let reader = {
        let board = Arc::clone(&board);
        thread::spawn(move || {
            for _ in 0..500 {
                let ranked = board.ranked();
                assert_eq!(ranked.len(), 1);
                assert_eq!(ranked[0].home_score, ranked[0].away_score);
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();
    assert_eq!(board.summary(), "Game Summary:\n1. A 499 - B 499\n");
}
