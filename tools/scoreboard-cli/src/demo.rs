//! Seeded demonstration
//!
//! Starts five matches, sets their scores, prints the summary, finishes one
//! match and prints the summary again.

use std::io::Write;

use scoreboard::Scoreboard;
use types::event::Event;

/// Events applied before the first summary
pub fn demo_events() -> Vec<Event> {
    vec![
        Event::start("Mexico", "Canada"),
        Event::start("Spain", "Brazil"),
        Event::start("Germany", "France"),
        Event::start("Uruguay", "Italy"),
        Event::start("Austria", "Australia"),
        Event::update("Mexico", "Canada", 0, 5),
        Event::update("Spain", "Brazil", 10, 2),
        Event::update("Germany", "France", 2, 2),
        Event::update("Uruguay", "Italy", 6, 6),
        Event::update("Austria", "Australia", 3, 1),
    ]
}

/// Run the demo against `board`, writing both summaries to `out`
pub fn run_demo(board: &Scoreboard, out: &mut impl Write) -> std::io::Result<()> {
    for event in demo_events() {
        // Rejections are reported by the logging interceptor
        let _ = board.handle_event(&event);
    }
    writeln!(out, "{}", board.summary())?;

    let _ = board.handle_event(&Event::finish("Germany", "France"));
    writeln!(out, "{}", board.summary())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        let board = Scoreboard::new();
        let mut out = Vec::new();
        run_demo(&board, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let summaries: Vec<&str> = text.split("\n\n").filter(|s| !s.is_empty()).collect();
        assert_eq!(summaries.len(), 2);
        assert!(summaries[0].contains("5. Germany 2 - France 2"));
        assert!(!summaries[1].contains("Germany"));
        assert!(summaries[1].contains("4. Austria 3 - Australia 1"));
        assert_eq!(board.len(), 4);
    }
}
