//! Interactive console
//!
//! Menu-driven front end. Every rejected event is shown to the operator as
//! `Error: <message>` and the menu is shown again. End of input exits.

use std::io::{self, BufRead, Write};

use scoreboard::Scoreboard;
use types::event::Event;

const MENU: &str = "\nMENU:
1. Games summary
2. Add game
3. Update scores
4. Finish game
5. Exit
Choose option (1, 2, 3, 4 or 5): ";

/// Whether the console should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Console bound to a scoreboard and a pair of streams
pub struct Console<'a, R, W> {
    board: &'a Scoreboard,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(board: &'a Scoreboard, input: R, output: W) -> Self {
        Self {
            board,
            input,
            output,
        }
    }

    /// Show the menu until the operator exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        while self.show_menu()? == Flow::Continue {}
        Ok(())
    }

    fn show_menu(&mut self) -> io::Result<Flow> {
        write!(self.output, "{MENU}")?;
        self.output.flush()?;

        let Some(option) = self.read_number()? else {
            return Ok(Flow::Exit);
        };

        match option {
            1 => {
                writeln!(self.output, "{}", self.board.summary())?;
                Ok(Flow::Continue)
            }
            2 => self.add_game(),
            3 => self.update_game(),
            4 => self.finish_game(),
            5 => Ok(Flow::Exit),
            _ => {
                writeln!(self.output, "\nUnknown option, please try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add_game(&mut self) -> io::Result<Flow> {
        let Some((home, away)) = self.read_teams()? else {
            return Ok(Flow::Exit);
        };
        self.submit(Event::start(home, away))
    }

    fn update_game(&mut self) -> io::Result<Flow> {
        let Some((home, away)) = self.read_teams()? else {
            return Ok(Flow::Exit);
        };
        let Some(home_score) = self.prompt_number("Home team score: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(away_score) = self.prompt_number("Away team score: ")? else {
            return Ok(Flow::Exit);
        };
        self.submit(Event::update(home, away, home_score, away_score))
    }

    fn finish_game(&mut self) -> io::Result<Flow> {
        let Some((home, away)) = self.read_teams()? else {
            return Ok(Flow::Exit);
        };
        self.submit(Event::finish(home, away))
    }

    fn submit(&mut self, event: Event) -> io::Result<Flow> {
        if let Err(err) = self.board.handle_event(&event) {
            writeln!(self.output, "Error: {err}")?;
        }
        Ok(Flow::Continue)
    }

    fn read_teams(&mut self) -> io::Result<Option<(String, String)>> {
        let Some(home) = self.prompt_line("Home team name: ")? else {
            return Ok(None);
        };
        let Some(away) = self.prompt_line("Away team name: ")? else {
            return Ok(None);
        };
        Ok(Some((home, away)))
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_number(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_number()
    }

    /// Next trimmed line, `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompts until a non-negative integer is entered
    fn read_number(&mut self) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<i64>() {
                Ok(value) if value >= 0 => return Ok(Some(value)),
                _ => {
                    write!(self.output, "\"{line}\" is not a positive number! Please try again: ")?;
                    self.output.flush()?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(board: &Scoreboard, input: &str) -> String {
        let mut output = Vec::new();
        Console::new(board, Cursor::new(input.to_string()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_update_and_summary() {
        let board = Scoreboard::new();
        let output = run_session(&board, "2\nSpain\nBrazil\n3\nSpain\nBrazil\n10\n2\n1\n5\n");

        assert!(output.contains("Game Summary:\n1. Spain 10 - Brazil 2\n"));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_error_is_shown_and_menu_returns() {
        let board = Scoreboard::new();
        let output = run_session(&board, "4\nA\nB\n5\n");

        assert!(output.contains("Error: game not found: A vs B"));
        assert_eq!(output.matches("MENU:").count(), 2);
    }

    #[test]
    fn test_invalid_number_reprompts() {
        let board = Scoreboard::new();
        board.handle_event(&Event::start("A", "B")).unwrap();
        let output = run_session(&board, "3\nA\nB\n-3\nx\n1\n2\n5\n");

        assert!(output.contains("\"-3\" is not a positive number!"));
        assert!(output.contains("\"x\" is not a positive number!"));
        assert_eq!(board.registry().get("A", "B").unwrap().total_score(), 3);
    }

    #[test]
    fn test_unknown_option_and_eof() {
        let board = Scoreboard::new();
        let output = run_session(&board, "9\n");

        assert!(output.contains("Unknown option, please try again."));
        // Second menu then end of input
        assert_eq!(output.matches("MENU:").count(), 2);
    }

    #[test]
    fn test_finish_removes_game() {
        let board = Scoreboard::new();
        run_session(&board, "2\nA\nB\n4\nA\nB\n5\n");
        assert!(board.is_empty());
    }
}
