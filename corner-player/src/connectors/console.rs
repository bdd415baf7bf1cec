//! [`Connector`] for playing in a terminal.

use super::{Command, Connector};
use crate::config::Seat;
use anyhow::Result;
use corner_othello::{Game, Location, LocationList, Outcome, Player, RulesError, Score};
use itertools::Itertools;
use std::io::{BufRead, Write};

/// Reads commands from `input` and writes the game to `output`.
pub struct ConsoleConnector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleConnector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// The status line shown at the start of a turn.
pub fn turn_message(player: Player, seat: Seat) -> String {
    match seat {
        Seat::Human => format!("{}'s Turn", player),
        Seat::Auto => format!("{}'s Turn (AI)", player),
    }
}

/// Parse one line of input. Returns `None` if it is not a command or a location.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Some(Command::Quit),
        "r" | "reset" | "new" => Some(Command::Reset),
        other => other.parse::<Location>().ok().map(Command::Place),
    }
}

impl<R: BufRead, W: Write> Connector for ConsoleConnector<R, W> {
    fn show(&mut self, game: &Game, hints: Option<LocationList>) -> Result<()> {
        let board = game.board();
        match hints {
            Some(hints) => writeln!(self.output, "\n{}", board.with_hints(hints))?,
            None => writeln!(self.output, "\n{}", board)?,
        }
        writeln!(self.output, "{}", game.score())?;
        Ok(())
    }

    fn announce_turn(&mut self, player: Player, seat: Seat) -> Result<()> {
        writeln!(self.output, "{}", turn_message(player, seat))?;
        Ok(())
    }

    fn announce_pass(&mut self, player: Player) -> Result<()> {
        writeln!(self.output, "{} has no moves! Passing...", player)?;
        Ok(())
    }

    fn announce_result(&mut self, score: Score, outcome: Outcome) -> Result<()> {
        writeln!(self.output, "{}\n{}", score, outcome)?;
        Ok(())
    }

    fn reject_move(&mut self, error: &RulesError) -> Result<()> {
        writeln!(self.output, "Invalid move: {}.", error)?;
        Ok(())
    }

    fn request_move(&mut self, game: &Game, player: Player) -> Result<Command> {
        loop {
            write!(self.output, "Enter a move for {} (or 'reset', 'quit'): ", player)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Command::Quit);
            }

            match parse_command(&line) {
                Some(command) => return Ok(command),
                None => writeln!(
                    self.output,
                    "Cannot parse move. Legal moves: {}",
                    game.legal_moves(player).join(", ")
                )?,
            }
        }
    }
}
