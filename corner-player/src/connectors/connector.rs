use crate::config::Seat;
use anyhow::Result;
use corner_othello::{Game, Location, LocationList, Outcome, Player, RulesError, Score};
use std::thread;
use std::time::Duration;

/// What a human asked for when it was their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Place(Location),
    Reset,
    Quit,
}

/// A player-facing interface between the driver and whatever renders the game
/// and collects input. The driver owns the game; connectors only see it.
pub trait Connector {
    /// Render the current position. `hints` are the legal moves to highlight, if any.
    fn show(&mut self, game: &Game, hints: Option<LocationList>) -> Result<()>;

    /// Tell the players whose turn it is.
    fn announce_turn(&mut self, player: Player, seat: Seat) -> Result<()>;

    /// Tell the players that `player` had no legal move and was skipped.
    fn announce_pass(&mut self, player: Player) -> Result<()>;

    fn announce_result(&mut self, score: Score, outcome: Outcome) -> Result<()>;

    /// Report a move the engine refused. The game is unchanged.
    fn reject_move(&mut self, error: &RulesError) -> Result<()>;

    /// Ask the human playing `player` what to do.
    fn request_move(&mut self, game: &Game, player: Player) -> Result<Command>;

    /// Hold the game for `delay` so the players can follow it. Only called with
    /// non-zero delays.
    fn wait(&mut self, delay: Duration) -> Result<()> {
        thread::sleep(delay);
        Ok(())
    }
}
