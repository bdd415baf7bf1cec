//! Implements game-level Othello logic: whose turn it is, forced passes and
//! the end of the game.
//!
//! A [`Game`] is a small `Copy` value. Transitions never modify a game in place;
//! they return the next one, so a rejected move leaves the caller's game as it was.

use crate::error::RulesError;
use crate::{heuristic, Board, Location, LocationList, Outcome, Score};
use log::{debug, info};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Player {
    /// The character used for this player's discs in board text.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'X',
            Player::White => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// Where the game stands between moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    AwaitingMove(Player),
    GameOver,
}

/// What happened most recently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LastAction {
    /// Nothing has been played yet.
    Start,
    Move { player: Player, location: Location },
    /// `player` had no legal move and their turn was skipped.
    Pass { player: Player },
}

/// Receives notifications as a game advances. Every hook defaults to doing nothing.
pub trait GameObserver {
    fn on_move(&mut self, _player: Player, _location: Location, _flipped: LocationList) {}

    /// `player` had no legal move and their turn was skipped.
    fn on_pass(&mut self, _player: Player) {}

    fn on_game_over(&mut self, _score: Score, _outcome: Outcome) {}
}

impl GameObserver for () {}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    status: Status,
    last_action: LastAction,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start a game from the standard opening, Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: Status::AwaitingMove(Player::default()),
            last_action: LastAction::Start,
        }
    }

    /// Resume from an arbitrary position with `to_move` due to play.
    /// Passes are resolved immediately: if `to_move` is stuck the turn goes back
    /// to the other player, and if neither can move the game is over.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let (status, passed) = advance(&board, !to_move, &mut ());
        let last_action = match passed {
            Some(player) => LastAction::Pass { player },
            None => LastAction::Start,
        };

        Self {
            board,
            status,
            last_action,
        }
    }

    /// Throw this game away and start a fresh one.
    pub fn reset(&self) -> Self {
        Self::new()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn last_action(&self) -> LastAction {
        self.last_action
    }

    /// The player due to move, or `None` once the game is over.
    #[inline]
    pub fn active_player(&self) -> Option<Player> {
        match self.status {
            Status::AwaitingMove(player) => Some(player),
            Status::GameOver => None,
        }
    }

    /// Get the legal moves for `player`, in row-major order.
    pub fn legal_moves(&self, player: Player) -> LocationList {
        self.board.legal_moves(player)
    }

    /// Play `location` for `player`. See [`Game::submit_move_observed`].
    pub fn submit_move(&self, player: Player, location: Location) -> Result<Self, RulesError> {
        self.submit_move_observed(player, location, &mut ())
    }

    /// Play `location` for `player` and return the resulting game, with any
    /// forced pass or the end of the game already resolved.
    ///
    /// Fails with [`RulesError::NotYourTurn`] if `player` is not due to move
    /// (including after the game is over), and with [`RulesError::IllegalMove`]
    /// if the placement captures nothing. Either way `self` is unchanged.
    pub fn submit_move_observed<O: GameObserver + ?Sized>(
        &self,
        player: Player,
        location: Location,
        observer: &mut O,
    ) -> Result<Self, RulesError> {
        if self.active_player() != Some(player) {
            return Err(RulesError::NotYourTurn { player });
        }

        let mut board = self.board;
        let flipped = board.apply_move(location, player)?;
        debug!(
            "{} played {}, flipping {} ({})",
            player,
            location,
            flipped,
            board.score()
        );
        observer.on_move(player, location, flipped);

        let (status, passed) = advance(&board, player, observer);
        let last_action = match passed {
            Some(player) => LastAction::Pass { player },
            None => LastAction::Move { player, location },
        };

        Ok(Self {
            board,
            status,
            last_action,
        })
    }

    /// Choose a move for the player due to move with the greedy heuristic.
    /// The caller submits it, after whatever delay it likes.
    pub fn request_automated_move(&self) -> Result<Location, RulesError> {
        match self.status {
            Status::AwaitingMove(player) => heuristic::select_move(&self.board, player),
            Status::GameOver => Err(RulesError::GameOver),
        }
    }

    /// Count each player's discs on the current board.
    pub fn score(&self) -> Score {
        self.board.score()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status == Status::GameOver
    }

    /// The result, recounted from the final board, or `None` while play continues.
    pub fn winner(&self) -> Option<Outcome> {
        if self.is_over() {
            Some(self.score().outcome())
        } else {
            None
        }
    }
}

/// Decide who moves after `mover` has played on `board`.
/// Returns the new status and the player whose turn was skipped, if any.
fn advance<O: GameObserver + ?Sized>(
    board: &Board,
    mover: Player,
    observer: &mut O,
) -> (Status, Option<Player>) {
    let next = !mover;
    if board.has_legal_move(next) {
        return (Status::AwaitingMove(next), None);
    }

    info!("{} has no moves, turn skipped", next);
    observer.on_pass(next);

    if board.has_legal_move(mover) {
        return (Status::AwaitingMove(mover), Some(next));
    }

    let score = board.score();
    let outcome = score.outcome();
    info!("game over: {} ({})", outcome, score);
    observer.on_game_over(score, outcome);

    (Status::GameOver, Some(next))
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f, "{}", self.score())?;
        match self.status {
            Status::AwaitingMove(player) => write!(f, "{} to move", player)?,
            Status::GameOver => write!(f, "Game over: {}", self.score().outcome())?,
        }
        if let LastAction::Pass { player } = self.last_action {
            write!(f, " ({} passed)", player)?;
        }
        Ok(())
    }
}
