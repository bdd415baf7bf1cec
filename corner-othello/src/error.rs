use crate::{Location, Player};
use derive_more::{Display, Error};

/// Everything that can go wrong when driving the rules engine.
///
/// [`RulesError::IllegalMove`] and [`RulesError::NotYourTurn`] are expected during
/// play and leave the game untouched. The others mean the caller broke a
/// contract, such as asking the heuristic for a move when none exists.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum RulesError {
    #[display(fmt = "coordinate ({}, {}) is off the board", row, col)]
    InvalidCoordinate { row: usize, col: usize },

    #[display(fmt = "{} cannot play {}", player, location)]
    IllegalMove { player: Player, location: Location },

    #[display(fmt = "it is not {}'s turn", player)]
    NotYourTurn { player: Player },

    #[display(fmt = "{} has no legal moves", player)]
    NoLegalMoves { player: Player },

    #[display(fmt = "the game is over")]
    GameOver,
}
