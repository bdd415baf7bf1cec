//! Disc counts, always derived from a [`Board`].

use crate::{Board, Player};
use std::fmt;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} Wins!", player),
            Outcome::Draw => f.write_str("Draw!"),
        }
    }
}

/// The number of discs each player has on the board.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    /// Count the discs on `board`. Never cached: every call rescans the board.
    pub fn of(board: &Board) -> Self {
        Self {
            black: board.discs(Player::Black).count_occupied(),
            white: board.discs(Player::White).count_occupied(),
        }
    }

    #[inline]
    pub fn get(self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// The number of discs on the board.
    #[inline]
    pub fn total(self) -> u8 {
        self.black + self.white
    }

    /// Compare the counts: more discs wins, equal counts draw.
    pub fn outcome(self) -> Outcome {
        if self.black > self.white {
            Outcome::Winner(Player::Black)
        } else if self.white > self.black {
            Outcome::Winner(Player::White)
        } else {
            Outcome::Draw
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Black {} - White {}", self.black, self.white)
    }
}

impl Board {
    /// Count each player's discs.
    pub fn score(&self) -> Score {
        Score::of(self)
    }
}
