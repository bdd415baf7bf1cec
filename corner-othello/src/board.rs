//! The Othello board: which disc, if any, sits on each square.
//!
//! The board is pure data. The rules that change it live in [`crate::rules`].

use crate::bitboard::{self, Bitboard};
use crate::error::RulesError;
use crate::{utils, Location, LocationList, Player, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// The discs of both players, one [`Bitboard`] each.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Default for Board {
    /// Gets the standard four-disc opening.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard opening: White on (3, 3) and (4, 4), Black on (3, 4) and (4, 3).
    pub const fn new() -> Self {
        Self {
            black: bitboard::BLACK_START,
            white: bitboard::WHITE_START,
        }
    }

    /// A board with no discs on it.
    pub fn empty() -> Self {
        Self {
            black: Bitboard::default(),
            white: Bitboard::default(),
        }
    }

    /// Get the occupant of a square.
    #[inline]
    pub fn get(&self, loc: Location) -> Option<Player> {
        let loc_bitboard: Bitboard = loc.into();
        if !(self.black & loc_bitboard).is_empty() {
            Some(Player::Black)
        } else if !(self.white & loc_bitboard).is_empty() {
            Some(Player::White)
        } else {
            None
        }
    }

    /// Get the occupant of a square by row and column.
    pub fn cell(&self, row: usize, col: usize) -> Result<Option<Player>, RulesError> {
        Ok(self.get(Location::from_coords(row, col)?))
    }

    /// Put a disc of `player` on a square, replacing whatever was there.
    #[inline]
    pub fn set(&mut self, loc: Location, player: Player) {
        let loc_bitboard: Bitboard = loc.into();
        match player {
            Player::Black => {
                self.black |= loc_bitboard;
                self.white &= !loc_bitboard;
            }
            Player::White => {
                self.white |= loc_bitboard;
                self.black &= !loc_bitboard;
            }
        }
    }

    /// Get the squares holding `player`'s discs.
    #[inline]
    pub fn discs(&self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Get a mask indicating where the occupied spaces are.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    /// Get the empty squares, in row-major order.
    #[inline]
    pub fn empties(&self) -> LocationList {
        LocationList::from(!self.occupied())
    }

    #[inline]
    pub fn count_empty(&self) -> u8 {
        self.occupied().count_empty()
    }

    /// Whether every square holds a disc.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Borrow the board for display with some squares marked, e.g. move hints.
    pub fn with_hints(&self, hints: LocationList) -> HintedBoard<'_> {
        HintedBoard { board: self, hints }
    }

    fn symbol(&self, loc: Location, hints: LocationList) -> char {
        match self.get(loc) {
            Some(player) => player.symbol(),
            None if hints.contains(loc) => '*',
            None => '.',
        }
    }
}

/// A [`Board`] rendered with hint markers on some empty squares.
#[derive(Clone, Copy, Debug)]
pub struct HintedBoard<'a> {
    board: &'a Board,
    hints: LocationList,
}

impl fmt::Display for HintedBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            LocationList::all().map(|loc| self.board.symbol(loc, self.hints)),
            f,
        )
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.with_hints(LocationList::default()), f)
    }
}

#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "expected {} squares, found {}", NUM_SPACES, found)]
    WrongLength { found: usize },

    #[display(fmt = "unexpected board character {:?}", found)]
    BadCharacter { found: char },
}

/// Parse a board from 64 row-major squares: `X` for Black, `O` for White and
/// `-` or `.` for an empty square. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if squares.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength {
                found: squares.len(),
            });
        }

        let mut board = Self::empty();
        for (loc, square) in LocationList::all().zip(squares) {
            match square.to_ascii_uppercase() {
                'X' => board.set(loc, Player::Black),
                'O' => board.set(loc, Player::White),
                '-' | '.' => {}
                found => return Err(ParseBoardError::BadCharacter { found }),
            }
        }

        Ok(board)
    }
}
