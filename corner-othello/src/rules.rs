//! The capture rule.
//!
//! A placement is legal when, in at least one of the eight compass directions,
//! it brackets a contiguous run of opponent discs between the new disc and an
//! existing disc of the mover, with no gaps. Every bracketed run flips.
//! All of these are pure functions of (board, location, player) except
//! [`Board::apply_move`], the only operation that changes a board during play.

use crate::bitboard::Bitboard;
use crate::error::RulesError;
use crate::{Board, Location, LocationList, Player};

/// One of the eight compass directions, with north toward row 0.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The (row, column) step for one square in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

impl Board {
    /// Walk from `loc` in `direction` over the opponent's discs. Returns the run
    /// if it is non-empty and closed by one of `player`'s discs, otherwise nothing.
    fn bracketed_run(&self, loc: Location, player: Player, direction: Direction) -> Bitboard {
        let own = self.discs(player);
        let opponent = self.discs(!player);

        let mut run = Bitboard::default();
        let mut cursor = Bitboard::from(loc).shift(direction);
        while !(cursor & opponent).is_empty() {
            run |= cursor;
            cursor = cursor.shift(direction);
        }

        // The cursor is empty here if the run reached the edge.
        if !run.is_empty() && !(cursor & own).is_empty() {
            run
        } else {
            Bitboard::default()
        }
    }

    /// Whether `player` may place a disc at `loc`.
    pub fn is_legal(&self, loc: Location, player: Player) -> bool {
        if self.get(loc).is_some() {
            return false;
        }

        Direction::ALL
            .iter()
            .any(|&direction| !self.bracketed_run(loc, player, direction).is_empty())
    }

    /// Get every disc that would flip if `player` placed at `loc`: the union of the
    /// bracketed runs in all directions. Empty exactly when the move is illegal.
    pub fn captures_for(&self, loc: Location, player: Player) -> LocationList {
        if self.get(loc).is_some() {
            return LocationList::default();
        }

        let flips = Direction::ALL
            .iter()
            .fold(Bitboard::default(), |flips, &direction| {
                flips | self.bracketed_run(loc, player, direction)
            });
        LocationList::from(flips)
    }

    /// Get the legal moves for `player`, in row-major order.
    pub fn legal_moves(&self, player: Player) -> LocationList {
        // Occupied squares are never legal, so only the empties need checking.
        self.empties()
            .filter(|&loc| self.is_legal(loc, player))
            .collect()
    }

    /// Whether `player` has any legal move at all.
    pub fn has_legal_move(&self, player: Player) -> bool {
        self.empties().any(|loc| self.is_legal(loc, player))
    }

    /// Place a disc for `player` at `loc` and flip everything it captures.
    /// Returns the flipped discs. Fails without touching the board if the move
    /// is illegal.
    pub fn apply_move(&mut self, loc: Location, player: Player) -> Result<LocationList, RulesError> {
        let captures = self.captures_for(loc, player);
        if captures.is_empty() {
            return Err(RulesError::IllegalMove {
                player,
                location: loc,
            });
        }

        self.set(loc, player);
        for flipped in captures {
            self.set(flipped, player);
        }

        Ok(captures)
    }
}
