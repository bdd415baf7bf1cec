//! Packed bitboards.
//!
//! A [`Bitboard`] holds one bit per square. By convention the MSB is the
//! upper-left square (row 0, column 0) and bits follow row-major order, so
//! iterating from the MSB down visits squares in reading order.

use crate::rules::Direction;
use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Black: (3, 4) and (4, 3).
pub const BLACK_START: Bitboard = Bitboard(0x0000000810000000);

/// Starting bitboard for White: (3, 3) and (4, 4).
pub const WHITE_START: Bitboard = Bitboard(0x0000001008000000);

/// The four corner squares.
pub const CORNERS: Bitboard = Bitboard(0x8100000000000081);

/// Every square on the board.
pub const FULL: Bitboard = Bitboard(u64::MAX);

// Column masks: A is the leftmost column (col 0), H the rightmost (col 7).
const A_FILE: u64 = 0x8080808080808080;
const H_FILE: u64 = 0x0101010101010101;

impl Bitboard {
    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Move every bit one square in `direction`.
    /// Bits that would leave the board are dropped rather than wrapping onto
    /// the neighbouring row.
    #[inline]
    pub fn shift(self, direction: Direction) -> Self {
        let bits = self.0;
        let shifted = match direction {
            Direction::North => bits << 8,
            Direction::South => bits >> 8,
            Direction::East => (bits >> 1) & !A_FILE,
            Direction::West => (bits << 1) & !H_FILE,
            Direction::NorthEast => (bits << 7) & !A_FILE,
            Direction::NorthWest => (bits << 9) & !H_FILE,
            Direction::SouthEast => (bits >> 9) & !A_FILE,
            Direction::SouthWest => (bits >> 7) & !H_FILE,
        };
        Self(shifted)
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

/// Iterator for the bits in a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    remaining: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bitmask = Bitboard::from(1u64 << (self.remaining - 1));
        let bit = !(self.bitboard & bitmask).is_empty();
        self.remaining -= 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            remaining: NUM_SPACES,
            bitboard: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Square at (row, col) under the MSB-is-upper-left convention.
    fn square(row: u32, col: u32) -> Bitboard {
        Bitboard(1u64 << (63 - (row * 8 + col)))
    }

    #[test]
    fn starting_positions() {
        assert_eq!(BLACK_START, square(3, 4) | square(4, 3));
        assert_eq!(WHITE_START, square(3, 3) | square(4, 4));
        assert_eq!(
            CORNERS,
            square(0, 0) | square(0, 7) | square(7, 0) | square(7, 7)
        );
    }

    #[test]
    fn shift_interior() {
        let center = square(3, 3);
        assert_eq!(center.shift(Direction::North), square(2, 3));
        assert_eq!(center.shift(Direction::South), square(4, 3));
        assert_eq!(center.shift(Direction::East), square(3, 4));
        assert_eq!(center.shift(Direction::West), square(3, 2));
        assert_eq!(center.shift(Direction::NorthEast), square(2, 4));
        assert_eq!(center.shift(Direction::NorthWest), square(2, 2));
        assert_eq!(center.shift(Direction::SouthEast), square(4, 4));
        assert_eq!(center.shift(Direction::SouthWest), square(4, 2));
    }

    #[test]
    fn shift_never_wraps() {
        for &direction in Direction::ALL.iter() {
            let (d_row, d_col) = direction.delta();
            for row in 0..8i32 {
                for col in 0..8i32 {
                    let shifted = square(row as u32, col as u32).shift(direction);
                    let (r, c) = (row + d_row, col + d_col);
                    if (0..8).contains(&r) && (0..8).contains(&c) {
                        assert_eq!(shifted, square(r as u32, c as u32));
                    } else {
                        assert!(shifted.is_empty(), "{:?} from ({}, {})", direction, row, col);
                    }
                }
            }
        }
    }

    #[test]
    fn counts() {
        assert_eq!(BLACK_START.count_occupied(), 2);
        assert_eq!(BLACK_START.count_empty(), 62);
        assert_eq!(FULL.count_occupied(), 64);
        assert!(Bitboard::default().is_empty());
    }

    #[test]
    fn bits_in_reading_order() {
        let bits: Vec<bool> = square(0, 1).into_iter().collect();
        assert_eq!(bits.len(), NUM_SPACES);
        assert!(!bits[0]);
        assert!(bits[1]);
        assert_eq!(bits.iter().filter(|&&bit| bit).count(), 1);
    }
}
