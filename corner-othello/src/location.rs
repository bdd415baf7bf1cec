//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::{self, Bitboard};
use crate::error::RulesError;
use crate::EDGE_LENGTH;
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

const COLUMN_NAMES: &str = "ABCDEFGH";
const ROW_NAMES: &str = "12345678";

/// A single square on the Othello board, stored as a one-hot [`Bitboard`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Into)]
pub struct Location(Bitboard);

/// An ordered set of locations, such as the legal moves out of a position
/// or the discs captured by a move. Iterates in row-major order.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Convert from row and column coordinates, each in `0..8`.
    pub fn from_coords(row: usize, col: usize) -> Result<Self, RulesError> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            return Err(RulesError::InvalidCoordinate { row, col });
        }
        Ok(Self::from_index_unchecked(row * EDGE_LENGTH + col))
    }

    /// Convert from a row-major square index: 0 for the upper left, 63 for the lower right.
    pub fn from_index(index: usize) -> Result<Self, RulesError> {
        Self::from_coords(index / EDGE_LENGTH, index % EDGE_LENGTH)
    }

    #[inline]
    fn from_index_unchecked(index: usize) -> Self {
        Self(Bitboard::from(1u64 << (63 - index)))
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> usize {
        let bits: u64 = self.0.into();
        bits.leading_zeros() as usize
    }

    #[inline]
    pub fn row(self) -> usize {
        self.to_index() / EDGE_LENGTH
    }

    #[inline]
    pub fn col(self) -> usize {
        self.to_index() % EDGE_LENGTH
    }

    /// Get the (row, column) coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Whether this is one of the four corner squares.
    #[inline]
    pub fn is_corner(self) -> bool {
        !(self.0 & bitboard::CORNERS).is_empty()
    }
}

/// Convert this [`Location`] into string notation ("D3": column letter, then row number).
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = COLUMN_NAMES.chars().nth(self.col()).ok_or(fmt::Error)?;
        let row_str = ROW_NAMES.chars().nth(self.row()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from string notation ("D3", case-insensitive).
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_char = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_NAMES.find(col_char).ok_or(ParseLocationError)?;
        let row_char = chars.next().ok_or(ParseLocationError)?;
        let row = ROW_NAMES.find(row_char).ok_or(ParseLocationError)?;

        if chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(row, col).map_err(|_| ParseLocationError)
    }
}

impl LocationList {
    /// Every square on the board, in row-major order.
    pub fn all() -> Self {
        Self(bitboard::FULL)
    }

    /// Returns whether `loc` is in this list.
    pub fn contains(self, loc: Location) -> bool {
        let loc_bitboard: Bitboard = loc.into();
        !(loc_bitboard & self.0).is_empty()
    }

    /// Returns whether the list holds no locations.
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Get the underlying bitboard.
    pub fn bitboard(self) -> Bitboard {
        self.0
    }
}

impl From<Location> for LocationList {
    fn from(loc: Location) -> Self {
        Self(loc.into())
    }
}

impl std::iter::FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut bitboard = Bitboard::default();
        for loc in iter {
            let loc_bitboard: Bitboard = loc.into();
            bitboard |= loc_bitboard;
        }
        Self(bitboard)
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0.is_empty() {
            return None;
        }

        let bits: u64 = self.0.into();
        let next_move = Location::from_index_unchecked(bits.leading_zeros() as usize);
        let next_bitboard: Bitboard = next_move.into();
        self.0 ^= next_bitboard;

        Some(next_move)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for LocationList {}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_coords() {
        assert_eq!(
            Location::from_coords(0, 0),
            Ok(Location(Bitboard::from(1u64 << 63)))
        );
        assert_eq!(Location::from_coords(7, 7), Ok(Location(Bitboard::from(1u64))));
        assert_eq!(
            Location::from_coords(0, 1),
            Ok(Location(Bitboard::from(1u64 << 62)))
        );
    }

    #[test]
    fn location_from_coords_fail() {
        assert_eq!(
            Location::from_coords(0, 8),
            Err(RulesError::InvalidCoordinate { row: 0, col: 8 })
        );
        assert_eq!(
            Location::from_coords(8, 0),
            Err(RulesError::InvalidCoordinate { row: 8, col: 0 })
        );
        assert!(Location::from_index(64).is_err());
    }

    #[test]
    fn location_to_coords() {
        for row in 0..8 {
            for col in 0..8 {
                let loc = Location::from_coords(row, col).unwrap();
                assert_eq!(loc.to_coords(), (row, col));
                assert_eq!(loc.to_index(), row * 8 + col);
            }
        }
    }

    #[test]
    fn location_list_drains_in_order() {
        let mut list: LocationList = [(5, 4), (0, 7), (2, 3)]
            .iter()
            .map(|&(row, col)| Location::from_coords(row, col).unwrap())
            .collect();
        assert_eq!(list.len(), 3);
        assert_eq!(list.next().map(Location::to_coords), Some((0, 7)));
        assert_eq!(list.next().map(Location::to_coords), Some((2, 3)));
        assert_eq!(list.len(), 1);
        assert_eq!(list.next().map(Location::to_coords), Some((5, 4)));
        assert_eq!(list.next(), None);
        assert_eq!(list.next(), None);
        assert!(list.bitboard().is_empty());
    }

    #[test]
    fn corners() {
        let corners: Vec<Location> = LocationList::all().filter(|loc| loc.is_corner()).collect();
        let coords: Vec<(usize, usize)> = corners.iter().map(|loc| loc.to_coords()).collect();
        assert_eq!(coords, vec![(0, 0), (0, 7), (7, 0), (7, 7)]);
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("A1"), Ok(Location(Bitboard::from(1u64 << 63))));
        assert_eq!(Location::from_str("h8").unwrap().to_coords(), (7, 7));
        assert_eq!(Location::from_str("D3").unwrap().to_coords(), (2, 3));
        assert_eq!(Location::from_str(" c4\n").unwrap().to_coords(), (3, 2));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location(Bitboard::from(1u64)).to_string(), "H8");
        assert_eq!(Location(Bitboard::from(1u64 << 63)).to_string(), "A1");
        assert_eq!(Location::from_str("E2").unwrap().to_string(), "E2");
        assert_eq!(Location::from_str("f6").unwrap().to_string(), "F6");
    }

    #[test]
    fn list_iterates_row_major() {
        let list: LocationList = ["E6", "D3", "F5", "C4"]
            .iter()
            .map(|s| Location::from_str(s).unwrap())
            .collect();
        assert_eq!(list.len(), 4);
        assert_eq!(list.to_string(), "[D3, C4, F5, E6]");
        assert!(list.contains(Location::from_str("C4").unwrap()));
        assert!(!list.contains(Location::from_str("C5").unwrap()));
    }

    #[test]
    fn all_covers_board_in_order() {
        let indices: Vec<usize> = LocationList::all().map(Location::to_index).collect();
        assert_eq!(indices, (0..64).collect::<Vec<_>>());
    }
}
