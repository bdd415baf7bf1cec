//! `corner-othello` is a small Othello rules engine with a greedy opponent.
//!
//! This package is organised in layers:
//!
//!  - [`bitboard`] holds the packed one-bit-per-square representation and the
//!    directional shifts that the capture walk is built on.
//!  - [`Board`] stores the discs of both players. The rules (legality, capture
//!    sets, applying a move) are implemented on it in [`rules`], and disc counts
//!    are derived from it by [`Score`].
//!  - [`Game`] is the turn controller: it sequences players, resolves forced
//!    passes and detects the end of the game.
//!  - [`heuristic`] selects moves for an automated player.

pub mod bitboard;
pub mod heuristic;
pub mod rules;
pub mod test_utils;

mod board;
mod error;
mod game;
mod location;
mod score;
mod utils;

pub use board::*;
pub use error::*;
pub use game::*;
pub use location::*;
pub use score::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
