//! `corner-player` plays Othello games on top of `corner-othello`.
//!
//! The [`Driver`] owns the game and alternates between the two seats. Human
//! seats are served by a [`connectors::Connector`], which renders the board and
//! reads commands; automated seats use the greedy heuristic, slowed down by the
//! configured [`Pacing`] so that their moves can be followed.

pub mod config;
pub mod connectors;
pub mod driver;

pub use config::{Config, Pacing, Seat, Seats};
pub use driver::Driver;
