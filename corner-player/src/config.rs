//! Driver configuration: who sits in each seat and how play is paced.

use clap::ValueEnum;
use corner_othello::Player;
use std::fmt;
use std::time::Duration;

/// Who chooses the moves for one colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Seat {
    /// Moves are read from the connector.
    Human,
    /// Moves come from the greedy heuristic.
    #[value(alias = "ai")]
    Auto,
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Human => f.write_str("human"),
            Seat::Auto => f.write_str("auto"),
        }
    }
}

/// The seat assignment for both colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seats {
    pub black: Seat,
    pub white: Seat,
}

impl Default for Seats {
    /// A human plays Black against the computer as White.
    fn default() -> Self {
        Self {
            black: Seat::Human,
            white: Seat::Auto,
        }
    }
}

impl Seats {
    pub fn get(&self, player: Player) -> Seat {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }
}

/// Delays that make automated turns perceptible. The engine itself never waits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// Before an automated move.
    pub move_delay: Duration,
    /// After announcing that a player has to pass.
    pub pass_delay: Duration,
    /// Before an automated move that directly follows a pass.
    pub post_pass_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            move_delay: Duration::from_millis(800),
            pass_delay: Duration::from_millis(2000),
            post_pass_delay: Duration::from_millis(1000),
        }
    }
}

impl Pacing {
    /// No delays at all, for tests and computer-only games.
    pub fn none() -> Self {
        Self {
            move_delay: Duration::from_millis(0),
            pass_delay: Duration::from_millis(0),
            post_pass_delay: Duration::from_millis(0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub seats: Seats,
    pub pacing: Pacing,
    /// Show the legal moves to human players.
    pub hints: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seats: Seats::default(),
            pacing: Pacing::default(),
            hints: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seats() {
        let seats = Seats::default();
        assert_eq!(seats.get(Player::Black), Seat::Human);
        assert_eq!(seats.get(Player::White), Seat::Auto);
    }

    #[test]
    fn seat_values() {
        assert_eq!(Seat::from_str("human", true), Ok(Seat::Human));
        assert_eq!(Seat::from_str("auto", true), Ok(Seat::Auto));
        assert_eq!(Seat::from_str("AI", true), Ok(Seat::Auto));
        assert!(Seat::from_str("robot", true).is_err());
    }

    #[test]
    fn default_pacing() {
        let pacing = Pacing::default();
        assert_eq!(pacing.move_delay, Duration::from_millis(800));
        assert_eq!(pacing.pass_delay, Duration::from_millis(2000));
        assert_eq!(pacing.post_pass_delay, Duration::from_millis(1000));
        assert_eq!(Pacing::none().move_delay, Duration::from_millis(0));
    }
}
