//! Connectors link the driver to "the outside world": they show the game and
//! supply human moves.

mod connector;
mod console;

pub use connector::{Command, Connector};
pub use console::{parse_command, turn_message, ConsoleConnector};
