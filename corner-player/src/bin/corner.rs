use anyhow::Result;
use clap::Parser;
use corner_othello::Outcome;
use corner_player::connectors::ConsoleConnector;
use corner_player::{Config, Driver, Pacing, Seat, Seats};
use log::info;
use std::io;
use std::time::Duration;

/// Play Othello in the terminal against a corner-first greedy opponent.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Who plays Black.
    #[arg(long, value_enum, default_value_t = Seat::Human)]
    black: Seat,

    /// Who plays White.
    #[arg(long, value_enum, default_value_t = Seat::Auto)]
    white: Seat,

    /// Delay before an automated move, in milliseconds.
    #[arg(long, default_value_t = 800)]
    move_delay_ms: u64,

    /// Delay after a pass is announced, in milliseconds.
    #[arg(long, default_value_t = 2000)]
    pass_delay_ms: u64,

    /// Delay before an automated move that follows a pass, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    post_pass_delay_ms: u64,

    /// Do not mark legal moves on the board.
    #[arg(long)]
    no_hints: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            seats: Seats {
                black: args.black,
                white: args.white,
            },
            pacing: Pacing {
                move_delay: Duration::from_millis(args.move_delay_ms),
                pass_delay: Duration::from_millis(args.pass_delay_ms),
                post_pass_delay: Duration::from_millis(args.post_pass_delay_ms),
            },
            hints: !args.no_hints,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::from(Args::parse());

    let stdin = io::stdin();
    let connector = ConsoleConnector::new(stdin.lock(), io::stdout());
    let mut driver = Driver::new(config, connector);

    match driver.run()? {
        Some(Outcome::Winner(player)) => info!("{} won", player),
        Some(Outcome::Draw) => info!("drawn game"),
        None => println!("Goodbye."),
    }
    Ok(())
}
