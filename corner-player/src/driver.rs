//! Runs a game between the two seats through a [`Connector`].

use crate::config::{Config, Seat};
use crate::connectors::{Command, Connector};
use anyhow::Result;
use corner_othello::heuristic::{GreedySelector, MoveSelector};
use corner_othello::{Game, LastAction, Outcome};
use log::{debug, info};
use std::time::Duration;

pub struct Driver<C> {
    config: Config,
    connector: C,
    selector: Box<dyn MoveSelector>,
    game: Game,
}

impl<C: Connector> Driver<C> {
    /// A driver whose automated seats use the greedy heuristic.
    pub fn new(config: Config, connector: C) -> Self {
        Self::with_selector(config, connector, Box::new(GreedySelector))
    }

    pub fn with_selector(config: Config, connector: C, selector: Box<dyn MoveSelector>) -> Self {
        Self {
            config,
            connector,
            selector,
            game: Game::new(),
        }
    }

    /// Resume `game` instead of starting from the opening.
    pub fn with_game(config: Config, connector: C, game: Game) -> Self {
        Self {
            game,
            ..Self::new(config, connector)
        }
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_connector(self) -> C {
        self.connector
    }

    /// Play until the game ends or a human quits.
    /// Returns the outcome, or `None` if the game was abandoned.
    pub fn run(&mut self) -> Result<Option<Outcome>> {
        info!(
            "starting game: Black {}, White {}",
            self.config.seats.black, self.config.seats.white
        );
        let mut after_pass = false;

        while let Some(player) = self.game.active_player() {
            let seat = self.config.seats.get(player);
            let hints = match seat {
                Seat::Human if self.config.hints => Some(self.game.legal_moves(player)),
                _ => None,
            };
            self.connector.show(&self.game, hints)?;
            self.connector.announce_turn(player, seat)?;

            let next = match seat {
                Seat::Auto => {
                    let pacing = self.config.pacing;
                    self.pause(if after_pass {
                        pacing.post_pass_delay
                    } else {
                        pacing.move_delay
                    })?;
                    let location = self.selector.select_move(self.game.board(), player)?;
                    self.game.submit_move(player, location)?
                }
                Seat::Human => match self.connector.request_move(&self.game, player)? {
                    Command::Place(location) => match self.game.submit_move(player, location) {
                        Ok(next) => next,
                        Err(err) => {
                            debug!("rejected {} for {}: {}", location, player, err);
                            self.connector.reject_move(&err)?;
                            continue;
                        }
                    },
                    Command::Reset => {
                        info!("game reset");
                        self.game = self.game.reset();
                        after_pass = false;
                        continue;
                    }
                    Command::Quit => {
                        info!("game abandoned");
                        return Ok(None);
                    }
                },
            };

            self.game = next;
            after_pass = self.handle_pass()?;
        }

        self.connector.show(&self.game, None)?;
        let score = self.game.score();
        let outcome = score.outcome();
        self.connector.announce_result(score, outcome)?;
        Ok(Some(outcome))
    }

    /// Announce a pass caused by the last move. Returns whether one happened.
    fn handle_pass(&mut self) -> Result<bool> {
        match self.game.last_action() {
            LastAction::Pass { player } => {
                self.connector.announce_pass(player)?;
                if !self.game.is_over() {
                    self.pause(self.config.pacing.pass_delay)?;
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn pause(&mut self, delay: Duration) -> Result<()> {
        if delay.is_zero() {
            return Ok(());
        }
        self.connector.wait(delay)
    }
}
