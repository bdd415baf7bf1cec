//! Move selection for an automated player.
//!
//! The greedy heuristic looks exactly one ply ahead: take a corner whenever one
//! is available, otherwise take the move that flips the most discs. Ties go to
//! the move that comes first in row-major order.

use crate::error::RulesError;
use crate::{Board, Location, Player};
use log::trace;

/// Something that can pick a move for `player` on `board`.
pub trait MoveSelector {
    /// Pick a legal move. Fails with [`RulesError::NoLegalMoves`] if `player` has none.
    fn select_move(&self, board: &Board, player: Player) -> Result<Location, RulesError>;
}

/// The corner-first, most-flips greedy heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySelector;

impl MoveSelector for GreedySelector {
    fn select_move(&self, board: &Board, player: Player) -> Result<Location, RulesError> {
        select_move(board, player)
    }
}

/// Choose a move for `player` with the greedy heuristic.
pub fn select_move(board: &Board, player: Player) -> Result<Location, RulesError> {
    let moves = board.legal_moves(player);
    if moves.is_empty() {
        return Err(RulesError::NoLegalMoves { player });
    }

    if let Some(corner) = moves.into_iter().find(|mv| mv.is_corner()) {
        trace!("{} takes corner {}", player, corner);
        return Ok(corner);
    }

    let mut best: Option<(Location, usize)> = None;
    for mv in moves {
        let flips = board.captures_for(mv, player).len();
        // Strictly greater, so the earliest move wins a tie.
        if best.map_or(true, |(_, best_flips)| flips > best_flips) {
            best = Some((mv, flips));
        }
    }

    let (mv, flips) = best.ok_or(RulesError::NoLegalMoves { player })?;
    trace!("{} plays {} flipping {}", player, mv, flips);
    Ok(mv)
}
