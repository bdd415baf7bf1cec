//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking the move generator against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Player, RulesError};

/// Count the positions reachable from the opening in exactly `depth` plies.
/// A forced pass counts as a ply; a finished game is a leaf.
///
/// Fails if a generated move is rejected when applied, which means
/// `legal_moves` and `apply_move` disagree.
pub fn run_perft(depth: u64) -> Result<u64, RulesError> {
    leaves_below(Board::new(), Player::Black, depth, false)
}

fn leaves_below(
    board: Board,
    player: Player,
    depth: u64,
    passed: bool,
) -> Result<u64, RulesError> {
    // Leaf node for this depth
    if depth == 0 {
        return Ok(1);
    }

    let all_moves = board.legal_moves(player);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return Ok(1);
        }

        return leaves_below(board, !player, depth - 1, true);
    }

    all_moves
        .into_iter()
        .try_fold(0, |total, mv| -> Result<u64, RulesError> {
            let mut next = board;
            next.apply_move(mv, player)?;
            Ok(total + leaves_below(next, !player, depth - 1, false)?)
        })
}

#[test]
fn perft_00() {
    assert_eq!(run_perft(0), Ok(1));
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), Ok(4));
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), Ok(12));
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), Ok(56));
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), Ok(244));
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), Ok(1396));
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), Ok(8200));
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(7), Ok(55092));
}
