//! Rule invariants checked over every position reachable in the first few
//! plies, plus every position of a greedy self-play game.

use corner_othello::heuristic::{self, GreedySelector};
use corner_othello::test_utils::play_out;
use corner_othello::{Board, Game, LocationList, Player, Status};
use pretty_assertions::assert_eq;

const PLAYERS: [Player; 2] = [Player::Black, Player::White];

/// Collect positions reachable from the opening within `depth` plies, paired
/// with the player due to move.
fn reachable(depth: usize) -> Vec<(Board, Player)> {
    let mut frontier = vec![(Board::new(), Player::Black)];
    let mut seen = frontier.clone();

    for _ in 0..depth {
        let mut next = Vec::new();
        for (board, player) in frontier {
            for mv in board.legal_moves(player) {
                let mut child = board;
                child.apply_move(mv, player).unwrap();
                next.push((child, !player));
            }
        }
        seen.extend(next.iter().copied());
        frontier = next;
    }

    seen
}

/// Every position of one greedy-vs-greedy game.
fn self_play_positions() -> Vec<(Board, Player)> {
    let mut positions = Vec::new();
    let mut game = Game::new();
    while let Status::AwaitingMove(player) = game.status() {
        positions.push((*game.board(), player));
        let mv = game.request_automated_move().unwrap();
        game = game.submit_move(player, mv).unwrap();
    }
    positions.push((*game.board(), Player::Black));
    positions
}

fn positions() -> Vec<(Board, Player)> {
    let mut all = reachable(4);
    all.extend(self_play_positions());
    all
}

#[test]
fn legal_iff_captures() {
    for (board, _) in positions() {
        for &player in PLAYERS.iter() {
            for loc in LocationList::all() {
                assert_eq!(
                    board.is_legal(loc, player),
                    !board.captures_for(loc, player).is_empty(),
                    "{} at {} on\n{}",
                    player,
                    loc,
                    board
                );
            }
        }
    }
}

#[test]
fn legal_moves_are_exactly_the_legal_squares() {
    for (board, _) in positions() {
        for &player in PLAYERS.iter() {
            let scanned: LocationList = LocationList::all()
                .filter(|&loc| board.is_legal(loc, player))
                .collect();
            assert_eq!(board.legal_moves(player), scanned);
            assert_eq!(board.has_legal_move(player), !scanned.is_empty());
        }
    }
}

#[test]
fn apply_changes_only_target_and_captures() {
    for (board, player) in positions() {
        for mv in board.legal_moves(player) {
            let captures = board.captures_for(mv, player);
            let mut after = board;
            let flipped = after.apply_move(mv, player).unwrap();
            assert_eq!(flipped, captures);

            for loc in LocationList::all() {
                if loc == mv || captures.contains(loc) {
                    assert_eq!(after.get(loc), Some(player));
                } else {
                    assert_eq!(after.get(loc), board.get(loc), "{} changed", loc);
                }
            }
        }
    }
}

#[test]
fn score_tracks_board() {
    for (board, player) in positions() {
        let score = board.score();
        assert_eq!(score.total(), 64 - board.count_empty());
        assert!(score.total() <= 64);

        for mv in board.legal_moves(player) {
            let mut after = board;
            let flipped = after.apply_move(mv, player).unwrap();
            let new_score = after.score();
            assert_eq!(new_score.total(), score.total() + 1);
            assert_eq!(
                new_score.get(player) as usize,
                score.get(player) as usize + 1 + flipped.len()
            );
            assert!(new_score.get(!player) < score.get(!player));
        }
    }
}

#[test]
fn heuristic_always_picks_a_legal_move() {
    for (board, player) in positions() {
        match heuristic::select_move(&board, player) {
            Ok(mv) => assert!(board.legal_moves(player).contains(mv)),
            Err(_) => assert!(!board.has_legal_move(player)),
        }
    }
}

#[test]
fn greedy_self_play_finishes() {
    let game = play_out(Game::new(), &GreedySelector, &GreedySelector).unwrap();
    assert!(game.is_over());
    assert!(!game.board().has_legal_move(Player::Black));
    assert!(!game.board().has_legal_move(Player::White));
    assert!(game.score().total() <= 64);
    assert_eq!(game.winner(), Some(game.score().outcome()));
}
