use crate::heuristic::MoveSelector;
use crate::{Game, Player, RulesError};

/// Play `game` to the end, asking `black` and `white` for every move.
pub fn play_out(
    mut game: Game,
    black: &dyn MoveSelector,
    white: &dyn MoveSelector,
) -> Result<Game, RulesError> {
    while let Some(player) = game.active_player() {
        let selector = match player {
            Player::Black => black,
            Player::White => white,
        };
        let mv = selector.select_move(game.board(), player)?;
        game = game.submit_move(player, mv)?;
    }

    Ok(game)
}
