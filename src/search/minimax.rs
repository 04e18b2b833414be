use super::evaluator::{Heuristic, SegmentHeuristic};
use super::moves::child_boards;
use super::position::Position;
use super::{SearchContext, SearchOutcome};
use crate::game::Player;

/// Column `player` should play, searching `depth` plies with plain minimax.
pub fn search<P: Position>(player: Player, board: &P, depth: u32) -> Option<usize> {
    analyze(&SegmentHeuristic::default(), player, board, depth).column
}

pub fn analyze<P: Position, H: Heuristic>(
    heuristic: &H,
    player: Player,
    board: &P,
    depth: u32,
) -> SearchOutcome {
    let mut ctx = SearchContext::new(heuristic, player);
    let result = value(&mut ctx, player, board, depth);
    ctx.finish(result)
}

/// MAX when `to_move` is the root requester, MIN otherwise. Ties keep the
/// leftmost column.
fn value<P: Position, H: Heuristic>(
    ctx: &mut SearchContext<'_, H>,
    to_move: Player,
    board: &P,
    depth: u32,
) -> (f64, Option<usize>) {
    ctx.enter();
    if let Some(score) = ctx.leaf_value(board, depth) {
        return (score, None);
    }

    let children = child_boards(to_move, board);
    if children.is_empty() {
        return (ctx.evaluate(board), None);
    }

    let maximizing = to_move == ctx.root;
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut best_col = None;

    for (col, child) in &children {
        let (score, _) = value(ctx, to_move.other(), child, depth - 1);
        let improves = if maximizing {
            score > best
        } else {
            score < best
        };
        if improves {
            best = score;
            best_col = Some(*col);
        }
    }

    (best, best_col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Board;
    use crate::search::evaluate;

    #[test]
    fn prefers_center_on_empty_board() {
        let board = Board::new();
        assert_eq!(search(Player::Red, &board, 1), Some(3));
    }

    #[test]
    fn depth_one_value_is_best_child_evaluation() {
        let board = Board::new();
        let outcome = analyze(&SegmentHeuristic::default(), Player::Red, &board, 1);
        assert_eq!(outcome.value, 7.0);
        assert_eq!(outcome.stats.nodes, 8);
        assert_eq!(outcome.stats.leaves, 7);
    }

    #[test]
    fn depth_zero_selects_nothing() {
        let board = Board::new();
        let outcome = analyze(&SegmentHeuristic::default(), Player::Red, &board, 0);
        assert_eq!(outcome.column, None);
        assert_eq!(outcome.value, evaluate(Player::Red, &board));
        assert_eq!(outcome.stats.nodes, 1);
    }

    #[test]
    fn full_board_has_no_move() {
        let board = Board::from_rows(&["RRYY", "YYRR", "RRYY", "YYRR"]).unwrap();
        for depth in 0..4 {
            assert_eq!(search(Player::Red, &board, depth), None);
        }
    }

    #[test]
    fn single_open_column_is_chosen() {
        let board = Board::from_rows(&["RRY.YY", "YYRRRY", "RRYYYR", "YYRRRY"]).unwrap();
        assert!(!board.is_terminal());
        for depth in 1..5 {
            assert_eq!(search(Player::Red, &board, depth), Some(3));
            assert_eq!(search(Player::Yellow, &board, depth), Some(3));
        }
    }

    #[test]
    fn takes_winning_move() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Player::Red).unwrap();
            board.drop_piece(col, Player::Yellow).unwrap();
        }
        for depth in 1..=3 {
            assert_eq!(search(Player::Red, &board, depth), Some(3), "depth {depth}");
        }
    }

    #[test]
    fn blocks_opponent_win() {
        let mut board = Board::new();
        board.drop_piece(6, Player::Red).unwrap();
        board.drop_piece(0, Player::Yellow).unwrap();
        board.drop_piece(6, Player::Red).unwrap();
        board.drop_piece(1, Player::Yellow).unwrap();
        board.drop_piece(5, Player::Red).unwrap();
        board.drop_piece(2, Player::Yellow).unwrap();
        assert_eq!(search(Player::Red, &board, 2), Some(3));
    }

    #[test]
    fn does_not_mutate_input() {
        let mut board = Board::new();
        board.drop_piece(2, Player::Red).unwrap();
        let before = board.clone();
        let _ = search(Player::Yellow, &board, 3);
        assert_eq!(board, before);
    }
}
