use super::evaluator::{Heuristic, SegmentHeuristic};
use super::moves::child_boards;
use super::position::Position;
use super::{SearchContext, SearchOutcome};
use crate::game::Player;

/// Column `player` should play, searching `depth` plies with alpha-beta
/// pruning. Always agrees with [`super::minimax::search`].
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
    let (alpha, beta) = (f64::NEG_INFINITY, f64::INFINITY);
    let result = value(&mut ctx, player, board, depth, alpha, beta);
    ctx.finish(result)
}

/// `alpha` is what MAX can already guarantee on the path to this node,
/// `beta` what MIN can. Fail-soft: a pruned node returns a bound that is
/// no better for its parent than the bound that pruned it.
fn value<P: Position, H: Heuristic>(
    ctx: &mut SearchContext<'_, H>,
    to_move: Player,
    board: &P,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
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
        let (score, _) = value(ctx, to_move.other(), child, depth - 1, alpha, beta);
        if maximizing {
            if score > best {
                best = score;
                best_col = Some(*col);
            }
            alpha = alpha.max(best);
        } else {
            if score < best {
                best = score;
                best_col = Some(*col);
            }
            beta = beta.min(best);
        }

        if beta <= alpha {
            ctx.stats.cutoffs += 1;
            break;
        }
    }

    (best, best_col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Board;
    use crate::search::minimax;
    use crate::search::testutil::random_position;

    #[test]
    fn matches_minimax_on_random_positions() {
        for seed in 0..25 {
            let (board, player) = random_position(seed, 6, 7, 20);
            for depth in 1..=4 {
                let expected = minimax::search(player, &board, depth);
                let actual = search(player, &board, depth);
                assert_eq!(actual, expected, "seed {seed}, depth {depth}:\n{board}");
            }
        }
    }

    #[test]
    fn matches_minimax_on_small_boards() {
        for seed in 100..130 {
            let (board, player) = random_position(seed, 4, 5, 12);
            for depth in 1..=4 {
                let h = SegmentHeuristic::default();
                let plain = minimax::analyze(&h, player, &board, depth);
                let pruned = analyze(&h, player, &board, depth);
                assert_eq!(pruned.column, plain.column, "seed {seed}, depth {depth}");
                assert_eq!(pruned.value, plain.value, "seed {seed}, depth {depth}");
            }
        }
    }

    #[test]
    fn pruning_reduces_work() {
        let board = Board::new();
        let h = SegmentHeuristic::default();
        let plain = minimax::analyze(&h, Player::Red, &board, 4);
        let pruned = analyze(&h, Player::Red, &board, 4);
        assert!(pruned.stats.cutoffs > 0);
        assert!(
            pruned.stats.nodes < plain.stats.nodes,
            "pruned {} vs plain {}",
            pruned.stats.nodes,
            plain.stats.nodes
        );
        assert_eq!(plain.stats.cutoffs, 0);
    }

    #[test]
    fn prefers_center_on_empty_board() {
        assert_eq!(search(Player::Red, &Board::new(), 1), Some(3));
    }

    #[test]
    fn takes_winning_move() {
        let board = Board::from_rows(&[
            ".......", //
            ".......", //
            ".......", //
            ".......", //
            "YYY....", //
            "RRR....",
        ])
        .unwrap();
        for depth in 1..=4 {
            assert_eq!(search(Player::Red, &board, depth), Some(3), "depth {depth}");
        }
    }

    #[test]
    fn degenerate_inputs() {
        let full = Board::from_rows(&["RY", "YR"]).unwrap();
        assert_eq!(search(Player::Red, &full, 3), None);
        assert_eq!(search(Player::Red, &Board::new(), 0), None);
    }
}
