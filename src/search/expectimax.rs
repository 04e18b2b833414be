use super::evaluator::{Heuristic, SegmentHeuristic};
use super::moves::child_boards;
use super::position::Position;
use super::{SearchContext, SearchOutcome};
use crate::game::Player;

/// Column `player` should play, assuming the opponent picks uniformly at
/// random among its legal columns.
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

    if to_move != ctx.root {
        return (chance_value(ctx, to_move, &children, depth), None);
    }

    let mut best = f64::NEG_INFINITY;
    let mut best_col = None;
    for (col, child) in &children {
        let (score, _) = value(ctx, to_move.other(), child, depth - 1);
        if score > best {
            best = score;
            best_col = Some(*col);
        }
    }

    (best, best_col)
}

/// Mean of the children's values: each legal reply has probability
/// `1 / children.len()`, so the weight grows as columns fill up.
fn chance_value<P: Position, H: Heuristic>(
    ctx: &mut SearchContext<'_, H>,
    to_move: Player,
    children: &[(usize, P)],
    depth: u32,
) -> f64 {
    let total: f64 = children
        .iter()
        .map(|(_, child)| value(ctx, to_move.other(), child, depth - 1).0)
        .sum();
    total / children.len() as f64
}
