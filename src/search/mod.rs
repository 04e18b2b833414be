//! Depth-limited adversarial search.
//!
//! Three interchangeable strategies walk the tree of successor boards
//! produced by [`moves::child_boards`] and score leaves with an
//! [`evaluator::Heuristic`], always from the perspective of the player who
//! asked for a move:
//!
//! - [`minimax`] — plain MAX/MIN recursion
//! - [`alphabeta`] — minimax with alpha-beta pruning, same chosen column
//! - [`expectimax`] — the opponent is modelled as a uniformly random mover
//!
//! Every recursive frame returns its own `(value, column)` pair; nothing
//! about the chosen move lives outside the frame that made the decision.

pub mod alphabeta;
pub mod evaluator;
pub mod expectimax;
pub mod minimax;
pub mod moves;
pub mod position;
mod strategy;

pub use evaluator::{evaluate, Heuristic, ScoreVector, SegmentHeuristic, DEFAULT_WEIGHTS};
pub use position::Position;
pub use strategy::Strategy;

use crate::error::SearchError;
use crate::game::Player;

/// Deepest search the configuration layer accepts.
pub const MAX_DEPTH: u32 = 10;

/// Number of plies to search before falling back to the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DepthLimit(u32);

impl DepthLimit {
    pub fn new(plies: u32) -> Self {
        DepthLimit(plies)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for DepthLimit {
    type Error = SearchError;

    fn try_from(plies: i64) -> Result<Self, Self::Error> {
        if plies < 0 {
            return Err(SearchError::NegativeDepth(plies));
        }
        u32::try_from(plies)
            .map(DepthLimit)
            .map_err(|_| SearchError::DepthTooLarge(plies))
    }
}

/// Work done by one top-level search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, root included.
    pub nodes: u64,
    /// Static evaluations performed.
    pub leaves: u64,
    /// Times alpha-beta stopped examining a node's remaining children.
    pub cutoffs: u64,
}

/// Result of a top-level search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Backed-up value of the root, from the requester's perspective.
    pub value: f64,
    /// Column chosen at the root, `None` when no move was examined.
    pub column: Option<usize>,
    pub stats: SearchStats,
}

/// State shared by the frames of one search: who asked, how leaves are
/// scored, and counters. The chosen move is never stored here.
struct SearchContext<'h, H> {
    heuristic: &'h H,
    root: Player,
    stats: SearchStats,
}

impl<'h, H: Heuristic> SearchContext<'h, H> {
    fn new(heuristic: &'h H, root: Player) -> Self {
        SearchContext {
            heuristic,
            root,
            stats: SearchStats::default(),
        }
    }

    fn enter(&mut self) {
        self.stats.nodes += 1;
    }

    /// Leaf test, run before any move generation.
    fn leaf_value<P: Position>(&mut self, board: &P, depth: u32) -> Option<f64> {
        if depth == 0 || board.terminal() {
            Some(self.evaluate(board))
        } else {
            None
        }
    }

    /// Score for the root requester, whoever is to move locally.
    fn evaluate<P: Position>(&mut self, board: &P) -> f64 {
        self.stats.leaves += 1;
        self.heuristic.evaluate(self.root, board)
    }

    fn finish(self, (value, column): (f64, Option<usize>)) -> SearchOutcome {
        SearchOutcome {
            value,
            column,
            stats: self.stats,
        }
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::game::{Board, Player};

    /// Play up to `max_moves` random legal moves from an empty board.
    /// Returns the board and the player to move.
    pub fn random_position(
        seed: u64,
        rows: usize,
        cols: usize,
        max_moves: usize,
    ) -> (Board, Player) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::with_size(rows, cols).expect("valid test board size");
        let mut player = Player::Red;

        let moves = rng.random_range(0..=max_moves);
        for _ in 0..moves {
            if board.is_terminal() {
                break;
            }
            let legal: Vec<usize> = (0..cols).filter(|&c| !board.is_column_full(c)).collect();
            let col = legal[rng.random_range(0..legal.len())];
            board.drop_piece(col, player).expect("legal column");
            player = player.other();
        }

        (board, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_limit_rejects_negative_values() {
        assert_eq!(
            DepthLimit::try_from(-1i64),
            Err(SearchError::NegativeDepth(-1))
        );
        assert_eq!(
            DepthLimit::try_from(i64::MIN),
            Err(SearchError::NegativeDepth(i64::MIN))
        );
        assert_eq!(DepthLimit::try_from(0i64), Ok(DepthLimit::new(0)));
        assert_eq!(DepthLimit::try_from(4i64).map(DepthLimit::get), Ok(4));
    }

    #[test]
    fn depth_limit_rejects_huge_values() {
        let huge = i64::from(u32::MAX) + 1;
        assert_eq!(
            DepthLimit::try_from(huge),
            Err(SearchError::DepthTooLarge(huge))
        );
    }
}
