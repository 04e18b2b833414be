//! Static evaluation over 4-slot line segments.
//!
//! Every horizontal, vertical and diagonal run of [`CONNECT`] slots is a
//! segment. A segment that holds discs of only one player counts towards
//! that player's [`ScoreVector`] at the number of discs it holds; mixed
//! segments can never become a line and count for nobody. The score is the
//! weighted sum of the player's vector minus the opponent's, which makes it
//! antisymmetric: swapping perspective negates it exactly.

use std::iter;

use super::position::Position;
use crate::game::{Cell, Player, CONNECT};

/// Importance of a segment by how many discs one player has in it.
pub const DEFAULT_WEIGHTS: [f64; CONNECT + 1] = [0.0, 1.0, 4.0, 16.0, 1000.0];

pub type Segment = [Cell; CONNECT];

/// Counts of single-owner segments, indexed by disc count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreVector(pub [u32; CONNECT + 1]);

impl ScoreVector {
    pub fn weighted(&self, weights: &[f64; CONNECT + 1]) -> f64 {
        self.0
            .iter()
            .zip(weights)
            .map(|(&count, &w)| f64::from(count) * w)
            .sum()
    }
}

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic {
    fn evaluate<P: Position>(&self, player: Player, board: &P) -> f64;
}

/// Weighted segment-count heuristic.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentHeuristic {
    weights: [f64; CONNECT + 1],
}

impl SegmentHeuristic {
    pub fn new(weights: [f64; CONNECT + 1]) -> Self {
        SegmentHeuristic { weights }
    }

    pub fn weights(&self) -> &[f64; CONNECT + 1] {
        &self.weights
    }
}

impl Default for SegmentHeuristic {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHTS)
    }
}

impl Heuristic for SegmentHeuristic {
    fn evaluate<P: Position>(&self, player: Player, board: &P) -> f64 {
        let (own, opp) = score_vectors(player, board);
        own.weighted(&self.weights) - opp.weighted(&self.weights)
    }
}

/// Score `board` for `player` with [`DEFAULT_WEIGHTS`].
pub fn evaluate<P: Position>(player: Player, board: &P) -> f64 {
    SegmentHeuristic::default().evaluate(player, board)
}

/// Build the score vectors of `player` and of the opponent.
pub fn score_vectors<P: Position>(player: Player, board: &P) -> (ScoreVector, ScoreVector) {
    let own_cell = player.to_cell();
    let opp_cell = player.other().to_cell();
    let mut own = ScoreVector::default();
    let mut opp = ScoreVector::default();

    for segment in segments(board) {
        let mine = segment.iter().filter(|&&c| c == own_cell).count();
        let theirs = segment.iter().filter(|&&c| c == opp_cell).count();
        if theirs == 0 {
            own.0[mine] += 1;
        }
        if mine == 0 {
            opp.0[theirs] += 1;
        }
    }

    (own, opp)
}

/// All segments of the board, in every direction.
pub fn segments<P: Position>(board: &P) -> Vec<Segment> {
    let mut out = Vec::new();

    for r in 0..board.rows() {
        out.extend(board.row(r).windows(CONNECT).filter_map(to_segment));
    }
    for c in 0..board.cols() {
        out.extend(board.col(c).windows(CONNECT).filter_map(to_segment));
    }
    for lean in [Lean::Left, Lean::Right] {
        let grid = skewed(board, lean);
        let width = board.cols() + board.rows() - 1;
        for j in 0..width {
            let diagonal: Vec<Option<Cell>> = grid.iter().map(|row| row[j]).collect();
            out.extend(diagonal.windows(CONNECT).filter_map(complete));
        }
    }

    out
}

#[derive(Clone, Copy)]
enum Lean {
    Left,
    Right,
}

/// Shift row `r` sideways by `r` slots (or `rows - 1 - r`) and pad with `None`,
/// so that the grid's columns are the board's diagonals. Windows that hit the
/// padding are dropped instead of wrapping onto unrelated rows.
fn skewed<P: Position>(board: &P, lean: Lean) -> Vec<Vec<Option<Cell>>> {
    let rows = board.rows();
    (0..rows)
        .map(|r| {
            let (before, after) = match lean {
                Lean::Left => (r, rows - 1 - r),
                Lean::Right => (rows - 1 - r, r),
            };
            iter::repeat_n(None, before)
                .chain(board.row(r).into_iter().map(Some))
                .chain(iter::repeat_n(None, after))
                .collect()
        })
        .collect()
}

fn to_segment(window: &[Cell]) -> Option<Segment> {
    window.try_into().ok()
}

fn complete(window: &[Option<Cell>]) -> Option<Segment> {
    let cells: Vec<Cell> = window.iter().copied().collect::<Option<_>>()?;
    to_segment(&cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Board;
    use crate::search::testutil::random_position;

    #[test]
    fn standard_board_has_69_segments() {
        // 24 horizontal, 21 vertical, 12 per diagonal direction.
        assert_eq!(segments(&Board::new()).len(), 69);
    }

    #[test]
    fn small_boards_do_not_wrap_diagonals() {
        assert_eq!(segments(&Board::with_size(4, 4).unwrap()).len(), 10);
        // Too short for verticals or diagonals.
        assert_eq!(segments(&Board::with_size(3, 7).unwrap()).len(), 12);
        assert!(segments(&Board::with_size(3, 3).unwrap()).is_empty());
    }

    #[test]
    fn diagonal_segments_follow_the_board() {
        let board = Board::from_rows(&[
            "R...", //
            ".R..", //
            "..R.", //
            "...R",
        ])
        .unwrap();
        let full_red = segments(&board)
            .into_iter()
            .filter(|s| s.iter().all(|&c| c == Cell::Red))
            .count();
        assert_eq!(full_red, 1);
    }

    #[test]
    fn empty_board_is_zero() {
        let board = Board::new();
        assert_eq!(evaluate(Player::Red, &board), 0.0);
        assert_eq!(evaluate(Player::Yellow, &board), 0.0);
    }

    #[test]
    fn single_disc_scores_its_segments() {
        let mut center = Board::new();
        center.drop_piece(3, Player::Red).unwrap();
        let mut edge = Board::new();
        edge.drop_piece(0, Player::Red).unwrap();

        // 4 horizontal + 1 vertical + 1 per diagonal
        assert_eq!(evaluate(Player::Red, &center), 7.0);
        // 1 horizontal + 1 vertical + 1 diagonal
        assert_eq!(evaluate(Player::Red, &edge), 3.0);
    }

    #[test]
    fn mixed_segments_count_for_nobody() {
        let board = Board::from_rows(&["RY.."]).unwrap();
        let (own, opp) = score_vectors(Player::Red, &board);
        assert_eq!(own, ScoreVector::default());
        assert_eq!(opp, ScoreVector::default());
        assert_eq!(evaluate(Player::Red, &board), 0.0);
    }

    #[test]
    fn score_vectors_count_by_occupancy() {
        let board = Board::from_rows(&["RR.Y..."]).unwrap();
        let (own, opp) = score_vectors(Player::Red, &board);
        // Windows: [RR.Y] mixed, [R.Y.] mixed, [.Y..] yellow 1, [Y...] yellow 1
        assert_eq!(own, ScoreVector([0, 0, 0, 0, 0]));
        assert_eq!(opp, ScoreVector([0, 2, 0, 0, 0]));
        assert_eq!(evaluate(Player::Red, &board), -2.0);
    }

    #[test]
    fn four_in_a_row_dominates() {
        let board = Board::from_rows(&[
            ".......", //
            ".......", //
            ".......", //
            "YYY....", //
            "YYY....", //
            "RRRR...",
        ])
        .unwrap();
        assert!(evaluate(Player::Red, &board) > 900.0);
    }

    #[test]
    fn custom_weights_are_applied() {
        let mut board = Board::new();
        board.drop_piece(3, Player::Red).unwrap();
        let h = SegmentHeuristic::new([0.0, 2.0, 0.0, 0.0, 0.0]);
        assert_eq!(h.evaluate(Player::Red, &board), 14.0);
        assert_eq!(h.weights()[1], 2.0);
    }

    #[test]
    fn evaluation_is_antisymmetric() {
        for seed in 0..40 {
            let (board, _) = random_position(seed, 6, 7, 30);
            let red = evaluate(Player::Red, &board);
            let yellow = evaluate(Player::Yellow, &board);
            assert_eq!(red, -yellow, "seed {seed}:\n{board}");
        }
    }
}
