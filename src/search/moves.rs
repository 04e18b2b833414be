use super::position::Position;
use crate::game::Player;

/// Successor boards for `player`, one per placeable column, columns ascending.
///
/// Every successor is a fresh clone; `board` itself is never touched.
///
/// # Panics
///
/// If `place` rejects a column that `placeable` reported as open.
pub fn child_boards<P: Position>(player: Player, board: &P) -> Vec<(usize, P)> {
    (0..board.cols())
        .filter(|&col| board.placeable(col))
        .map(|col| {
            let mut child = board.clone();
            child
                .place(player, col)
                .expect("placeable column accepts a disc");
            (col, child)
        })
        .collect()
}
