use crate::error::MoveError;
use crate::game::{Board, Cell, Player};

/// Board capability consumed by the search core.
///
/// Implementations must make `clone()` a fully independent copy: sibling
/// branches of the search tree are produced by cloning the same parent.
pub trait Position: Clone {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    /// Slots of one row, left to right.
    fn row(&self, row: usize) -> Vec<Cell>;
    /// Slots of one column, in row order.
    fn col(&self, col: usize) -> Vec<Cell>;
    fn placeable(&self, col: usize) -> bool;
    fn place(&mut self, player: Player, col: usize) -> Result<(), MoveError>;
    /// Someone has won or the board is full.
    fn terminal(&self) -> bool;
}

impl Position for Board {
    fn rows(&self) -> usize {
        Board::rows(self)
    }

    fn cols(&self) -> usize {
        Board::cols(self)
    }

    fn row(&self, row: usize) -> Vec<Cell> {
        Board::row(self, row)
    }

    fn col(&self, col: usize) -> Vec<Cell> {
        Board::col(self, col)
    }

    fn placeable(&self, col: usize) -> bool {
        !self.is_column_full(col)
    }

    fn place(&mut self, player: Player, col: usize) -> Result<(), MoveError> {
        self.drop_piece(col, player).map(|_| ())
    }

    fn terminal(&self) -> bool {
        self.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_is_independent() {
        let mut original = Board::new();
        original.place(Player::Red, 3).unwrap();

        let mut copy = original.clone();
        copy.place(Player::Yellow, 3).unwrap();

        assert_eq!(original.col(3)[4], Cell::Empty);
        assert_eq!(copy.col(3)[4], Cell::Yellow);
    }

    #[test]
    fn placeable_tracks_full_columns() {
        let mut board = Board::with_size(2, 3).unwrap();
        assert!(board.placeable(1));
        board.place(Player::Red, 1).unwrap();
        board.place(Player::Yellow, 1).unwrap();
        assert!(!board.placeable(1));
        assert!(!board.placeable(3));
    }
}
