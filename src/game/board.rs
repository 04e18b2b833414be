use std::fmt;

use super::player::Player;
use crate::error::{BoardError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of aligned discs that wins the game.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }

    fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'R' | 'r' => Some(Cell::Red),
            'Y' | 'y' => Some(Cell::Yellow),
            _ => None,
        }
    }

    fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }
}

/// A `rows x cols` grid. Row 0 is the top, discs fall towards the last row.
///
/// Storage is a flat `Vec`, so `clone()` is always a deep copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    winner: Option<Player>,
}

// Half of the directions; check_win walks each one both ways.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

impl Board {
    /// Create a new empty standard 6x7 board
    pub fn new() -> Self {
        Board {
            rows: ROWS,
            cols: COLS,
            cells: vec![Cell::Empty; ROWS * COLS],
            winner: None,
        }
    }

    pub fn with_size(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidSize { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            winner: None,
        })
    }

    /// Parse a board from text rows, top row first, using `.`, `R` and `Y`.
    ///
    /// Gravity is not enforced, so tests can describe arbitrary positions.
    pub fn from_rows(lines: &[&str]) -> Result<Self, BoardError> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        let mut board = Board::with_size(rows, cols)?;

        for (r, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(BoardError::RaggedRow { row: r });
            }
            for (c, ch) in line.chars().enumerate() {
                let cell = Cell::from_symbol(ch).ok_or(BoardError::InvalidCell(ch))?;
                board.cells[r * cols + c] = cell;
            }
        }

        board.winner = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .find(|&(r, c)| board.check_win(r, c))
            .and_then(|(r, c)| board.get(r, c).owner());
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Slots of row `row`, left to right
    pub fn row(&self, row: usize) -> Vec<Cell> {
        self.cells[row * self.cols..(row + 1) * self.cols].to_vec()
    }

    /// Slots of column `col`, top to bottom
    pub fn col(&self, col: usize) -> Vec<Cell> {
        (0..self.rows).map(|r| self.get(r, col)).collect()
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// A board is over once someone connected four or no column is left.
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.is_full()
    }

    /// Drop a disc in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        let row = (0..self.rows)
            .rev()
            .find(|&r| self.get(r, col) == Cell::Empty)
            .ok_or(MoveError::ColumnFull)?;
        self.cells[row * self.cols + col] = player.to_cell();

        if self.check_win(row, col) {
            self.winner = Some(player);
        }
        Ok(row)
    }

    /// Check whether the disc at (row, col) is part of a line of four
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        DIRECTIONS.iter().any(|&(dr, dc)| {
            let count = 1
                + self.run_length(row, col, dr, dc, cell)
                + self.run_length(row, col, -dr, -dc, cell);
            count >= CONNECT
        })
    }

    /// Number of consecutive `cell` slots starting one step away from (row, col).
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0
            && c >= 0
            && (r as usize) < self.rows
            && (c as usize) < self.cols
            && self.get(r as usize, c as usize) == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            let line: String = self.row(r).into_iter().map(Cell::symbol).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
