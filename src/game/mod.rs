//! Connect Four rules: a resizable board that tracks its winner, player
//! tokens, and a game state with immutable transitions.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, CONNECT, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
