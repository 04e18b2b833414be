use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

use crate::ai::{Agent, SearchAgent};
use crate::config::AppConfig;
use crate::error::{BoardError, MoveError};
use crate::game::{Board, GameOutcome, GameState, Player};
use crate::search::{DepthLimit, SegmentHeuristic, Strategy, MAX_DEPTH};

/// Human (Red) against a search strategy (Yellow).
pub struct App {
    game_state: GameState,
    empty_board: Board,
    selected_column: usize,
    strategy: Strategy,
    depth: u32,
    heuristic: SegmentHeuristic,
    should_quit: bool,
    message: Option<String>,
}

const HUMAN: Player = Player::Red;

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, BoardError> {
        let empty_board = config.board.build()?;
        Ok(App {
            game_state: GameState::from_board(empty_board.clone(), HUMAN),
            selected_column: empty_board.cols() / 2,
            empty_board,
            strategy: config.search.strategy,
            depth: config.search.depth,
            heuristic: config.search.heuristic(),
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.empty_board.cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play_turn();
            }
            KeyCode::Char('r') => {
                self.game_state = GameState::from_board(self.empty_board.clone(), HUMAN);
                self.selected_column = self.empty_board.cols() / 2;
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char(c @ '1'..='3') => {
                let idx = c as usize - '1' as usize;
                self.strategy = Strategy::ALL[idx];
                self.message = Some(format!("Opponent: {}", self.strategy));
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.depth = (self.depth + 1).min(MAX_DEPTH);
                self.message = Some(format!("Search depth: {}", self.depth));
            }
            KeyCode::Char('-') => {
                self.depth = self.depth.saturating_sub(1).max(1);
                self.message = Some(format!("Search depth: {}", self.depth));
            }
            _ => {}
        }
    }

    /// Drop the human's disc in the selected column, then let the search reply.
    fn play_turn(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(()) => {
                if !self.announce_outcome() {
                    self.reply();
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    fn reply(&mut self) {
        let mut agent = SearchAgent::with_heuristic(
            self.strategy,
            DepthLimit::new(self.depth),
            self.heuristic.clone(),
        );
        match agent.select_action(&self.game_state) {
            Some(col) => match self.game_state.apply_move_mut(col) {
                Ok(()) => {
                    if !self.announce_outcome() {
                        self.message = Some(format!("{} played column {}", agent.name(), col + 1));
                    }
                }
                Err(e) => {
                    self.message = Some(format!("Opponent move rejected: {e}"));
                }
            },
            None => {
                self.message = Some("Opponent has no move.".to_string());
            }
        }
    }

    /// Set the end-of-game message. Returns whether the game is over.
    fn announce_outcome(&mut self) -> bool {
        match self.game_state.outcome() {
            Some(GameOutcome::Winner(player)) if player == HUMAN => {
                self.message = Some("You win!".to_string());
                true
            }
            Some(GameOutcome::Winner(_)) => {
                self.message = Some(format!("{} wins!", self.strategy));
                true
            }
            Some(GameOutcome::Draw) => {
                self.message = Some("It's a draw!".to_string());
                true
            }
            None => false,
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        let mode = format!("{} | depth {}", self.strategy, self.depth);
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &mode,
        );
    }
}
