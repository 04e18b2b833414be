use crate::ai::Agent;
use crate::error::MatchError;
use crate::game::{Board, GameOutcome, GameState, Player};

/// Result of playing a single game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Columns played, in order. Red moved first.
    pub moves: Vec<usize>,
    pub outcome: GameOutcome,
    /// Set when a player offered no move on a live board and lost by forfeit.
    pub forfeit: Option<Player>,
    pub board: Board,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            GameOutcome::Winner(p) => Some(p),
            GameOutcome::Draw => None,
        }
    }
}

/// Play one game on `board`, `red` moving first.
///
/// An agent returning `None` while moves remain forfeits. An agent choosing a
/// full or out-of-range column is an error.
pub fn play_game(
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
    board: Board,
) -> Result<GameRecord, MatchError> {
    let mut state = GameState::from_board(board, Player::Red);
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let player = state.current_player();
        let agent: &mut dyn Agent = match player {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };

        let Some(action) = agent.select_action(&state) else {
            tracing::warn!(%player, agent = agent.name(), "no move offered, forfeiting");
            return Ok(GameRecord {
                moves,
                outcome: GameOutcome::Winner(player.other()),
                forfeit: Some(player),
                board: state.board().clone(),
            });
        };

        let legal = state.legal_actions();
        if !legal.contains(&action) {
            return Err(MatchError::IllegalAction { action, legal });
        }
        state.apply_move_mut(action)?;
        moves.push(action);
    }

    let outcome = state.outcome().ok_or(MatchError::MissingOutcome)?;
    Ok(GameRecord {
        moves,
        outcome,
        forfeit: None,
        board: state.board().clone(),
    })
}
