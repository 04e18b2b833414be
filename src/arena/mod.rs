//! Head-to-head matches between agents.

mod game;
mod stats;

pub use game::{play_game, GameRecord};
pub use stats::{MatchReport, MatchStats};

use crate::ai::Agent;
use crate::error::MatchError;
use crate::game::{Board, Player};

/// Plays a fixed number of games between two agents, swapping who moves
/// first after every game.
pub struct Arena {
    games: usize,
    board: Board,
}

impl Arena {
    pub fn new(games: usize, board: Board) -> Self {
        Arena { games, board }
    }

    pub fn run(&self, a: &mut dyn Agent, b: &mut dyn Agent) -> Result<MatchReport, MatchError> {
        let mut stats = MatchStats::new(a.name(), b.name());

        for game in 0..self.games {
            let a_seat = if game % 2 == 0 {
                Player::Red
            } else {
                Player::Yellow
            };
            let record = match a_seat {
                Player::Red => play_game(a, b, self.board.clone())?,
                Player::Yellow => play_game(b, a, self.board.clone())?,
            };
            stats.record(&record, a_seat);

            tracing::info!(
                game = game + 1,
                of = self.games,
                winner = ?record.winner(),
                moves = record.moves.len(),
                "game finished"
            );
        }

        Ok(stats.report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{RandomAgent, SearchAgent};
    use crate::search::{DepthLimit, Strategy};

    #[test]
    fn search_beats_random_over_a_match() {
        let arena = Arena::new(6, Board::new());
        let mut search = SearchAgent::new(Strategy::AlphaBeta, DepthLimit::new(3));
        let mut random = RandomAgent::with_seed(7);

        let report = arena.run(&mut search, &mut random).unwrap();
        assert_eq!(report.games, 6);
        assert_eq!(report.a_wins + report.b_wins + report.draws, 6);
        assert!(report.a_wins >= 5, "{report:?}");
        assert_eq!(report.agent_a, "Alpha-beta pruning (depth 3)");
        assert_eq!(report.agent_b, "Random");
    }

    #[test]
    fn identical_deterministic_agents_split_by_seat() {
        let arena = Arena::new(2, Board::with_size(4, 5).unwrap());
        let mut a = SearchAgent::new(Strategy::Minimax, DepthLimit::new(2));
        let mut b = SearchAgent::new(Strategy::Minimax, DepthLimit::new(2));

        // Same strategy on both sides: each game is the same game, so
        // whatever seat wins once wins both times.
        let report = arena.run(&mut a, &mut b).unwrap();
        assert_eq!(report.a_wins, report.b_wins);
        assert!(report.average_game_length > 0.0);
    }

    #[test]
    fn zero_games_gives_empty_report() {
        let arena = Arena::new(0, Board::new());
        let mut a = RandomAgent::with_seed(1);
        let mut b = RandomAgent::with_seed(2);
        let report = arena.run(&mut a, &mut b).unwrap();
        assert_eq!(report.games, 0);
    }
}
