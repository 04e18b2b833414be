use serde::Serialize;

use super::game::GameRecord;
use crate::game::Player;

/// Running totals for a match between two agents, `a` and `b`.
pub struct MatchStats {
    agent_a: String,
    agent_b: String,
    a_wins: usize,
    b_wins: usize,
    draws: usize,
    forfeits: usize,
    total_moves: usize,
    games: usize,
}

impl MatchStats {
    pub fn new(agent_a: &str, agent_b: &str) -> Self {
        MatchStats {
            agent_a: agent_a.to_string(),
            agent_b: agent_b.to_string(),
            a_wins: 0,
            b_wins: 0,
            draws: 0,
            forfeits: 0,
            total_moves: 0,
            games: 0,
        }
    }

    /// Record a finished game in which agent `a` played `a_seat`.
    pub fn record(&mut self, game: &GameRecord, a_seat: Player) {
        self.games += 1;
        self.total_moves += game.moves.len();
        if game.forfeit.is_some() {
            self.forfeits += 1;
        }
        match game.winner() {
            Some(p) if p == a_seat => self.a_wins += 1,
            Some(_) => self.b_wins += 1,
            None => self.draws += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.games
    }

    fn rate(&self, count: usize) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        count as f32 / self.games as f32
    }

    pub fn win_rate_a(&self) -> f32 {
        self.rate(self.a_wins)
    }

    pub fn win_rate_b(&self) -> f32 {
        self.rate(self.b_wins)
    }

    pub fn draw_rate(&self) -> f32 {
        self.rate(self.draws)
    }

    pub fn average_game_length(&self) -> f32 {
        self.rate(self.total_moves)
    }

    pub fn report(&self) -> MatchReport {
        MatchReport {
            agent_a: self.agent_a.clone(),
            agent_b: self.agent_b.clone(),
            games: self.games,
            a_wins: self.a_wins,
            b_wins: self.b_wins,
            draws: self.draws,
            forfeits: self.forfeits,
            win_rate_a: self.win_rate_a(),
            win_rate_b: self.win_rate_b(),
            draw_rate: self.draw_rate(),
            average_game_length: self.average_game_length(),
        }
    }
}

/// Final summary of a match, serialisable for `--json` output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub agent_a: String,
    pub agent_b: String,
    pub games: usize,
    pub a_wins: usize,
    pub b_wins: usize,
    pub draws: usize,
    pub forfeits: usize,
    pub win_rate_a: f32,
    pub win_rate_b: f32,
    pub draw_rate: f32,
    pub average_game_length: f32,
}
