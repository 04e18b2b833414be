use std::fmt;
use std::str::FromStr;

use super::evaluator::{Heuristic, SegmentHeuristic};
use super::position::Position;
use super::{alphabeta, expectimax, minimax, DepthLimit, SearchOutcome};
use crate::error::SearchError;
use crate::game::Player;

/// The available search strategies. Each one is a stateless function of
/// (player, board, depth limit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Minimax,
    AlphaBeta,
    Expectimax,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Minimax, Strategy::AlphaBeta, Strategy::Expectimax];

    /// Identifier used in config files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alphabeta",
            Strategy::Expectimax => "expectimax",
        }
    }

    /// Name for display
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Minimax => "Minimax",
            Strategy::AlphaBeta => "Alpha-beta pruning",
            Strategy::Expectimax => "Expectimax",
        }
    }

    fn answers_to(self, name: &str) -> bool {
        self.key().eq_ignore_ascii_case(name) || self.name().eq_ignore_ascii_case(name)
    }

    /// Column to play, or `None` when there is no move to make.
    pub fn search<P: Position>(
        self,
        player: Player,
        board: &P,
        depth: DepthLimit,
    ) -> Option<usize> {
        let heuristic = SegmentHeuristic::default();
        self.analyze(&heuristic, player, board, depth).column
    }

    pub fn analyze<P: Position, H: Heuristic>(
        self,
        heuristic: &H,
        player: Player,
        board: &P,
        depth: DepthLimit,
    ) -> SearchOutcome {
        let depth = depth.get();
        let outcome = match self {
            Strategy::Minimax => minimax::analyze(heuristic, player, board, depth),
            Strategy::AlphaBeta => alphabeta::analyze(heuristic, player, board, depth),
            Strategy::Expectimax => expectimax::analyze(heuristic, player, board, depth),
        };

        tracing::debug!(
            strategy = self.key(),
            %player,
            depth,
            column = ?outcome.column,
            value = outcome.value,
            nodes = outcome.stats.nodes,
            leaves = outcome.stats.leaves,
            cutoffs = outcome.stats.cutoffs,
            "search finished"
        );
        outcome
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    /// Accepts the key or the display name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Strategy::ALL
            .into_iter()
            .find(|st| st.answers_to(wanted))
            .ok_or_else(|| SearchError::UnknownStrategy(s.to_string()))
    }
}
