use super::agent::Agent;
use crate::game::GameState;
use crate::search::{DepthLimit, SegmentHeuristic, Strategy};

/// Agent that runs one of the search strategies on every turn.
pub struct SearchAgent {
    strategy: Strategy,
    depth: DepthLimit,
    heuristic: SegmentHeuristic,
    name: String,
}

impl SearchAgent {
    pub fn new(strategy: Strategy, depth: DepthLimit) -> Self {
        Self::with_heuristic(strategy, depth, SegmentHeuristic::default())
    }

    pub fn with_heuristic(
        strategy: Strategy,
        depth: DepthLimit,
        heuristic: SegmentHeuristic,
    ) -> Self {
        SearchAgent {
            strategy,
            depth,
            heuristic,
            name: format!("{} (depth {})", strategy.name(), depth.get()),
        }
    }
}

impl Agent for SearchAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        let player = state.current_player();
        self.strategy
            .analyze(&self.heuristic, player, state.board(), self.depth)
            .column
    }

    fn name(&self) -> &str {
        &self.name
    }
}
