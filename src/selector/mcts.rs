use crate::core::{Move, State};
use crate::error::{MancalaError, Result};
use crate::mcts::{MctsConfig, MctsSearch, SearchStats};

use super::MoveSelector;

/// Runs a fixed number of MCTS iterations per move.
pub struct MctsSelector {
    search: MctsSearch,
    iterations: u32,
}

impl MctsSelector {
    pub fn new(config: MctsConfig, iterations: u32) -> Self {
        Self::from_search(MctsSearch::new(config), iterations)
    }

    /// Wrap a search with custom policies.
    pub fn from_search(search: MctsSearch, iterations: u32) -> Self {
        Self { search, iterations }
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        self.search.stats()
    }

    #[must_use]
    pub fn search(&self) -> &MctsSearch {
        &self.search
    }
}

impl MoveSelector for MctsSelector {
    fn select_move(&mut self, state: &State) -> Result<Move> {
        self.search
            .search(state, self.iterations)?
            .ok_or(MancalaError::NoLegalMoves { state: *state })
    }

    fn name(&self) -> &str {
        "MCTS"
    }
}
