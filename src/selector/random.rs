use crate::core::{GameRng, Move, State};
use crate::error::{MancalaError, Result};
use crate::rules::legal_moves;

use super::MoveSelector;

/// Picks uniformly among legal moves.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: GameRng,
}

impl RandomSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MoveSelector for RandomSelector {
    fn select_move(&mut self, state: &State) -> Result<Move> {
        let moves = legal_moves(state);
        self.rng
            .choose(&moves)
            .copied()
            .ok_or(MancalaError::NoLegalMoves { state: *state })
    }

    fn name(&self) -> &str {
        "Random"
    }
}
