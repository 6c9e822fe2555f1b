//! Network-backed selector.
//!
//! The network sees the board from player 0's side and scores the six pits
//! of that row. The best-scoring legal pit is mapped back to real indexing
//! with [`flip_move`].

use crate::core::{Move, State};
use crate::error::{MancalaError, Result};
use crate::nn::{PolicyNetwork, StateEncoder};
use crate::rules::{flip_board_if_needed, flip_move, legal_moves};

use super::MoveSelector;

/// Plays the legal pit with the highest network score.
///
/// Falls back to the first legal pit when no legal pit has a usable score.
pub struct PolicySelector {
    encoder: Box<dyn StateEncoder>,
    network: Box<dyn PolicyNetwork>,
    name: String,
}

impl PolicySelector {
    pub fn new(encoder: Box<dyn StateEncoder>, network: Box<dyn PolicyNetwork>) -> Self {
        Self {
            encoder,
            network,
            name: "Policy".to_string(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Raw network scores for the normalized row of the player on move.
    pub fn scores(&self, state: &State) -> Vec<f32> {
        self.network.predict(&self.encoder.encode(state))
    }
}

impl MoveSelector for PolicySelector {
    fn select_move(&mut self, state: &State) -> Result<Move> {
        let normalized = flip_board_if_needed(state);
        let candidates = legal_moves(&normalized);
        let first = *candidates
            .first()
            .ok_or(MancalaError::NoLegalMoves { state: *state })?;

        let scores = self.scores(state);
        let mut best: Option<(Move, f32)> = None;
        for &mv in &candidates {
            let Some(&score) = scores.get(mv.index()) else {
                continue;
            };
            if score.is_nan() {
                continue;
            }
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
        }

        let chosen = best.map_or(first, |(mv, _)| mv);
        flip_move(Some(chosen), state.current_player().raw())?
            .ok_or(MancalaError::NoLegalMoves { state: *state })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
