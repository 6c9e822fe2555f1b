//! Move selectors: anything that can pick a move for the player on move.
//!
//! A selector only needs the public rules surface: [`legal_moves`] to find
//! candidates, [`flip_board_if_needed`]/[`flip_move`] to think as player 0,
//! and [`apply_move`] to look ahead. Drivers commit the chosen move
//! themselves with [`apply_move`].
//!
//! [`legal_moves`]: crate::rules::legal_moves
//! [`flip_board_if_needed`]: crate::rules::flip_board_if_needed
//! [`flip_move`]: crate::rules::flip_move
//! [`apply_move`]: crate::rules::apply_move

pub mod arena;
pub mod mcts;
pub mod minimax;
pub mod policy;
pub mod random;

use crate::core::{Move, State};
use crate::error::Result;

pub use arena::{play_game, play_match, GameRecord, MatchSummary};
pub use mcts::MctsSelector;
pub use minimax::MinimaxSelector;
pub use policy::PolicySelector;
pub use random::RandomSelector;

/// Universal interface for move-choosing strategies.
pub trait MoveSelector {
    /// A legal move for the player on move.
    ///
    /// Fails with `NoLegalMoves` on a finished game.
    fn select_move(&mut self, state: &State) -> Result<Move>;

    /// Display name, used in match summaries.
    fn name(&self) -> &str;
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn select_move(&mut self, state: &State) -> Result<Move> {
        (**self).select_move(state)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
