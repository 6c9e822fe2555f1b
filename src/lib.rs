//! # mancala-engine
//!
//! A Kalah rules engine (six pits and one mancala per side, four beads per
//! pit) with pluggable move selectors, built for RL and MCTS play.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every rules operation takes a [`State`] by
//!    reference and returns a new value. A failed move never leaves a
//!    partially-sown board behind.
//!
//! 2. **Fixed Layout**: A state is 15 small integers. Indices 0..=5 are
//!    player 0's pits, 6 their mancala, 7..=12 player 1's pits, 13 their
//!    mancala, and 14 the player on move.
//!
//! 3. **Perspective Normalization**: Networks only ever see the board from
//!    player 0's side. [`rules::flip_board_if_needed`] and
//!    [`rules::flip_move`] convert both ways.
//!
//! ## Modules
//!
//! - `core`: Board layout, players, state, moves, RNG, configuration
//! - `rules`: Legality, sowing, scoring, perspective transforms
//! - `selector`: The `MoveSelector` contract, built-in selectors, game arena
//! - `mcts`: Monte Carlo Tree Search
//! - `nn`: Network input encodings and the policy interface
//! - `training`: Trajectories, targets and self-play
//!
//! ## Example
//!
//! ```
//! use mancala_engine::rules::{apply_move, is_game_over, winner};
//! use mancala_engine::selector::{MinimaxSelector, MoveSelector, RandomSelector};
//! use mancala_engine::State;
//!
//! let mut minimax = MinimaxSelector::new(4);
//! let mut random = RandomSelector::new(7);
//! let mut state = State::new();
//!
//! while !is_game_over(&state) {
//!     let mv = if state.current_player().index() == 0 {
//!         minimax.select_move(&state)?
//!     } else {
//!         random.select_move(&state)?
//!     };
//!     state = apply_move(&state, mv)?;
//! }
//! assert_eq!(state.total_beads(), 48);
//! let _result = winner(&state)?;
//! # Ok::<(), mancala_engine::MancalaError>(())
//! ```

pub mod core;
pub mod error;
pub mod mcts;
pub mod nn;
pub mod rules;
pub mod selector;
pub mod training;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{BoardConfig, GameRng, Move, MoveRecord, PlayerId, PlayerMap, State};

pub use crate::error::{ConfigError, MancalaError, Result, TrainingError};

pub use crate::rules::{
    apply_move, flip_board, flip_board_if_needed, flip_move, is_game_over, is_legal_move,
    legal_moves, score_game, winner, GameResult,
};

pub use crate::selector::{
    play_game, play_match, GameRecord, MatchSummary, MctsSelector, MinimaxSelector, MoveSelector,
    PolicySelector, RandomSelector,
};

pub use crate::mcts::{MctsConfig, MctsSearch, SearchStats};

pub use crate::nn::{EncodedState, OneHotEncoder, PolicyNetwork, RawEncoder, RowEncoder, StateEncoder};

pub use crate::training::{ExperienceBuffer, SelfPlayConfig, SelfPlayWorker, Trajectory};
