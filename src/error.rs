//! Error types.
//!
//! Every engine error is a caller-input violation. Nothing is retried and no
//! partially-applied state is ever returned alongside an error.

use thiserror::Error;

use crate::core::{Move, State};

/// Errors raised by the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MancalaError {
    #[error("index {index} is not a board position (expected 0..=13)")]
    IndexOutOfRange { index: usize },

    #[error("invalid player: {player}")]
    InvalidPlayer { player: u8 },

    #[error("{total} beads on the board, at most {max} fit in one pit")]
    TooManyBeads { total: u32, max: u8 },

    #[error("invalid move {mv} for state {state}")]
    InvalidMove { state: State, mv: Move },

    #[error("no legal moves for state {state}")]
    NoLegalMoves { state: State },

    #[error("game not over")]
    GameNotOver,
}

/// Errors raised while validating configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised while generating or persisting training data.
#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("engine error during self-play: {0}")]
    Engine(#[from] MancalaError),

    #[error("failed to encode trajectory: {0}")]
    Encode(#[from] bincode::Error),
}

/// Crate result alias for engine operations.
pub type Result<T, E = MancalaError> = std::result::Result<T, E>;
