//! Core types: board layout, players, state, moves, RNG, configuration.
//!
//! Everything here is pure data and index arithmetic. The rules that act on
//! a [`State`] live in [`crate::rules`].

pub mod action;
pub mod board;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRecord};
pub use board::{
    bowl_owner, is_mancala, mancala_index, opponent_mancalas, opposite_bowl, player_row_offset,
    validate_index, validate_player, BOARD_SIZE, PITS_PER_ROW, PLAYER_COUNT, ROW_STRIDE,
    STATE_LEN, TURN_INDEX,
};
pub use config::{BoardConfig, MAX_BEADS_PER_PIT};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{State, MAX_TOTAL_BEADS};
