//! Kalah rules as pure functions over [`State`](crate::core::State).
//!
//! - [`legality`]: which pits the player to move may sow from
//! - [`transition`]: sowing, capture, free turns, turn handoff
//! - [`scoring`]: game over, the endgame sweep, the winner
//! - [`perspective`]: flipping boards and moves between players
//!
//! None of these functions mutate their input.

pub mod legality;
pub mod perspective;
pub mod scoring;
pub mod transition;

pub use legality::{is_legal_move, legal_moves, translate_move, validate_move};
pub use perspective::{flip_board, flip_board_if_needed, flip_move};
pub use scoring::{game_result, is_game_over, score_game, winner, GameResult};
pub use transition::{apply_move, apply_move_detailed, MoveOutcome};
