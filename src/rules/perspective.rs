//! Perspective transforms.
//!
//! Selectors and encoders can always think as player 0: hand them
//! [`flip_board_if_needed`] and map their answer back with [`flip_move`].

use crate::core::{validate_index, validate_player, Move, State, BOARD_SIZE, ROW_STRIDE};
use crate::error::Result;

/// Rotate the board by one row and hand the turn to the other player.
///
/// Applying it twice gives back the original state.
#[must_use]
pub fn flip_board(state: &State) -> State {
    let mut flipped = *state;
    for (i, &beads) in state.board().iter().enumerate() {
        *flipped.cell_mut((i + ROW_STRIDE) % BOARD_SIZE) = beads;
    }
    flipped.set_current_player(state.current_player().next());
    flipped
}

/// The state seen from player 0's side: unchanged if player 0 is to move,
/// flipped otherwise.
#[must_use]
pub fn flip_board_if_needed(state: &State) -> State {
    if state.current_player().index() == 0 {
        *state
    } else {
        flip_board(state)
    }
}

/// Map a move chosen on a normalized board back to real indexing for
/// `player`.
///
/// `None` (no move) passes through unchanged. Otherwise fails with
/// `InvalidPlayer` for a bad player and `IndexOutOfRange` for a move off the
/// board.
pub fn flip_move(mv: Option<Move>, player: u8) -> Result<Option<Move>> {
    let Some(mv) = mv else {
        return Ok(None);
    };
    let player = validate_player(player)?;
    let index = validate_index(mv.index())?;
    Ok(Some(Move(((index + player.row_offset()) % BOARD_SIZE) as u8)))
}
