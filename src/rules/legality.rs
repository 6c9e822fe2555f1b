//! Move legality: pure predicates over a [`State`].

use smallvec::SmallVec;

use crate::core::{bowl_owner, validate_index, Move, State, PITS_PER_ROW};
use crate::error::{MancalaError, Result};

/// Legal moves for the player to move, in board order.
///
/// Empty when the mover's row is empty, which only happens once the game is
/// over.
#[must_use]
pub fn legal_moves(state: &State) -> SmallVec<[Move; PITS_PER_ROW]> {
    let offset = state.current_player().row_offset();
    state
        .row(state.current_player())
        .iter()
        .enumerate()
        .filter(|(_, &beads)| beads > 0)
        .map(|(i, _)| Move((offset + i) as u8))
        .collect()
}

/// True iff `mv` is a non-empty pit owned by the player to move.
///
/// Fails with `IndexOutOfRange` before looking at ownership or contents.
pub fn is_legal_move(state: &State, mv: Move) -> Result<bool> {
    let index = validate_index(mv.index())?;
    Ok(bowl_owner(index)? == state.current_player() && state.bowl_count(index)? > 0)
}

/// Like [`is_legal_move`] but fails with `InvalidMove` on an illegal move.
///
/// On success returns a private working copy of the state and the validated
/// source index.
pub fn validate_move(state: &State, mv: Move) -> Result<(State, usize)> {
    if !is_legal_move(state, mv)? {
        return Err(MancalaError::InvalidMove { state: *state, mv });
    }
    Ok((*state, mv.index()))
}

/// Map a row-relative choice `n` in `0..6` to a board index for the player
/// to move: `n` for player 0 and `12 - n` for player 1.
pub fn translate_move(state: &State, n: usize) -> Result<Move> {
    if n >= PITS_PER_ROW {
        return Err(MancalaError::IndexOutOfRange { index: n });
    }
    let index = if state.current_player().index() == 0 {
        n
    } else {
        2 * PITS_PER_ROW - n
    };
    Ok(Move(index as u8))
}
