//! Move application: sowing, capture, free turns and the endgame sweep.
//!
//! This is the only place a [`State`] changes. The caller's value is never
//! touched; a working copy is sown and returned.

use crate::core::{bowl_owner, opponent_mancalas, opposite_bowl, Move, State, BOARD_SIZE};
use crate::error::Result;

use super::legality::validate_move;
use super::scoring::score_game;

/// Everything that happened while applying one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The resulting state, already swept if the game ended.
    pub state: State,

    /// The last bead landed in the mover's own mancala.
    pub free_turn: bool,

    /// Beads moved into the mover's mancala by a capture, including the
    /// capturing bead. Zero when nothing was captured.
    pub captured: u8,
}

/// Apply a legal move and return the new state.
///
/// Fails with `IndexOutOfRange` for a move outside the board and with
/// `InvalidMove` for any other illegal move.
///
/// ```
/// use mancala_engine::core::{Move, State};
/// use mancala_engine::rules::apply_move;
///
/// let state = State::new();
/// let next = apply_move(&state, Move(2)).unwrap();
/// assert_eq!(
///     next.cells(),
///     &[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0, 0]
/// );
/// ```
pub fn apply_move(state: &State, mv: Move) -> Result<State> {
    Ok(apply_move_detailed(state, mv)?.state)
}

/// [`apply_move`], also reporting free turns and captures.
pub fn apply_move_detailed(state: &State, mv: Move) -> Result<MoveOutcome> {
    let (mut next, source) = validate_move(state, mv)?;
    let mover = next.current_player();
    let skip = opponent_mancalas(mover);

    let mut remaining = std::mem::take(next.cell_mut(source));
    let mut pos = source;
    let mut free_turn = false;
    let mut landed_empty = false;

    while remaining > 0 {
        pos = (pos + 1) % BOARD_SIZE;
        if skip.contains(&pos) {
            continue;
        }

        free_turn = pos == mover.mancala_index();
        landed_empty = !free_turn && bowl_owner(pos)? == mover && next.bowl_count(pos)? == 0;

        *next.cell_mut(pos) += 1;
        remaining -= 1;
    }

    let mut captured = 0;
    if landed_empty {
        let opposite = opposite_bowl(pos)?;
        if next.bowl_count(opposite)? > 0 {
            captured = std::mem::take(next.cell_mut(opposite)) + std::mem::take(next.cell_mut(pos));
            *next.cell_mut(mover.mancala_index()) += captured;
        }
    }

    if !free_turn {
        next.set_current_player(mover.next());
    }

    Ok(MoveOutcome {
        state: score_game(&next),
        free_turn,
        captured,
    })
}
