//! Board layout: index arithmetic shared by every other module.
//!
//! ```text
//! +----+----+----+----+----+----+----+----+
//! |    | 12 | 11 | 10 |  9 |  8 |  7 |    |
//! | 13 +----+----+----+----+----+----+  6 |
//! |    |  0 |  1 |  2 |  3 |  4 |  5 |    |
//! +----+----+----+----+----+----+----+----+
//! ```
//!
//! Indices 0..=5 are player 0's pits and 6 is their mancala. Indices 7..=12
//! are player 1's pits and 13 is theirs. Index 14 of a [`State`] holds the
//! player to move.
//!
//! The formulas here assume exactly two players.
//!
//! [`State`]: super::State

use crate::error::{MancalaError, Result};

use super::player::PlayerId;

/// Number of players.
pub const PLAYER_COUNT: usize = 2;

/// Pits per player row, not counting the mancala.
pub const PITS_PER_ROW: usize = 6;

/// Distance between the first pits of consecutive rows (six pits plus a mancala).
pub const ROW_STRIDE: usize = PITS_PER_ROW + 1;

/// Number of board positions (pits and mancalas).
pub const BOARD_SIZE: usize = PLAYER_COUNT * ROW_STRIDE;

/// Position of the turn field inside a state.
pub const TURN_INDEX: usize = BOARD_SIZE;

/// Length of a full state: board positions plus the turn field.
pub const STATE_LEN: usize = BOARD_SIZE + 1;

/// Succeeds iff `index` addresses a board position.
pub fn validate_index(index: usize) -> Result<usize> {
    if index < BOARD_SIZE {
        Ok(index)
    } else {
        Err(MancalaError::IndexOutOfRange { index })
    }
}

/// Succeeds iff `player` names one of the two players.
pub fn validate_player(player: u8) -> Result<PlayerId> {
    PlayerId::try_from(player)
}

/// Index of the first pit in `player`'s row: 0 or 7.
pub fn player_row_offset(player: u8) -> Result<usize> {
    Ok(validate_player(player)?.row_offset())
}

/// Index of `player`'s mancala: 6 or 13.
#[must_use]
pub fn mancala_index(player: PlayerId) -> usize {
    player.mancala_index()
}

/// True iff `index` is a mancala (6 or 13).
pub fn is_mancala(index: usize) -> Result<bool> {
    Ok(validate_index(index)? % ROW_STRIDE == PITS_PER_ROW)
}

/// The pit directly across the board: `12 - index`.
///
/// Mancala 6 maps to itself. Mancala 13 has no position across from it and
/// is rejected with `IndexOutOfRange`.
pub fn opposite_bowl(index: usize) -> Result<usize> {
    let index = validate_index(index)?;
    (BOARD_SIZE - 2)
        .checked_sub(index)
        .ok_or(MancalaError::IndexOutOfRange { index })
}

/// Owner of a board position, derived from the index alone.
pub fn bowl_owner(index: usize) -> Result<PlayerId> {
    Ok(PlayerId::from_index(validate_index(index)? / ROW_STRIDE))
}

/// Mancalas that `player` must skip while sowing.
#[must_use]
pub fn opponent_mancalas(player: PlayerId) -> [usize; PLAYER_COUNT - 1] {
    [player.next().mancala_index()]
}
