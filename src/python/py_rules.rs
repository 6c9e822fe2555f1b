//! Rules functions for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameRng, Move, State, STATE_LEN};
use crate::rules::{self, GameResult};

/// Convert a Python list into a validated state.
pub(crate) fn to_state(cells: Vec<u8>) -> PyResult<State> {
    let cells: [u8; STATE_LEN] = cells.try_into().map_err(|cells: Vec<u8>| {
        PyValueError::new_err(format!(
            "state must have {} entries, got {}",
            STATE_LEN,
            cells.len()
        ))
    })?;
    Ok(State::from_cells(cells)?)
}

pub(crate) fn from_state(state: &State) -> Vec<u8> {
    state.cells().to_vec()
}

/// Standard starting position.
#[pyfunction]
pub fn init() -> Vec<u8> {
    from_state(&State::new())
}

/// Random position with 48 beads, seeded.
#[pyfunction]
pub fn random_state(seed: u64) -> Vec<u8> {
    from_state(&State::random(&mut GameRng::new(seed)))
}

#[pyfunction]
pub fn legal_moves(state: Vec<u8>) -> PyResult<Vec<u8>> {
    let state = to_state(state)?;
    Ok(rules::legal_moves(&state).iter().map(|m| m.0).collect())
}

#[pyfunction]
pub fn is_legal_move(state: Vec<u8>, mv: u8) -> PyResult<bool> {
    Ok(rules::is_legal_move(&to_state(state)?, Move(mv))?)
}

/// Board index of row position `n` for the player on move.
#[pyfunction]
pub fn translate_move(state: Vec<u8>, n: usize) -> PyResult<u8> {
    Ok(rules::translate_move(&to_state(state)?, n)?.0)
}

/// Raises `ValueError` on an illegal move; the input list is never changed.
#[pyfunction]
pub fn apply_move(state: Vec<u8>, mv: u8) -> PyResult<Vec<u8>> {
    let next = rules::apply_move(&to_state(state)?, Move(mv))?;
    Ok(from_state(&next))
}

#[pyfunction]
pub fn score_game(state: Vec<u8>) -> PyResult<Vec<u8>> {
    Ok(from_state(&rules::score_game(&to_state(state)?)))
}

#[pyfunction]
pub fn is_game_over(state: Vec<u8>) -> PyResult<bool> {
    Ok(rules::is_game_over(&to_state(state)?))
}

/// Winning player index, or `-1` for a draw.
#[pyfunction]
pub fn winner(state: Vec<u8>) -> PyResult<i8> {
    Ok(match rules::winner(&to_state(state)?)? {
        GameResult::Winner(player) => player.raw() as i8,
        GameResult::Draw => -1,
    })
}

#[pyfunction]
pub fn flip_board(state: Vec<u8>) -> PyResult<Vec<u8>> {
    Ok(from_state(&rules::flip_board(&to_state(state)?)))
}

#[pyfunction]
pub fn flip_board_if_needed(state: Vec<u8>) -> PyResult<Vec<u8>> {
    Ok(from_state(&rules::flip_board_if_needed(&to_state(state)?)))
}

#[pyfunction]
#[pyo3(signature = (mv, player))]
pub fn flip_move(mv: Option<u8>, player: u8) -> PyResult<Option<u8>> {
    Ok(rules::flip_move(mv.map(Move), player)?.map(|m| m.0))
}
