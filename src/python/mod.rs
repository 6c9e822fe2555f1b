//! Python bindings for the Kalah engine.
//!
//! States cross the boundary as lists of 15 ints and moves as plain ints,
//! matching the function-call contract of the Rust API.
//!
//! # Quick Start
//!
//! ```python
//! import mancala_engine as mancala
//!
//! state = mancala.init()
//! while not mancala.is_game_over(state):
//!     state = mancala.apply_move(state, mancala.legal_moves(state)[0])
//! print(mancala.winner(state))
//!
//! # a Python network choosing moves
//! net = mancala.PolicyNetwork(lambda encoded: model(encoded.to_numpy()))
//! mv = mancala.select_move(state, net)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::{ConfigError, MancalaError, TrainingError};

mod py_nn;
mod py_rules;
mod py_training;

pub use py_nn::*;
pub use py_rules::*;
pub use py_training::*;

impl From<MancalaError> for PyErr {
    fn from(err: MancalaError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

impl From<ConfigError> for PyErr {
    fn from(err: ConfigError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

impl From<TrainingError> for PyErr {
    fn from(err: TrainingError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Kalah rules engine with move selectors and training-data generation.
#[pymodule]
fn mancala_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Rules
    m.add_function(wrap_pyfunction!(init, m)?)?;
    m.add_function(wrap_pyfunction!(random_state, m)?)?;
    m.add_function(wrap_pyfunction!(legal_moves, m)?)?;
    m.add_function(wrap_pyfunction!(is_legal_move, m)?)?;
    m.add_function(wrap_pyfunction!(translate_move, m)?)?;
    m.add_function(wrap_pyfunction!(apply_move, m)?)?;
    m.add_function(wrap_pyfunction!(score_game, m)?)?;
    m.add_function(wrap_pyfunction!(is_game_over, m)?)?;
    m.add_function(wrap_pyfunction!(winner, m)?)?;
    m.add_function(wrap_pyfunction!(flip_board, m)?)?;
    m.add_function(wrap_pyfunction!(flip_board_if_needed, m)?)?;
    m.add_function(wrap_pyfunction!(flip_move, m)?)?;

    // Networks
    m.add_class::<PyEncodedState>()?;
    m.add_class::<PyPolicyNetwork>()?;
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(select_move, m)?)?;

    // Training
    m.add_class::<PyTrajectory>()?;
    m.add_class::<PyTrainingSample>()?;
    m.add_class::<PyExperienceBuffer>()?;
    m.add_class::<PySelfPlayConfig>()?;
    m.add_class::<PySelfPlayWorker>()?;

    Ok(())
}
