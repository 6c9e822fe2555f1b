//! Neural network bindings for Python.

use numpy::{PyArray1, PyArrayDyn, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::nn::{EncodedState, OneHotEncoder, PolicyNetwork, RawEncoder, RowEncoder, StateEncoder};
use crate::selector::{MoveSelector, PolicySelector};

use super::py_rules::to_state;

/// Python wrapper for EncodedState.
#[pyclass(name = "EncodedState")]
#[derive(Clone, Debug)]
pub struct PyEncodedState(pub EncodedState);

#[pymethods]
impl PyEncodedState {
    #[new]
    fn new(tensor: Vec<f32>, shape: Vec<usize>) -> PyResult<Self> {
        if tensor.len() != shape.iter().product::<usize>() {
            return Err(PyValueError::new_err("tensor length must match shape product"));
        }
        Ok(Self(EncodedState::new(tensor, shape)))
    }

    #[getter]
    fn tensor(&self) -> Vec<f32> {
        self.0.tensor.clone()
    }

    #[getter]
    fn shape(&self) -> Vec<usize> {
        self.0.shape.clone()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    /// Tensor as a numpy array of the encoded shape.
    fn to_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArrayDyn<f32>>> {
        PyArray1::from_slice_bound(py, &self.0.tensor).reshape(self.0.shape.clone())
    }

    fn __repr__(&self) -> String {
        format!("EncodedState(shape={:?})", self.0.shape)
    }
}

pub(crate) fn encoder_for(name: &str) -> PyResult<Box<dyn StateEncoder>> {
    match name {
        "raw" => Ok(Box::new(RawEncoder)),
        "one_hot" => Ok(Box::new(OneHotEncoder)),
        "row" => Ok(Box::new(RowEncoder)),
        other => Err(PyValueError::new_err(format!(
            "unknown encoder '{}' (expected raw, one_hot or row)",
            other
        ))),
    }
}

/// Encode `state` from the mover's perspective.
#[pyfunction]
#[pyo3(signature = (state, encoder = "raw"))]
pub fn encode(state: Vec<u8>, encoder: &str) -> PyResult<PyEncodedState> {
    Ok(PyEncodedState(encoder_for(encoder)?.encode(&to_state(state)?)))
}

/// A Python callable used as a policy network.
///
/// The callable receives an `EncodedState` and returns six floats, one per
/// pit of the mover's row.
#[pyclass(name = "PolicyNetwork")]
pub struct PyPolicyNetwork {
    callback: PyObject,
}

#[pymethods]
impl PyPolicyNetwork {
    #[new]
    fn new(callback: PyObject) -> Self {
        Self { callback }
    }

    fn predict(&self, py: Python<'_>, encoded: &PyEncodedState) -> PyResult<Vec<f32>> {
        self.callback.call1(py, (encoded.clone(),))?.extract(py)
    }
}

impl PolicyNetwork for PyPolicyNetwork {
    /// A failing callback yields no scores, which makes the selector fall
    /// back to the first legal move.
    fn predict(&self, encoded: &EncodedState) -> Vec<f32> {
        Python::with_gil(|py| {
            let py_encoded = PyEncodedState(encoded.clone());
            match self
                .callback
                .call1(py, (py_encoded,))
                .and_then(|result| result.extract::<Vec<f32>>(py))
            {
                Ok(scores) => scores,
                Err(e) => {
                    eprintln!("PolicyNetwork: predict() failed: {}", e);
                    Vec::new()
                }
            }
        })
    }
}

/// Move chosen by `network` for the player on move, in real board indexing.
#[pyfunction]
#[pyo3(signature = (state, network, encoder = "raw"))]
pub fn select_move(
    py: Python<'_>,
    state: Vec<u8>,
    network: &PyPolicyNetwork,
    encoder: &str,
) -> PyResult<u8> {
    let state = to_state(state)?;
    let network = PyPolicyNetwork {
        callback: network.callback.clone_ref(py),
    };
    let mut selector = PolicySelector::new(encoder_for(encoder)?, Box::new(network));
    Ok(selector.select_move(&state)?.0)
}
