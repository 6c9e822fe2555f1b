//! Training data bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::nn::StateEncoder;
use crate::rules::GameResult;
use crate::selector::{MinimaxSelector, MoveSelector, RandomSelector};
use crate::training::{ExperienceBuffer, SelfPlayConfig, SelfPlayWorker, TrainingSample, Trajectory};

use super::py_nn::{encoder_for, PyEncodedState};
use super::py_rules::from_state;

/// Python wrapper for Trajectory.
#[pyclass(name = "Trajectory")]
#[derive(Clone)]
pub struct PyTrajectory(pub Trajectory);

#[pymethods]
impl PyTrajectory {
    /// Steps as `(board, move, player, move_number)` tuples, board and move
    /// from the mover's perspective.
    #[getter]
    fn steps(&self) -> Vec<(Vec<u8>, u8, u8, u32)> {
        self.0
            .steps
            .iter()
            .map(|s| (from_state(&s.board), s.mv.0, s.player.raw(), s.move_number))
            .collect()
    }

    /// Winning player index, `-1` for a draw, `None` if unfinished.
    #[getter]
    fn result(&self) -> Option<i8> {
        self.0.result.map(|r| match r {
            GameResult::Winner(p) => p.raw() as i8,
            GameResult::Draw => -1,
        })
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    #[pyo3(signature = (encoder = "raw"))]
    fn to_training_samples(&self, encoder: &str) -> PyResult<Vec<PyTrainingSample>> {
        let encoder = encoder_for(encoder)?;
        Ok(self
            .0
            .to_training_samples(encoder.as_ref())?
            .into_iter()
            .map(PyTrainingSample)
            .collect())
    }

    fn to_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        Ok(PyBytes::new_bound(py, &self.0.to_bytes()?))
    }

    #[staticmethod]
    fn from_bytes(bytes: &[u8]) -> PyResult<Self> {
        Ok(Self(Trajectory::from_bytes(bytes)?))
    }

    fn __repr__(&self) -> String {
        format!(
            "Trajectory(steps={}, result={:?}, seed={})",
            self.0.len(),
            self.result(),
            self.0.seed
        )
    }
}

/// Python wrapper for TrainingSample.
#[pyclass(name = "TrainingSample")]
#[derive(Clone)]
pub struct PyTrainingSample(pub TrainingSample);

#[pymethods]
impl PyTrainingSample {
    #[getter]
    fn input(&self) -> PyEncodedState {
        PyEncodedState(self.0.input.clone())
    }

    #[getter]
    fn target(&self) -> Vec<f32> {
        self.0.target.to_vec()
    }

    #[getter]
    fn player(&self) -> u8 {
        self.0.player.raw()
    }

    fn __repr__(&self) -> String {
        format!(
            "TrainingSample(player={}, target={:?})",
            self.0.player.raw(),
            self.0.target
        )
    }
}

/// Python wrapper for ExperienceBuffer.
#[pyclass(name = "ExperienceBuffer")]
pub struct PyExperienceBuffer {
    inner: ExperienceBuffer,
}

#[pymethods]
impl PyExperienceBuffer {
    #[new]
    #[pyo3(signature = (max_trajectories = 10_000))]
    fn new(max_trajectories: usize) -> Self {
        Self {
            inner: ExperienceBuffer::new(max_trajectories),
        }
    }

    fn push(&mut self, trajectory: &PyTrajectory) {
        self.inner.push(trajectory.0.clone());
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    #[getter]
    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    fn total_steps(&self) -> usize {
        self.inner.total_steps()
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    #[pyo3(signature = (batch_size, seed, encoder = "raw"))]
    fn sample_batch(
        &self,
        batch_size: usize,
        seed: u64,
        encoder: &str,
    ) -> PyResult<Vec<PyTrainingSample>> {
        let encoder = encoder_for(encoder)?;
        Ok(self
            .inner
            .sample_batch(encoder.as_ref(), batch_size, seed)?
            .into_iter()
            .map(PyTrainingSample)
            .collect())
    }

    /// All samples as `(inputs [N, input_dim], targets [N, 6])` arrays.
    #[pyo3(signature = (encoder = "raw"))]
    fn to_numpy_batch<'py>(
        &self,
        py: Python<'py>,
        encoder: &str,
    ) -> PyResult<(Bound<'py, PyArray2<f32>>, Bound<'py, PyArray2<f32>>)> {
        let encoder = encoder_for(encoder)?;
        let samples = self.inner.to_training_samples(encoder.as_ref())?;
        numpy_batch(py, encoder.as_ref(), &samples)
    }

    fn __repr__(&self) -> String {
        format!(
            "ExperienceBuffer(len={}, capacity={})",
            self.inner.len(),
            self.inner.capacity()
        )
    }
}

fn numpy_batch<'py>(
    py: Python<'py>,
    encoder: &dyn StateEncoder,
    samples: &[TrainingSample],
) -> PyResult<(Bound<'py, PyArray2<f32>>, Bound<'py, PyArray2<f32>>)> {
    let n = samples.len();
    let input_dim: usize = encoder.output_shape().iter().product();
    let target_dim = encoder.action_space_size();

    let mut inputs = Vec::with_capacity(n * input_dim);
    let mut targets = Vec::with_capacity(n * target_dim);
    for sample in samples {
        inputs.extend_from_slice(&sample.input.tensor);
        targets.extend_from_slice(&sample.target);
    }

    let inputs = PyArray1::from_vec_bound(py, inputs).reshape([n, input_dim])?;
    let targets = PyArray1::from_vec_bound(py, targets).reshape([n, target_dim])?;
    Ok((inputs, targets))
}

/// Python wrapper for SelfPlayConfig.
#[pyclass(name = "SelfPlayConfig")]
#[derive(Clone)]
pub struct PySelfPlayConfig(pub SelfPlayConfig);

#[pymethods]
impl PySelfPlayConfig {
    #[new]
    #[pyo3(signature = (
        mcts_iterations = 400,
        temperature = 1.0,
        exploration_constant = std::f64::consts::SQRT_2,
        max_moves = 500,
        seed_offset = 0,
        random_start = false
    ))]
    fn new(
        mcts_iterations: u32,
        temperature: f64,
        exploration_constant: f64,
        max_moves: u32,
        seed_offset: u64,
        random_start: bool,
    ) -> PyResult<Self> {
        let config = SelfPlayConfig::default()
            .with_mcts_iterations(mcts_iterations)
            .with_temperature(temperature)
            .with_exploration(exploration_constant)
            .with_max_moves(max_moves)
            .with_seed_offset(seed_offset)
            .with_random_start(random_start);
        config.validate()?;
        Ok(Self(config))
    }

    #[getter]
    fn mcts_iterations(&self) -> u32 {
        self.0.mcts_iterations
    }

    #[getter]
    fn temperature(&self) -> f64 {
        self.0.temperature
    }

    #[getter]
    fn max_moves(&self) -> u32 {
        self.0.max_moves
    }

    fn __repr__(&self) -> String {
        format!(
            "SelfPlayConfig(iters={}, temp={}, max_moves={}, seed_offset={})",
            self.0.mcts_iterations, self.0.temperature, self.0.max_moves, self.0.seed_offset
        )
    }
}

/// Plays recorded games.
#[pyclass(name = "SelfPlayWorker")]
pub struct PySelfPlayWorker {
    inner: SelfPlayWorker,
}

#[pymethods]
impl PySelfPlayWorker {
    #[new]
    #[pyo3(signature = (config = None))]
    fn new(config: Option<PySelfPlayConfig>) -> PyResult<Self> {
        let config = config.map(|c| c.0).unwrap_or_default();
        Ok(Self {
            inner: SelfPlayWorker::new(config)?,
        })
    }

    /// MCTS against MCTS.
    fn play_game(&self, game_index: u64) -> PyResult<PyTrajectory> {
        Ok(PyTrajectory(self.inner.play_mcts_game(game_index)?))
    }

    fn play_games(&self, count: u64) -> PyResult<Vec<PyTrajectory>> {
        Ok(self
            .inner
            .play_mcts_games(count)?
            .into_iter()
            .map(PyTrajectory)
            .collect())
    }

    /// Two built-in selectors (`"random"` or `"minimax"`) against each other.
    #[pyo3(signature = (first, second, game_index, depth = 6))]
    fn play_vs(&self, first: &str, second: &str, game_index: u64, depth: u32) -> PyResult<PyTrajectory> {
        let seed = self.inner.config().game_seed(game_index);
        let mut first = builtin_selector(first, seed, depth)?;
        let mut second = builtin_selector(second, seed.wrapping_add(1), depth)?;
        Ok(PyTrajectory(self.inner.play_game(
            first.as_mut(),
            second.as_mut(),
            game_index,
        )?))
    }
}

fn builtin_selector(name: &str, seed: u64, depth: u32) -> PyResult<Box<dyn MoveSelector>> {
    match name {
        "random" => Ok(Box::new(RandomSelector::new(seed))),
        "minimax" => Ok(Box::new(MinimaxSelector::new(depth))),
        other => Err(PyValueError::new_err(format!(
            "unknown selector '{}' (expected random or minimax)",
            other
        ))),
    }
}
