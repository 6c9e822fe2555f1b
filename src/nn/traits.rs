//! Network-facing types: the encoded input tensor and the policy interface.
//!
//! Networks live outside the crate (typically in Python via the `python`
//! feature). They only ever see a board normalized to player 0's side and
//! answer with one score per pit of that row.

use serde::{Deserialize, Serialize};

use crate::core::PITS_PER_ROW;

/// Encoded game state as a flat tensor for network input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor, e.g. `[14]` or `[2, 6, 1]`.
    pub shape: Vec<usize>,
}

impl EncodedState {
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }

    /// Set element at a flat index. Out-of-bounds writes are ignored.
    pub fn set(&mut self, index: usize, value: f32) {
        if let Some(slot) = self.tensor.get_mut(index) {
            *slot = value;
        }
    }
}

/// Policy network: one score per pit of the mover's row.
///
/// Higher is better. Scores need not be normalized; illegal pits are
/// filtered out by the caller.
pub trait PolicyNetwork: Send + Sync {
    fn predict(&self, encoded: &EncodedState) -> Vec<f32>;

    /// Batch prediction; override when the backend can do better.
    fn predict_batch(&self, encoded: &[EncodedState]) -> Vec<Vec<f32>> {
        encoded.iter().map(|e| self.predict(e)).collect()
    }
}

/// Equal score for every pit (baseline for testing).
#[derive(Clone, Debug)]
pub struct UniformPolicy {
    action_space_size: usize,
}

impl UniformPolicy {
    pub fn new(action_space_size: usize) -> Self {
        Self { action_space_size }
    }
}

impl Default for UniformPolicy {
    fn default() -> Self {
        Self::new(PITS_PER_ROW)
    }
}

impl PolicyNetwork for UniformPolicy {
    fn predict(&self, _encoded: &EncodedState) -> Vec<f32> {
        if self.action_space_size == 0 {
            return vec![];
        }
        let prob = 1.0 / self.action_space_size as f32;
        vec![prob; self.action_space_size]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_state_new() {
        let state = EncodedState::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
        assert_eq!(state.len(), 4);
        assert_eq!(state.get(3), Some(4.0));
        assert_eq!(state.get(4), None);
    }

    #[test]
    fn test_encoded_state_set() {
        let mut state = EncodedState::zeros(vec![4]);
        state.set(2, 5.0);
        state.set(10, 5.0);
        assert_eq!(state.tensor, vec![0.0, 0.0, 5.0, 0.0]);
    }

    #[test]
    fn test_encoded_state_is_empty() {
        assert!(EncodedState::zeros(vec![0]).is_empty());
        assert!(!EncodedState::zeros(vec![2, 6, 1]).is_empty());
    }

    #[test]
    fn test_uniform_policy_default() {
        let probs = UniformPolicy::default().predict(&EncodedState::zeros(vec![14]));
        assert_eq!(probs.len(), 6);
        assert!((probs.iter().sum::<f32>() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_uniform_policy_zero_actions() {
        assert!(UniformPolicy::new(0)
            .predict(&EncodedState::zeros(vec![14]))
            .is_empty());
    }

    #[test]
    fn test_policy_network_batch() {
        let policy = UniformPolicy::default();
        let states = vec![EncodedState::zeros(vec![14]); 3];

        let batch = policy.predict_batch(&states);
        assert_eq!(batch.len(), 3);
        assert!(batch.iter().all(|p| p.len() == 6));
    }

    #[test]
    fn test_serialization() {
        let state = EncodedState::new(vec![1.0, 2.0, 3.0], vec![3]);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: EncodedState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
