//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Exploration constant (default: sqrt(2)).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Maximum search depth in moves (0 = unlimited). Rollouts share this limit and
    /// fall back to the store-share heuristic when they hit it.
    pub max_depth: u32,

    /// Maximum positions kept in the search table.
    pub max_nodes: usize,

    /// Random seed for rollouts and tie-breaking.
    pub seed: u64,

    /// Temperature for the final move choice (0 = most visited).
    pub temperature: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration_constant: std::f64::consts::SQRT_2,
            max_depth: 0,
            max_nodes: 100_000,
            seed: 42,
            temperature: 0.0,
        }
    }
}

impl MctsConfig {
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = nodes;
        self
    }

    pub fn with_temperature(mut self, temp: f64) -> Self {
        self.temperature = temp;
        self
    }

    /// Reject settings the search cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(ConfigError::Validation(format!(
                "exploration_constant must be finite and >= 0, got {}",
                self.exploration_constant
            )));
        }
        if self.max_nodes == 0 {
            return Err(ConfigError::Validation("max_nodes must be > 0".into()));
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(ConfigError::Validation(format!(
                "temperature must be finite and >= 0, got {}",
                self.temperature
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert!((config.exploration_constant - std::f64::consts::SQRT_2).abs() < 0.001);
        assert_eq!(config.max_depth, 0);
        assert_eq!(config.seed, 42);
        assert_eq!(config.temperature, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::default()
            .with_exploration(2.0)
            .with_seed(123)
            .with_max_depth(50)
            .with_max_nodes(500);

        assert_eq!(config.exploration_constant, 2.0);
        assert_eq!(config.seed, 123);
        assert_eq!(config.max_depth, 50);
        assert_eq!(config.max_nodes, 500);
    }

    #[test]
    fn test_validate() {
        assert!(MctsConfig::default().with_max_nodes(0).validate().is_err());
        assert!(MctsConfig::default().with_exploration(-1.0).validate().is_err());
        assert!(MctsConfig::default().with_temperature(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MctsConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_nodes, 100_000);
    }
}
