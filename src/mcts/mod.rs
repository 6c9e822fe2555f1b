//! Monte Carlo Tree Search over Kalah positions.
//!
//! ## Overview
//!
//! Statistics are kept per [`State`](crate::core::State) in a
//! [`PositionTable`], so transpositions share visits. A free turn leads to a
//! position with the same mover. Selection (UCB1, PUCT) and simulation are
//! pluggable.
//!
//! ## Usage
//!
//! ```rust
//! use mancala_engine::core::State;
//! use mancala_engine::mcts::{MctsConfig, MctsSearch};
//!
//! let state = State::new();
//! let mut search = MctsSearch::new(MctsConfig::default().with_seed(7));
//!
//! let best = search.search(&state, 200).unwrap();
//! assert!(best.is_some());
//!
//! let probs = search.action_probabilities();
//! let total: f64 = probs.iter().map(|(_, p)| p).sum();
//! assert!((total - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Custom Policies
//!
//! ```rust
//! use mancala_engine::mcts::{MctsConfig, MctsSearch, Puct};
//!
//! let search = MctsSearch::new(MctsConfig::default()).with_selection(Puct);
//! ```

pub mod config;
pub mod policy;
pub mod search;
pub mod stats;
pub mod table;

pub use config::MctsConfig;
pub use policy::{
    result_to_rewards, store_share, Puct, RandomSimulation, Rollout, SelectionPolicy,
    SimulationPolicy, Ucb1,
};
pub use search::MctsSearch;
pub use stats::SearchStats;
pub use table::{PitStats, Position, PositionTable};
