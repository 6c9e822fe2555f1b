//! Network integration: input encodings and the policy interface.
//!
//! - **Traits**: [`PolicyNetwork`]
//! - **Encoding**: [`StateEncoder`] with raw, one-hot and row-grid layouts
//! - **Baseline**: [`UniformPolicy`] for testing
//!
//! ## Usage
//!
//! ```rust
//! use mancala_engine::core::State;
//! use mancala_engine::nn::{PolicyNetwork, RawEncoder, StateEncoder, UniformPolicy};
//!
//! let encoded = RawEncoder.encode(&State::new());
//! let scores = UniformPolicy::default().predict(&encoded);
//! assert_eq!(scores.len(), RawEncoder.action_space_size());
//! ```

pub mod encoder;
pub mod traits;

pub use encoder::{OneHotEncoder, RawEncoder, RowEncoder, StateEncoder, ONE_HOT_MAX_BEADS};
pub use traits::{EncodedState, PolicyNetwork, UniformPolicy};
