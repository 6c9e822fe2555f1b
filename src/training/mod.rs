//! Training data generation.
//!
//! Games are recorded as [`Trajectory`]s of mover-perspective [`Step`]s.
//! Once the result is known each step becomes a [`TrainingSample`]: the
//! encoded board plus a six-way target that rewards the winner's moves and
//! discourages the loser's.
//!
//! ```
//! use mancala_engine::nn::RawEncoder;
//! use mancala_engine::selector::RandomSelector;
//! use mancala_engine::training::{ExperienceBuffer, SelfPlayConfig, SelfPlayWorker};
//!
//! let worker = SelfPlayWorker::new(SelfPlayConfig::default()).unwrap();
//! let mut buffer = ExperienceBuffer::new(100);
//!
//! for game in 0..4 {
//!     let mut first = RandomSelector::new(game);
//!     let mut second = RandomSelector::new(game + 100);
//!     buffer.push(worker.play_game(&mut first, &mut second, game).unwrap());
//! }
//!
//! let batch = buffer.sample_batch(&RawEncoder, 32, 7).unwrap();
//! assert_eq!(batch.len(), 32.min(buffer.total_steps()));
//! ```

pub mod self_play;
pub mod trajectory;

pub use self_play::{SelfPlayConfig, SelfPlayWorker};
pub use trajectory::{
    legal_vector, losing_vector, move_to_vector, winning_vector, ExperienceBuffer, MoveVector,
    Step, TrainingSample, Trajectory, BETTER_MOVE, LOSING_MOVE, WINNING_MOVE,
};
