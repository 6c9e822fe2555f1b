//! Recorded games and the move-score targets derived from them.
//!
//! Every step is stored from the mover's perspective: the board is flipped so
//! the mover owns pits 0..=5 and the move is the matching row position. A
//! step is turned into a target by marking its move as good (the mover went
//! on to win) or bad (the mover did not), with illegal pits pinned low.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Move, PlayerId, State, PITS_PER_ROW};
use crate::error::{MancalaError, Result, TrainingError};
use crate::nn::{EncodedState, StateEncoder};
use crate::rules::{flip_board_if_needed, flip_move, is_legal_move, GameResult};

/// Target score of the move a winner played.
pub const WINNING_MOVE: f32 = 1.0;

/// Target score of the alternatives to a loser's move.
pub const BETTER_MOVE: f32 = 0.5;

/// Target score of a loser's move and of illegal pits.
pub const LOSING_MOVE: f32 = 0.0;

/// Move scores over the six pits of the mover's row.
pub type MoveVector = [f32; PITS_PER_ROW];

fn row_position(position: usize) -> Result<usize> {
    if position < PITS_PER_ROW {
        Ok(position)
    } else {
        Err(MancalaError::IndexOutOfRange { index: position })
    }
}

/// `position` scored [`WINNING_MOVE`], every other pit [`LOSING_MOVE`].
///
/// ```
/// use mancala_engine::training::{winning_vector, LOSING_MOVE, WINNING_MOVE};
///
/// let v = winning_vector(3).unwrap();
/// assert_eq!(v, [LOSING_MOVE, LOSING_MOVE, LOSING_MOVE, WINNING_MOVE, LOSING_MOVE, LOSING_MOVE]);
/// ```
pub fn winning_vector(position: usize) -> Result<MoveVector> {
    let mut vector = [LOSING_MOVE; PITS_PER_ROW];
    vector[row_position(position)?] = WINNING_MOVE;
    Ok(vector)
}

/// `position` scored [`LOSING_MOVE`], every other pit [`BETTER_MOVE`].
pub fn losing_vector(position: usize) -> Result<MoveVector> {
    let mut vector = [BETTER_MOVE; PITS_PER_ROW];
    vector[row_position(position)?] = LOSING_MOVE;
    Ok(vector)
}

/// Keep `vector` on legal pits and pin illegal ones to [`LOSING_MOVE`].
///
/// Legality is judged on the board as seen by the player on move.
pub fn legal_vector(state: &State, vector: &MoveVector) -> MoveVector {
    let normalized = flip_board_if_needed(state);
    let mut out = [LOSING_MOVE; PITS_PER_ROW];
    for (position, slot) in out.iter_mut().enumerate() {
        if matches!(is_legal_move(&normalized, Move(position as u8)), Ok(true)) {
            *slot = vector[position];
        }
    }
    out
}

/// Target vector for playing row position `position` from `state`.
///
/// ```
/// use mancala_engine::core::State;
/// use mancala_engine::training::{move_to_vector, BETTER_MOVE, LOSING_MOVE};
///
/// let state = State::from_cells([1, 2, 0, 4, 5, 6, 0, 1, 1, 1, 1, 1, 1, 0, 0]).unwrap();
/// let v = move_to_vector(&state, 3, false).unwrap();
/// assert_eq!(v, [BETTER_MOVE, BETTER_MOVE, LOSING_MOVE, LOSING_MOVE, BETTER_MOVE, BETTER_MOVE]);
/// ```
pub fn move_to_vector(state: &State, position: usize, is_winner: bool) -> Result<MoveVector> {
    let vector = if is_winner {
        winning_vector(position)?
    } else {
        losing_vector(position)?
    };
    Ok(legal_vector(state, &vector))
}

/// One decision, stored from the mover's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Board flipped so the mover owns pits 0..=5.
    pub board: State,

    /// Row position played on `board`.
    pub mv: Move,

    /// Who actually moved.
    pub player: PlayerId,

    /// Ply number, free turns included.
    pub move_number: u32,
}

impl Step {
    /// Record `mv` (real board indexing) played from `state`.
    pub fn from_real(state: &State, mv: Move, move_number: u32) -> Result<Self> {
        let player = state.current_player();
        // flipping by half a board is its own inverse
        let normalized = flip_move(Some(mv), player.raw())?
            .ok_or(MancalaError::IndexOutOfRange { index: mv.index() })?;
        Ok(Self {
            board: flip_board_if_needed(state),
            mv: normalized,
            player,
            move_number,
        })
    }

    /// Target vector given whether this mover won.
    pub fn target(&self, is_winner: bool) -> Result<MoveVector> {
        move_to_vector(&self.board, self.mv.index(), is_winner)
    }
}

/// A recorded game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub steps: Vec<Step>,

    /// `None` while the game is running or when it hit the move limit.
    pub result: Option<GameResult>,

    /// Seed the game was played with.
    pub seed: u64,
}

impl Trajectory {
    pub fn new(seed: u64) -> Self {
        Self {
            steps: Vec::new(),
            result: None,
            seed,
        }
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn set_result(&mut self, result: Option<GameResult>) {
        self.result = result;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn player_steps(&self, player: PlayerId) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(move |s| s.player == player)
    }

    /// Training samples for a finished game. Draws count as not winning;
    /// an unfinished game yields nothing.
    pub fn to_training_samples(&self, encoder: &dyn StateEncoder) -> Result<Vec<TrainingSample>> {
        let Some(result) = self.result else {
            return Ok(Vec::new());
        };

        self.steps
            .iter()
            .map(|step| -> Result<TrainingSample> {
                Ok(TrainingSample {
                    input: encoder.encode(&step.board),
                    target: step.target(result.is_winner(step.player))?,
                    player: step.player,
                })
            })
            .collect()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, TrainingError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TrainingError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Network input plus the move scores it should learn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub input: EncodedState,
    pub target: MoveVector,
    pub player: PlayerId,
}

/// FIFO store of trajectories. When full, the oldest is dropped.
#[derive(Clone, Debug)]
pub struct ExperienceBuffer {
    trajectories: VecDeque<Trajectory>,
    max_trajectories: usize,
}

impl ExperienceBuffer {
    pub fn new(max_trajectories: usize) -> Self {
        Self {
            trajectories: VecDeque::with_capacity(max_trajectories),
            max_trajectories,
        }
    }

    pub fn push(&mut self, trajectory: Trajectory) {
        if self.max_trajectories == 0 {
            return;
        }
        if self.trajectories.len() >= self.max_trajectories {
            self.trajectories.pop_front();
        }
        self.trajectories.push_back(trajectory);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_trajectories
    }

    pub fn clear(&mut self) {
        self.trajectories.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trajectory> {
        self.trajectories.iter()
    }

    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.trajectories.iter().map(Trajectory::len).sum()
    }

    pub fn to_training_samples(&self, encoder: &dyn StateEncoder) -> Result<Vec<TrainingSample>> {
        let mut samples = Vec::new();
        for trajectory in &self.trajectories {
            samples.extend(trajectory.to_training_samples(encoder)?);
        }
        Ok(samples)
    }

    /// Up to `batch_size` distinct samples, drawn reproducibly from `seed`.
    pub fn sample_batch(
        &self,
        encoder: &dyn StateEncoder,
        batch_size: usize,
        seed: u64,
    ) -> Result<Vec<TrainingSample>> {
        let mut samples = self.to_training_samples(encoder)?;
        let n = samples.len();
        let limit = batch_size.min(n);
        let mut rng = GameRng::new(seed);

        // partial Fisher-Yates
        for i in 0..limit {
            let j = i + rng.gen_range_usize(0..n - i);
            samples.swap(i, j);
        }
        samples.truncate(limit);
        Ok(samples)
    }
}

impl Default for ExperienceBuffer {
    fn default() -> Self {
        Self::new(10_000)
    }
}
