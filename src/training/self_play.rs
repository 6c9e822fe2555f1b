//! Self-play loop for generating training data.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, PlayerId, State};
use crate::error::{ConfigError, Result};
use crate::mcts::MctsConfig;
use crate::rules::{apply_move, game_result};
use crate::selector::{MctsSelector, MoveSelector};

use super::trajectory::{Step, Trajectory};

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// MCTS iterations per move for [`SelfPlayWorker::play_mcts_game`].
    pub mcts_iterations: u32,

    /// Temperature for the MCTS move choice. Higher = more varied games.
    pub temperature: f64,

    pub exploration_constant: f64,

    /// Maximum moves per game (0 = no limit).
    pub max_moves: u32,

    /// Added to the game index to form each game's seed.
    pub seed_offset: u64,

    /// Start from a random position instead of the standard one.
    pub random_start: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            mcts_iterations: 400,
            temperature: 1.0,
            exploration_constant: std::f64::consts::SQRT_2,
            max_moves: 500,
            seed_offset: 0,
            random_start: false,
        }
    }
}

impl SelfPlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mcts_iterations(mut self, iterations: u32) -> Self {
        self.mcts_iterations = iterations;
        self
    }

    pub fn with_temperature(mut self, temp: f64) -> Self {
        self.temperature = temp;
        self
    }

    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    pub fn with_max_moves(mut self, max: u32) -> Self {
        self.max_moves = max;
        self
    }

    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    pub fn with_random_start(mut self, random_start: bool) -> Self {
        self.random_start = random_start;
        self
    }

    /// Seed for game number `game_index`.
    #[must_use]
    pub fn game_seed(&self, game_index: u64) -> u64 {
        self.seed_offset.wrapping_add(game_index)
    }

    /// MCTS settings for one game.
    #[must_use]
    pub fn mcts_config(&self, seed: u64) -> MctsConfig {
        MctsConfig::default()
            .with_exploration(self.exploration_constant)
            .with_temperature(self.temperature)
            .with_seed(seed)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mcts_iterations == 0 {
            return Err(ConfigError::Validation("mcts_iterations must be > 0".into()));
        }
        self.mcts_config(0).validate()
    }
}

/// Plays recorded games between selectors.
#[derive(Clone, Debug, Default)]
pub struct SelfPlayWorker {
    config: SelfPlayConfig,
}

impl SelfPlayWorker {
    pub fn new(config: SelfPlayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Starting position for game number `game_index`.
    #[must_use]
    pub fn start_state(&self, game_index: u64) -> State {
        if self.config.random_start {
            State::random(&mut GameRng::new(self.config.game_seed(game_index)))
        } else {
            State::new()
        }
    }

    /// Play one game, `first` moving for player 0, and record every move
    /// from the mover's perspective.
    pub fn play_game(
        &self,
        first: &mut dyn MoveSelector,
        second: &mut dyn MoveSelector,
        game_index: u64,
    ) -> Result<Trajectory> {
        let mut trajectory = Trajectory::new(self.config.game_seed(game_index));
        let mut state = self.start_state(game_index);
        let mut ply = 0u32;

        while game_result(&state).is_none()
            && (self.config.max_moves == 0 || ply < self.config.max_moves)
        {
            let mv = if state.current_player() == PlayerId::FIRST {
                first.select_move(&state)?
            } else {
                second.select_move(&state)?
            };
            trajectory.push(Step::from_real(&state, mv, ply)?);
            state = apply_move(&state, mv)?;
            ply += 1;
        }

        trajectory.set_result(game_result(&state));
        Ok(trajectory)
    }

    /// Play one game with MCTS on both sides, seeded from the game index.
    pub fn play_mcts_game(&self, game_index: u64) -> Result<Trajectory> {
        let seed = self.config.game_seed(game_index);
        let mut rng = GameRng::new(seed);
        let mut first = MctsSelector::new(
            self.config.mcts_config(rng.fork().seed()),
            self.config.mcts_iterations,
        );
        let mut second = MctsSelector::new(
            self.config.mcts_config(rng.fork().seed()),
            self.config.mcts_iterations,
        );
        self.play_game(&mut first, &mut second, game_index)
    }

    /// Play `count` MCTS games with consecutive indices.
    pub fn play_mcts_games(&self, count: u64) -> Result<Vec<Trajectory>> {
        (0..count).map(|i| self.play_mcts_game(i)).collect()
    }
}
