//! MCTS policies for selection and simulation.
//!
//! - `SelectionPolicy`: which edge to descend (UCB1, PUCT)
//! - `SimulationPolicy`: how to finish a game from a leaf

use crate::core::{GameRng, PlayerId, PlayerMap, State};
use crate::error::Result;
use crate::rules::{apply_move, game_result, legal_moves, GameResult};

use super::config::MctsConfig;
use super::table::Position;

// =============================================================================
// Selection Policy
// =============================================================================

/// Picks which pit to follow out of a fully explored position.
pub trait SelectionPolicy: Send + Sync {
    /// Row slot to descend, scored for the position's mover. `None` only
    /// when the position has no legal moves.
    fn select(&self, position: &Position, config: &MctsConfig) -> Option<usize>;
}

/// UCB1: `Q(a) + c * sqrt(ln(N) / n(a))`. Unvisited pits go first.
#[derive(Clone, Debug, Default)]
pub struct Ucb1;

impl SelectionPolicy for Ucb1 {
    fn select(&self, position: &Position, config: &MctsConfig) -> Option<usize> {
        let ln_parent = f64::from(position.visits.max(1)).ln();

        argmax(position.legal().map(|(slot, pit)| {
            let exploration = if pit.visits == 0 {
                f64::INFINITY
            } else {
                config.exploration_constant * (ln_parent / f64::from(pit.visits)).sqrt()
            };
            (slot, pit.mean_reward() + exploration)
        }))
    }
}

/// PUCT: `Q(a) + c * P(a) * sqrt(N) / (1 + n(a))`, using pit priors.
#[derive(Clone, Debug, Default)]
pub struct Puct;

impl SelectionPolicy for Puct {
    fn select(&self, position: &Position, config: &MctsConfig) -> Option<usize> {
        let sqrt_parent = f64::from(position.visits.max(1)).sqrt();

        argmax(position.legal().map(|(slot, pit)| {
            let u = config.exploration_constant * f64::from(pit.prior) * sqrt_parent
                / (1.0 + f64::from(pit.visits));
            (slot, pit.mean_reward() + u)
        }))
    }
}

/// Leftmost slot with the largest score.
fn argmax(scores: impl Iterator<Item = (usize, f64)>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (slot, score) in scores {
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((slot, score));
        }
    }
    best.map(|(slot, _)| slot)
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for finishing a game from a leaf.
pub trait SimulationPolicy: Send + Sync {
    /// Rewards per player in `[0, 1]`. The caller's state is not touched.
    ///
    /// `max_depth` of 0 plays to the end; otherwise the position reached
    /// after that many moves is scored by [`store_share`].
    fn simulate(&self, state: &State, rng: &mut GameRng, max_depth: u32) -> Result<Rollout>;
}

/// Outcome of a single rollout.
#[derive(Clone, Debug, PartialEq)]
pub struct Rollout {
    pub rewards: PlayerMap<f64>,

    /// The rollout stopped at the depth limit instead of a finished game.
    pub cut_off: bool,
}

/// Uniformly random moves until the game ends or the depth limit.
#[derive(Clone, Debug, Default)]
pub struct RandomSimulation;

impl SimulationPolicy for RandomSimulation {
    fn simulate(&self, state: &State, rng: &mut GameRng, max_depth: u32) -> Result<Rollout> {
        let mut state = *state;
        let mut depth = 0;

        loop {
            if let Some(result) = game_result(&state) {
                return Ok(Rollout {
                    rewards: result_to_rewards(&result),
                    cut_off: false,
                });
            }

            if max_depth > 0 && depth >= max_depth {
                return Ok(Rollout {
                    rewards: store_share(&state),
                    cut_off: true,
                });
            }

            let moves = legal_moves(&state);
            let Some(&mv) = rng.choose(&moves) else {
                // unreachable for engine-produced states: an empty row ends the game
                return Ok(Rollout {
                    rewards: PlayerMap::with_value(0.5),
                    cut_off: false,
                });
            };
            state = apply_move(&state, mv)?;
            depth += 1;
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Win 1, loss 0, draw 0.5.
pub fn result_to_rewards(result: &GameResult) -> PlayerMap<f64> {
    PlayerMap::new(|player| match result {
        GameResult::Winner(winner) if *winner == player => 1.0,
        GameResult::Winner(_) => 0.0,
        GameResult::Draw => 0.5,
    })
}

/// Each player's share of the beads already banked in the two mancalas.
///
/// Even split while both mancalas are empty.
pub fn store_share(state: &State) -> PlayerMap<f64> {
    let (first, second) = state.score();
    let total = f64::from(first) + f64::from(second);
    if total == 0.0 {
        return PlayerMap::with_value(0.5);
    }
    PlayerMap::new(|player| f64::from(state.mancala(player)) / total)
}
