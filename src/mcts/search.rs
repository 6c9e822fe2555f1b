//! Core MCTS search algorithm.
//!
//! Kalah is a perfect-information game, so every position is expanded for
//! whoever is on move. A free turn simply leads to a position with the same
//! mover, and selection at each position maximises its own mover's reward.
//! Statistics live in a [`PositionTable`], so two move orders reaching the
//! same board share what they have learned.

use std::time::Instant;

use crate::core::{GameRng, Move, PlayerMap, State};
use crate::error::Result;
use crate::rules::apply_move;

use super::config::MctsConfig;
use super::policy::{
    result_to_rewards, store_share, RandomSimulation, SelectionPolicy, SimulationPolicy, Ucb1,
};
use super::stats::SearchStats;
use super::table::{Position, PositionTable};

/// MCTS search context.
///
/// Owns the position table between calls so it can be inspected after a
/// search. The state passed to [`search`](Self::search) is only ever copied.
pub struct MctsSearch {
    config: MctsConfig,
    table: PositionTable,
    root: State,
    rng: GameRng,
    selection: Box<dyn SelectionPolicy>,
    simulation: Box<dyn SimulationPolicy>,

    /// Priors for the root pits, indexed by position within the mover's row.
    root_priors: Option<Vec<f32>>,

    stats: SearchStats,
}

impl MctsSearch {
    pub fn new(config: MctsConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            table: PositionTable::with_capacity(config.max_nodes.min(1 << 16)),
            root: State::new(),
            config,
            selection: Box::new(Ucb1),
            simulation: Box::new(RandomSimulation),
            root_priors: None,
            stats: SearchStats::default(),
        }
    }

    /// Set a custom selection policy.
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom simulation policy.
    pub fn with_simulation<S: SimulationPolicy + 'static>(mut self, simulation: S) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Use network priors for the root pits on the next searches.
    ///
    /// `priors[i]` belongs to the `i`-th pit of the mover's row, which is
    /// the layout a [`PolicyNetwork`](crate::nn::PolicyNetwork) produces on
    /// a normalized board.
    pub fn set_root_priors(&mut self, priors: Vec<f32>) {
        self.root_priors = Some(priors);
    }

    /// Run `iterations` rounds of select, expand, simulate, backpropagate.
    ///
    /// Returns `None` on a finished game. A single legal move is returned
    /// without searching.
    pub fn search(&mut self, state: &State, iterations: u32) -> Result<Option<Move>> {
        let start = Instant::now();
        self.stats.reset();
        self.table.clear();
        self.root = *state;
        self.table.insert(state, self.root_priors.as_deref());
        self.stats.nodes_expanded += 1;

        let Some(root) = self.table.get(state) else {
            return Ok(None);
        };
        if root.outcome.is_some() {
            return Ok(None);
        }
        if root.move_count() == 1 {
            return Ok(root.most_visited().map(|slot| root.move_for(slot)));
        }

        for _ in 0..iterations {
            self.iteration()?;
            self.stats.iterations += 1;

            if self.table.len() >= self.config.max_nodes {
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(self.best_move())
    }

    fn iteration(&mut self) -> Result<()> {
        let mut state = self.root;
        let mut path: Vec<(State, usize)> = Vec::new();

        loop {
            let Some(position) = self.table.get(&state) else {
                self.backpropagate(&path, &PlayerMap::with_value(0.5));
                return Ok(());
            };

            if let Some(result) = position.outcome {
                self.backpropagate(&path, &result_to_rewards(&result));
                return Ok(());
            }

            if self.config.max_depth > 0 && path.len() as u32 >= self.config.max_depth {
                self.stats.heuristic_cutoffs += 1;
                self.backpropagate(&path, &store_share(&state));
                return Ok(());
            }

            let unexplored: Vec<usize> = position.unexplored().collect();
            if let Some(&slot) = self.rng.choose(&unexplored) {
                let next = apply_move(&state, position.move_for(slot))?;
                if let Some(pit) = self.table.get_mut(&state).and_then(|p| p.pits[slot].as_mut()) {
                    pit.next = Some(next);
                }
                path.push((state, slot));
                state = next;

                if !self.table.insert(&next, None) {
                    // reached by another move order: keep descending
                    self.stats.transpositions += 1;
                    continue;
                }
                self.stats.nodes_expanded += 1;
                self.stats.max_depth = self.stats.max_depth.max(path.len() as u16);

                let mut sim_rng = self.rng.fork();
                let rollout = self
                    .simulation
                    .simulate(&state, &mut sim_rng, self.config.max_depth)?;
                self.stats.simulations += 1;
                if rollout.cut_off {
                    self.stats.heuristic_cutoffs += 1;
                }
                self.backpropagate(&path, &rollout.rewards);
                return Ok(());
            }

            let Some(slot) = self.selection.select(position, &self.config) else {
                self.backpropagate(&path, &PlayerMap::with_value(0.5));
                return Ok(());
            };
            let next = match position.pits[slot].and_then(|pit| pit.next) {
                Some(next) => next,
                None => apply_move(&state, position.move_for(slot))?,
            };
            path.push((state, slot));
            state = next;
        }
    }

    fn backpropagate(&mut self, path: &[(State, usize)], rewards: &PlayerMap<f64>) {
        for (state, slot) in path.iter().rev() {
            let Some(position) = self.table.get_mut(state) else {
                continue;
            };
            position.visits += 1;

            let mover = position.to_move;
            if let Some(pit) = position.pits[*slot].as_mut() {
                pit.visits += 1;
                pit.reward += rewards[mover];
            }
        }
    }

    /// Most visited root move, or a visit-count sample when the
    /// temperature is positive.
    fn best_move(&mut self) -> Option<Move> {
        let root = self.table.get(&self.root)?;
        let greedy = root.most_visited().map(|slot| root.move_for(slot));

        if self.config.temperature <= 0.0 {
            return greedy;
        }

        let exponent = 1.0 / self.config.temperature;
        let slots: Vec<(usize, f32)> = root
            .legal()
            .map(|(slot, pit)| (slot, f64::from(pit.visits).powf(exponent) as f32))
            .collect();
        let weights: Vec<f32> = slots.iter().map(|&(_, w)| w).collect();
        match self.rng.choose_weighted(&weights) {
            Some(idx) => slots.get(idx).map(|&(slot, _)| root.move_for(slot)),
            None => greedy,
        }
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Statistics gathered for the last searched position.
    #[must_use]
    pub fn root(&self) -> Option<&Position> {
        self.table.get(&self.root)
    }

    /// Every position met by the last search.
    #[must_use]
    pub fn table(&self) -> &PositionTable {
        &self.table
    }

    /// (move, visit count) for each legal root move.
    pub fn action_visits(&self) -> Vec<(Move, u32)> {
        self.root()
            .map(|root| {
                root.legal()
                    .map(|(slot, pit)| (root.move_for(slot), pit.visits))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Root visit distribution, summing to 1. Uniform before any visits.
    pub fn action_probabilities(&self) -> Vec<(Move, f64)> {
        let visits = self.action_visits();
        let total: u32 = visits.iter().map(|&(_, n)| n).sum();

        if total == 0 {
            let uniform = 1.0 / visits.len().max(1) as f64;
            return visits.into_iter().map(|(mv, _)| (mv, uniform)).collect();
        }

        visits
            .into_iter()
            .map(|(mv, n)| (mv, f64::from(n) / f64::from(total)))
            .collect()
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}
