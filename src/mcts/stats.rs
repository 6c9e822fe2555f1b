//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected during one [`MctsSearch::search`](super::MctsSearch::search) call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    pub iterations: u32,

    /// Positions added to the table, the root included.
    pub nodes_expanded: u32,

    /// Expansions that reached a position already in the table.
    pub transpositions: u32,

    /// Rollouts played to the end or to the depth limit.
    pub simulations: u32,

    /// Rollouts cut off by `max_depth` and scored by the heuristic.
    pub heuristic_cutoffs: u32,

    pub max_depth: u16,

    /// Wall time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        per_second(self.iterations, self.time_us)
    }

    #[must_use]
    pub fn simulations_per_second(&self) -> f64 {
        per_second(self.simulations, self.time_us)
    }

    /// Expanded nodes per iteration.
    #[must_use]
    pub fn avg_nodes_per_iteration(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            f64::from(self.nodes_expanded) / f64::from(self.iterations)
        }
    }
}

fn per_second(count: u32, time_us: u64) -> f64 {
    if time_us == 0 {
        0.0
    } else {
        f64::from(count) / (time_us as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_rates() {
        let mut stats = SearchStats::new();
        assert_eq!(stats.iterations_per_second(), 0.0);

        stats.iterations = 1000;
        stats.simulations = 500;
        stats.nodes_expanded = 250;
        stats.time_us = 2_000_000;

        assert_eq!(stats.iterations_per_second(), 500.0);
        assert_eq!(stats.simulations_per_second(), 250.0);
        assert_eq!(stats.avg_nodes_per_iteration(), 0.25);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.iterations = 100;
        stats.heuristic_cutoffs = 4;
        stats.reset();
        assert_eq!(stats, SearchStats::default());
    }
}
