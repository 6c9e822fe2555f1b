//! Search statistics keyed by position.
//!
//! Different move orders often reach the same Kalah position, so the search
//! stores one [`Position`] per [`State`] instead of a tree of nodes. Beads
//! only ever move forward along a row or into a mancala, so no sequence of
//! moves returns to an earlier state and the graph stays acyclic.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Move, PlayerId, State, PITS_PER_ROW};
use crate::rules::{game_result, legal_moves, GameResult};

/// Statistics for sowing one pit of the mover's row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PitStats {
    pub visits: u32,

    /// Reward summed for the player who sows this pit.
    pub reward: f64,

    pub prior: f32,

    /// Position reached by sowing, once it has been looked at.
    pub next: Option<State>,
}

impl PitStats {
    #[must_use]
    pub fn new(prior: f32) -> Self {
        Self {
            visits: 0,
            reward: 0.0,
            prior,
            next: None,
        }
    }

    /// Mean reward for the mover, 0 before the first visit.
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.reward / f64::from(self.visits)
        }
    }
}

/// Everything the search knows about one position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub to_move: PlayerId,

    /// Times a simulation passed through this position.
    pub visits: u32,

    /// Set once the game is over here.
    pub outcome: Option<GameResult>,

    /// Indexed by row slot; `None` for an empty pit.
    pub pits: [Option<PitStats>; PITS_PER_ROW],
}

impl Position {
    /// A fresh entry for `state`, one slot per legal move.
    ///
    /// `priors[i]` belongs to slot `i`; missing priors are uniform.
    #[must_use]
    pub fn new(state: &State, priors: Option<&[f32]>) -> Self {
        let mut pits = [None; PITS_PER_ROW];
        let outcome = game_result(state);

        if outcome.is_none() {
            let moves = legal_moves(state);
            let offset = state.current_player().row_offset();
            let uniform = 1.0 / moves.len() as f32;
            for mv in moves {
                let slot = mv.index() - offset;
                let prior = priors.and_then(|p| p.get(slot).copied()).unwrap_or(uniform);
                pits[slot] = Some(PitStats::new(prior));
            }
        }

        Self {
            to_move: state.current_player(),
            visits: 0,
            outcome,
            pits,
        }
    }

    /// Real move for a row slot.
    #[must_use]
    pub fn move_for(&self, slot: usize) -> Move {
        Move((self.to_move.row_offset() + slot) as u8)
    }

    /// (slot, stats) for every legal pit, left to right.
    pub fn legal(&self) -> impl Iterator<Item = (usize, &PitStats)> + '_ {
        self.pits
            .iter()
            .enumerate()
            .filter_map(|(slot, pit)| pit.as_ref().map(|p| (slot, p)))
    }

    pub fn move_count(&self) -> usize {
        self.legal().count()
    }

    /// Legal slots whose resulting position has not been looked at yet.
    pub fn unexplored(&self) -> impl Iterator<Item = usize> + '_ {
        self.legal()
            .filter(|(_, pit)| pit.next.is_none())
            .map(|(slot, _)| slot)
    }

    /// Most visited slot. Ties go to the lowest pit.
    #[must_use]
    pub fn most_visited(&self) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (slot, pit) in self.legal() {
            if best.map_or(true, |(_, visits)| pit.visits > visits) {
                best = Some((slot, pit.visits));
            }
        }
        best.map(|(slot, _)| slot)
    }
}

/// All positions met during one search.
#[derive(Clone, Debug, Default)]
pub struct PositionTable {
    positions: FxHashMap<State, Position>,
}

impl PositionTable {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    #[must_use]
    pub fn get(&self, state: &State) -> Option<&Position> {
        self.positions.get(state)
    }

    pub fn get_mut(&mut self, state: &State) -> Option<&mut Position> {
        self.positions.get_mut(state)
    }

    #[must_use]
    pub fn contains(&self, state: &State) -> bool {
        self.positions.contains_key(state)
    }

    /// Insert an entry for `state` unless one exists. Returns true if added.
    pub fn insert(&mut self, state: &State, priors: Option<&[f32]>) -> bool {
        if self.contains(state) {
            return false;
        }
        self.positions.insert(*state, Position::new(state, priors));
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Finished positions in the table.
    #[must_use]
    pub fn terminal_count(&self) -> usize {
        self.positions
            .values()
            .filter(|p| p.outcome.is_some())
            .count()
    }
}
