//! Depth-limited negamax with alpha-beta pruning.
//!
//! Positions are scored as the mover's mancala minus the opponent's. A free
//! turn keeps the same player on move, so that child is searched without
//! negating the score or swapping the window.

use rustc_hash::FxHashMap;

use crate::core::{Move, State};
use crate::error::{MancalaError, Result};
use crate::rules::{apply_move, is_game_over, legal_moves};

use super::MoveSelector;

/// Added to the store difference of a decided game.
const WIN_BONUS: i32 = 1_000;

const INF: i32 = i32::MAX;

#[derive(Clone, Copy, Debug)]
enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    depth: u32,
    score: i32,
    bound: Bound,
}

/// Negamax selector. Ties go to the lowest pit.
#[derive(Clone, Debug)]
pub struct MinimaxSelector {
    depth: u32,
    table: FxHashMap<State, Entry>,
    nodes: u64,
}

impl MinimaxSelector {
    pub fn new(depth: u32) -> Self {
        Self {
            depth: depth.max(1),
            table: FxHashMap::default(),
            nodes: 0,
        }
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Positions visited by the last `select_move` call.
    #[must_use]
    pub fn nodes_searched(&self) -> u64 {
        self.nodes
    }

    /// Score of `state` for its player on move, searched `depth` plies.
    pub fn evaluate(&mut self, state: &State, depth: u32) -> Result<i32> {
        self.negamax(state, depth, -INF, INF)
    }

    fn negamax(&mut self, state: &State, depth: u32, mut alpha: i32, mut beta: i32) -> Result<i32> {
        self.nodes += 1;

        if is_game_over(state) {
            return Ok(terminal_score(state));
        }
        if depth == 0 {
            return Ok(store_difference(state));
        }

        let alpha_orig = alpha;
        if let Some(entry) = self.table.get(state) {
            if entry.depth >= depth {
                match entry.bound {
                    Bound::Exact => return Ok(entry.score),
                    Bound::Lower => alpha = alpha.max(entry.score),
                    Bound::Upper => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    return Ok(entry.score);
                }
            }
        }

        let mover = state.current_player();
        let mut best = -INF;
        for mv in legal_moves(state) {
            let next = apply_move(state, mv)?;
            let score = if next.current_player() == mover {
                self.negamax(&next, depth - 1, alpha, beta)?
            } else {
                -self.negamax(&next, depth - 1, -beta, -alpha)?
            };

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        let bound = if best <= alpha_orig {
            Bound::Upper
        } else if best >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.table.insert(*state, Entry { depth, score: best, bound });
        Ok(best)
    }
}

impl Default for MinimaxSelector {
    fn default() -> Self {
        Self::new(6)
    }
}

impl MoveSelector for MinimaxSelector {
    fn select_move(&mut self, state: &State) -> Result<Move> {
        self.table.clear();
        self.nodes = 0;

        let mover = state.current_player();
        let mut best: Option<(Move, i32)> = None;
        for mv in legal_moves(state) {
            let next = apply_move(state, mv)?;
            let score = if next.current_player() == mover {
                self.evaluate(&next, self.depth - 1)?
            } else {
                -self.evaluate(&next, self.depth - 1)?
            };
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
        }

        best.map(|(mv, _)| mv)
            .ok_or(MancalaError::NoLegalMoves { state: *state })
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// Mover's mancala minus the opponent's.
fn store_difference(state: &State) -> i32 {
    let mover = state.current_player();
    i32::from(state.mancala(mover)) - i32::from(state.mancala(mover.next()))
}

/// Final score of a swept board, pushed past any in-progress evaluation.
fn terminal_score(state: &State) -> i32 {
    let diff = store_difference(state);
    diff + diff.signum() * WIN_BONUS
}
