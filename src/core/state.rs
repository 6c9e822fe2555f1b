//! Game state: fifteen small integers.
//!
//! ## Layout
//!
//! - `0..=5`: player 0's pits
//! - `6`: player 0's mancala
//! - `7..=12`: player 1's pits
//! - `13`: player 1's mancala
//! - `14`: player to move (0 or 1)
//!
//! `State` is `Copy`. Every transition returns a fresh value and callers'
//! snapshots are never touched, so states can be shared freely between
//! threads or stored in search trees.
//!
//! A `State` can only be built through validated constructors, so the turn
//! field is always a valid player and the whole board fits in a single pit.
//! Sowing, capture and the sweep never move more than [`MAX_TOTAL_BEADS`]
//! beads into one cell, so none of them can overflow.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, MancalaError, Result};

use super::board::{validate_index, BOARD_SIZE, PITS_PER_ROW, ROW_STRIDE, STATE_LEN, TURN_INDEX};
use super::config::BoardConfig;
use super::player::PlayerId;
use super::rng::GameRng;

/// Most beads a board may hold: every bead must fit in one `u8` cell.
pub const MAX_TOTAL_BEADS: u8 = u8::MAX;

/// Largest handful dropped into one pit while generating a random state.
const MAX_HANDFUL: u8 = 4;

/// A complete Kalah position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 15]", into = "[u8; 15]")]
pub struct State {
    cells: [u8; STATE_LEN],
}

impl State {
    /// Standard starting position: four beads per pit, empty stores,
    /// player 0 to move.
    ///
    /// ```
    /// use mancala_engine::core::State;
    ///
    /// assert_eq!(
    ///     State::new().cells(),
    ///     &[4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0, 0]
    /// );
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::starting(BoardConfig::default().beads_per_pit)
    }

    /// Starting position for a configured bead count.
    pub fn with_config(config: &BoardConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::starting(config.beads_per_pit))
    }

    fn starting(beads_per_pit: u8) -> Self {
        let mut cells = [beads_per_pit; STATE_LEN];
        for player in PlayerId::all() {
            cells[player.mancala_index()] = 0;
        }
        cells[TURN_INDEX] = PlayerId::FIRST.raw();
        Self { cells }
    }

    /// A random position with the standard 48 beads spread over the twelve
    /// pits, both stores empty and a random player to move.
    ///
    /// Not guaranteed to be reachable by legal play.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Self {
        Self::scatter(BoardConfig::default().total_beads(), rng)
    }

    /// A random position holding the configured total bead count.
    pub fn random_with_config(
        config: &BoardConfig,
        rng: &mut GameRng,
    ) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::scatter(config.total_beads(), rng))
    }

    fn scatter(total: u32, rng: &mut GameRng) -> Self {
        let mut cells = [0u8; STATE_LEN];
        let pits: Vec<usize> = (0..BOARD_SIZE)
            .filter(|i| i % ROW_STRIDE != PITS_PER_ROW)
            .collect();

        let mut remaining = total;
        let mut next_pit = pits.iter().cycle();
        while remaining > 0 {
            let handful = u32::from(rng.gen_inclusive_u8(0..=MAX_HANDFUL)).min(remaining);
            if let Some(&pit) = next_pit.next() {
                cells[pit] += handful as u8;
            }
            remaining -= handful;
        }

        let turn = if rng.gen_bool() {
            PlayerId::SECOND
        } else {
            PlayerId::FIRST
        };
        cells[TURN_INDEX] = turn.raw();
        Self { cells }
    }

    /// Build a state from raw cells.
    ///
    /// Rejects an invalid turn field with `InvalidPlayer` and a board holding
    /// more than [`MAX_TOTAL_BEADS`] beads with `TooManyBeads`.
    pub fn from_cells(cells: [u8; STATE_LEN]) -> Result<Self> {
        PlayerId::try_from(cells[TURN_INDEX])?;
        let state = Self { cells };
        let total = state.total_beads();
        if total > u32::from(MAX_TOTAL_BEADS) {
            return Err(MancalaError::TooManyBeads {
                total,
                max: MAX_TOTAL_BEADS,
            });
        }
        Ok(state)
    }

    /// Raw cells, including the turn field.
    #[must_use]
    pub fn cells(&self) -> &[u8; STATE_LEN] {
        &self.cells
    }

    /// The fourteen board positions, without the turn field.
    #[must_use]
    pub fn board(&self) -> &[u8] {
        &self.cells[..BOARD_SIZE]
    }

    /// A player's six pits in board order.
    #[must_use]
    pub fn row(&self, player: PlayerId) -> &[u8] {
        let offset = player.row_offset();
        &self.cells[offset..offset + PITS_PER_ROW]
    }

    /// Bead count at any board position.
    pub fn bowl_count(&self, index: usize) -> Result<u8> {
        Ok(self.cells[validate_index(index)?])
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::from_index(usize::from(self.cells[TURN_INDEX]))
    }

    /// Beads in a player's mancala.
    #[must_use]
    pub fn mancala(&self, player: PlayerId) -> u8 {
        self.cells[player.mancala_index()]
    }

    /// Both mancala counts, player 0 first.
    #[must_use]
    pub fn score(&self) -> (u8, u8) {
        (self.mancala(PlayerId::FIRST), self.mancala(PlayerId::SECOND))
    }

    /// Beads on the whole board, stores included.
    #[must_use]
    pub fn total_beads(&self) -> u32 {
        self.board().iter().map(|&b| u32::from(b)).sum()
    }

    /// True if the player has no beads left in their row.
    #[must_use]
    pub fn row_is_empty(&self, player: PlayerId) -> bool {
        self.row(player).iter().all(|&b| b == 0)
    }

    // === Working-copy mutation (crate only) ===

    pub(crate) fn cell_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.cells[index]
    }

    pub(crate) fn set_current_player(&mut self, player: PlayerId) {
        self.cells[TURN_INDEX] = player.raw();
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<[u8; STATE_LEN]> for State {
    type Error = MancalaError;

    fn try_from(cells: [u8; STATE_LEN]) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<State> for [u8; STATE_LEN] {
    fn from(state: State) -> Self {
        state.cells
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> State {
        State::from_cells([1, 2, 3, 4, 5, 6, 0, 12, 11, 10, 9, 8, 7, 0, 1]).unwrap()
    }

    #[test]
    fn test_new_state() {
        let state = State::new();
        assert_eq!(state.cells(), &[4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0, 0]);
        assert_eq!(state.current_player(), PlayerId::FIRST);
        assert_eq!(state.total_beads(), 48);
    }

    #[test]
    fn test_with_config() {
        let config = BoardConfig::default().with_beads_per_pit(3);
        let state = State::with_config(&config).unwrap();
        assert_eq!(state.row(PlayerId::SECOND), &[3, 3, 3, 3, 3, 3]);
        assert_eq!(state.total_beads(), 36);

        let bad = BoardConfig::default().with_beads_per_pit(0);
        assert!(State::with_config(&bad).is_err());
    }

    #[test]
    fn test_from_cells_rejects_bad_turn() {
        let result = State::from_cells([1, 2, 3, 4, 5, 6, 0, 12, 11, 10, 9, 8, 7, 0, 2]);
        assert_eq!(result, Err(MancalaError::InvalidPlayer { player: 2 }));
    }

    #[test]
    fn test_from_cells_rejects_overfull_board() {
        assert_eq!(
            State::from_cells([0, 0, 0, 0, 0, 1, 255, 4, 4, 4, 4, 4, 4, 0, 0]),
            Err(MancalaError::TooManyBeads { total: 280, max: 255 })
        );
        assert_eq!(
            State::from_cells([0, 0, 0, 0, 0, 0, 0, 100, 100, 100, 0, 0, 0, 0, 0]),
            Err(MancalaError::TooManyBeads { total: 300, max: 255 })
        );

        let full = State::from_cells([0, 0, 0, 0, 0, 1, 250, 1, 1, 1, 0, 0, 0, 1, 0]).unwrap();
        assert_eq!(full.total_beads(), 255);
    }

    #[test]
    fn test_row() {
        let state = sample();
        assert_eq!(state.row(PlayerId::FIRST), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(state.row(PlayerId::SECOND), &[12, 11, 10, 9, 8, 7]);
    }

    #[test]
    fn test_bowl_count() {
        let state = sample();
        assert_eq!(state.bowl_count(7), Ok(12));
        assert_eq!(
            state.bowl_count(14),
            Err(MancalaError::IndexOutOfRange { index: 14 })
        );
    }

    #[test]
    fn test_current_player() {
        assert_eq!(sample().current_player(), PlayerId::SECOND);
    }

    #[test]
    fn test_score() {
        let state = State::from_cells([0, 0, 0, 0, 0, 0, 5, 0, 0, 0, 0, 0, 0, 43, 1]).unwrap();
        assert_eq!(state.score(), (5, 43));
    }

    #[test]
    fn test_random_state() {
        let mut rng = GameRng::new(42);
        for _ in 0..50 {
            let state = State::random(&mut rng);
            assert_eq!(state.total_beads(), 48);
            assert_eq!(state.score(), (0, 0));
        }
    }

    #[test]
    fn test_random_state_is_seeded() {
        let a = State::random(&mut GameRng::new(9));
        let b = State::random(&mut GameRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            State::new().to_string(),
            "[4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0, 0]"
        );
    }

    #[test]
    fn test_serde_validates_turn() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, "[1,2,3,4,5,6,0,12,11,10,9,8,7,0,1]");
        let back: State = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());

        assert!(serde_json::from_str::<State>("[1,2,3,4,5,6,0,12,11,10,9,8,7,0,5]").is_err());
    }

    #[test]
    fn test_serde_rejects_overfull_board() {
        assert!(serde_json::from_str::<State>("[0,0,0,0,0,0,0,100,100,100,0,0,0,0,0]").is_err());
        assert_eq!(
            State::try_from([0, 0, 0, 0, 0, 0, 0, 100, 100, 100, 0, 0, 0, 0, 0]),
            Err(MancalaError::TooManyBeads { total: 300, max: 255 })
        );
    }
}
