//! State encoding for network input.
//!
//! Every encoder first normalizes the board with
//! [`flip_board_if_needed`], so the network always sees the mover's pits at
//! indices 0..=5 and the mover's mancala at 6.

use crate::core::{State, BOARD_SIZE, PITS_PER_ROW, PLAYER_COUNT, ROW_STRIDE};
use crate::rules::flip_board_if_needed;

use super::traits::EncodedState;

/// Largest bead count with its own one-hot slot; larger counts share it.
pub const ONE_HOT_MAX_BEADS: usize = 47;

/// Turns a [`State`] into a tensor for network input.
pub trait StateEncoder: Send + Sync {
    /// Encode from the perspective of the player to move.
    fn encode(&self, state: &State) -> EncodedState;

    /// Shape of every encoded state.
    fn output_shape(&self) -> Vec<usize>;

    /// Length of the policy output: one entry per pit of a row.
    fn action_space_size(&self) -> usize {
        PITS_PER_ROW
    }
}

/// The fourteen normalized bead counts, as floats.
///
/// Matches the plain input layer of the reference networks.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawEncoder;

impl StateEncoder for RawEncoder {
    fn encode(&self, state: &State) -> EncodedState {
        let normalized = flip_board_if_needed(state);
        let tensor = normalized.board().iter().map(|&b| f32::from(b)).collect();
        EncodedState::new(tensor, self.output_shape())
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![BOARD_SIZE]
    }
}

/// One 48-wide one-hot vector per board position (`[14, 48]`).
#[derive(Clone, Copy, Debug, Default)]
pub struct OneHotEncoder;

impl StateEncoder for OneHotEncoder {
    fn encode(&self, state: &State) -> EncodedState {
        let width = ONE_HOT_MAX_BEADS + 1;
        let normalized = flip_board_if_needed(state);
        let mut encoded = EncodedState::zeros(self.output_shape());
        for (i, &beads) in normalized.board().iter().enumerate() {
            let slot = usize::from(beads).min(ONE_HOT_MAX_BEADS);
            encoded.set(i * width + slot, 1.0);
        }
        encoded
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![BOARD_SIZE, ONE_HOT_MAX_BEADS + 1]
    }
}

/// The two rows as a `[2, 6, 1]` grid, mover first, stores dropped.
///
/// The opponent's row is kept in board order, so column `j` of row 1 is
/// not the pit opposite column `j` of row 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct RowEncoder;

impl StateEncoder for RowEncoder {
    fn encode(&self, state: &State) -> EncodedState {
        let normalized = flip_board_if_needed(state);
        let tensor = (0..PLAYER_COUNT)
            .flat_map(|row| {
                let offset = row * ROW_STRIDE;
                normalized.board()[offset..offset + PITS_PER_ROW].iter()
            })
            .map(|&b| f32::from(b))
            .collect();
        EncodedState::new(tensor, self.output_shape())
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![PLAYER_COUNT, PITS_PER_ROW, 1]
    }
}
