//! Move representation.
//!
//! A move names the board index of the pit to sow from. The raw index is
//! public so out-of-range values can reach the rules engine, which rejects
//! them with `IndexOutOfRange`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A pit to sow from, as a board index in `0..=13`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move(pub u8);

impl Move {
    /// Create a move from a board index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Board index of the source pit.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A move as it was played, for game history and replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The move played, in real board indexing.
    pub mv: Move,

    /// Ply number, counting every move including free turns (0-based).
    pub ply: u32,

    /// Whether the mover kept the turn by landing in their own mancala.
    pub free_turn: bool,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, ply: u32, free_turn: bool) -> Self {
        Self {
            player,
            mv,
            ply,
            free_turn,
        }
    }
}
