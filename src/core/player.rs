//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two players. Only valid ids can be
//! constructed, so board arithmetic on a `PlayerId` never fails.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::MancalaError;

use super::board::{PITS_PER_ROW, PLAYER_COUNT, ROW_STRIDE};

/// Player identifier: 0 moves first, 1 moves second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first (owns pits 0..=5).
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who moves second (owns pits 7..=12).
    pub const SECOND: PlayerId = PlayerId(1);

    /// Build from a row number already known to be 0 or 1.
    pub(crate) const fn from_index(index: usize) -> Self {
        Self((index % PLAYER_COUNT) as u8)
    }

    /// Raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Raw player id.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The player who moves after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Index of this player's first pit.
    #[must_use]
    pub const fn row_offset(self) -> usize {
        self.index() * ROW_STRIDE
    }

    /// Index of this player's mancala.
    #[must_use]
    pub const fn mancala_index(self) -> usize {
        self.row_offset() + PITS_PER_ROW
    }

    /// Both players, in turn order.
    ///
    /// ```
    /// use mancala_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::FIRST, PlayerId::SECOND]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT).map(Self::from_index)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = MancalaError;

    fn try_from(player: u8) -> Result<Self, Self::Error> {
        if (player as usize) < PLAYER_COUNT {
            Ok(Self(player))
        } else {
            Err(MancalaError::InvalidPlayer { player })
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use mancala_engine::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(0);
/// wins[PlayerId::SECOND] += 1;
/// assert_eq!(wins[PlayerId::FIRST], 0);
/// assert_eq!(wins[PlayerId::SECOND], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId::from_index(i), v))
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(format!("{}", PlayerId::SECOND), "Player 1");
    }

    #[test]
    fn test_player_id_try_from() {
        assert_eq!(PlayerId::try_from(0), Ok(PlayerId::FIRST));
        assert_eq!(PlayerId::try_from(1), Ok(PlayerId::SECOND));
        assert_eq!(
            PlayerId::try_from(2),
            Err(MancalaError::InvalidPlayer { player: 2 })
        );
    }

    #[test]
    fn test_next_player() {
        assert_eq!(PlayerId::SECOND.next(), PlayerId::FIRST);
        assert_eq!(PlayerId::FIRST.next(), PlayerId::SECOND);
    }

    #[test]
    fn test_row_and_mancala() {
        assert_eq!(PlayerId::FIRST.row_offset(), 0);
        assert_eq!(PlayerId::SECOND.row_offset(), 7);
        assert_eq!(PlayerId::FIRST.mancala_index(), 6);
        assert_eq!(PlayerId::SECOND.mancala_index(), 13);
    }

    #[test]
    fn test_player_id_serde_rejects_invalid() {
        let json = serde_json::to_string(&PlayerId::SECOND).unwrap();
        assert_eq!(json, "1");
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::FIRST], 0);
        assert_eq!(map[PlayerId::SECOND], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<f64> = PlayerMap::default();
        map[PlayerId::SECOND] = 0.5;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::FIRST, &0.0), (PlayerId::SECOND, &0.5)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
