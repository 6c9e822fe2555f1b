//! Game-over detection, the endgame sweep, and the final result.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, State};
use crate::error::{MancalaError, Result};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal stores. Nobody wins.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// True once either player's row is completely empty.
#[must_use]
pub fn is_game_over(state: &State) -> bool {
    PlayerId::all().any(|p| state.row_is_empty(p))
}

/// Endgame sweep.
///
/// On a finished game every bead left in a row moves into its owner's
/// mancala. A game still in progress is returned unchanged, so applying the
/// sweep twice is the same as applying it once.
#[must_use]
pub fn score_game(state: &State) -> State {
    if !is_game_over(state) {
        return *state;
    }

    let mut swept = *state;
    for player in PlayerId::all() {
        let offset = player.row_offset();
        let mut banked = 0u8;
        for i in offset..offset + crate::core::PITS_PER_ROW {
            banked += std::mem::take(swept.cell_mut(i));
        }
        *swept.cell_mut(player.mancala_index()) += banked;
    }
    swept
}

/// Outcome of a finished game, decided on the swept mancala counts.
///
/// Fails with `GameNotOver` while both rows still hold beads.
pub fn winner(state: &State) -> Result<GameResult> {
    if !is_game_over(state) {
        return Err(MancalaError::GameNotOver);
    }

    let (first, second) = score_game(state).score();
    Ok(match first.cmp(&second) {
        std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
        std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
        std::cmp::Ordering::Equal => GameResult::Draw,
    })
}

/// `Some(result)` for a finished game, `None` while play continues.
#[must_use]
pub fn game_result(state: &State) -> Option<GameResult> {
    winner(state).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(cells: [u8; 15]) -> State {
        State::from_cells(cells).unwrap()
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::SECOND);
        assert!(!result.is_winner(PlayerId::FIRST));
        assert!(result.is_winner(PlayerId::SECOND));
        assert_eq!(result.winner(), Some(PlayerId::SECOND));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::FIRST));
        assert!(!draw.is_winner(PlayerId::SECOND));
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn test_is_game_over() {
        assert!(!is_game_over(&State::new()));
        assert!(is_game_over(&state([0, 0, 0, 0, 0, 0, 9, 12, 11, 10, 9, 8, 7, 0, 1])));
        assert!(is_game_over(&state([1, 0, 0, 0, 0, 0, 9, 0, 0, 0, 0, 0, 0, 38, 0])));
    }

    #[test]
    fn test_score_game_sweeps_rows() {
        let s = state([0, 0, 0, 0, 0, 0, 9, 12, 11, 10, 9, 8, 7, 0, 1]);
        assert_eq!(
            score_game(&s).cells(),
            &[0, 0, 0, 0, 0, 0, 9, 0, 0, 0, 0, 0, 0, 57, 1]
        );
    }

    #[test]
    fn test_score_game_keeps_existing_store() {
        let s = state([0, 0, 0, 0, 0, 0, 20, 1, 0, 2, 0, 0, 0, 25, 0]);
        assert_eq!(
            score_game(&s).cells(),
            &[0, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 28, 0]
        );
    }

    #[test]
    fn test_score_game_passthrough() {
        let s = State::new();
        assert_eq!(score_game(&s), s);
    }

    #[test]
    fn test_winner() {
        let s = state([0, 0, 0, 0, 0, 0, 9, 12, 11, 10, 9, 8, 7, 0, 1]);
        assert_eq!(winner(&s), Ok(GameResult::Winner(PlayerId::SECOND)));

        let s = state([0, 0, 0, 0, 0, 0, 30, 0, 0, 0, 0, 0, 0, 18, 0]);
        assert_eq!(winner(&s), Ok(GameResult::Winner(PlayerId::FIRST)));
    }

    #[test]
    fn test_winner_tie() {
        let s = state([0, 0, 0, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 24, 0]);
        assert_eq!(winner(&s), Ok(GameResult::Draw));

        // decided after the sweep, not on the raw stores
        let s = state([0, 0, 0, 0, 0, 0, 24, 4, 0, 0, 0, 0, 0, 20, 1]);
        assert_eq!(winner(&s), Ok(GameResult::Draw));
    }

    #[test]
    fn test_winner_game_not_over() {
        assert_eq!(winner(&State::new()), Err(MancalaError::GameNotOver));
        assert_eq!(game_result(&State::new()), None);
    }
}
