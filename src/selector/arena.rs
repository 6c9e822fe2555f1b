//! Driving games between selectors.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{MoveRecord, PlayerId, State};
use crate::error::Result;
use crate::rules::{apply_move_detailed, game_result, GameResult};

use super::MoveSelector;

/// A finished (or abandoned) game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub initial: State,
    pub final_state: State,

    /// Every move in order, free turns included.
    pub moves: Vector<MoveRecord>,

    /// `None` when the move limit was hit first.
    pub result: Option<GameResult>,
}

impl GameRecord {
    /// Replay the recorded moves from the initial state.
    pub fn replay(&self) -> Result<State> {
        self.moves.iter().try_fold(self.initial, |state, record| {
            Ok(apply_move_detailed(&state, record.mv)?.state)
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Play from `state` until the game ends or `max_moves` moves were made
/// (0 = no limit).
///
/// `first` chooses for player 0 and `second` for player 1. A selector
/// returning an illegal move aborts the game with that error.
pub fn play_game(
    first: &mut dyn MoveSelector,
    second: &mut dyn MoveSelector,
    state: State,
    max_moves: u32,
) -> Result<GameRecord> {
    let mut current = state;
    let mut moves = Vector::new();
    let mut ply = 0u32;

    while game_result(&current).is_none() && (max_moves == 0 || ply < max_moves) {
        let player = current.current_player();
        let mv = if player == PlayerId::FIRST {
            first.select_move(&current)?
        } else {
            second.select_move(&current)?
        };
        let outcome = apply_move_detailed(&current, mv)?;

        moves.push_back(MoveRecord::new(player, mv, ply, outcome.free_turn));
        current = outcome.state;
        ply += 1;
    }

    Ok(GameRecord {
        initial: state,
        final_state: current,
        moves,
        result: game_result(&current),
    })
}

/// Tally of a match between two selectors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub first_name: String,
    pub second_name: String,
    pub first_wins: u32,
    pub second_wins: u32,
    pub draws: u32,

    /// Games stopped by the move limit.
    pub unfinished: u32,

    pub total_moves: u64,
}

impl MatchSummary {
    #[must_use]
    pub fn games(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws + self.unfinished
    }

    /// Points for the first selector (draw = half), over finished games.
    #[must_use]
    pub fn first_score(&self) -> f64 {
        let finished = self.first_wins + self.second_wins + self.draws;
        if finished == 0 {
            return 0.5;
        }
        (f64::from(self.first_wins) + 0.5 * f64::from(self.draws)) / f64::from(finished)
    }
}

/// Play `games` games from the standard start, swapping seats every game so
/// each selector moves first half the time.
pub fn play_match(
    first: &mut dyn MoveSelector,
    second: &mut dyn MoveSelector,
    games: u32,
    max_moves: u32,
) -> Result<MatchSummary> {
    let mut summary = MatchSummary {
        first_name: first.name().to_string(),
        second_name: second.name().to_string(),
        ..MatchSummary::default()
    };

    for game in 0..games {
        let swapped = game % 2 == 1;
        let record = if swapped {
            play_game(second, first, State::new(), max_moves)?
        } else {
            play_game(first, second, State::new(), max_moves)?
        };
        summary.total_moves += record.len() as u64;

        let first_seat = if swapped { PlayerId::SECOND } else { PlayerId::FIRST };
        match record.result {
            None => summary.unfinished += 1,
            Some(GameResult::Draw) => summary.draws += 1,
            Some(result) if result.is_winner(first_seat) => summary.first_wins += 1,
            Some(_) => summary.second_wins += 1,
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{MinimaxSelector, RandomSelector};

    #[test]
    fn test_play_game_to_completion() {
        let mut a = RandomSelector::new(1);
        let mut b = RandomSelector::new(2);
        let record = play_game(&mut a, &mut b, State::new(), 0).unwrap();

        assert!(record.result.is_some());
        assert_eq!(record.final_state.total_beads(), 48);
        assert_eq!(record.replay().unwrap(), record.final_state);
        assert_eq!(record.moves[0].player, PlayerId::FIRST);
        assert!(record
            .moves
            .iter()
            .enumerate()
            .all(|(i, m)| m.ply == i as u32));
    }

    #[test]
    fn test_free_turn_recorded() {
        let mut a = RandomSelector::new(3);
        let mut b = RandomSelector::new(4);
        let record = play_game(&mut a, &mut b, State::new(), 0).unwrap();

        for pair in record.moves.iter().collect::<Vec<_>>().windows(2) {
            if pair[0].free_turn {
                assert_eq!(pair[0].player, pair[1].player);
            } else {
                assert_ne!(pair[0].player, pair[1].player);
            }
        }
    }

    #[test]
    fn test_move_limit() {
        let mut a = RandomSelector::new(1);
        let mut b = RandomSelector::new(2);
        let record = play_game(&mut a, &mut b, State::new(), 3).unwrap();
        assert_eq!(record.len(), 3);
        assert_eq!(record.result, None);
    }

    #[test]
    fn test_play_match_alternates_seats() {
        let mut minimax = MinimaxSelector::new(4);
        let mut random = RandomSelector::new(9);
        let summary = play_match(&mut minimax, &mut random, 4, 0).unwrap();

        assert_eq!(summary.games(), 4);
        assert_eq!(summary.first_name, "Minimax");
        assert_eq!(summary.second_name, "Random");
        assert!(summary.first_wins >= 3);
        assert!(summary.first_score() > 0.5);
    }
}
