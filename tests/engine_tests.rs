//! Rules engine integration tests: worked positions, endgame, errors.

use mancala_engine::core::{
    bowl_owner, is_mancala, mancala_index, opposite_bowl, player_row_offset, validate_index,
    validate_player, BoardConfig, GameRng, Move, PlayerId, State, MAX_BEADS_PER_PIT,
    MAX_TOTAL_BEADS,
};
use mancala_engine::rules::{
    apply_move, apply_move_detailed, flip_board, flip_board_if_needed, flip_move, game_result,
    is_game_over, is_legal_move, legal_moves, score_game, translate_move, validate_move, winner,
    GameResult,
};
use mancala_engine::selector::{MoveSelector, RandomSelector};
use mancala_engine::MancalaError;

fn state(cells: [u8; 15]) -> State {
    State::from_cells(cells).unwrap()
}

// =============================================================================
// Worked Positions
// =============================================================================

#[test]
fn test_sow_past_own_mancala() {
    let s = state([1, 2, 3, 4, 5, 6, 0, 12, 11, 10, 9, 8, 7, 0, 0]);
    assert_eq!(
        apply_move(&s, Move(4)).unwrap(),
        state([1, 2, 3, 4, 0, 7, 1, 13, 12, 11, 9, 8, 7, 0, 1])
    );
}

#[test]
fn test_capture_across_board() {
    let s = state([1, 0, 3, 4, 5, 6, 0, 12, 11, 10, 9, 8, 7, 0, 0]);
    let outcome = apply_move_detailed(&s, Move(0)).unwrap();
    assert_eq!(
        outcome.state,
        state([0, 0, 3, 4, 5, 6, 9, 12, 11, 10, 9, 0, 7, 0, 1])
    );
    assert_eq!(outcome.captured, 9);
    assert!(!outcome.free_turn);
}

#[test]
fn test_empty_landing_without_capture() {
    let s = state([1, 0, 3, 4, 5, 6, 0, 12, 11, 10, 9, 0, 7, 0, 0]);
    assert_eq!(
        apply_move(&s, Move(0)).unwrap(),
        state([0, 1, 3, 4, 5, 6, 0, 12, 11, 10, 9, 0, 7, 0, 1])
    );
}

#[test]
fn test_free_turn_keeps_mover() {
    let s = state([1, 2, 4, 4, 5, 6, 0, 12, 11, 10, 9, 8, 7, 0, 0]);
    let next = apply_move(&s, Move(2)).unwrap();
    assert_eq!(next, state([1, 2, 0, 5, 6, 7, 1, 12, 11, 10, 9, 8, 7, 0, 0]));
    assert_eq!(next.current_player(), PlayerId::FIRST);
}

#[test]
fn test_opening_move_from_start() {
    let next = apply_move(&State::new(), Move(2)).unwrap();
    assert_eq!(next, state([4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0, 0]));
}

#[test]
fn test_caller_state_untouched() {
    let s = State::new();
    let before = s;
    let _ = apply_move(&s, Move(0)).unwrap();
    let _ = apply_move(&s, Move(9));
    assert_eq!(s, before);
}

// =============================================================================
// Endgame
// =============================================================================

#[test]
fn test_endgame_sweep() {
    let s = state([0, 0, 0, 0, 0, 0, 9, 12, 11, 10, 9, 8, 7, 0, 1]);
    assert!(is_game_over(&s));

    let swept = score_game(&s);
    assert_eq!(swept, state([0, 0, 0, 0, 0, 0, 9, 0, 0, 0, 0, 0, 0, 57, 1]));
    assert_eq!(score_game(&swept), swept);
    assert_eq!(winner(&s), Ok(GameResult::Winner(PlayerId::SECOND)));
}

#[test]
fn test_tie_has_no_winner() {
    let s = state([0, 0, 0, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 24, 0]);
    assert_eq!(winner(&s), Ok(GameResult::Draw));
    assert_eq!(GameResult::Draw.winner(), None);
}

#[test]
fn test_winner_before_end() {
    assert_eq!(winner(&State::new()), Err(MancalaError::GameNotOver));
    assert_eq!(game_result(&State::new()), None);
    assert_eq!(score_game(&State::new()), State::new());
}

#[test]
fn test_move_that_ends_game_is_swept() {
    let s = state([0, 0, 0, 0, 0, 1, 20, 3, 3, 3, 3, 3, 3, 0, 0]);
    let next = apply_move(&s, Move(5)).unwrap();
    assert!(is_game_over(&next));
    assert_eq!(next.mancala(PlayerId::FIRST), 21);
    assert_eq!(next.mancala(PlayerId::SECOND), 18);
    assert!(legal_moves(&next).is_empty());
}

// =============================================================================
// Bead Limits
// =============================================================================

#[test]
fn test_overfull_boards_are_rejected() {
    assert_eq!(
        State::from_cells([0, 0, 0, 0, 0, 1, 255, 4, 4, 4, 4, 4, 4, 0, 0]),
        Err(MancalaError::TooManyBeads {
            total: 280,
            max: MAX_TOTAL_BEADS
        })
    );
    assert_eq!(
        State::from_cells([0, 0, 0, 0, 0, 0, 0, 100, 100, 100, 0, 0, 0, 0, 0]),
        Err(MancalaError::TooManyBeads {
            total: 300,
            max: MAX_TOTAL_BEADS
        })
    );
}

#[test]
fn test_full_board_sows_into_store() {
    let s = state([0, 0, 0, 0, 0, 1, 250, 1, 1, 1, 0, 0, 0, 1, 0]);
    let outcome = apply_move_detailed(&s, Move(5)).unwrap();
    assert!(outcome.free_turn);
    assert_eq!(outcome.state.mancala(PlayerId::FIRST), 251);
    assert_eq!(outcome.state.total_beads(), 255);
}

#[test]
fn test_full_board_sweeps_into_one_store() {
    let s = state([0, 0, 0, 0, 0, 0, 0, 85, 85, 85, 0, 0, 0, 0, 0]);
    let swept = score_game(&s);
    assert_eq!(swept.score(), (0, 255));
    assert_eq!(winner(&s), Ok(GameResult::Winner(PlayerId::SECOND)));
}

#[test]
fn test_largest_config_plays_to_completion() {
    let config = BoardConfig::default().with_beads_per_pit(MAX_BEADS_PER_PIT);
    let total = config.total_beads();
    assert_eq!(total, 240);

    for seed in 0..8 {
        let mut selector = RandomSelector::new(seed);
        let mut s = State::with_config(&config).unwrap();
        while !is_game_over(&s) {
            let mv = selector.select_move(&s).unwrap();
            s = apply_move(&s, mv).unwrap();
            assert_eq!(s.total_beads(), total);
        }

        let (first, second) = score_game(&s).score();
        assert_eq!(u32::from(first) + u32::from(second), total);
        assert!(winner(&s).is_ok());
    }
}

// =============================================================================
// Board Arithmetic
// =============================================================================

#[test]
fn test_board_helpers() {
    assert_eq!(validate_index(13), Ok(13));
    assert_eq!(
        validate_index(14),
        Err(MancalaError::IndexOutOfRange { index: 14 })
    );
    assert_eq!(validate_player(1), Ok(PlayerId::SECOND));
    assert_eq!(
        validate_player(2),
        Err(MancalaError::InvalidPlayer { player: 2 })
    );
    assert_eq!(player_row_offset(1), Ok(7));
    assert_eq!(opposite_bowl(1), Ok(11));
    assert_eq!(opposite_bowl(6), Ok(6));
    assert_eq!(
        opposite_bowl(13),
        Err(MancalaError::IndexOutOfRange { index: 13 })
    );
    assert_eq!(is_mancala(13), Ok(true));
    assert_eq!(is_mancala(12), Ok(false));
    assert_eq!(mancala_index(PlayerId::SECOND), 13);
    assert_eq!(bowl_owner(7), Ok(PlayerId::SECOND));
    assert_eq!(bowl_owner(6), Ok(PlayerId::FIRST));
}

#[test]
fn test_state_accessors() {
    let s = state([1, 2, 3, 4, 5, 6, 10, 12, 11, 10, 9, 8, 7, 20, 1]);
    assert_eq!(s.row(PlayerId::SECOND), &[12, 11, 10, 9, 8, 7]);
    assert_eq!(s.bowl_count(6), Ok(10));
    assert_eq!(
        s.bowl_count(15),
        Err(MancalaError::IndexOutOfRange { index: 15 })
    );
    assert_eq!(s.score(), (10, 20));
    assert_eq!(
        State::from_cells([4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0, 2]),
        Err(MancalaError::InvalidPlayer { player: 2 })
    );
}

#[test]
fn test_random_state_holds_48_beads() {
    let mut rng = GameRng::new(11);
    for _ in 0..20 {
        let s = State::random(&mut rng);
        assert_eq!(s.total_beads(), 48);
        assert_eq!(s.score(), (0, 0));
    }
}

// =============================================================================
// Legality and Errors
// =============================================================================

#[test]
fn test_legal_moves_for_each_player() {
    let s = state([0, 3, 0, 2, 0, 1, 0, 4, 0, 4, 0, 4, 0, 0, 0]);
    assert_eq!(legal_moves(&s).to_vec(), vec![Move(1), Move(3), Move(5)]);

    let s = state([0, 3, 0, 2, 0, 1, 0, 4, 0, 4, 0, 4, 0, 0, 1]);
    assert_eq!(legal_moves(&s).to_vec(), vec![Move(7), Move(9), Move(11)]);
}

#[test]
fn test_illegal_moves() {
    let s = State::new();
    assert_eq!(is_legal_move(&s, Move(9)), Ok(false));
    assert_eq!(is_legal_move(&s, Move(6)), Ok(false));
    assert_eq!(
        is_legal_move(&s, Move(20)),
        Err(MancalaError::IndexOutOfRange { index: 20 })
    );
    assert_eq!(
        apply_move(&s, Move(9)),
        Err(MancalaError::InvalidMove { state: s, mv: Move(9) })
    );
    assert_eq!(
        apply_move(&s, Move(14)),
        Err(MancalaError::IndexOutOfRange { index: 14 })
    );
    assert!(validate_move(&s, Move(0)).is_ok());
}

#[test]
fn test_translate_move() {
    let first = State::new();
    let second = state([4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0, 1]);
    assert_eq!(translate_move(&first, 2), Ok(Move(2)));
    assert_eq!(translate_move(&second, 2), Ok(Move(10)));
    assert!(translate_move(&first, 6).is_err());
}

// =============================================================================
// Perspective
// =============================================================================

#[test]
fn test_flip_round_trip_for_second_player() {
    let s = state([1, 2, 3, 4, 5, 6, 7, 12, 11, 10, 9, 8, 7, 3, 1]);
    let normalized = flip_board_if_needed(&s);
    assert_eq!(normalized.current_player(), PlayerId::FIRST);
    assert_eq!(normalized.row(PlayerId::FIRST), s.row(PlayerId::SECOND));
    assert_eq!(flip_board(&normalized), s);

    for mv in legal_moves(&normalized) {
        let real = flip_move(Some(mv), 1).unwrap().unwrap();
        assert!(legal_moves(&s).contains(&real));
    }
}

#[test]
fn test_flip_move_sentinel_and_errors() {
    assert_eq!(flip_move(None, 1), Ok(None));
    assert_eq!(flip_move(Some(Move(3)), 0), Ok(Some(Move(3))));
    assert_eq!(
        flip_move(Some(Move(3)), 2),
        Err(MancalaError::InvalidPlayer { player: 2 })
    );
}
