//! Board generation invariants over arbitrary seeds

use proptest::prelude::*;

use expedition::core::{GameRng, GameState};
use expedition::types::{
    CellKind, GameStatus, CELL_COUNT, INITIAL_HEALTH, INITIAL_MOVES, NUM_HAZARDS, NUM_RESOURCES,
};

proptest! {
    #[test]
    fn generated_boards_hold_exact_item_counts(seed in any::<u64>()) {
        let state = GameState::generate(&mut GameRng::new(seed)).unwrap();
        let board = state.board();

        prop_assert_eq!(board.count(CellKind::Exit), 1);
        prop_assert_eq!(board.count(CellKind::Resource), NUM_RESOURCES);
        prop_assert_eq!(board.count(CellKind::Hazard), NUM_HAZARDS);
        prop_assert_eq!(
            board.count(CellKind::Empty),
            CELL_COUNT - 1 - NUM_RESOURCES - NUM_HAZARDS
        );
    }

    #[test]
    fn start_cell_is_clear_and_not_the_exit(seed in any::<u64>()) {
        let state = GameState::generate(&mut GameRng::new(seed)).unwrap();

        prop_assert!(state.position().in_bounds());
        prop_assert_ne!(state.position(), state.exit());
        prop_assert_eq!(state.board().get(state.position()), Some(CellKind::Empty));
        prop_assert_eq!(state.board().get(state.exit()), Some(CellKind::Exit));
        prop_assert_eq!(state.health(), INITIAL_HEALTH);
        prop_assert_eq!(state.moves(), INITIAL_MOVES);
        prop_assert_eq!(state.check_game_over(), GameStatus::Ongoing);
    }

    #[test]
    fn same_seed_same_board(seed in any::<u64>()) {
        let a = GameState::generate(&mut GameRng::new(seed)).unwrap();
        let b = GameState::generate(&mut GameRng::new(seed)).unwrap();
        prop_assert_eq!(a, b);
    }
}
