//! Property-based tests for the board and the rollout estimator.

use fastrand::Rng;
use hex_mc::board::{Board, Move, Player};
use hex_mc::playout::{playout, simulate};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::Blue), Just(Player::Red)]
}

/// A board size together with a random permutation of its cells.
fn arb_fill_order(
    sizes: std::ops::RangeInclusive<usize>,
) -> impl Strategy<Value = (usize, Vec<Move>)> {
    sizes.prop_flat_map(|n| {
        let cells: Vec<Move> = (0..n * n).map(|i| Move::new(i / n, i % n)).collect();
        (Just(n), Just(cells).prop_shuffle())
    })
}

/// A partially filled board: size plus `(cell, owner)` placements.
fn arb_position() -> impl Strategy<Value = Board> {
    (1usize..=6).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n, arb_player()), 0..n * n).prop_map(move |stones| {
            let mut board = Board::new(n);
            for (r, c, p) in stones {
                board.place(r, c, p);
            }
            board
        })
    })
}

proptest! {
    #[test]
    fn prop_place_then_remove_restores(board in arb_position(), player in arb_player(), r in 0usize..8, c in 0usize..8) {
        let mut after = board.clone();
        if after.place(r, c, player) {
            prop_assert_eq!(board.get(r, c), None);
            prop_assert!(after.remove(r, c));
            prop_assert_eq!(&after, &board);
        } else {
            prop_assert!(!board.in_bounds(r, c) || board.get(r, c).is_some());
            prop_assert_eq!(&after, &board);
        }
    }

    #[test]
    fn prop_empty_cells_sorted_and_empty(board in arb_position()) {
        let cells = board.empty_cells();
        prop_assert!(cells.windows(2).all(|w| w[0] < w[1]));
        for mv in &cells {
            prop_assert_eq!(board.get(mv.row, mv.col), None);
        }
        let owned = board.count(Player::Blue) + board.count(Player::Red);
        prop_assert_eq!(cells.len() + owned, board.size() * board.size());
    }

    #[test]
    fn prop_filled_board_has_a_winner((n, order) in arb_fill_order(3..=4), first in arb_player()) {
        let mut board = Board::new(n);
        for (i, mv) in order.iter().enumerate() {
            let p = if i % 2 == 0 { first } else { first.opponent() };
            prop_assert!(board.place(mv.row, mv.col, p));
        }
        prop_assert!(board.is_full());
        prop_assert!(board.winner().is_some());
    }

    #[test]
    fn prop_winning_move_agrees_with_winner((n, order) in arb_fill_order(2..=7)) {
        let mut board = Board::new(n);
        let mut turn = Player::Blue;
        for mv in order {
            board.place(mv.row, mv.col, turn);
            let local = board.is_winning_move(mv.row, mv.col, turn);
            let global = board.winner();
            if local {
                prop_assert_eq!(global, Some(turn));
                break;
            }
            prop_assert_eq!(global, None);
            turn = turn.opponent();
        }
    }

    #[test]
    fn prop_playout_and_simulate_leave_board_intact(board in arb_position(), player in arb_player(), seed in any::<u64>()) {
        let mut work = board.clone();
        let cells = work.empty_cells();
        let winner = playout(&mut work, &cells, player.opponent());
        prop_assert!(winner.is_some());
        prop_assert_eq!(&work, &board);

        let mut rng = Rng::with_seed(seed);
        let p = simulate(&mut work, player, 8, &mut rng);
        prop_assert!((0.0..=1.0).contains(&p));
        prop_assert_eq!(&work, &board);
    }
}
