//! Monte Carlo rollouts (random board fillings).
//!
//! A rollout assigns every remaining empty cell alternately to the two
//! players in a uniformly random order, asks the board for the winner and
//! rolls every placement back. Hex cannot end in a draw, so a completely
//! filled board always has exactly one winner.

use fastrand::Rng;
use tracing::trace;

use crate::board::{Board, Move, Player};

/// Fill `cells` in the given order, alternating colors starting with
/// `first`, and return the winner of the resulting position.
///
/// `cells` should all be empty. A cell the board rejects is skipped without
/// giving up the turn, so alternation follows the stones actually placed.
/// The board is restored before returning. If `cells` does not cover every
/// empty cell the result may be `None`.
pub fn playout(board: &mut Board, cells: &[Move], first: Player) -> Option<Player> {
    let mut scratch = board.scratch();
    let mut turn = first;
    for &mv in cells {
        if scratch.place(mv, turn) {
            turn = turn.opponent();
        }
    }
    scratch.winner()
}

/// Estimate `player`'s winning chances from the current position.
///
/// `player` is assumed to have just moved, so each rollout starts with the
/// opponent. Returns the fraction of `trials` rollouts won by `player`.
///
/// A board with no empty cells is scored directly: `1.0` if `player` holds
/// the winning chain, `0.0` otherwise. `trials == 0` runs a single rollout.
pub fn simulate(board: &mut Board, player: Player, trials: u32, rng: &mut Rng) -> f64 {
    let mut cells = board.empty_cells();
    if cells.is_empty() {
        let won = board.winner() == Some(player);
        trace!(%player, won, "board already full, skipping rollouts");
        return if won { 1.0 } else { 0.0 };
    }

    let trials = trials.max(1);
    let first = player.opponent();
    let mut wins = 0u32;
    for _ in 0..trials {
        rng.shuffle(&mut cells);
        if playout(board, &cells, first) == Some(player) {
            wins += 1;
        }
    }

    wins as f64 / trials as f64
}
