//! Flat Monte Carlo move selection.
//!
//! Every empty cell is tried in row-major order: the cell is claimed
//! speculatively, [`simulate`] estimates the mover's win probability from
//! the resulting position, and the placement is rolled back. The candidate
//! with the highest estimate wins; ties keep the earlier candidate.
//!
//! There is no search tree and nothing is shared between candidates. The
//! wall-clock budget is checked between candidates only.

use std::time::{Duration, Instant};

use fastrand::Rng;
use tracing::{debug, info, warn};

use crate::board::{Board, Move, Player};
use crate::constants::{DEFAULT_TIME_SECS, DEFAULT_TRIALS};
use crate::playout::simulate;

/// Parameters for [`MonteCarloEvaluator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Rollouts per candidate move.
    pub max_trials: u32,
    /// Evaluation stops at the first candidate boundary after this much time.
    pub time_budget: Duration,
    /// Seed for the rollout RNG; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_trials: DEFAULT_TRIALS,
            time_budget: Duration::from_secs(DEFAULT_TIME_SECS),
            seed: None,
        }
    }
}

impl EvaluatorConfig {
    pub fn new(max_trials: u32, time_budget: Duration) -> Self {
        Self {
            max_trials,
            time_budget,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Outcome of one [`MonteCarloEvaluator::search`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub best: Move,
    /// Estimated win probability of `best` for the mover.
    pub win_rate: f64,
    /// Candidates actually simulated (less than the empty-cell count if
    /// the time budget ran out).
    pub candidates: usize,
    pub timed_out: bool,
    pub elapsed: Duration,
}

/// Computer opponent choosing moves by flat Monte Carlo rollouts.
pub struct MonteCarloEvaluator {
    config: EvaluatorConfig,
    rng: Rng,
}

impl Default for MonteCarloEvaluator {
    fn default() -> Self {
        Self::new(EvaluatorConfig::default())
    }
}

impl MonteCarloEvaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        let rng = config.seed.map_or_else(Rng::new, Rng::with_seed);
        Self { config, rng }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Pick a move for `player`, or `None` if the board has no empty cell.
    ///
    /// The board is left exactly as it was found.
    pub fn next_move(&mut self, board: &mut Board, player: Player) -> Option<Move> {
        self.search(board, player).map(|e| e.best)
    }

    /// Like [`next_move`](Self::next_move), with the statistics of the run.
    pub fn search(&mut self, board: &mut Board, player: Player) -> Option<Evaluation> {
        let candidates = board.empty_cells();
        if candidates.is_empty() {
            debug!(%player, "no empty cells left");
            return None;
        }

        let start = Instant::now();
        let mut best: Option<(Move, f64)> = None;
        let mut evaluated = 0;
        let mut timed_out = false;

        for (i, &mv) in candidates.iter().enumerate() {
            let Some(win_rate) = self.evaluate_move(board, player, mv) else {
                continue;
            };
            evaluated += 1;
            debug!(%mv, win_rate, trials = self.config.max_trials, "candidate evaluated");

            if best.is_none_or(|(_, b)| win_rate > b) {
                best = Some((mv, win_rate));
            }

            let elapsed = start.elapsed();
            if i + 1 < candidates.len() && elapsed > self.config.time_budget {
                warn!(
                    evaluated,
                    total = candidates.len(),
                    ?elapsed,
                    "time budget exhausted, returning best candidate so far"
                );
                timed_out = true;
                break;
            }
        }

        let (best, win_rate) = best?;
        let elapsed = start.elapsed();
        info!(%player, %best, win_rate, evaluated, ?elapsed, "move selected");

        Some(Evaluation {
            best,
            win_rate,
            candidates: evaluated,
            timed_out,
            elapsed,
        })
    }

    /// Estimated win probability for `player` after claiming `mv`, or
    /// `None` if `mv` cannot be played. The placement is always undone.
    pub fn evaluate_move(
        &mut self,
        board: &mut Board,
        player: Player,
        mv: Move,
    ) -> Option<f64> {
        let mut scratch = board.scratch();
        if !scratch.place(mv, player) {
            return None;
        }
        Some(simulate(&mut scratch, player, self.config.max_trials, &mut self.rng))
    }
}

/// One-shot move selection with an entropy-seeded evaluator.
///
/// Returns `None` when and only when the board has no empty cell.
pub fn next_move(
    board: &mut Board,
    player: Player,
    max_trials: u32,
    max_time: Duration,
) -> Option<Move> {
    MonteCarloEvaluator::new(EvaluatorConfig::new(max_trials, max_time)).next_move(board, player)
}
