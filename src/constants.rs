//! Board geometry and engine defaults.
//!
//! The board is an N×N rhombus of hexagonal cells stored row-major.
//! Blue connects column 0 to column N-1, Red connects row 0 to row N-1.

// =============================================================================
// Board Geometry
// =============================================================================

/// Offsets `(d_row, d_col)` to the six neighbors of a hex cell.
///
/// Order: up, up-right, left, right, down-left, down.
pub const HEX_DIRECTIONS: [(isize, isize); 6] = [
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
];

/// Board size used when none is given (the classic 11×11 Hex board).
pub const DEFAULT_SIZE: usize = 11;

/// Smallest accepted board size.
pub const MIN_SIZE: usize = 1;

/// Largest board size the driver accepts. Rollouts are O(N²) per trial per
/// candidate, so anything bigger is impractical with a flat evaluator.
pub const MAX_SIZE: usize = 26;

// =============================================================================
// Monte Carlo Parameters
// =============================================================================

/// Default number of random rollouts per candidate move.
pub const DEFAULT_TRIALS: u32 = 1000;

/// Default wall-clock budget for one `next_move` call, in seconds.
pub const DEFAULT_TIME_SECS: u64 = 120;

// =============================================================================
// Rendering
// =============================================================================

pub const BLUE_CHAR: char = 'B';
pub const RED_CHAR: char = 'R';
pub const EMPTY_CHAR: char = '.';
