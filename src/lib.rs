//! Hex-MC: the connection game Hex with a flat Monte Carlo opponent.
//!
//! Two players alternately claim cells of an N×N rhombus of hexagons.
//! Blue tries to join the left and right edges, Red the top and bottom
//! edges; a completely filled board always has exactly one winner.
//!
//! ## Modules
//!
//! - [`constants`] - Hex adjacency table and engine defaults
//! - [`board`] - Board state, placement and connectivity queries
//! - [`playout`] - Random board fillings for win-rate estimation
//! - [`evaluator`] - Flat Monte Carlo move selection
//! - [`game`] - Text driver for human and self-play games
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use hex_mc::board::{Board, Player};
//! use hex_mc::evaluator::next_move;
//!
//! let mut board = Board::new(3);
//! board.place(1, 0, Player::Blue);
//! board.place(1, 1, Player::Blue);
//!
//! let mv = next_move(&mut board, Player::Blue, 50, Duration::from_secs(5));
//! assert!(mv.is_some());
//! ```

pub mod board;
pub mod constants;
pub mod evaluator;
pub mod game;
pub mod playout;
