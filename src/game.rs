//! Text driver: human vs computer and computer vs computer games.
//!
//! The driver reads coordinates as `row col` lines, hands them to the
//! board, re-prompts on anything the board rejects and asks the evaluator
//! for the computer's moves. Input and output are generic so games can be
//! scripted in tests.
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use hex_mc::board::Player;
//! use hex_mc::evaluator::{EvaluatorConfig, MonteCarloEvaluator};
//! use hex_mc::game::Game;
//!
//! let ai = MonteCarloEvaluator::new(EvaluatorConfig::default().with_seed(1));
//! let mut game = Game::new(1, Player::Blue, ai);
//! let mut out = Vec::new();
//! let winner = game.run(&mut Cursor::new("0 0\n"), &mut out).unwrap();
//! assert_eq!(winner, Some(Player::Blue));
//! ```

use std::io::{BufRead, Write};

use anyhow::Result;
use thiserror::Error;
use tracing::info;

use crate::board::{Board, Move, Player};
use crate::constants::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use crate::evaluator::MonteCarloEvaluator;

/// Rejected user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("expected two numbers \"row col\", got {0:?}")]
    Arity(String),

    #[error("not a valid number: {0:?}")]
    BadNumber(String),

    #[error("board size must be between {min} and {max}, got {0}", min = MIN_SIZE, max = MAX_SIZE)]
    SizeOutOfRange(i64),

    #[error("input ended")]
    Eof,
}

/// Parse a `row col` line. Range is checked by the board itself.
pub fn parse_move(line: &str) -> Result<Move, InputError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = parts[..] else {
        return Err(InputError::Arity(line.trim().to_string()));
    };
    let number = |s: &str| {
        s.parse::<usize>()
            .map_err(|_| InputError::BadNumber(s.to_string()))
    };
    Ok(Move::new(number(row)?, number(col)?))
}

pub fn parse_size(line: &str) -> Result<usize, InputError> {
    let s = line.trim();
    let size: i64 = s.parse().map_err(|_| InputError::BadNumber(s.to_string()))?;
    if size < MIN_SIZE as i64 || size > MAX_SIZE as i64 {
        return Err(InputError::SizeOutOfRange(size));
    }
    Ok(size as usize)
}

/// `B`/`b` picks Blue, anything else Red.
pub fn parse_side(line: &str) -> Player {
    match line.trim().chars().next() {
        Some('B' | 'b') => Player::Blue,
        _ => Player::Red,
    }
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Eof.into());
    }
    Ok(line)
}

/// Ask for a board size; invalid answers fall back to the default.
pub fn prompt_size(input: &mut impl BufRead, out: &mut impl Write) -> Result<usize> {
    write!(
        out,
        "Enter board size ({MIN_SIZE}-{MAX_SIZE}, default is {DEFAULT_SIZE}): "
    )?;
    out.flush()?;
    let line = read_line(input)?;
    if line.trim().is_empty() {
        return Ok(DEFAULT_SIZE);
    }
    match parse_size(&line) {
        Ok(size) => Ok(size),
        Err(e) => {
            writeln!(out, "{e}, using {DEFAULT_SIZE}.")?;
            Ok(DEFAULT_SIZE)
        }
    }
}

pub fn prompt_side(input: &mut impl BufRead, out: &mut impl Write) -> Result<Player> {
    write!(out, "Choose your side (B for Blue, R for Red): ")?;
    out.flush()?;
    Ok(parse_side(&read_line(input)?))
}

/// A game between a human and the computer. Blue moves first.
pub struct Game {
    board: Board,
    human: Player,
    ai: MonteCarloEvaluator,
}

impl Game {
    pub fn new(size: usize, human: Player, ai: MonteCarloEvaluator) -> Self {
        Self {
            board: Board::new(size),
            human,
            ai,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play until someone connects their edges. Returns the winner, which
    /// is only `None` if the computer ran out of moves on a board with no
    /// winner (impossible under the rules, reported rather than assumed).
    pub fn run(
        &mut self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> Result<Option<Player>> {
        info!(size = self.board.size(), human = %self.human, "game started");
        writeln!(out, "{}", self.board)?;

        let mut turn = Player::Blue;
        loop {
            let mv = if turn == self.human {
                self.human_move(input, out)?
            } else {
                match self.ai.next_move(&mut self.board, turn) {
                    Some(mv) => {
                        self.board.place(mv.row, mv.col, turn);
                        writeln!(out, "Computer ({turn}) plays {mv}")?;
                        mv
                    }
                    None => {
                        writeln!(out, "Computer has no moves left.")?;
                        let winner = self.board.winner();
                        announce(out, winner)?;
                        return Ok(winner);
                    }
                }
            };

            writeln!(out, "{}", self.board)?;
            if self.board.is_winning_move(mv.row, mv.col, turn) {
                info!(winner = %turn, "game over");
                announce(out, Some(turn))?;
                return Ok(Some(turn));
            }
            turn = turn.opponent();
        }
    }

    fn human_move(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<Move> {
        loop {
            write!(out, "Your move as {} (row col): ", self.human)?;
            out.flush()?;
            let line = read_line(input)?;
            match parse_move(&line) {
                Ok(mv) => {
                    if self.board.place(mv.row, mv.col, self.human) {
                        return Ok(mv);
                    }
                    writeln!(out, "Invalid move {mv}: off the board or taken.")?;
                }
                Err(e) => writeln!(out, "{e}")?,
            }
        }
    }
}

/// Let the evaluator play both sides on an empty `size` board.
pub fn self_play(
    size: usize,
    ai: &mut MonteCarloEvaluator,
    out: &mut impl Write,
) -> Result<Option<Player>> {
    let mut board = Board::new(size);
    let mut turn = Player::Blue;
    info!(size, "self-play started");

    while let Some(eval) = ai.search(&mut board, turn) {
        let mv = eval.best;
        board.place(mv.row, mv.col, turn);
        writeln!(
            out,
            "{turn} plays {mv} (estimated win rate {:.1}%)",
            eval.win_rate * 100.0
        )?;
        writeln!(out, "{board}")?;
        if board.is_winning_move(mv.row, mv.col, turn) {
            announce(out, Some(turn))?;
            return Ok(Some(turn));
        }
        turn = turn.opponent();
    }

    let winner = board.winner();
    announce(out, winner)?;
    Ok(winner)
}

fn announce(out: &mut impl Write, winner: Option<Player>) -> Result<()> {
    match winner {
        Some(p) => writeln!(out, "{p} wins!")?,
        None => writeln!(out, "No winner.")?,
    }
    Ok(())
}
