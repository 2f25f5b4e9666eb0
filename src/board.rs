//! Hex board representation and connectivity queries.
//!
//! The board is an N×N rhombus stored as a flat row-major `Vec`, one
//! `Option<Player>` per cell (`None` = empty). Each cell has up to six
//! neighbors given by [`HEX_DIRECTIONS`]. Blue owns the left and right
//! edges (columns 0 and N-1), Red owns the top and bottom edges
//! (rows 0 and N-1).

use std::collections::VecDeque;
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::constants::{BLUE_CHAR, EMPTY_CHAR, HEX_DIRECTIONS, RED_CHAR};

/// One of the two sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Blue,
    Red,
}

impl Player {
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }

    /// Single character used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Player::Blue => BLUE_CHAR,
            Player::Red => RED_CHAR,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Blue => write!(f, "Blue"),
            Player::Red => write!(f, "Red"),
        }
    }
}

/// A cell coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// Which of a player's two target edges a flood fill reached.
#[derive(Default, Debug, Clone, Copy)]
struct Edges {
    first: bool,
    last: bool,
}

impl Edges {
    fn both(self) -> bool {
        self.first && self.last
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
}

impl Board {
    /// Create an empty `size`×`size` board.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Occupant of a cell, `None` if empty or off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.cells[self.idx(row, col)]
    }

    /// Claim an empty cell for `player`. Returns `false` (and changes
    /// nothing) if the cell is off the board or already taken.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        let idx = self.idx(row, col);
        if self.cells[idx].is_some() {
            return false;
        }
        self.cells[idx] = Some(player);
        true
    }

    /// Clear a cell. Clearing an already empty cell is allowed and still
    /// returns `true`; only off-board coordinates return `false`.
    pub fn remove(&mut self, row: usize, col: usize) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        let idx = self.idx(row, col);
        self.cells[idx] = None;
        true
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| Move::new(i / self.size, i % self.size))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of cells owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = Move> + '_ {
        HEX_DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.in_bounds(r, c).then_some(Move::new(r, c))
        })
    }

    /// Breadth-first flood fill over `player`'s cells starting from `seeds`,
    /// recording which of `player`'s target edges the component touches.
    fn flood(&self, seeds: impl IntoIterator<Item = Move>, player: Player) -> Edges {
        let last = self.size - 1;
        let mut edges = Edges::default();
        let mut visited = vec![false; self.size * self.size];
        let mut queue = VecDeque::new();

        for s in seeds {
            let i = self.idx(s.row, s.col);
            if self.cells[i] == Some(player) && !visited[i] {
                visited[i] = true;
                queue.push_back(s);
            }
        }

        while let Some(Move { row, col }) = queue.pop_front() {
            let along = match player {
                Player::Blue => col,
                Player::Red => row,
            };
            edges.first |= along == 0;
            edges.last |= along == last;
            if edges.both() {
                break;
            }

            for n in self.neighbors(row, col) {
                let ni = self.idx(n.row, n.col);
                if !visited[ni] && self.cells[ni] == Some(player) {
                    visited[ni] = true;
                    queue.push_back(n);
                }
            }
        }
        edges
    }

    /// Whether the group containing `(row, col)` joins both of `player`'s
    /// edges. Meant to be called right after `player` claimed that cell;
    /// returns `false` if the cell is not `player`'s.
    pub fn is_winning_move(&self, row: usize, col: usize, player: Player) -> bool {
        if self.get(row, col) != Some(player) {
            return false;
        }
        self.flood([Move::new(row, col)], player).both()
    }

    /// Scan the whole board for a winning chain.
    ///
    /// Blue is seeded from its cells in column 0, Red from its cells in
    /// row 0. A full board always has exactly one winner.
    pub fn winner(&self) -> Option<Player> {
        let n = self.size;
        let blue_seeds = (0..n).map(|r| Move::new(r, 0));
        if self.flood(blue_seeds, Player::Blue).both() {
            return Some(Player::Blue);
        }
        let red_seeds = (0..n).map(|c| Move::new(0, c));
        if self.flood(red_seeds, Player::Red).both() {
            return Some(Player::Red);
        }
        None
    }

    /// Start a scoped set of speculative placements that is rolled back
    /// when the returned guard is dropped.
    pub fn scratch(&mut self) -> Scratch<'_> {
        Scratch {
            board: self,
            placed: Vec::new(),
        }
    }
}

/// Guard over a board that undoes every placement made through
/// [`Scratch::place`] when it goes out of scope.
///
/// Cells changed through the `DerefMut` access are not tracked; nested
/// guards created that way clean up after themselves.
pub struct Scratch<'a> {
    board: &'a mut Board,
    placed: Vec<Move>,
}

impl Scratch<'_> {
    /// Like [`Board::place`], remembering the cell for rollback.
    pub fn place(&mut self, mv: Move, player: Player) -> bool {
        let ok = self.board.place(mv.row, mv.col, player);
        if ok {
            self.placed.push(mv);
        }
        ok
    }

    /// Cells placed so far through this guard.
    pub fn placed(&self) -> &[Move] {
        &self.placed
    }
}

impl Deref for Scratch<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Scratch<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Scratch<'_> {
    fn drop(&mut self) {
        for mv in self.placed.drain(..).rev() {
            self.board.remove(mv.row, mv.col);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size;

        // Column labels sit above the cells of row 0.
        let header: String = (0..n).map(|c| format!("{c:<4}")).collect();
        writeln!(f, "   {}", header.trim_end())?;

        for row in 0..n {
            let indent = " ".repeat(2 * row);
            let cells: Vec<String> = (0..n)
                .map(|col| {
                    self.get(row, col)
                        .map_or(EMPTY_CHAR, Player::symbol)
                        .to_string()
                })
                .collect();
            writeln!(f, "{indent}{row:>2} {}", cells.join("---"))?;

            if row + 1 < n {
                let links = " / \\".repeat(n - 1);
                writeln!(f, "{indent}    \\{links}")?;
            }
        }
        Ok(())
    }
}
