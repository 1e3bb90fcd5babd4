//! Text rendering of boards for console drivers.

use core::fmt;

use crate::board::{Board, CellState};
use crate::coord::{column_letter, Coordinate};

/// Symbol for an untouched cell.
pub const EMPTY_SYMBOL: char = '.';
/// Symbol for an unhit ship segment, shown only to the owner.
pub const SHIP_SYMBOL: char = 'S';
pub const HIT_SYMBOL: char = 'X';
pub const MISS_SYMBOL: char = 'O';

/// Displays a board with column letters on top and 1-based row numbers.
///
/// With `reveal` off, ships are drawn as open water so the view can be shown
/// to the opponent.
pub struct BoardView<'a> {
    board: &'a Board,
    reveal: bool,
}

impl<'a> BoardView<'a> {
    /// The owner's view, ships included.
    pub fn owner(board: &'a Board) -> Self {
        Self {
            board,
            reveal: true,
        }
    }

    /// What the opponent may see: hits and misses only.
    pub fn opponent(board: &'a Board) -> Self {
        Self {
            board,
            reveal: false,
        }
    }

    fn symbol(&self, at: Coordinate) -> char {
        match self.board.cell(at).unwrap_or(CellState::Empty) {
            CellState::Hit => HIT_SYMBOL,
            CellState::Miss => MISS_SYMBOL,
            CellState::ShipPresent if self.reveal => SHIP_SYMBOL,
            CellState::ShipPresent | CellState::Empty => EMPTY_SYMBOL,
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.board.size();
        write!(f, "  ")?;
        for c in 0..size {
            write!(f, " {}", column_letter(c))?;
        }
        writeln!(f)?;
        for r in 0..size {
            write!(f, "{:2}", r + 1)?;
            for c in 0..size {
                write!(f, " {}", self.symbol(Coordinate::new(r, c)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
