//! Square grid of cell states for one player.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;
use crate::config::MAX_BOARD_SIZE;
use crate::coord::Coordinate;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    ShipPresent,
    Hit,
    Miss,
}

impl CellState {
    /// `Hit` and `Miss` never change again.
    pub fn is_resolved(&self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// A player's grid: ship placements, hits and misses.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidBoardSize(size));
        }
        Ok(Board {
            size,
            cells: vec![CellState::Empty; size * size],
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        at.in_bounds(self.size)
    }

    /// State of the cell at `at`.
    pub fn cell(&self, at: Coordinate) -> Result<CellState, BoardError> {
        let idx = self.index(at)?;
        Ok(self.cells[idx])
    }

    /// Mark every cell in `cells` as holding a ship.
    ///
    /// Overlap is the placement validator's job; only bounds are checked here.
    /// Every cell is checked before any is written, so an error leaves the
    /// board untouched.
    pub fn place(&mut self, cells: &[Coordinate]) -> Result<(), BoardError> {
        let indices = cells
            .iter()
            .map(|&at| self.index(at))
            .collect::<Result<Vec<_>, _>>()?;
        for idx in indices {
            debug_assert_eq!(self.cells[idx], CellState::Empty, "placing over a ship");
            self.cells[idx] = CellState::ShipPresent;
        }
        Ok(())
    }

    /// Record a shot at `at` and return the state the cell had before it.
    ///
    /// Resolved cells are left as they are; the caller sees `Hit` or `Miss`
    /// and treats the shot as a repeat.
    pub fn fire(&mut self, at: Coordinate) -> Result<CellState, BoardError> {
        let idx = self.index(at)?;
        let before = self.cells[idx];
        match before {
            CellState::ShipPresent => self.cells[idx] = CellState::Hit,
            CellState::Empty => self.cells[idx] = CellState::Miss,
            CellState::Hit | CellState::Miss => {}
        }
        Ok(before)
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Iterator over `(coordinate, state)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, CellState)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (Coordinate::new(i / size, i % size), state))
    }

    #[inline]
    fn index(&self, at: Coordinate) -> Result<usize, BoardError> {
        if !self.contains(at) {
            return Err(BoardError::OutOfBounds {
                row: at.row as isize,
                col: at.col as isize,
            });
        }
        Ok(at.row * self.size + at.col)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board<{}>:", self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let ch = match self.cells[r * self.size + c] {
                    CellState::Empty => '□',
                    CellState::ShipPresent => '■',
                    CellState::Hit => 'X',
                    CellState::Miss => 'O',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Create an empty board with side length `size`.
pub fn create_board(size: usize) -> Result<Board, BoardError> {
    Board::new(size)
}
