//! Ship orientation, placement direction, and per-ship hit tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Directions a ship with this orientation may extend in.
    pub fn directions(&self) -> [Direction; 2] {
        match self {
            Orientation::Horizontal => [Direction::Right, Direction::Left],
            Orientation::Vertical => [Direction::Down, Direction::Up],
        }
    }
}

/// Way a ship extends from its anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Orientation this direction belongs to.
    pub fn orientation(&self) -> Orientation {
        match self {
            Direction::Right | Direction::Left => Orientation::Horizontal,
            Direction::Down | Direction::Up => Orientation::Vertical,
        }
    }

    /// `(Δrow, Δcol)` for one step in this direction.
    pub fn step(&self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
        }
    }
}

/// A placed ship and the segments not yet hit.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    size: usize,
    cells: Vec<Coordinate>,
    remaining: Vec<Coordinate>,
}

impl Ship {
    /// Ship occupying `cells`, anchor first. Nothing has been hit yet.
    pub fn new(cells: Vec<Coordinate>) -> Self {
        Ship {
            size: cells.len(),
            remaining: cells.clone(),
            cells,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Occupied cells in placement order.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Cells that have not been hit.
    pub fn remaining(&self) -> &[Coordinate] {
        &self.remaining
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        self.cells.contains(&at)
    }

    /// Remove `at` from the unhit segments. Returns `true` if it was one.
    pub fn register_hit(&mut self, at: Coordinate) -> bool {
        match self.remaining.iter().position(|&c| c == at) {
            Some(i) => {
                self.remaining.remove(i);
                true
            }
            None => false,
        }
    }

    /// All segments hit.
    pub fn is_sunk(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship {{ size: {}, cells: [", self.size)?;
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "], remaining: {} }}", self.remaining.len())
    }
}
