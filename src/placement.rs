//! Ship placement: validation, application and random choice.
//!
//! A ship is described by its anchor (first cell) and the direction it
//! extends in. Every direction reduces to a single `(Δrow, Δcol)` step, so
//! one loop computes the cells for all four cases.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::Rng;

use crate::board::{Board, CellState};
use crate::common::BoardError;
use crate::coord::Coordinate;
use crate::fleet::Fleet;
use crate::ship::{Direction, Orientation, Ship};

const MAX_RANDOM_ATTEMPTS: usize = 100;

/// A proposed ship position, independent of size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub anchor: Coordinate,
    pub orientation: Orientation,
    pub direction: Direction,
}

impl Placement {
    pub fn new(anchor: Coordinate, orientation: Orientation, direction: Direction) -> Self {
        Self {
            anchor,
            orientation,
            direction,
        }
    }

    /// Cells a ship of `size` would occupy on `board`, see [`validate_placement`].
    pub fn validate(&self, board: &Board, size: usize) -> Result<Vec<Coordinate>, BoardError> {
        validate_placement(board, size, self.anchor, self.orientation, self.direction)
    }
}

/// Compute the cells for a ship of `size` starting at `anchor`, rejecting
/// anything off the grid or on top of another ship.
///
/// Bounds are checked for every cell before any occupancy check, so a ship
/// that is both off-board and overlapping reports `OutOfBounds`.
pub fn validate_placement(
    board: &Board,
    size: usize,
    anchor: Coordinate,
    orientation: Orientation,
    direction: Direction,
) -> Result<Vec<Coordinate>, BoardError> {
    if size == 0 {
        return Err(BoardError::InvalidShipSize(size));
    }
    if direction.orientation() != orientation {
        return Err(BoardError::DirectionMismatch);
    }

    if !board.contains(anchor) {
        trace!("placement anchor {:?} is off the board", anchor);
        return Err(BoardError::OutOfBounds {
            row: isize::try_from(anchor.row).unwrap_or(isize::MAX),
            col: isize::try_from(anchor.col).unwrap_or(isize::MAX),
        });
    }

    // From an on-board anchor, `board.size() + 1` steps always leave the grid.
    let (dr, dc) = direction.step();
    let limit = board.size() as isize;
    let steps = size.min(board.size() + 1);
    let mut cells = Vec::with_capacity(steps);
    for i in 0..steps as isize {
        let r = anchor.row as isize + dr * i;
        let c = anchor.col as isize + dc * i;
        if r < 0 || c < 0 || r >= limit || c >= limit {
            trace!("placement of size {} from {} leaves the board", size, anchor);
            return Err(BoardError::OutOfBounds { row: r, col: c });
        }
        cells.push(Coordinate::new(r as usize, c as usize));
    }
    debug_assert_eq!(cells.len(), size);

    for &at in &cells {
        if board.cell(at)? != CellState::Empty {
            trace!("placement of size {} from {} overlaps at {}", size, anchor, at);
            return Err(BoardError::Overlap(at));
        }
    }
    Ok(cells)
}

/// Mark validated `cells` on the board and add the ship to the fleet.
///
/// All-or-nothing: every cell must be on the board, empty and listed once,
/// otherwise the board and fleet are left as they were.
pub fn apply_placement(
    board: &mut Board,
    fleet: &mut Fleet,
    cells: Vec<Coordinate>,
    size: usize,
) -> Result<(), BoardError> {
    if cells.len() != size {
        return Err(BoardError::InvalidShipSize(size));
    }
    let states = cells
        .iter()
        .map(|&at| board.cell(at))
        .collect::<Result<Vec<_>, _>>()?;
    for (i, (&at, state)) in cells.iter().zip(states).enumerate() {
        if state != CellState::Empty || cells[..i].contains(&at) {
            return Err(BoardError::Overlap(at));
        }
    }
    board.place(&cells)?;
    debug!("placed ship of size {} at {:?}", size, cells);
    fleet.add(Ship::new(cells));
    Ok(())
}

/// Returns a random valid placement for a ship of `size`.
pub fn random_placement<R: Rng>(
    board: &Board,
    size: usize,
    rng: &mut R,
) -> Result<Placement, BoardError> {
    if size == 0 || size > board.size() {
        return Err(BoardError::InvalidShipSize(size));
    }
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let [forward, backward] = orientation.directions();
        let direction = if rng.random() { forward } else { backward };
        let anchor = Coordinate::new(
            rng.random_range(0..board.size()),
            rng.random_range(0..board.size()),
        );
        let placement = Placement::new(anchor, orientation, direction);
        if placement.validate(board, size).is_ok() {
            return Ok(placement);
        }
    }
    Err(BoardError::UnableToPlaceShip(size))
}
