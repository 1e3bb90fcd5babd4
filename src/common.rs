//! Common types for the engine: fire outcomes and board errors.

use crate::coord::Coordinate;

/// Result of a single fire action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Shot struck a ship that still has unhit segments.
    Hit,
    /// Shot struck the last unhit segment of a ship, carrying its size.
    HitAndSunk(usize),
    /// Shot landed on open water.
    Miss,
    /// Cell was already resolved; nothing changed.
    AlreadyTargeted,
}

impl Outcome {
    /// `true` for `Hit` and `HitAndSunk`.
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit | Outcome::HitAndSunk(_))
    }

    /// Whether the shot used up the shooter's turn. Repeats never do.
    pub fn consumes_turn(&self) -> bool {
        !matches!(self, Outcome::AlreadyTargeted)
    }

    /// Treat a repeat shot at `target` as an error, for callers that want
    /// `?` to reject it rather than match on the outcome.
    pub fn into_result(self, target: Coordinate) -> Result<Outcome, BoardError> {
        match self {
            Outcome::AlreadyTargeted => Err(BoardError::AlreadyTargeted(target)),
            fresh => Ok(fresh),
        }
    }
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::Hit => write!(f, "Hit!"),
            Outcome::HitAndSunk(size) => write!(f, "Hit and sunk a ship of size {}!", size),
            Outcome::Miss => write!(f, "Miss!"),
            Outcome::AlreadyTargeted => write!(f, "Already fired at this position"),
        }
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate text is malformed or names a cell off the grid.
    InvalidLabel,
    /// A coordinate (or a computed ship cell) lies outside the grid.
    OutOfBounds { row: isize, col: isize },
    /// A computed ship cell is already occupied.
    Overlap(Coordinate),
    /// Fire repeated on a resolved cell; see [`Outcome::into_result`].
    AlreadyTargeted(Coordinate),
    /// Ship count outside the allowed range for the board.
    InvalidShipCount(usize),
    /// Board size outside `1..=MAX_BOARD_SIZE`.
    InvalidBoardSize(usize),
    /// Ship size is zero, not part of the fleet, or disagrees with its cells.
    InvalidShipSize(usize),
    /// Direction is not allowed for the chosen orientation.
    DirectionMismatch,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced(usize),
    /// Random placement gave up.
    UnableToPlaceShip(usize),
    /// Fire attempted before both fleets are placed.
    PlacementIncomplete,
    /// Fire attempted after a winner was decided.
    GameOver,
    /// A ship cell was hit that no ship in the fleet owns.
    UntrackedHit(Coordinate),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidLabel => write!(f, "Invalid coordinate label"),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Position (row={}, col={}) is off the board", row, col)
            }
            BoardError::Overlap(at) => write!(f, "Ship placement overlaps another ship at {}", at),
            BoardError::AlreadyTargeted(at) => write!(f, "Already fired at {}", at),
            BoardError::InvalidShipCount(n) => write!(f, "Invalid number of ships: {}", n),
            BoardError::InvalidBoardSize(n) => write!(f, "Invalid board size: {}", n),
            BoardError::InvalidShipSize(n) => write!(f, "Invalid ship size: {}", n),
            BoardError::DirectionMismatch => {
                write!(f, "Direction does not match orientation")
            }
            BoardError::ShipAlreadyPlaced(n) => write!(f, "Ship of size {} is already placed", n),
            BoardError::UnableToPlaceShip(n) => write!(f, "Unable to place ship of size {}", n),
            BoardError::PlacementIncomplete => write!(f, "Not all ships have been placed"),
            BoardError::GameOver => write!(f, "The game is already over"),
            BoardError::UntrackedHit(at) => write!(f, "Hit at {} has no owning ship", at),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
