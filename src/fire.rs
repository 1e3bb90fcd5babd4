//! Shot resolution against one player's board and fleet.

use log::debug;

use crate::board::{Board, CellState};
use crate::common::{BoardError, Outcome};
use crate::coord::Coordinate;
use crate::fleet::Fleet;

/// Fire at `target`, updating the board and the owning ship.
///
/// Repeats return [`Outcome::AlreadyTargeted`] and change nothing. Errors are
/// reserved for off-grid targets and for a board/fleet pair that disagree
/// about which cells hold ships; neither mutates state.
pub fn resolve_fire(
    board: &mut Board,
    fleet: &mut Fleet,
    target: Coordinate,
) -> Result<Outcome, BoardError> {
    if board.cell(target)? == CellState::ShipPresent && fleet.ship_at(target).is_none() {
        return Err(BoardError::UntrackedHit(target));
    }

    let outcome = match board.fire(target)? {
        CellState::Hit | CellState::Miss => Outcome::AlreadyTargeted,
        CellState::Empty => Outcome::Miss,
        CellState::ShipPresent => {
            let ship = fleet
                .ship_at_mut(target)
                .ok_or(BoardError::UntrackedHit(target))?;
            let fresh = ship.register_hit(target);
            debug_assert!(fresh, "{} was already hit on its ship", target);
            if ship.is_sunk() {
                Outcome::HitAndSunk(ship.size())
            } else {
                Outcome::Hit
            }
        }
    };
    debug!("shot at {} -> {:?}", target, outcome);
    Ok(outcome)
}
