use alloc::vec::Vec;

use crate::coord::Coordinate;
use crate::ship::Ship;

/// One player's ships, in placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, ship: Ship) {
        self.ships.push(ship);
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Whether a ship of `size` has been added.
    pub fn has_size(&self, size: usize) -> bool {
        self.ships.iter().any(|s| s.size() == size)
    }

    /// Ship occupying `at`, if any.
    pub fn ship_at(&self, at: Coordinate) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(at))
    }

    pub fn ship_at_mut(&mut self, at: Coordinate) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.contains(at))
    }

    /// Ships with at least one unhit segment.
    pub fn afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Returns `true` when every ship is sunk. An empty fleet counts as sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }
}

/// Whether every ship in `fleet` has been sunk.
pub fn is_fleet_destroyed(fleet: &Fleet) -> bool {
    fleet.all_sunk()
}
