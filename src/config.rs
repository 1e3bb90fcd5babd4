use core::ops::RangeInclusive;

use crate::common::BoardError;

/// Default side length of the square board.
pub const BOARD_SIZE: usize = 10;
/// Largest number of ships a player may field.
pub const MAX_SHIP: usize = 5;
/// Largest board whose columns still fit in single letters.
pub const MAX_BOARD_SIZE: usize = 26;

/// Validated game settings shared by both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    board_size: usize,
    ship_count: usize,
}

impl GameConfig {
    /// Build a configuration, rejecting sizes the board cannot hold.
    ///
    /// Ship sizes run `1..=ship_count`, so the largest ship must also fit on
    /// a single row.
    pub fn new(board_size: usize, ship_count: usize) -> Result<Self, BoardError> {
        if board_size == 0 || board_size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidBoardSize(board_size));
        }
        if ship_count == 0 || ship_count > Self::max_ships(board_size) {
            return Err(BoardError::InvalidShipCount(ship_count));
        }
        Ok(Self {
            board_size,
            ship_count,
        })
    }

    /// Largest fleet a `board_size` board accepts.
    pub fn max_ships(board_size: usize) -> usize {
        MAX_SHIP.min(board_size)
    }

    /// Standard board with `ship_count` ships.
    pub fn with_ships(ship_count: usize) -> Result<Self, BoardError> {
        Self::new(BOARD_SIZE, ship_count)
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn ship_count(&self) -> usize {
        self.ship_count
    }

    /// Sizes of the ships each player places, smallest first.
    pub fn ship_sizes(&self) -> RangeInclusive<usize> {
        1..=self.ship_count
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            ship_count: MAX_SHIP,
        }
    }
}
