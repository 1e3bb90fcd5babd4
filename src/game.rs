//! Two-player game state: both boards and fleets, whose turn it is, and
//! who has won.

use alloc::vec::Vec;
use log::{debug, info};
use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, Outcome},
    config::GameConfig,
    coord::Coordinate,
    fire::resolve_fire,
    fleet::Fleet,
    placement::{apply_placement, random_placement, validate_placement},
    ship::{Direction, Orientation},
};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn other(&self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl core::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player 1"),
            PlayerId::Two => write!(f, "Player 2"),
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// At least one fleet still has ships to place.
    Placing,
    InProgress,
    Won(PlayerId),
}

/// A player's private state.
#[derive(Debug, Clone)]
struct Side {
    board: Board,
    fleet: Fleet,
    pending: Vec<usize>,
}

impl Side {
    fn new(config: &GameConfig) -> Result<Self, BoardError> {
        Ok(Side {
            board: Board::new(config.board_size())?,
            fleet: Fleet::new(),
            pending: config.ship_sizes().collect(),
        })
    }

    /// Position of `size` in the pending list, or why it cannot be placed.
    fn check_pending(&self, size: usize) -> Result<usize, BoardError> {
        match self.pending.iter().position(|&s| s == size) {
            Some(i) => Ok(i),
            None if self.fleet.has_size(size) => Err(BoardError::ShipAlreadyPlaced(size)),
            None => Err(BoardError::InvalidShipSize(size)),
        }
    }
}

/// Core game logic holding both players' boards and the turn order.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    sides: [Side; 2],
    turn: PlayerId,
    winner: Option<PlayerId>,
}

impl GameEngine {
    /// Create a new game with empty boards; Player One fires first.
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        Ok(Self {
            config,
            sides: [Side::new(&config)?, Side::new(&config)?],
            turn: PlayerId::One,
            winner: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Immutable reference to a player's board.
    pub fn board(&self, player: PlayerId) -> &Board {
        &self.sides[player.index()].board
    }

    pub fn fleet(&self, player: PlayerId) -> &Fleet {
        &self.sides[player.index()].fleet
    }

    /// Ship sizes `player` still has to place, smallest first.
    pub fn pending_ships(&self, player: PlayerId) -> &[usize] {
        &self.sides[player.index()].pending
    }

    /// Player whose shot is next.
    pub fn current_player(&self) -> PlayerId {
        self.turn
    }

    /// Place `player`'s ship of `size`. Returns the cells it occupies.
    pub fn place_ship(
        &mut self,
        player: PlayerId,
        size: usize,
        anchor: Coordinate,
        orientation: Orientation,
        direction: Direction,
    ) -> Result<Vec<Coordinate>, BoardError> {
        let side = &mut self.sides[player.index()];
        let slot = side.check_pending(size)?;
        let cells = validate_placement(&side.board, size, anchor, orientation, direction)?;
        apply_placement(&mut side.board, &mut side.fleet, cells.clone(), size)?;
        side.pending.remove(slot);
        debug!("{} placed ship of size {} from {}", player, size, anchor);
        Ok(cells)
    }

    /// Place `player`'s ship of `size` at a random valid position.
    pub fn place_random<R: Rng>(
        &mut self,
        player: PlayerId,
        size: usize,
        rng: &mut R,
    ) -> Result<Vec<Coordinate>, BoardError> {
        let side = &self.sides[player.index()];
        side.check_pending(size)?;
        let p = random_placement(&side.board, size, rng)?;
        self.place_ship(player, size, p.anchor, p.orientation, p.direction)
    }

    /// Randomly place every ship `player` has left.
    pub fn place_all_random<R: Rng>(
        &mut self,
        player: PlayerId,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        while let Some(&size) = self.pending_ships(player).first() {
            self.place_random(player, size, rng)?;
        }
        Ok(())
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner {
            GameStatus::Won(winner)
        } else if self.sides.iter().any(|s| !s.pending.is_empty()) {
            GameStatus::Placing
        } else {
            GameStatus::InProgress
        }
    }

    /// The current player fires at the opponent's board.
    ///
    /// A repeat shot leaves the turn with the shooter; any other outcome
    /// passes it. Sinking the last ship ends the game.
    pub fn fire(&mut self, target: Coordinate) -> Result<Outcome, BoardError> {
        match self.status() {
            GameStatus::Placing => return Err(BoardError::PlacementIncomplete),
            GameStatus::Won(_) => return Err(BoardError::GameOver),
            GameStatus::InProgress => {}
        }

        let shooter = self.turn;
        let defender = &mut self.sides[shooter.other().index()];
        let outcome = resolve_fire(&mut defender.board, &mut defender.fleet, target)?;

        if outcome.is_hit() && defender.fleet.all_sunk() {
            info!("{} wins", shooter);
            self.winner = Some(shooter);
        } else if outcome.consumes_turn() {
            self.turn = shooter.other();
        }
        Ok(outcome)
    }
}
