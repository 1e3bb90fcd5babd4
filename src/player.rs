#![cfg(feature = "std")]

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::Outcome,
    coord::Coordinate,
    game::{GameEngine, PlayerId},
};

/// Interface implemented by the parties seated at a [`crate::Session`].
pub trait Player {
    /// Name used when announcing turns and results.
    fn name(&self) -> &str;

    /// Place every pending ship for `me` on the engine.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        engine: &mut GameEngine,
        me: PlayerId,
    ) -> anyhow::Result<()>;

    /// Choose the next target given what is visible of the opponent's board.
    fn select_target(&mut self, opponent: &Board) -> anyhow::Result<Coordinate>;

    /// Inform the player of the result of its last shot.
    fn handle_fire_result(&mut self, _target: Coordinate, _outcome: Outcome) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_fire(&mut self, _target: Coordinate, _outcome: Outcome) {}
}
