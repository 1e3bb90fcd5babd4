#![cfg(feature = "std")]

use log::info;
use rand::rngs::SmallRng;

use crate::{
    common::Outcome,
    coord::Coordinate,
    game::{GameEngine, GameStatus, PlayerId},
    player::Player,
};

/// Drives two players through placement and alternating shots on a shared
/// [`GameEngine`].
pub struct Session {
    engine: GameEngine,
    players: [Box<dyn Player>; 2],
    shots: usize,
}

impl Session {
    pub fn new(engine: GameEngine, first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self {
            engine,
            players: [first, second],
            shots: 0,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Shots that used up a turn so far.
    pub fn shot_count(&self) -> usize {
        self.shots
    }

    /// Let each player place any ships still pending.
    pub fn place_fleets(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        for id in [PlayerId::One, PlayerId::Two] {
            let player = &mut self.players[id.index()];
            info!("{} ({}) is placing ships", player.name(), id);
            player.place_fleet(rng, &mut self.engine, id)?;
        }
        Ok(())
    }

    /// Resolve one shot from the current player.
    pub fn play_turn(&mut self) -> anyhow::Result<(PlayerId, Coordinate, Outcome)> {
        let shooter = self.engine.current_player();
        let target = {
            let opponent = self.engine.board(shooter.other());
            self.players[shooter.index()].select_target(opponent)?
        };
        let outcome = self.engine.fire(target)?;
        if outcome.consumes_turn() {
            self.shots += 1;
        }
        info!("{} fired at {}: {:?}", shooter, target, outcome);

        self.players[shooter.index()].handle_fire_result(target, outcome);
        if outcome.consumes_turn() {
            self.players[shooter.other().index()].handle_opponent_fire(target, outcome);
        }
        Ok((shooter, target, outcome))
    }

    /// Place both fleets, then alternate shots until one fleet is destroyed.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<PlayerId> {
        self.place_fleets(rng)?;
        loop {
            if let GameStatus::Won(winner) = self.engine.status() {
                return Ok(winner);
            }
            self.play_turn()?;
        }
    }
}
