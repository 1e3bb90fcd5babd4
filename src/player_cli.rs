#![cfg(feature = "std")]

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::string::String;

use anyhow::bail;
use log::warn;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::Outcome,
    coord::Coordinate,
    game::{GameEngine, PlayerId},
    player::Player,
    ship::{Direction, Orientation},
    ui::BoardView,
};

/// Line source shared by every console player seated at the same terminal.
pub type SharedInput = Rc<RefCell<dyn BufRead>>;

/// Wrap a reader so several [`CliPlayer`]s can take turns on it.
pub fn shared_input<R: BufRead + 'static>(reader: R) -> SharedInput {
    Rc::new(RefCell::new(reader))
}

/// Interactive player reading commands line by line.
pub struct CliPlayer<W: Write> {
    name: String,
    input: SharedInput,
    output: W,
}

/// Parse `H`/`V` (or the full word) into an orientation.
pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.trim().to_ascii_uppercase().as_str() {
        "H" | "HORIZONTAL" => Some(Orientation::Horizontal),
        "V" | "VERTICAL" => Some(Orientation::Vertical),
        _ => None,
    }
}

/// Parse a direction letter. `H` is accepted as "right" alongside `R`.
pub fn parse_direction(input: &str) -> Option<Direction> {
    match input.trim().to_ascii_uppercase().as_str() {
        "R" | "H" | "RIGHT" => Some(Direction::Right),
        "L" | "LEFT" => Some(Direction::Left),
        "D" | "DOWN" => Some(Direction::Down),
        "U" | "UP" => Some(Direction::Up),
        _ => None,
    }
}

impl<W: Write> CliPlayer<W> {
    pub fn new(name: impl Into<String>, input: SharedInput, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.borrow_mut().read_line(&mut line)? == 0 {
            bail!("input closed while waiting for {}", self.name);
        }
        Ok(line.trim().to_owned())
    }

    /// Ask for one ship placement; `Ok(false)` means the input was rejected.
    fn place_one(
        &mut self,
        rng: &mut SmallRng,
        engine: &mut GameEngine,
        me: PlayerId,
        size: usize,
    ) -> anyhow::Result<bool> {
        let start = self.prompt("Enter start position (e.g., A1), or press enter for random: ")?;
        if start.is_empty() {
            return match engine.place_random(me, size, rng) {
                Ok(cells) => {
                    if let Some(anchor) = cells.first() {
                        writeln!(self.output, "Placed ship of size {} at {}", size, anchor)?;
                    }
                    Ok(true)
                }
                Err(e) => {
                    writeln!(self.output, "{}. Try again.", e)?;
                    Ok(false)
                }
            };
        }
        let orientation = self.prompt("Enter orientation (H for horizontal, V for vertical): ")?;
        let direction =
            self.prompt("Enter direction (R for right, L for left, D for down, U for up): ")?;

        let anchor = Coordinate::parse(&start, engine.config().board_size());
        let (anchor, orientation, direction) = match (
            anchor,
            parse_orientation(&orientation),
            parse_direction(&direction),
        ) {
            (Ok(a), Some(o), Some(d)) => (a, o, d),
            _ => {
                writeln!(self.output, "Invalid input. Try again.")?;
                return Ok(false);
            }
        };
        match engine.place_ship(me, size, anchor, orientation, direction) {
            Ok(_) => Ok(true),
            Err(e) => {
                writeln!(self.output, "Invalid placement: {}. Try again.", e)?;
                Ok(false)
            }
        }
    }
}

impl<W: Write> Player for CliPlayer<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        engine: &mut GameEngine,
        me: PlayerId,
    ) -> anyhow::Result<()> {
        writeln!(self.output, "{}, place your ships.", self.name)?;
        while let Some(&size) = engine.pending_ships(me).first() {
            writeln!(self.output, "\nPlacing ship of size {}", size)?;
            write!(self.output, "{}", BoardView::owner(engine.board(me)))?;
            while !self.place_one(rng, engine, me, size)? {}
        }
        write!(self.output, "{}", BoardView::owner(engine.board(me)))?;
        Ok(())
    }

    fn select_target(&mut self, opponent: &Board) -> anyhow::Result<Coordinate> {
        writeln!(self.output, "\n{}'s turn!", self.name)?;
        write!(self.output, "{}", BoardView::opponent(opponent))?;
        loop {
            let line = self.prompt("Enter position to fire at (e.g., A1): ")?;
            match Coordinate::parse(&line, opponent.size()) {
                Ok(target) => return Ok(target),
                Err(e) => writeln!(self.output, "{}. Try again.", e)?,
            }
        }
    }

    fn handle_fire_result(&mut self, target: Coordinate, outcome: Outcome) {
        let written = match outcome {
            Outcome::AlreadyTargeted => writeln!(
                self.output,
                "You already fired at {}. Try again.",
                target
            ),
            _ => writeln!(self.output, "{} -> {}", target, outcome),
        };
        if let Err(e) = written {
            warn!("{}: could not report shot at {}: {}", self.name, target, e);
        }
    }

    fn handle_opponent_fire(&mut self, target: Coordinate, outcome: Outcome) {
        if let Err(e) = writeln!(self.output, "Opponent fired at {} -> {}", target, outcome) {
            warn!("{}: could not report incoming shot at {}: {}", self.name, target, e);
        }
    }
}
