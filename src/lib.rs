#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod coord;
mod fire;
mod fleet;
mod game;
mod placement;
mod ship;
pub mod ui;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
mod session;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use fire::*;
pub use fleet::*;
pub use game::*;
pub use placement::*;
pub use ship::*;
pub use ui::BoardView;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use session::*;
