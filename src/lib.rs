#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod agent;
mod cellset;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
pub mod ui;
mod vessel;

pub use agent::*;
pub use cellset::{CellSet, CellSetError, Cells};
pub use common::*;
pub use config::*;
pub use coord::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use vessel::*;
