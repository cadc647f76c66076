//! Commonly used types and utilities for ease of import.

pub use crate::{
    deploy_fleet, Agent, ComputerAgent, Coordinate, GameConfig, Grid, InteractiveAgent, Match,
    MatchState, Orientation, ShotOutcome, Side, Vessel,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, Console};
