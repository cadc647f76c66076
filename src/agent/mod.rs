//! Agent trait and implementations
//!
//! An agent decides where to fire each turn and whether it earns another
//! shot:
//! - ComputerAgent: random search, then orthogonal follow-up shots after a hit
//! - InteractiveAgent: coordinates typed by a human through a `ShotInput`
//! - Console: `ShotInput` over stdin/stdout

use rand::rngs::SmallRng;

use crate::common::{AgentError, ShotOutcome};
use crate::coord::Coordinate;
use crate::grid::Grid;

/// One resolved shot and the agent's decision about the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Same agent fires again.
    pub fires_again: bool,
}

/// Interface implemented by both sides of a match.
pub trait Agent {
    /// Pick a coordinate, fire it at `target` and report the result.
    fn take_turn(&mut self, rng: &mut SmallRng, target: &mut Grid) -> Result<Shot, AgentError>;
}

impl<A: Agent + ?Sized> Agent for alloc::boxed::Box<A> {
    fn take_turn(&mut self, rng: &mut SmallRng, target: &mut Grid) -> Result<Shot, AgentError> {
        (**self).take_turn(rng, target)
    }
}

pub mod computer;
pub use computer::ComputerAgent;

pub mod interactive;
pub use interactive::{parse_coordinate, InteractiveAgent, ShotInput};

#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "std")]
pub use console::Console;
