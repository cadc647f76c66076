use alloc::format;
use alloc::string::String;
use rand::rngs::SmallRng;

use crate::common::{AgentError, InputError, ShotOutcome};
use crate::coord::Coordinate;
use crate::grid::Grid;

use super::{Agent, Shot};

/// Where an interactive agent gets its coordinates from.
pub trait ShotInput {
    /// Show `prompt` and read one line. `None` means the input is closed.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Tell the human why a line was rejected.
    fn notify(&mut self, message: &str);
}

/// Parse `"x y"`: exactly two whitespace separated integers.
pub fn parse_coordinate(line: &str) -> Result<Coordinate, InputError> {
    let mut parts = line.split_whitespace();
    let (x, y) = match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => (x, y),
        _ => return Err(InputError::Malformed),
    };
    let x = x.parse().map_err(|_| InputError::Malformed)?;
    let y = y.parse().map_err(|_| InputError::Malformed)?;
    Ok(Coordinate::new(x, y))
}

/// Human-driven agent.
pub struct InteractiveAgent<I> {
    input: I,
}

impl<I: ShotInput> InteractiveAgent<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Keep asking until a syntactically valid coordinate arrives. Range is
    /// not checked here; the target grid does that.
    pub fn produce_shot(&mut self) -> Result<Coordinate, AgentError> {
        loop {
            let line = self
                .input
                .read_line("Enter shot coordinates (x y): ")
                .ok_or(AgentError::InputClosed)?;
            match parse_coordinate(&line) {
                Ok(c) => return Ok(c),
                Err(e) => self.input.notify(&format!("Invalid input: {}", e)),
            }
        }
    }
}

impl<I: ShotInput> Agent for InteractiveAgent<I> {
    fn take_turn(&mut self, _rng: &mut SmallRng, target: &mut Grid) -> Result<Shot, AgentError> {
        let aim = self.produce_shot()?;
        let outcome = target.resolve_shot(aim);
        let fires_again = match outcome {
            ShotOutcome::Missed | ShotOutcome::Destroyed => false,
            // the caller reports the outcome, including off-board and repeats
            ShotOutcome::Damaged | ShotOutcome::OutOfBounds | ShotOutcome::AlreadyTried => true,
        };
        Ok(Shot {
            target: aim,
            outcome,
            fires_again,
        })
    }
}
