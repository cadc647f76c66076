use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{AgentError, ShotOutcome};
use crate::coord::Coordinate;
use crate::grid::Grid;

use super::{Agent, Shot};

/// Computer opponent with two phases.
///
/// While `follow_ups` is empty it fires at uniformly random untried
/// coordinates. A `Damaged` result queues the four orthogonal neighbours of
/// the hit, which are then tried in random order until the vessel is
/// destroyed. Bounds and repeats are not filtered when queueing; the target
/// grid rejects them and the agent simply fires again.
pub struct ComputerAgent {
    candidates: Vec<Coordinate>,
    follow_ups: Vec<Coordinate>,
}

impl ComputerAgent {
    /// Agent aiming at a `size`×`size` board.
    pub fn new(size: i32) -> Self {
        let candidates = (1..=size)
            .flat_map(|x| (1..=size).map(move |y| Coordinate::new(x, y)))
            .collect();
        Self {
            candidates,
            follow_ups: Vec::new(),
        }
    }

    /// Coordinates not yet fired at.
    pub fn remaining_candidates(&self) -> &[Coordinate] {
        &self.candidates
    }

    /// Pending follow-up targets around the last damaging hit.
    pub fn follow_ups(&self) -> &[Coordinate] {
        &self.follow_ups
    }

    fn next_target(&mut self, rng: &mut SmallRng) -> Result<Coordinate, AgentError> {
        if !self.follow_ups.is_empty() {
            let idx = rng.random_range(0..self.follow_ups.len());
            let target = self.follow_ups.swap_remove(idx);
            // may already be gone, or off the board entirely
            if let Some(pos) = self.candidates.iter().position(|&c| c == target) {
                self.candidates.swap_remove(pos);
            }
            log::debug!("following up around last hit at {}", target);
            return Ok(target);
        }
        if self.candidates.is_empty() {
            return Err(AgentError::NoTargetsLeft);
        }
        let idx = rng.random_range(0..self.candidates.len());
        Ok(self.candidates.swap_remove(idx))
    }
}

impl Agent for ComputerAgent {
    fn take_turn(&mut self, rng: &mut SmallRng, target: &mut Grid) -> Result<Shot, AgentError> {
        let aim = self.next_target(rng)?;
        let outcome = target.resolve_shot(aim);
        let fires_again = match outcome {
            ShotOutcome::Destroyed => {
                self.follow_ups.clear();
                false
            }
            ShotOutcome::Missed => false,
            ShotOutcome::Damaged => {
                self.follow_ups.extend(aim.neighbors());
                true
            }
            ShotOutcome::AlreadyTried | ShotOutcome::OutOfBounds => true,
        };
        Ok(Shot {
            target: aim,
            outcome,
            fires_again,
        })
    }
}
