//! Game grid: deployed vessels, placement guard and shot tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::cellset::Cells;
use crate::common::{ConfigError, PlacementError, ShotOutcome};
use crate::config::MAX_BOARD_SIZE;
use crate::coord::Coordinate;
use crate::vessel::Vessel;

/// What a viewer may learn about one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    ShipUnhit,
    Miss,
    Hit,
}

/// A square board owning its vessels.
///
/// Placement and play use separate cell sets: `blocked` holds every vessel
/// cell plus its buffer halo and is only written by [`Grid::deploy`];
/// `fired` holds resolved shots and the halo uncovered around destroyed
/// vessels and is only written by [`Grid::resolve_shot`].
#[derive(Clone)]
pub struct Grid {
    size: i32,
    reveal: bool,
    vessels: Vec<Vessel>,
    ship_cells: Cells,
    blocked: Cells,
    fired: Cells,
    destroyed: usize,
}

impl Grid {
    /// Empty `size`×`size` grid. `reveal` says whether intact vessel cells
    /// are shown to whoever views it.
    pub fn new(size: i32, reveal: bool) -> Result<Self, ConfigError> {
        if size < 1 || size > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidBoardSize {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        let empty = Cells::try_new(size)?;
        Ok(Grid {
            size,
            reveal,
            vessels: Vec::new(),
            ship_cells: empty,
            blocked: empty,
            fired: empty,
            destroyed: 0,
        })
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn reveal(&self) -> bool {
        self.reveal
    }

    pub fn set_reveal(&mut self, reveal: bool) {
        self.reveal = reveal;
    }

    /// Deployed vessels in deployment order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn vessel_count(&self) -> usize {
        self.vessels.len()
    }

    /// Number of vessels sunk so far.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Number of cells no longer available as targets.
    pub fn fired_count(&self) -> usize {
        self.fired.len()
    }

    /// `true` once every deployed vessel is destroyed. An empty grid has
    /// nothing to lose and never reports defeat.
    pub fn all_destroyed(&self) -> bool {
        !self.vessels.is_empty() && self.destroyed == self.vessels.len()
    }

    pub fn is_out_of_bounds(&self, c: Coordinate) -> bool {
        !(1..=self.size).contains(&c.x) || !(1..=self.size).contains(&c.y)
    }

    /// Whether `c` is a vessel cell or inside a vessel's buffer halo.
    pub fn is_blocked(&self, c: Coordinate) -> bool {
        self.blocked.contains(c)
    }

    /// Whether a shot at `c` would be rejected as already tried.
    pub fn is_fired(&self, c: Coordinate) -> bool {
        self.fired.contains(c)
    }

    /// Cells that can no longer host a vessel.
    pub fn blocked_cells(&self) -> Cells {
        self.blocked
    }

    /// Place `vessel`. Every cell is validated before anything changes, so a
    /// failed deploy leaves the grid untouched.
    pub fn deploy(&mut self, vessel: Vessel) -> Result<(), PlacementError> {
        let length = vessel.length();
        if length == 0 || length > self.size as usize {
            return Err(PlacementError::InvalidLength {
                length,
                size: self.size,
            });
        }
        if let Some(cell) = vessel.cells().find(|&c| self.is_out_of_bounds(c)) {
            return Err(PlacementError::OutOfBounds(cell));
        }
        let mask = self.blocked.mask(vessel.cells());
        if !mask.is_disjoint(&self.blocked) {
            let clash = (mask & self.blocked).iter().next().unwrap_or(vessel.head());
            return Err(PlacementError::Overlap(clash));
        }
        self.ship_cells = self.ship_cells | mask;
        self.blocked = self.blocked | self.blocked.mask(vessel.halo());
        log::debug!("deployed {:?}", vessel);
        self.vessels.push(vessel);
        Ok(())
    }

    /// Fire at `c` and report what happened.
    pub fn resolve_shot(&mut self, c: Coordinate) -> ShotOutcome {
        if self.is_out_of_bounds(c) {
            return ShotOutcome::OutOfBounds;
        }
        if self.fired.contains(c) {
            return ShotOutcome::AlreadyTried;
        }
        self.fired.insert(c);

        let hit = self
            .vessels
            .iter()
            .position(|v| !v.is_destroyed() && v.contains(c));
        let outcome = match hit {
            Some(idx) => {
                if self.vessels[idx].register_hit() {
                    self.destroyed += 1;
                    let halo = self.fired.mask(self.vessels[idx].halo());
                    self.fired = self.fired | halo;
                    ShotOutcome::Destroyed
                } else {
                    ShotOutcome::Damaged
                }
            }
            None => ShotOutcome::Missed,
        };
        log::debug!("shot at {} -> {:?}", c, outcome);
        outcome
    }

    /// Classification of `c` for rendering. Out-of-range cells read `Empty`.
    pub fn cell_state(&self, c: Coordinate) -> CellState {
        match (self.ship_cells.contains(c), self.fired.contains(c)) {
            (true, true) => CellState::Hit,
            (false, true) => CellState::Miss,
            (true, false) => CellState::ShipUnhit,
            (false, false) => CellState::Empty,
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{\n  size: {},\n  destroyed: {}/{},\n  vessels: {:?},\n  blocked: {:?},\n  fired: {:?}\n}}",
            self.size,
            self.destroyed,
            self.vessels.len(),
            self.vessels,
            self.blocked,
            self.fired
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vessel::Orientation;

    #[test]
    fn failed_deploy_leaves_grid_untouched() {
        let mut grid = Grid::new(6, true).unwrap();
        // second cell runs off the board
        let err = grid
            .deploy(Vessel::new(Coordinate::new(1, 6), 2, Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(err, PlacementError::OutOfBounds(Coordinate::new(1, 7)));
        assert!(grid.blocked_cells().is_empty());
        assert_eq!(grid.vessel_count(), 0);
    }

    #[test]
    fn halo_after_kill_reads_as_miss() {
        let mut grid = Grid::new(6, true).unwrap();
        grid.deploy(Vessel::new(Coordinate::new(3, 3), 1, Orientation::Vertical))
            .unwrap();
        assert_eq!(grid.resolve_shot(Coordinate::new(3, 3)), ShotOutcome::Destroyed);
        assert_eq!(grid.cell_state(Coordinate::new(3, 3)), CellState::Hit);
        assert_eq!(grid.cell_state(Coordinate::new(2, 2)), CellState::Miss);
        assert_eq!(grid.cell_state(Coordinate::new(4, 4)), CellState::Miss);
        assert_eq!(grid.cell_state(Coordinate::new(5, 5)), CellState::Empty);
        assert_eq!(grid.fired_count(), 9);
    }
}
