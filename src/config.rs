use alloc::vec::Vec;

use crate::cellset::Cells;
use crate::common::ConfigError;

pub const DEFAULT_BOARD_SIZE: i32 = 6;
pub const DEFAULT_FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Placement retries allowed per fleet attempt before starting over.
pub const PLACEMENT_RETRY_BUDGET: u32 = 2000;

/// Fleet attempts before the generator gives up on a custom fleet.
pub const FLEET_ATTEMPT_LIMIT: u32 = 10_000;

/// Largest board side the grid's cell sets can hold.
pub const MAX_BOARD_SIZE: i32 = 11;

/// Board side and vessel lengths for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: i32,
    pub fleet: Vec<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            fleet: DEFAULT_FLEET.to_vec(),
        }
    }
}

impl GameConfig {
    pub fn new(size: i32, fleet: Vec<usize>) -> Result<Self, ConfigError> {
        let config = Self { size, fleet };
        config.validate()?;
        Ok(config)
    }

    /// Check the board fits the cell sets and the fleet could fit the board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 1 || self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidBoardSize {
                size: self.size,
                max: MAX_BOARD_SIZE,
            });
        }
        // a board that fits MAX_BOARD_SIZE always fits the cell set
        Cells::try_new(self.size)?;
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if let Some(&length) = self
            .fleet
            .iter()
            .find(|&&l| l == 0 || l > self.size as usize)
        {
            return Err(ConfigError::InvalidVesselLength {
                length,
                size: self.size,
            });
        }
        let cells: usize = self.fleet.iter().sum();
        let capacity = (self.size * self.size) as usize;
        if cells > capacity {
            return Err(ConfigError::FleetTooLarge { cells, capacity });
        }
        Ok(())
    }

    /// Number of vessels a side must lose to be defeated.
    pub fn vessel_count(&self) -> usize {
        self.fleet.len()
    }
}
