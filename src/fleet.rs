//! Random fleet deployment with bounded retries.

use rand::Rng;

use crate::common::PlacementError;
use crate::config::{GameConfig, FLEET_ATTEMPT_LIMIT, PLACEMENT_RETRY_BUDGET};
use crate::coord::Coordinate;
use crate::grid::Grid;
use crate::vessel::{Orientation, Vessel};

/// Deploy the whole of `config.fleet` onto a fresh grid.
///
/// One orientation is drawn per fleet attempt and shared by every vessel.
/// Each vessel is retried at random heads until it fits; once
/// [`PLACEMENT_RETRY_BUDGET`] retries have been spent the attempt is thrown
/// away and a new one starts from an empty grid.
pub fn deploy_fleet<R: Rng>(
    rng: &mut R,
    config: &GameConfig,
    reveal: bool,
) -> Result<Grid, PlacementError> {
    config.validate()?;
    for attempt in 1..=FLEET_ATTEMPT_LIMIT {
        if let Some(grid) = try_deploy_fleet(rng, config, reveal)? {
            log::debug!("fleet deployed on attempt {}", attempt);
            return Ok(grid);
        }
        log::info!("fleet attempt {} ran out of retries, starting over", attempt);
    }
    Err(PlacementError::FleetDoesNotFit {
        attempts: FLEET_ATTEMPT_LIMIT,
    })
}

/// A single fleet attempt. `Ok(None)` means the retry budget ran out.
fn try_deploy_fleet<R: Rng>(
    rng: &mut R,
    config: &GameConfig,
    reveal: bool,
) -> Result<Option<Grid>, PlacementError> {
    let mut grid = Grid::new(config.size, reveal)?;
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let mut tries = 0u32;
    for &length in &config.fleet {
        loop {
            if tries >= PLACEMENT_RETRY_BUDGET {
                return Ok(None);
            }
            tries += 1;
            let head = Coordinate::new(
                rng.random_range(1..=config.size),
                rng.random_range(1..=config.size),
            );
            match grid.deploy(Vessel::new(head, length, orientation)) {
                Ok(()) => break,
                Err(PlacementError::OutOfBounds(_)) | Err(PlacementError::Overlap(_)) => {}
                Err(e) => return Err(e),
            }
        }
    }
    Ok(Some(grid))
}
