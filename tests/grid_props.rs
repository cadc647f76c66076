use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{
    deploy_fleet, Coordinate, GameConfig, Grid, Orientation, ShotOutcome, Vessel,
    DEFAULT_BOARD_SIZE,
};

fn random_grid(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    deploy_fleet(&mut rng, &GameConfig::default(), true).unwrap()
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn out_of_bounds_matches_range(x in -3i32..10, y in -3i32..10) {
        let grid = Grid::new(DEFAULT_BOARD_SIZE, false).unwrap();
        let inside = (1..=DEFAULT_BOARD_SIZE).contains(&x) && (1..=DEFAULT_BOARD_SIZE).contains(&y);
        prop_assert_eq!(grid.is_out_of_bounds(Coordinate::new(x, y)), !inside);
    }

    #[test]
    fn fleet_vessels_never_touch(seed in any::<u64>()) {
        let grid = random_grid(seed);
        let vessels = grid.vessels();
        prop_assert_eq!(vessels.len(), 7);
        for v in vessels {
            for cell in v.cells() {
                prop_assert!(!grid.is_out_of_bounds(cell));
                prop_assert!(grid.is_blocked(cell));
            }
        }
        for (i, a) in vessels.iter().enumerate() {
            for b in &vessels[i + 1..] {
                for cell in b.cells() {
                    // neither overlap nor inside a's halo
                    prop_assert!(!a.halo().any(|h| h == cell));
                }
            }
        }
    }

    #[test]
    fn deploy_is_all_or_nothing(
        seed in any::<u64>(),
        x in 1i32..=6,
        y in 1i32..=6,
        len in 1usize..=4,
        o in orientation(),
    ) {
        let mut grid = random_grid(seed);
        let before = grid.blocked_cells();
        let count = grid.vessel_count();
        if grid.deploy(Vessel::new(Coordinate::new(x, y), len, o)).is_err() {
            prop_assert_eq!(grid.blocked_cells(), before);
            prop_assert_eq!(grid.vessel_count(), count);
        } else {
            prop_assert_eq!(grid.vessel_count(), count + 1);
        }
    }

    #[test]
    fn repeat_shot_is_idempotent(seed in any::<u64>(), x in 1i32..=6, y in 1i32..=6) {
        let mut grid = random_grid(seed);
        let target = Coordinate::new(x, y);
        let first = grid.resolve_shot(target);
        prop_assert!(first.is_resolved());
        let remaining: Vec<usize> = grid.vessels().iter().map(|v| v.remaining_hits()).collect();
        let destroyed = grid.destroyed_count();
        let fired = grid.fired_count();

        prop_assert_eq!(grid.resolve_shot(target), ShotOutcome::AlreadyTried);
        let after: Vec<usize> = grid.vessels().iter().map(|v| v.remaining_hits()).collect();
        prop_assert_eq!(remaining, after);
        prop_assert_eq!(grid.destroyed_count(), destroyed);
        prop_assert_eq!(grid.fired_count(), fired);
    }

    #[test]
    fn vessel_dies_on_its_last_cell(seed in any::<u64>(), pick in 0usize..7) {
        let mut grid = random_grid(seed);
        let vessel = grid.vessels()[pick];
        let cells: Vec<Coordinate> = vessel.cells().collect();
        for (i, &cell) in cells.iter().enumerate() {
            let outcome = grid.resolve_shot(cell);
            if i + 1 == cells.len() {
                prop_assert_eq!(outcome, ShotOutcome::Destroyed);
            } else {
                prop_assert_eq!(outcome, ShotOutcome::Damaged);
            }
        }
        prop_assert_eq!(grid.destroyed_count(), 1);
        prop_assert!(grid.vessels()[pick].is_destroyed());
    }

    #[test]
    fn shooting_every_cell_sinks_the_fleet(seed in any::<u64>()) {
        let mut grid = random_grid(seed);
        let cells: Vec<Coordinate> = grid.vessels().iter().flat_map(|v| v.cells()).collect();
        for cell in cells {
            prop_assert!(matches!(
                grid.resolve_shot(cell),
                ShotOutcome::Damaged | ShotOutcome::Destroyed
            ));
        }
        prop_assert_eq!(grid.destroyed_count(), 7);
        prop_assert!(grid.all_destroyed());
    }
}
