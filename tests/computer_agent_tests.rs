use std::collections::HashSet;

use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{
    deploy_fleet, Agent, AgentError, ComputerAgent, Coordinate, GameConfig, Grid, Orientation,
    ShotOutcome, Vessel,
};

#[test]
fn test_single_cell_board() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut grid = Grid::new(1, false).unwrap();
    grid.deploy(Vessel::new(Coordinate::new(1, 1), 1, Orientation::Horizontal))
        .unwrap();
    let mut agent = ComputerAgent::new(1);

    let shot = agent.take_turn(&mut rng, &mut grid).unwrap();
    assert_eq!(shot.target, Coordinate::new(1, 1));
    assert_eq!(shot.outcome, ShotOutcome::Destroyed);
    assert!(!shot.fires_again);
    assert!(agent.remaining_candidates().is_empty());

    assert_eq!(
        agent.take_turn(&mut rng, &mut grid).unwrap_err(),
        AgentError::NoTargetsLeft
    );
}

#[test]
fn test_search_phase_consumes_one_candidate_per_shot() {
    let mut rng = SmallRng::seed_from_u64(5);
    // nothing to hit, so the agent stays in search mode
    let mut grid = Grid::new(6, false).unwrap();
    let mut agent = ComputerAgent::new(6);
    let mut seen = HashSet::new();

    for expected in (0..36).rev() {
        let shot = agent.take_turn(&mut rng, &mut grid).unwrap();
        assert_eq!(shot.outcome, ShotOutcome::Missed);
        assert!(!shot.fires_again);
        assert!(seen.insert(shot.target), "{} fired twice", shot.target);
        assert_eq!(agent.remaining_candidates().len(), expected);
    }
    assert!(agent.follow_ups().is_empty());
}

#[test]
fn test_damage_queues_neighbors_and_kill_clears_them() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut grid = Grid::new(6, false).unwrap();
    grid.deploy(Vessel::new(Coordinate::new(3, 2), 3, Orientation::Horizontal))
        .unwrap();
    let mut agent = ComputerAgent::new(6);

    let first_hit = loop {
        let shot = agent.take_turn(&mut rng, &mut grid).unwrap();
        if shot.outcome == ShotOutcome::Damaged {
            break shot;
        }
        assert_eq!(shot.outcome, ShotOutcome::Missed);
    };
    assert!(first_hit.fires_again);
    let expected: Vec<Coordinate> = first_hit.target.neighbors().collect();
    assert_eq!(agent.follow_ups(), expected.as_slice());

    // the agent keeps firing around the hit until the vessel goes down
    let mut guard = 0;
    loop {
        guard += 1;
        assert!(guard < 40, "follow-ups did not sink the vessel");
        let pool_before = agent.remaining_candidates().to_vec();
        let shot = agent.take_turn(&mut rng, &mut grid).unwrap();
        // a follow-up target leaves the search pool for good
        assert!(!agent.remaining_candidates().contains(&shot.target));
        let expected_len = if pool_before.contains(&shot.target) {
            pool_before.len() - 1
        } else {
            pool_before.len()
        };
        assert_eq!(agent.remaining_candidates().len(), expected_len);
        if shot.outcome == ShotOutcome::Destroyed {
            assert!(!shot.fires_again);
            break;
        }
        assert!(shot.fires_again || shot.outcome == ShotOutcome::Missed);
    }
    assert!(agent.follow_ups().is_empty());
    assert_eq!(grid.destroyed_count(), 1);
}

#[test]
fn test_repeat_outcomes_grant_another_shot() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut grid = Grid::new(2, false).unwrap();
    grid.deploy(Vessel::new(Coordinate::new(1, 1), 2, Orientation::Horizontal))
        .unwrap();
    let mut agent = ComputerAgent::new(2);

    let mut outcomes = Vec::new();
    while grid.destroyed_count() == 0 {
        let shot = agent.take_turn(&mut rng, &mut grid).unwrap();
        match shot.outcome {
            ShotOutcome::OutOfBounds | ShotOutcome::AlreadyTried | ShotOutcome::Damaged => {
                assert!(shot.fires_again)
            }
            ShotOutcome::Missed | ShotOutcome::Destroyed => assert!(!shot.fires_again),
        }
        outcomes.push(shot.outcome);
    }
    assert!(outcomes.len() <= 8);
}

#[test]
fn test_computer_sinks_a_whole_fleet() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut grid = deploy_fleet(&mut rng, &GameConfig::default(), false).unwrap();
    let mut agent = ComputerAgent::new(6);

    let mut shots = 0;
    while !grid.all_destroyed() {
        agent.take_turn(&mut rng, &mut grid).unwrap();
        shots += 1;
        // 36 cells plus at most 4 follow-ups per damaging hit
        assert!(shots <= 36 + 4 * 10);
    }
    assert_eq!(grid.destroyed_count(), 7);
}
