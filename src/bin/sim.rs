use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{ComputerAgent, GameConfig, Match, ShotOutcome, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    sea_battle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let config = GameConfig::default();
    let size = config.size;
    let mut game = Match::new(config, ComputerAgent::new(size), ComputerAgent::new(size))?;
    game.start(&mut rng)?;

    let mut shots = [0usize; 2];
    let mut hits = [0usize; 2];
    let winner = game.run(&mut rng, |_, report| {
        let idx = match report.shooter {
            Side::Player => 0,
            Side::Computer => 1,
        };
        shots[idx] += 1;
        if matches!(
            report.shot.outcome,
            ShotOutcome::Damaged | ShotOutcome::Destroyed
        ) {
            hits[idx] += 1;
        }
    })?;

    let result = json!({
        "seed": seed,
        "winner": winner,
        "turns": game.turns(),
        "player": {
            "shots": shots[0],
            "hits": hits[0],
            "destroyed": game.computer_grid().destroyed_count(),
        },
        "computer": {
            "shots": shots[1],
            "hits": hits[1],
            "destroyed": game.player_grid().destroyed_count(),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
