use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    init_logging,
    ui::{describe_outcome, legend, render_grid},
    Agent, ComputerAgent, Console, GameConfig, InteractiveAgent, Match, MatchState, Side,
    TurnReport, DEFAULT_BOARD_SIZE, DEFAULT_FLEET, MAX_BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(
            long,
            default_value_t = DEFAULT_BOARD_SIZE,
            value_parser = clap::value_parser!(i32).range(1..=MAX_BOARD_SIZE as i64),
            help = "Board side length, from 1 to 11"
        )]
        size: i32,
    },
    /// Watch two computer agents play each other.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(
            long,
            default_value_t = DEFAULT_BOARD_SIZE,
            value_parser = clap::value_parser!(i32).range(1..=MAX_BOARD_SIZE as i64),
            help = "Board side length, from 1 to 11"
        )]
        size: i32,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn greetings() {
    println!("{}", "~".repeat(35));
    println!("   Welcome to Sea Battle!");
    println!("   Enter X Y to fire (row column)");
    println!("{}", "~".repeat(35));
}

fn print_boards<P: Agent, C: Agent>(game: &Match<P, C>, reveal_computer: bool) {
    println!("Player board:");
    println!("{}", render_grid(game.player_grid(), game.player_grid().reveal()));
    println!();
    let reveal = reveal_computer || game.computer_grid().reveal();
    println!("Computer board:");
    println!("{}", render_grid(game.computer_grid(), reveal));
    println!("{}", legend(reveal));
    println!();
}

fn print_report(report: &TurnReport) {
    let who = match report.shooter {
        Side::Player => "Player",
        Side::Computer => "Computer",
    };
    println!(
        "{} fires at {}: {}",
        who,
        report.shot.target,
        describe_outcome(report.shot.outcome)
    );
    match report.next {
        MatchState::PlayerTurn if report.shooter == Side::Computer => println!("Player's turn:"),
        MatchState::ComputerTurn if report.shooter == Side::Player => println!("Computer's turn:"),
        _ => {}
    }
}

fn play<P: Agent, C: Agent>(
    mut game: Match<P, C>,
    rng: &mut SmallRng,
    reveal_computer: bool,
) -> anyhow::Result<()> {
    game.start(rng)?;
    match game.state() {
        MatchState::PlayerTurn => println!("Player moves first:"),
        _ => println!("Computer moves first:"),
    }
    print_boards(&game, reveal_computer);
    let winner = game.run(rng, |game, report| {
        print_report(report);
        print_boards(game, reveal_computer);
    })?;
    match winner {
        Side::Player => println!("The player wins!"),
        Side::Computer => println!("The computer wins!"),
    }
    println!("{}", "~".repeat(20));
    print_boards(&game, true);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, size } => {
            let config = GameConfig::new(size, DEFAULT_FLEET.to_vec())?;
            let mut rng = make_rng(seed);
            greetings();
            let game = Match::new(
                config,
                InteractiveAgent::new(Console::stdio()),
                ComputerAgent::new(size),
            )?;
            play(game, &mut rng, false)
        }
        Commands::Watch { seed, size } => {
            let config = GameConfig::new(size, DEFAULT_FLEET.to_vec())?;
            let mut rng = make_rng(seed);
            let game = Match::new(config, ComputerAgent::new(size), ComputerAgent::new(size))?;
            play(game, &mut rng, true)
        }
    }
}
