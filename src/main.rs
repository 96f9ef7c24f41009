use anyhow::bail;
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use planes::{
    init_logging, Cell, Console, GameEngine, Orientation, Winner, BOARD_SIZE, PLANES_PER_SIDE,
};

#[derive(Parser)]
#[command(author, version, about = "Planes: a hidden-planes guessing game", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the computer.
    Play {
        #[arg(long, help = "Fix the RNG seed for a reproducible game")]
        seed: Option<u64>,
    },
    /// Run automated games and report how many shots the computer needs.
    Sim {
        #[arg(long, default_value_t = 100)]
        games: u32,
        #[arg(long, help = "Fix the RNG seed for reproducible runs")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed } => {
            let engine = match seed {
                Some(s) => {
                    info!("using fixed seed {}", s);
                    GameEngine::from_seed(s)
                }
                None => GameEngine::new(),
            };
            Console::new(engine).run()
        }
        Commands::Sim { games, seed } => run_sim(games, seed),
    }
}

/// Pit the computer's targeting against randomly placed defending planes.
fn run_sim(games: u32, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let mut shots = Vec::with_capacity(games as usize);
    for game in 0..games {
        let mut engine = GameEngine::with_rng(SmallRng::seed_from_u64(rng.random()));
        place_random_defense(&mut engine, &mut rng);
        let mut taken = 0u32;
        loop {
            engine.computer_hit()?;
            taken += 1;
            if engine.winner() == Some(Winner::Computer) {
                break;
            }
            if taken > 200 {
                bail!("game {} did not finish", game);
            }
        }
        info!("game {}: computer won after {} shots", game, taken);
        shots.push(taken);
    }
    let min = shots.iter().min().copied().unwrap_or(0);
    let max = shots.iter().max().copied().unwrap_or(0);
    let avg = shots.iter().sum::<u32>() as f64 / shots.len().max(1) as f64;
    println!(
        "{} games: computer won in {:.1} shots on average (min {}, max {})",
        games, avg, min, max
    );
    Ok(())
}

/// Place two random valid planes for the defending side through the public
/// placement API, retrying rejected candidates.
fn place_random_defense(engine: &mut GameEngine, rng: &mut SmallRng) {
    let n = BOARD_SIZE as i8;
    let mut placed = 0;
    while placed < PLANES_PER_SIDE {
        let cabin = Cell::new(rng.random_range(0..n), rng.random_range(0..n));
        let orientation = Orientation::ALL[rng.random_range(0..Orientation::ALL.len())];
        if engine.add_player_plane(cabin, orientation).is_ok() {
            placed += 1;
        }
    }
}
