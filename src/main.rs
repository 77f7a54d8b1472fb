use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    deploy_interactively, init_logging, print_player_view, AiTargeting, BattleGame,
    CliTargeting, GameStatus, GridConfig, Player, DEFAULT_GRID_SIZE, MIN_GRID_SIZE,
};

/// Columns are labelled with single letters.
const MAX_GRID_SIZE: usize = 26;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Copy)]
struct GridArgs {
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE, value_parser = parse_side)]
    width: usize,
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE, value_parser = parse_side)]
    height: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch two computer players fight it out.
    Local {
        #[command(flatten)]
        grid: GridArgs,
    },
    /// Play against the computer on the command line.
    Play {
        #[command(flatten)]
        grid: GridArgs,
        #[arg(long, help = "Place your ships by hand instead of at random")]
        manual: bool,
    },
}

fn parse_side(value: &str) -> Result<usize, String> {
    let side: usize = value.parse().map_err(|e| format!("{}", e))?;
    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&side) {
        return Err(format!(
            "grid side must be between {} and {}",
            MIN_GRID_SIZE, MAX_GRID_SIZE
        ));
    }
    Ok(side)
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

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local { grid } => {
            let config = GridConfig::new(grid.width, grid.height)?;
            let mut rng = make_rng(grid.seed);
            let first = Player::new(config, &mut rng);
            let second = Player::new(config, &mut rng);
            let mut game = BattleGame::new(first, second);
            let mut strategies = [AiTargeting::new(), AiTargeting::new()];

            while game.status() == GameStatus::InProgress {
                let current = game.current();
                let result = game.take_turn(&mut strategies[current], &mut rng)?;
                println!("Player {} {}", current + 1, result);
            }
            report(&game);
        }
        Commands::Play { grid, manual } => {
            let config = GridConfig::new(grid.width, grid.height)?;
            let mut rng = make_rng(grid.seed);
            let human = if manual {
                let mut player = Player::undeployed(config);
                if !deploy_interactively(&mut player, &mut rng) {
                    anyhow::bail!("input ended before all ships were placed");
                }
                player
            } else {
                Player::new(config, &mut rng)
            };
            let computer = Player::new(config, &mut rng);
            let mut game = BattleGame::new(human, computer);
            let mut you = CliTargeting::new();
            let mut ai = AiTargeting::new();

            while game.status() == GameStatus::InProgress {
                if game.current() == 0 {
                    print_player_view(game.player(0));
                    game.take_turn(&mut you, &mut rng)?;
                } else {
                    let result = game.take_turn(&mut ai, &mut rng)?;
                    println!("Computer {}", result);
                }
            }
            print_player_view(game.player(0));
            report(&game);
        }
    }
    Ok(())
}

fn report(game: &BattleGame) {
    if let Some(winner) = game.winner() {
        println!("\nGAME OVER: player {} wins", winner + 1);
    }
    for (i, player) in game.players().iter().enumerate() {
        let stats = player.stats();
        println!(
            "Player {}: shots {}, hits {}, misses {}, ships lost {}, score {}",
            i + 1,
            stats.shots,
            stats.hits,
            stats.misses,
            stats.ships_lost,
            stats.score
        );
    }
}
