use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{AiTargeting, BattleGame, GameStatus, GridConfig, Player};
use serde_json::json;

/// Shots after which a simulated game is abandoned.
const MAX_TURNS: usize = 10_000;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let config = GridConfig::default();
    let p1 = Player::new(config, &mut rng1);
    let p2 = Player::new(config, &mut rng2);
    let mut game = BattleGame::new(p1, p2);
    let mut ai1 = AiTargeting::new();
    let mut ai2 = AiTargeting::new();

    let mut turns = 0;
    while game.status() == GameStatus::InProgress && turns < MAX_TURNS {
        turns += 1;
        if game.current() == 0 {
            game.take_turn(&mut ai1, &mut rng1)?;
        } else {
            game.take_turn(&mut ai2, &mut rng2)?;
        }
    }

    let winner = game.winner().map(|w| format!("player{}", w + 1));
    let result = json!({
        "player1": game.player(0).stats(),
        "player2": game.player(1).stats(),
        "turns": turns,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
