#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::attack::AttackResult;
use crate::grid::TileView;
use crate::player::{Player, Targeting};
use crate::player_ai::AiTargeting;
use crate::ship::{Heading, ShipKind};
use crate::view::SeaView;

/// Human player typing coordinates such as `B7` on standard input. An empty
/// line accepts the suggested random target.
#[derive(Debug, Default)]
pub struct CliTargeting {
    suggestions: AiTargeting,
}

impl CliTargeting {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Render a coordinate as column letter plus one-based row, e.g. `C4`.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let letter = (b'A' + col as u8) as char;
    std::format!("{}{}", letter, row + 1)
}

/// Parse a coordinate typed as column letter plus one-based row.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let mut chars = input.trim().chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return None;
    }
    let col = (letter as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

/// Parse a placement such as `A5 V`; the heading defaults to left-right.
pub fn parse_placement(input: &str) -> Option<(usize, usize, Heading)> {
    let mut parts = input.split_whitespace();
    let (row, col) = parse_coord(parts.next()?)?;
    let heading = match parts.next().and_then(|p| p.chars().next()) {
        Some('v') | Some('V') => Heading::UpDown,
        Some('h') | Some('H') | None => Heading::LeftRight,
        Some(_) => return None,
    };
    Some((row, col, heading))
}

fn tile_char(view: TileView) -> char {
    match view {
        TileView::Sea => '.',
        TileView::Miss => 'o',
        TileView::Ship => 'S',
        TileView::Hit => 'X',
    }
}

fn print_header(width: usize) {
    std::print!("   ");
    for c in 0..width {
        std::print!(" {}", (b'A' + c as u8) as char);
    }
    std::println!();
}

fn print_own_grid(player: &Player) {
    let grid = player.grid();
    print_header(grid.width());
    for r in 0..grid.height() {
        std::print!("{:2} ", r + 1);
        for c in 0..grid.width() {
            let ch = grid.tile(r, c).map(tile_char).unwrap_or('?');
            std::print!(" {}", ch);
        }
        std::println!();
    }
}

fn print_enemy_grid(view: &SeaView) {
    print_header(view.width());
    for r in 0..view.height() {
        std::print!("{:2} ", r + 1);
        for c in 0..view.width() {
            let ch = view.tile(r, c).map(tile_char).unwrap_or('?');
            std::print!(" {}", ch);
        }
        std::println!();
    }
}

/// Display the opponent grid (top), the player's grid (bottom) and the HUD.
pub fn print_player_view(player: &Player) {
    if let Some(enemy) = player.enemy() {
        std::println!("Opponent grid:");
        print_enemy_grid(enemy);
    }
    std::println!("\nYour grid:");
    print_own_grid(player);
    let stats = player.stats();
    std::println!(
        "Shots: {}  Hits: {}  Misses: {}  Score: {}",
        stats.shots,
        stats.hits,
        stats.misses,
        stats.score
    );
}

fn read_line() -> Option<String> {
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Let the user place each ship; an empty line places the current one at
/// random. Returns `false` if input ended before the fleet was complete.
pub fn deploy_interactively(player: &mut Player, rng: &mut SmallRng) -> bool {
    std::println!("Place your ships (e.g. A5 V). Press enter for random placement.");
    for kind in ShipKind::ALL {
        loop {
            print_own_grid(player);
            std::print!("Place {} (length {}): ", kind, kind.length());
            let Some(line) = read_line() else {
                return false;
            };
            if line.is_empty() {
                player.place_randomly(kind, rng);
                break;
            }
            match parse_placement(&line) {
                Some((r, c, heading)) => match player.move_ship(r, c, kind, heading) {
                    Ok(()) => break,
                    Err(e) => std::println!("Invalid placement, try again: {}", e),
                },
                None => std::println!("Invalid input"),
            }
        }
    }
    true
}

impl Targeting for CliTargeting {
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &SeaView) -> Option<(usize, usize)> {
        let suggestion = self.suggestions.select_target(rng, enemy);
        loop {
            match suggestion {
                Some((r, c)) => std::print!("Enter target [{}]: ", coord_to_string(r, c)),
                None => std::print!("Enter target: "),
            }
            let line = read_line()?;
            if line.is_empty() {
                if suggestion.is_some() {
                    return suggestion;
                }
                continue;
            }
            match parse_coord(&line) {
                Some((r, c)) if enemy.contains(r, c) => return Some((r, c)),
                _ => std::println!("Invalid coordinate"),
            }
        }
    }

    fn handle_attack_result(&mut self, result: &AttackResult) {
        std::println!(
            "You shot {} and {}",
            coord_to_string(result.row(), result.col()),
            result
        );
    }
}
