//! Monte Carlo check of the exact solver.
//!
//! Usage: simulate [--board FILE] [--games N] [--seed S]
//!
//! Plays N seeded solo and duel games and prints the empirical numbers next
//! to the exact ones.

use std::time::Instant;

use chutes::simulation::{simulate_duel, simulate_solo};
use chutes::{expected_spins, first_player_win_probability, ratio_to_f64, Board};

struct Args {
    board_path: Option<String>,
    games: usize,
    seed: u64,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut board_path = None;
    let mut games = 100_000usize;
    let mut seed = 42u64;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--board" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("--board requires a file path");
                    std::process::exit(1);
                }
                board_path = Some(args[i].clone());
            }
            "--games" => {
                i += 1;
                games = args.get(i).and_then(|v| v.parse().ok()).unwrap_or_else(|| {
                    eprintln!("Invalid --games value");
                    std::process::exit(1);
                });
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse().ok()).unwrap_or_else(|| {
                    eprintln!("Invalid --seed value");
                    std::process::exit(1);
                });
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: simulate [--board FILE] [--games N] [--seed S]");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        board_path,
        games,
        seed,
    }
}

fn load_board(path: Option<&str>) -> Board {
    match path {
        None => Board::standard(),
        Some(path) => {
            let text = std::fs::read_to_string(path).unwrap_or_else(|error| {
                eprintln!("Failed to read {}: {}", path, error);
                std::process::exit(1);
            });
            text.parse().unwrap_or_else(|error| {
                eprintln!("Invalid board {}: {}", path, error);
                std::process::exit(1);
            })
        }
    }
}

fn main() {
    let args = parse_args();
    let board = load_board(args.board_path.as_deref());

    println!(
        "Board {}..{} | spinner {} | {} jumps | {} games | seed {}",
        board.start(),
        board.end(),
        board.spin_size(),
        board.jumps().count(),
        args.games,
        args.seed
    );

    let exact_spins = expected_spins(&board).unwrap_or_else(|error| {
        eprintln!("Solve failed: {}", error);
        std::process::exit(1);
    });

    let start = Instant::now();
    let solo = simulate_solo(&board, args.games, args.seed);
    println!(
        "Solo:  mean {:.4} spins (exact {:.4}) | std dev {:.4} | range {}..{} | {:.2}s",
        solo.mean_spins,
        ratio_to_f64(&exact_spins),
        solo.std_dev,
        solo.min_spins,
        solo.max_spins,
        start.elapsed().as_secs_f64()
    );

    let start = Instant::now();
    let duel = simulate_duel(&board, args.games, args.seed);
    println!(
        "Duel:  first player won {}/{} = {:.5} | {:.2}s",
        duel.first_player_wins,
        duel.games,
        duel.win_rate,
        start.elapsed().as_secs_f64()
    );
    // The exact duel solve is quadratic in board size; only run it where it
    // is cheap enough to be a useful cross-check.
    if board.stopping_squares().len() <= 15 {
        match first_player_win_probability(&board) {
            Ok(win) => println!("       exact {:.5}", ratio_to_f64(&win)),
            Err(error) => {
                eprintln!("Solve failed: {}", error);
                std::process::exit(1);
            }
        }
    }
}
