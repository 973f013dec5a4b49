//! Expected spins across a range of spinner sizes, solved in parallel.
//!
//! Usage: sweep [--board FILE] [--max-spin N]
//!
//! Each spinner size is an independent exact solve, so the sweep fans out
//! across threads; elimination itself stays sequential within each solve.

use rayon::prelude::*;

use chutes::{expected_spins, ratio_to_f64, Board, BoardError};

struct Args {
    board_path: Option<String>,
    max_spin: i32,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut board_path = None;
    let mut max_spin = 12i32;

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
            "--max-spin" => {
                i += 1;
                max_spin = args.get(i).and_then(|v| v.parse().ok()).unwrap_or_else(|| {
                    eprintln!("Invalid --max-spin value");
                    std::process::exit(1);
                });
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: sweep [--board FILE] [--max-spin N]");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if max_spin < 1 {
        eprintln!("--max-spin must be at least 1");
        std::process::exit(1);
    }

    Args {
        board_path,
        max_spin,
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
    let base = load_board(args.board_path.as_deref());
    let jumps: Vec<(i32, i32)> = base.jumps().collect();

    let results: Result<Vec<_>, BoardError> = (1..=args.max_spin)
        .into_par_iter()
        .map(|spin_size| {
            let board = Board::new(base.start(), base.end(), spin_size, jumps.clone())?;
            let spins = expected_spins(&board).unwrap_or_else(|error| {
                eprintln!("Solve failed for spinner {}: {}", spin_size, error);
                std::process::exit(1);
            });
            Ok((spin_size, spins))
        })
        .collect();

    let results = results.unwrap_or_else(|error| {
        eprintln!("Invalid board in sweep: {}", error);
        std::process::exit(1);
    });

    println!(
        "Board {}..{} | {} jumps",
        base.start(),
        base.end(),
        jumps.len()
    );
    println!("Spinner | Expected spins");
    println!("--------|---------------");
    for (spin_size, spins) in results {
        println!("  {:5} | {:.6}", spin_size, ratio_to_f64(&spins));
    }
}
