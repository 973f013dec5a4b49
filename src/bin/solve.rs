//! Exact solve of a board: expected spins and, on request, the
//! first-player win probability.
//!
//! Usage: solve [--board FILE] [--duel] [--json]
//!
//! Without `--board` the standard 0..100 board is used. `FILE` is the
//! plain-text board format (start, end, spin_size, then one `from to` pair
//! per line). `--duel` additionally solves the two-player system, which on
//! the standard board means 6561 unknowns and a noticeably longer run.

use serde::Serialize;

use chutes::{expected_spins, first_player_win_probability, ratio_to_f64, Board};

struct Args {
    board_path: Option<String>,
    duel: bool,
    json: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut board_path = None;
    let mut duel = false;
    let mut json = false;

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
            "--duel" => duel = true,
            "--json" => json = true,
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: solve [--board FILE] [--duel] [--json]");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        board_path,
        duel,
        json,
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

#[derive(Serialize)]
struct SolveReport {
    start: i32,
    end: i32,
    spin_size: i32,
    jump_count: usize,
    expected_spins: String,
    expected_spins_approx: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_player_win: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_player_win_approx: Option<f64>,
}

fn main() {
    let args = parse_args();
    let board = load_board(args.board_path.as_deref());

    let spins = expected_spins(&board).unwrap_or_else(|error| {
        eprintln!("Solve failed: {}", error);
        std::process::exit(1);
    });

    let win = if args.duel {
        Some(first_player_win_probability(&board).unwrap_or_else(|error| {
            eprintln!("Solve failed: {}", error);
            std::process::exit(1);
        }))
    } else {
        None
    };

    if args.json {
        let report = SolveReport {
            start: board.start(),
            end: board.end(),
            spin_size: board.spin_size(),
            jump_count: board.jumps().count(),
            expected_spins: spins.to_string(),
            expected_spins_approx: ratio_to_f64(&spins),
            first_player_win: win.as_ref().map(|value| value.to_string()),
            first_player_win_approx: win.as_ref().map(ratio_to_f64),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(error) => {
                eprintln!("Failed to encode report: {}", error);
                std::process::exit(1);
            }
        }
        return;
    }

    println!(
        "Board {}..{} | spinner {} | {} jumps",
        board.start(),
        board.end(),
        board.spin_size(),
        board.jumps().count()
    );
    println!("Expected spins: {}", spins);
    println!("              ~ {:.6}", ratio_to_f64(&spins));
    if let Some(win) = win {
        println!("First player win probability: {}", win);
        println!("                            ~ {:.6}", ratio_to_f64(&win));
    }
}
