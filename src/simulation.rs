//! Monte Carlo play-outs, used to sanity-check the exact solver.
//!
//! Mirrors the two exact questions: [`simulate_solo`] measures the
//! spin-count distribution of a single player, [`simulate_duel`] the
//! empirical win rate of the first of two alternating players. Batches are
//! seeded and reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;

/// Spin-count statistics over a batch of solo games.
#[derive(Clone, Debug)]
pub struct SoloSummary {
    pub games: usize,
    pub mean_spins: f64,
    pub std_dev: f64,
    pub min_spins: u64,
    pub max_spins: u64,
}

/// First-player results over a batch of alternating two-player games.
#[derive(Clone, Debug)]
pub struct DuelSummary {
    pub games: usize,
    pub first_player_wins: usize,
    pub win_rate: f64,
}

#[inline(always)]
fn spin(board: &Board, rng: &mut SmallRng) -> i32 {
    rng.random_range(1..=board.spin_size())
}

/// Play one solo game; returns the number of spins taken to reach the end.
pub fn play_solo(board: &Board, rng: &mut SmallRng) -> u64 {
    let mut current = board.start();
    let mut spins = 0u64;
    while current != board.end() {
        current = board.move_from(current, spin(board, rng));
        spins += 1;
    }
    spins
}

/// Play one alternating two-player game; returns whether the first player
/// reached the end first.
pub fn play_duel(board: &Board, rng: &mut SmallRng) -> bool {
    let mut first = board.start();
    let mut second = board.start();
    loop {
        first = board.move_from(first, spin(board, rng));
        if first == board.end() {
            return true;
        }
        second = board.move_from(second, spin(board, rng));
        if second == board.end() {
            return false;
        }
    }
}

/// Run `games` seeded solo games and aggregate spin-count statistics.
pub fn simulate_solo(board: &Board, games: usize, seed: u64) -> SoloSummary {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut spins = Vec::with_capacity(games);
    for _ in 0..games {
        spins.push(play_solo(board, &mut rng));
    }

    let mean = spins.iter().sum::<u64>() as f64 / games as f64;
    let variance = spins
        .iter()
        .map(|&count| {
            let delta = count as f64 - mean;
            delta * delta
        })
        .sum::<f64>()
        / games as f64;

    SoloSummary {
        games,
        mean_spins: mean,
        std_dev: variance.sqrt(),
        min_spins: spins.iter().copied().min().unwrap_or(0),
        max_spins: spins.iter().copied().max().unwrap_or(0),
    }
}

/// Run `games` seeded alternating games and count first-player wins.
pub fn simulate_duel(board: &Board, games: usize, seed: u64) -> DuelSummary {
    let mut rng = SmallRng::seed_from_u64(seed);
    let first_player_wins = (0..games).filter(|_| play_duel(board, &mut rng)).count();
    DuelSummary {
        games,
        first_player_wins,
        win_rate: first_player_wins as f64 / games as f64,
    }
}
