//! Balance-equation assembly for the solo and duel chains.
//!
//! A [`LinearSystem`] keeps one sparse row store per unknown plus, for each
//! column, a mirror store of that column's above-diagonal entries. The
//! mirror lets elimination find every row still referencing a pivot column
//! without scanning all rows. Mirror invariant: for `r < c < row_count`,
//! `rows[r]` has an entry at `c` iff `columns[c]` has an entry at `r`, with
//! equal values. Both sides are only ever written through
//! [`LinearSystem::accumulate`], so the invariant cannot be observed broken.
//!
//! Both systems are built un-normalized: each equation is scaled by the
//! spinner size `N` so every coefficient is a small integer, and the single
//! division happens at the end of elimination.
//!
//! - **Solo** (`build_solo_system`): one state per stopping square. Row `i`
//!   encodes `N·E[i] - Σ E[dest] = N` over the non-finishing spin outcomes,
//!   i.e. `E[i] = 1 + (1/N)·Σ E[dest]` with finishing outcomes contributing
//!   zero. Row 0 solves to the expected number of spins from the start.
//! - **Duel** (`build_duel_system`): one state per (mover, opponent) square
//!   pair, flattened by [`pair_index`]. Row `(i, j)` encodes
//!   `N·W[i,j] + Σ W[j, dest] = N`: a spin that does not finish hands the
//!   turn over, and the mover's winning odds are the complement of the
//!   opponent's from the successor state. Row 0 solves to the probability
//!   that the player about to move wins when both sit on the start.

use std::collections::HashMap;

use num::BigInt;

use crate::board::Board;
use crate::sparse::SparseVec;
use crate::Ratio;

/// Flatten a (mover, opponent) pair of stopping-square indices.
#[inline(always)]
pub fn pair_index(i: usize, j: usize, len: usize) -> usize {
    i * len + j
}

/// Sparse linear system with an augmented results column at key
/// `row_count`.
pub struct LinearSystem {
    /// All nonzero entries of each row, diagonal and results entry included.
    pub rows: Vec<SparseVec>,
    /// Above-diagonal mirror of each column: `columns[c]` holds the rows
    /// `r < c` that have a nonzero at column `c`.
    pub columns: Vec<SparseVec>,
    pub row_count: usize,
}

impl LinearSystem {
    pub fn new(row_count: usize) -> Self {
        LinearSystem {
            rows: (0..row_count).map(|_| SparseVec::new()).collect(),
            columns: (0..row_count).map(|_| SparseVec::new()).collect(),
            row_count,
        }
    }

    /// Key of the augmented results column.
    pub fn results_column(&self) -> usize {
        self.row_count
    }

    pub fn set_diagonal(&mut self, row: usize, value: Ratio) {
        self.rows[row].set(row, value);
    }

    pub fn set_result(&mut self, row: usize, value: Ratio) {
        let column = self.row_count;
        self.rows[row].set(column, value);
    }

    /// Add `delta` to entry (`row`, `column`), keeping the column mirror in
    /// lockstep when the entry lies in the mirrored region.
    pub fn accumulate(&mut self, row: usize, column: usize, delta: Ratio) {
        if row < column && column < self.row_count {
            self.columns[column].accumulate(row, delta.clone());
        }
        self.rows[row].accumulate(column, delta);
    }
}

fn ratio(value: i64) -> Ratio {
    Ratio::from_integer(BigInt::from(value))
}

/// Per-square spin outcomes: `outcomes[i][s]` is the destination
/// stopping-square index for spin `s + 1` from square `i`, or `None` when
/// that spin finishes the game. Overshooting the end leaves the player on
/// square `i`.
fn spin_outcomes(board: &Board, squares: &[i32]) -> Vec<Vec<Option<usize>>> {
    let index: HashMap<i32, usize> = squares
        .iter()
        .enumerate()
        .map(|(i, &square)| (square, i))
        .collect();
    squares
        .iter()
        .enumerate()
        .map(|(i, &square)| {
            (1..=board.spin_size())
                .map(|spin| {
                    let land = square + spin;
                    if land > board.end() {
                        return Some(i);
                    }
                    let dest = board.resolve_jump(land);
                    if dest == board.end() {
                        None
                    } else {
                        Some(index[&dest])
                    }
                })
                .collect()
        })
        .collect()
}

/// Build the single-player expected-spins system: `row_count` equals the
/// number of stopping squares.
pub fn build_solo_system(board: &Board) -> LinearSystem {
    let squares = board.stopping_squares();
    let outcomes = spin_outcomes(board, &squares);
    let spin_size = i64::from(board.spin_size());

    let mut system = LinearSystem::new(squares.len());
    for (i, dests) in outcomes.iter().enumerate() {
        system.set_diagonal(i, ratio(spin_size));
        for dest in dests {
            if let Some(d) = dest {
                system.accumulate(i, *d, ratio(-1));
            }
        }
        system.set_result(i, ratio(spin_size));
    }
    system
}

/// Build the two-player alternating-game system: `row_count` equals the
/// squared number of stopping squares. The column `pair_index(j, new_i)`
/// swaps mover and opponent, threading the turn handover.
pub fn build_duel_system(board: &Board) -> LinearSystem {
    let squares = board.stopping_squares();
    let outcomes = spin_outcomes(board, &squares);
    let len = squares.len();
    let spin_size = i64::from(board.spin_size());

    let mut system = LinearSystem::new(len * len);
    for (i, dests) in outcomes.iter().enumerate() {
        for j in 0..len {
            let row = pair_index(i, j, len);
            system.set_diagonal(row, ratio(spin_size));
            for dest in dests {
                if let Some(new_i) = dest {
                    system.accumulate(row, pair_index(j, *new_i, len), ratio(1));
                }
            }
            system.set_result(row, ratio(spin_size));
        }
    }
    system
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solo_single_square() {
        // One stopping square, spinner 1: the only spin finishes.
        let board = Board::new(0, 1, 1, []).unwrap();
        let system = build_solo_system(&board);
        assert_eq!(system.row_count, 1);
        assert_eq!(system.rows[0].get(0), Some(&ratio(1)));
        assert_eq!(system.rows[0].get(1), Some(&ratio(1)));
        assert_eq!(system.rows[0].len(), 2);
    }

    #[test]
    fn solo_overshoot_lands_on_diagonal() {
        // One stopping square, spinner 6: one finishing spin, five wasted.
        let board = Board::new(0, 1, 6, []).unwrap();
        let system = build_solo_system(&board);
        assert_eq!(system.rows[0].get(0), Some(&ratio(1)));
        assert_eq!(system.rows[0].get(1), Some(&ratio(6)));
    }

    #[test]
    fn duel_mirrors_above_diagonal_entries() {
        let board = Board::new(0, 3, 2, []).unwrap();
        let system = build_duel_system(&board);
        assert_eq!(system.row_count, 9);
        for column in 0..system.row_count {
            for (&row, value) in system.columns[column].iter() {
                assert!(row < column);
                assert_eq!(system.rows[row].get(column), Some(value));
            }
        }
    }

    #[test]
    fn duel_row_shape() {
        // Squares 0, 1, 2; spinner 2. From square 0 both spins stay on the
        // board, so row (0, 0) carries the diagonal, two transition counts,
        // and the results entry.
        let board = Board::new(0, 3, 2, []).unwrap();
        let system = build_duel_system(&board);
        let row = &system.rows[0];
        assert_eq!(row.get(0), Some(&ratio(2)));
        assert_eq!(row.get(system.results_column()), Some(&ratio(2)));
        // spin 1 -> square 1 gives column (0, 1); spin 2 -> square 2 gives
        // column (0, 2)
        assert_eq!(row.get(pair_index(0, 1, 3)), Some(&ratio(1)));
        assert_eq!(row.get(pair_index(0, 2, 3)), Some(&ratio(1)));
    }
}
