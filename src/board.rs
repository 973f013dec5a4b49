//! Board configuration: range, spinner, and jump rules.
//!
//! A [`Board`] is an explicit, validated record. Construction rejects every
//! malformed configuration (duplicate or chained jumps, rules anchored on
//! the boundary squares, squares from which the end can never be reached)
//! so the solvers downstream only ever see boards whose linear systems are
//! well formed.
//!
//! Move semantics: a spin landing past the end is wasted (the player stays
//! put); a spin landing on a jump source is redirected exactly once; a spin
//! resolving to the end square finishes the game.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{BOARD_END, BOARD_START, SPIN_SIZE, STANDARD_JUMPS};

/// Rejected board configurations. All of these are caught up front, before
/// any matrix is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board range {start}..{end} is empty")]
    InvalidRange { start: i32, end: i32 },

    #[error("spinner must have at least one face, got {0}")]
    InvalidSpinner(i32),

    #[error("jump {from} -> {to} leaves the board {start}..={end}")]
    JumpOutOfRange {
        from: i32,
        to: i32,
        start: i32,
        end: i32,
    },

    #[error("multiple jumps from square {0}")]
    DuplicateJump(i32),

    #[error("jumps chain through square {0}")]
    ChainedJump(i32),

    #[error("jump anchored at boundary square {0}")]
    JumpAtBoundary(i32),

    #[error("square {0} can never reach the end")]
    UnreachableEnd(i32),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// A validated chutes-and-ladders board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct Board {
    start: i32,
    end: i32,
    spin_size: i32,
    jumps: BTreeMap<i32, i32>,
}

/// Serde-facing shape of a board file; converted through [`Board::new`] so
/// deserialized boards are validated like any other.
#[derive(Clone, Serialize, Deserialize)]
struct RawBoard {
    start: i32,
    end: i32,
    spin_size: i32,
    jumps: Vec<(i32, i32)>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, BoardError> {
        Board::new(raw.start, raw.end, raw.spin_size, raw.jumps)
    }
}

impl From<Board> for RawBoard {
    fn from(board: Board) -> Self {
        RawBoard {
            start: board.start,
            end: board.end,
            spin_size: board.spin_size,
            jumps: board.jumps.into_iter().collect(),
        }
    }
}

impl Board {
    /// Validate and build a board.
    pub fn new(
        start: i32,
        end: i32,
        spin_size: i32,
        jumps: impl IntoIterator<Item = (i32, i32)>,
    ) -> Result<Self, BoardError> {
        if start >= end {
            return Err(BoardError::InvalidRange { start, end });
        }
        if spin_size < 1 {
            return Err(BoardError::InvalidSpinner(spin_size));
        }

        let mut table = BTreeMap::new();
        let mut targets = BTreeSet::new();
        for (from, to) in jumps {
            if from < start || from > end || to < start || to > end {
                return Err(BoardError::JumpOutOfRange {
                    from,
                    to,
                    start,
                    end,
                });
            }
            if from == start || from == end {
                return Err(BoardError::JumpAtBoundary(from));
            }
            if table.insert(from, to).is_some() {
                return Err(BoardError::DuplicateJump(from));
            }
            targets.insert(to);
        }
        for (&from, &to) in &table {
            if table.contains_key(&to) {
                return Err(BoardError::ChainedJump(to));
            }
            if targets.contains(&from) {
                return Err(BoardError::ChainedJump(from));
            }
        }

        let board = Board {
            start,
            end,
            spin_size,
            jumps: table,
        };
        board.check_end_reachable()?;
        Ok(board)
    }

    /// The classic 0..100 board with a 6-way spinner and 19 jump rules.
    pub fn standard() -> Self {
        Board::new(BOARD_START, BOARD_END, SPIN_SIZE, STANDARD_JUMPS)
            .expect("standard board table is valid")
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn spin_size(&self) -> i32 {
        self.spin_size
    }

    /// Jump rules as (from, to) pairs, in source order.
    pub fn jumps(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.jumps.iter().map(|(&from, &to)| (from, to))
    }

    /// Resolve one landing through the jump table. Idempotent: sources map
    /// to their targets, everything else is a fixed point, and rules never
    /// chain.
    pub fn resolve_jump(&self, position: i32) -> i32 {
        self.jumps.get(&position).copied().unwrap_or(position)
    }

    pub fn is_jump_source(&self, position: i32) -> bool {
        self.jumps.contains_key(&position)
    }

    /// Ordered positions a spin can be taken from: everything in
    /// `start..end` that is not a jump source. The end square is excluded
    /// because the game is already over there.
    pub fn stopping_squares(&self) -> Vec<i32> {
        (self.start..self.end)
            .filter(|position| !self.jumps.contains_key(position))
            .collect()
    }

    /// One spin outcome from `current`: stay put on overshoot, otherwise the
    /// jump-resolved landing (which may be the end square).
    pub fn move_from(&self, current: i32, spin: i32) -> i32 {
        let land = current + spin;
        if land > self.end {
            current
        } else {
            self.resolve_jump(land)
        }
    }

    /// Reject boards where some stopping square can never reach the end, by
    /// growing the "can finish" set to a fixed point. Such boards would
    /// otherwise surface as a singular pivot deep inside elimination.
    fn check_end_reachable(&self) -> Result<(), BoardError> {
        let squares = self.stopping_squares();
        let mut finishes = BTreeSet::new();
        loop {
            let mut changed = false;
            for &square in &squares {
                if finishes.contains(&square) {
                    continue;
                }
                for spin in 1..=self.spin_size {
                    let land = square + spin;
                    if land > self.end {
                        continue;
                    }
                    let dest = self.resolve_jump(land);
                    if dest == self.end || finishes.contains(&dest) {
                        finishes.insert(square);
                        changed = true;
                        break;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        match squares.iter().find(|square| !finishes.contains(square)) {
            Some(&square) => Err(BoardError::UnreachableEnd(square)),
            None => Ok(()),
        }
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse the plain-text board format: three header lines (`start`,
    /// `end`, `spin_size`) followed by one `from to` pair per line. Blank
    /// lines are skipped.
    fn from_str(text: &str) -> Result<Self, BoardError> {
        let mut header = [0i32; 3];
        let mut field = 0;
        let mut jumps = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let lineno = index + 1;
            if field < 3 {
                header[field] = line.parse().map_err(|_| BoardError::Parse {
                    line: lineno,
                    message: format!("expected an integer, got {line:?}"),
                })?;
                field += 1;
            } else {
                let mut parts = line.split_whitespace();
                let from = parts.next().and_then(|token| token.parse().ok());
                let to = parts.next().and_then(|token| token.parse().ok());
                match (from, to, parts.next()) {
                    (Some(from), Some(to), None) => jumps.push((from, to)),
                    _ => {
                        return Err(BoardError::Parse {
                            line: lineno,
                            message: format!("expected \"from to\", got {line:?}"),
                        })
                    }
                }
            }
        }
        if field < 3 {
            return Err(BoardError::Parse {
                line: 0,
                message: "missing start/end/spin_size header".to_string(),
            });
        }
        Board::new(header[0], header[1], header[2], jumps)
    }
}
