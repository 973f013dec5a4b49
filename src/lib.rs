//! # Chutes — exact solver for chutes-and-ladders race games
//!
//! Computes exact answers about a chutes-and-ladders board (board range,
//! jump rules, spinner size) by modelling play as an absorbing Markov chain,
//! assembling its balance equations as a sparse system of rationals, and
//! reducing that system with symmetric sparse Gaussian elimination. All
//! arithmetic is `BigRational`; there is no floating-point error anywhere in
//! the solve path.
//!
//! Two questions are answered, over the same core:
//!
//! | Question | System | Module |
//! |----------|--------|--------|
//! | Expected spins for one player to finish | one state per stopping square | [`system::build_solo_system`] |
//! | P(first of two alternating players wins) | one state per (mover, opponent) square pair | [`system::build_duel_system`] |
//!
//! The pipeline is `Board` → [`system::LinearSystem`] → [`elimination::eliminate`]
//! → `BigRational`. The pair-state system threads the turn handover through
//! its column indexing: a spin moving the player at square index `i` to
//! `new_i` while the opponent sits at `j` lands in column `(j, new_i)`, so
//! the opponent becomes the next row's mover.
//!
//! Elimination proceeds from the last column down to column 1, keeping an
//! above-diagonal column mirror of every row entry so that each pivot can
//! find the rows referencing it in O(entries) instead of O(rows). The answer
//! is the results/diagonal ratio of the single surviving row.

pub mod board;
pub mod constants;
pub mod elimination;
pub mod simulation;
pub mod solver;
pub mod sparse;
pub mod system;

/// Exact rational scalar used throughout the solver.
pub type Ratio = num::BigRational;

pub use board::{Board, BoardError};
pub use elimination::{eliminate, process_column, SolveError};
pub use solver::{expected_spins, first_player_win_probability, ratio_to_f64};
