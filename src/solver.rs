//! Public solve entry points: build the system for a board, eliminate, and
//! hand back the exact rational answer.

use num::ToPrimitive;

use crate::board::Board;
use crate::elimination::{eliminate, SolveError};
use crate::system::{build_duel_system, build_solo_system};
use crate::Ratio;

/// Exact expected number of spins for a single player to travel from the
/// start square to the end.
pub fn expected_spins(board: &Board) -> Result<Ratio, SolveError> {
    let mut system = build_solo_system(board);
    eliminate(&mut system)
}

/// Exact probability that the first of two alternating players reaches the
/// end first, both starting on the start square.
///
/// The system here has one unknown per (mover, opponent) square pair, so it
/// is quadratically larger than the expected-spins one; on the standard
/// board that is 6561 unknowns.
pub fn first_player_win_probability(board: &Board) -> Result<Ratio, SolveError> {
    let mut system = build_duel_system(board);
    eliminate(&mut system)
}

/// Float approximation of an exact rational, for display only.
pub fn ratio_to_f64(value: &Ratio) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::BigInt;

    #[test]
    fn conservation_on_the_trivial_board() {
        // One stopping square, spinner 1: the game always ends in one spin,
        // and the first player always wins.
        let board = Board::new(0, 1, 1, []).unwrap();
        let one = Ratio::from_integer(BigInt::from(1));
        assert_eq!(expected_spins(&board), Ok(one.clone()));
        assert_eq!(first_player_win_probability(&board), Ok(one));
    }

    #[test]
    fn ratio_to_f64_is_close() {
        let value = Ratio::new(BigInt::from(53), BigInt::from(6));
        assert!((ratio_to_f64(&value) - 53.0 / 6.0).abs() < 1e-12);
    }
}
