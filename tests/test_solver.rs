//! Known-value fixtures for the exact solvers, plus a dense-elimination
//! reference check on small boards.
//!
//! Reference fractions were computed with an independent dense rational
//! solve and, for the win probabilities, cross-checked against fixed-point
//! iteration of the alternating-game recursion.

use num::BigInt;

use chutes::system::{build_duel_system, build_solo_system, LinearSystem};
use chutes::{
    eliminate, expected_spins, first_player_win_probability, ratio_to_f64, Board, Ratio,
};

fn ratio(n: i64) -> Ratio {
    Ratio::from_integer(BigInt::from(n))
}

fn frac(n: i64, d: i64) -> Ratio {
    Ratio::new(BigInt::from(n), BigInt::from(d))
}

fn board(start: i32, end: i32, spin_size: i32, jumps: &[(i32, i32)]) -> Board {
    Board::new(start, end, spin_size, jumps.iter().copied()).unwrap()
}

/// Dense rational Gaussian elimination over the same augmented system,
/// used as the reference the sparse path must match bit-exactly.
fn dense_reference(system: &LinearSystem) -> Ratio {
    let n = system.row_count;
    let mut matrix = vec![vec![ratio(0); n + 1]; n];
    for (r, row) in system.rows.iter().enumerate() {
        for (&c, value) in row.iter() {
            matrix[r][c] = value.clone();
        }
    }

    use num::Zero;
    for col in 0..n {
        let pivot_row = (col..n)
            .find(|&r| !matrix[r][col].is_zero())
            .expect("reference system is singular");
        matrix.swap(col, pivot_row);
        let pivot = matrix[col][col].clone();
        for r in 0..n {
            if r == col || matrix[r][col].is_zero() {
                continue;
            }
            let factor = &matrix[r][col] / &pivot;
            for c in col..=n {
                let delta = &factor * &matrix[col][c];
                matrix[r][c] -= delta;
            }
        }
    }
    &matrix[0][n] / &matrix[0][0]
}

#[test]
fn uniform_line_board() {
    // 0..3 with a 2-way spinner: exactly 3 expected spins.
    let board = board(0, 3, 2, &[]);
    assert_eq!(expected_spins(&board), Ok(ratio(3)));
    assert_eq!(first_player_win_probability(&board), Ok(frac(2, 3)));
}

#[test]
fn geometric_single_square() {
    // One stopping square, 6-way spinner: finish with probability 1/6 per
    // spin, so 6 expected spins; the mover's winning odds are 6/11.
    let board = board(0, 1, 6, &[]);
    assert_eq!(expected_spins(&board), Ok(ratio(6)));
    assert_eq!(first_player_win_probability(&board), Ok(frac(6, 11)));
}

#[test]
fn five_square_line() {
    let board = board(0, 5, 2, &[]);
    assert_eq!(expected_spins(&board), Ok(frac(17, 4)));
    assert_eq!(first_player_win_probability(&board), Ok(frac(61, 96)));
}

#[test]
fn ten_square_board_with_jumps() {
    let board = board(0, 10, 6, &[(4, 7), (9, 2)]);
    assert_eq!(expected_spins(&board), Ok(frac(53, 6)));
    assert_eq!(
        first_player_win_probability(&board),
        Ok(frac(30_799, 57_720))
    );
}

const LATE_GAME_JUMPS: [(i32, i32); 8] = [
    (71, 91),
    (74, 77),
    (76, 84),
    (80, 100),
    (98, 78),
    (95, 75),
    (93, 73),
    (87, 82),
];

#[test]
fn late_game_board() {
    // The 70..100 tail of the board with an 8-way spinner.
    let board = board(70, 100, 8, &LATE_GAME_JUMPS);
    assert_eq!(board.stopping_squares().len(), 22);
    assert_eq!(
        expected_spins(&board),
        Ok(frac(213_623_046_933_965_021, 15_671_111_104_467_096))
    );
}

// 484 unknowns of big-rational elimination; slow. Run explicitly with
// `cargo test -- --ignored`.
#[test]
#[ignore]
fn late_game_board_win_probability() {
    let board = board(70, 100, 8, &LATE_GAME_JUMPS);
    let win = first_player_win_probability(&board).unwrap();
    assert!((ratio_to_f64(&win) - 0.520_196_474_877_734_2).abs() < 1e-9);
}

#[test]
fn standard_board_expected_spins() {
    // The widely cited "39.6 spins" figure for the classic board.
    let board = Board::standard();
    let spins = expected_spins(&board).unwrap();
    assert!((ratio_to_f64(&spins) - 39.598_365_640_208_19).abs() < 1e-9);
}

#[test]
fn mid_game_board_expected_spins() {
    let jumps = [
        (51, 67),
        (59, 74),
        (71, 91),
        (80, 100),
        (98, 78),
        (95, 75),
        (93, 73),
        (87, 54),
        (64, 60),
        (56, 53),
    ];
    let board = board(50, 100, 10, &jumps);
    assert_eq!(board.stopping_squares().len(), 40);
    let spins = expected_spins(&board).unwrap();
    assert!((ratio_to_f64(&spins) - 17.257_537_743_752_604).abs() < 1e-9);
}

// 6561 unknowns; minutes of big-rational arithmetic. Run explicitly with
// `cargo test -- --ignored` when touching the eliminator.
#[test]
#[ignore]
fn standard_board_win_probability() {
    let board = Board::standard();
    let win = first_player_win_probability(&board).unwrap();
    assert!((ratio_to_f64(&win) - 0.507_802_773_461).abs() < 1e-6);
}

#[test]
fn sparse_matches_dense_reference() {
    let boards = [
        board(0, 5, 2, &[]),
        board(0, 6, 3, &[(2, 4)]),
        board(0, 7, 2, &[(3, 6), (5, 1)]),
        board(0, 6, 6, &[(1, 5), (4, 2)]),
    ];
    for board in &boards {
        assert!(board.stopping_squares().len() <= 6);

        let reference = dense_reference(&build_solo_system(board));
        let mut system = build_solo_system(board);
        assert_eq!(eliminate(&mut system), Ok(reference));

        let reference = dense_reference(&build_duel_system(board));
        let mut system = build_duel_system(board);
        assert_eq!(eliminate(&mut system), Ok(reference));
    }
}

#[test]
fn repeated_runs_are_identical() {
    // The hash stores randomize drain order per instance; the answer must
    // not care.
    let board = board(0, 10, 6, &[(4, 7), (9, 2)]);
    let first = first_player_win_probability(&board).unwrap();
    for _ in 0..5 {
        assert_eq!(first_player_win_probability(&board).unwrap(), first);
    }
}
