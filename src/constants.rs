//! Standard board constants.
//!
//! The classic 10×10 board: positions 0 (off-board start) through 100, a
//! 6-way spinner, and the familiar 19 chutes and ladders. With these rules
//! the board has [`STANDARD_SQUARES`] stopping squares (positions that are
//! not jump sources and not the end).

/// First board position; players start here, off the numbered grid.
pub const BOARD_START: i32 = 0;

/// Final board position; reaching it ends the game.
pub const BOARD_END: i32 = 100;

/// Face count of the standard spinner.
pub const SPIN_SIZE: i32 = 6;

/// Number of stopping squares on the standard board.
pub const STANDARD_SQUARES: usize = 81;

/// The standard jump table as (from, to) pairs: 9 ladders, 10 chutes.
pub const STANDARD_JUMPS: [(i32, i32); 19] = [
    (1, 38),
    (4, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 100),
    (98, 78),
    (95, 75),
    (93, 73),
    (87, 24),
    (64, 60),
    (62, 19),
    (56, 53),
    (49, 11),
    (48, 26),
    (16, 6),
];
