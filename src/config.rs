pub const BOARD_SIZE: usize = 3;
pub const NUM_LINES: usize = 8;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[(usize, usize); BOARD_SIZE]; NUM_LINES] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];
