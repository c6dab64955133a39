/// Side length of the grid.
pub const BOARD_SIZE: usize = 3;
/// Number of cells on the grid.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Three cell indices that win the game when one player holds all of them.
pub type WinLine = [usize; 3];

/// Rows, then columns, then diagonals. The evaluator reports the first
/// completed line in this order.
pub static WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
