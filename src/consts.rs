// Numeric facts of a standard sudoku board.
pub(crate) const BOARD_LENGTH: usize = 9;
pub(crate) const N_CELLS: usize = BOARD_LENGTH * BOARD_LENGTH;
