//! 9x9 Sudoku boards and rule validation

mod board;
mod validate;

pub use board::{Board, Cell, SIZE};
pub use validate::{Conflict, Unit, find_conflict, is_valid_sudoku};
