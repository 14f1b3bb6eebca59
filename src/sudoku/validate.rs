use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::board::{Board, Cell, SIZE};

/// The row, column or 3x3 sub-square in which a duplicate was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Row(usize),
    Column(usize),
    Square(usize),
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Row(i) => write!(f, "row {}", i + 1),
            Unit::Column(i) => write!(f, "column {}", i + 1),
            Unit::Square(i) => write!(f, "square {}", i + 1),
        }
    }
}

/// The first repeated value found while scanning a board.
///
/// `row`, `col` and the index inside `unit` are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub value: char,
    pub row: usize,
    pub col: usize,
    pub unit: Unit,
}

/// Sub-squares are numbered left to right, top to bottom
fn square_index(row: usize, col: usize) -> usize {
    (row / 3) * 3 + col / 3
}

/// Scan the board row by row and report the first value that repeats
/// within a row, column or sub-square.
pub fn find_conflict(board: &Board) -> Option<Conflict> {
    let mut rows: [HashSet<char>; SIZE] = Default::default();
    let mut cols: [HashSet<char>; SIZE] = Default::default();
    let mut squares: [HashSet<char>; SIZE] = Default::default();

    for (r, row) in board.rows().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let Cell::Filled(value) = *cell else {
                continue;
            };
            let s = square_index(r, c);

            let unit = if rows[r].contains(&value) {
                Unit::Row(r)
            } else if cols[c].contains(&value) {
                Unit::Column(c)
            } else if squares[s].contains(&value) {
                Unit::Square(s)
            } else {
                rows[r].insert(value);
                cols[c].insert(value);
                squares[s].insert(value);
                continue;
            };

            debug!(%value, row = r, col = c, %unit, "duplicate value");
            return Some(Conflict {
                value,
                row: r,
                col: c,
                unit,
            });
        }
    }

    None
}

/// Returns true if no filled value repeats in any row, column or sub-square.
/// Empty cells are ignored, so a partially filled board can be valid.
pub fn is_valid_sudoku(board: &Board) -> bool {
    find_conflict(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_board() -> Board {
        Board::from([
            ['5', '3', '.', '.', '7', '.', '.', '.', '.'],
            ['6', '.', '.', '1', '9', '5', '.', '.', '.'],
            ['.', '9', '8', '.', '.', '.', '.', '6', '.'],
            ['8', '.', '.', '.', '6', '.', '.', '.', '3'],
            ['4', '.', '.', '8', '.', '3', '.', '.', '1'],
            ['7', '.', '.', '.', '2', '.', '.', '.', '6'],
            ['.', '6', '.', '.', '.', '.', '2', '8', '.'],
            ['.', '.', '.', '4', '1', '9', '.', '.', '5'],
            ['.', '.', '.', '.', '8', '.', '.', '7', '9'],
        ])
    }

    #[test]
    fn test_empty_board_is_valid() {
        assert!(is_valid_sudoku(&Board::empty()));
    }

    #[test]
    fn test_partial_board_is_valid() {
        assert!(is_valid_sudoku(&valid_board()));
    }

    #[test]
    fn test_row_duplicate() {
        let mut board = Board::empty();
        board.set(2, 0, '4');
        board.set(2, 8, '4');
        assert_eq!(
            find_conflict(&board),
            Some(Conflict {
                value: '4',
                row: 2,
                col: 8,
                unit: Unit::Row(2),
            })
        );
    }

    #[test]
    fn test_column_duplicate() {
        let mut board = Board::empty();
        board.set(0, 5, '7');
        board.set(8, 5, '7');
        let conflict = find_conflict(&board).unwrap();
        assert_eq!(conflict.unit, Unit::Column(5));
        assert_eq!((conflict.row, conflict.col), (8, 5));
    }

    #[test]
    fn test_square_duplicate() {
        let mut board = Board::empty();
        board.set(3, 3, '2');
        board.set(5, 5, '2');
        assert_eq!(find_conflict(&board).unwrap().unit, Unit::Square(4));
    }

    #[test]
    fn test_classic_invalid_example() {
        // Top-left square holds two 8s
        let mut board = valid_board();
        board.set(0, 0, '8');
        assert!(!is_valid_sudoku(&board));
    }

    #[test]
    fn test_same_value_in_different_units() {
        let mut board = Board::empty();
        board.set(0, 0, '1');
        board.set(1, 3, '1');
        board.set(2, 6, '1');
        board.set(3, 1, '1');
        assert!(is_valid_sudoku(&board));
    }

    #[test]
    fn test_square_index() {
        assert_eq!(square_index(0, 0), 0);
        assert_eq!(square_index(0, 8), 2);
        assert_eq!(square_index(4, 4), 4);
        assert_eq!(square_index(8, 0), 6);
        assert_eq!(square_index(8, 8), 8);
    }

    #[test]
    fn test_unit_display_is_one_based() {
        assert_eq!(Unit::Row(0).to_string(), "row 1");
        assert_eq!(Unit::Square(8).to_string(), "square 9");
    }
}
