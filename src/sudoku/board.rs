use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Rows and columns on a board
pub const SIZE: usize = 9;

const EMPTY: char = '.';

/// A single square of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(char),
}

impl From<char> for Cell {
    fn from(c: char) -> Self {
        if c == EMPTY {
            Cell::Empty
        } else {
            Cell::Filled(c)
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "{}", EMPTY),
            Cell::Filled(c) => write!(f, "{}", c),
        }
    }
}

/// A 9x9 grid; the shape is fixed by the type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// A board with every cell empty
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: impl Into<Cell>) {
        self.cells[row][col] = cell.into();
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; SIZE]> {
        self.cells.iter()
    }

    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| matches!(c, Cell::Filled(_)))
            .count()
    }

    /// Parse a board from text.
    ///
    /// Each non-blank line is a row. Whitespace, `|` and `,` are ignored
    /// inside a line, and lines made only of `-` and `+` are treated as
    /// separators. `.` marks an empty cell; any other character is a value.
    pub fn parse(text: &str) -> Result<Self> {
        let mut board = Board::empty();
        let mut row = 0;

        for (line_num, line) in text.lines().enumerate() {
            let cells: Vec<char> = line
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '|' && *c != ',')
                .collect();

            if cells.is_empty() || cells.iter().all(|c| *c == '-' || *c == '+') {
                continue;
            }

            if cells.len() != SIZE {
                return Err(Error::InvalidBoard {
                    line: line_num + 1,
                    reason: format!("expected {} cells, found {}", SIZE, cells.len()),
                });
            }

            if row < SIZE {
                for (col, c) in cells.into_iter().enumerate() {
                    board.cells[row][col] = Cell::from(c);
                }
            }
            row += 1;
        }

        if row != SIZE {
            return Err(Error::WrongRowCount { found: row });
        }

        Ok(board)
    }
}

impl From<[[char; SIZE]; SIZE]> for Board {
    fn from(grid: [[char; SIZE]; SIZE]) -> Self {
        Self {
            cells: grid.map(|row| row.map(Cell::from)),
        }
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = "\
53..7....
6..195...
.98....6.
8...6...3
4..8.3..1
7...2...6
.6....28.
...419..5
....8..79
";

    #[test]
    fn test_parse_plain() {
        let board = Board::parse(PLAIN).unwrap();
        assert_eq!(board.get(0, 0), Cell::Filled('5'));
        assert_eq!(board.get(0, 2), Cell::Empty);
        assert_eq!(board.get(8, 8), Cell::Filled('9'));
        assert_eq!(board.filled_count(), 30);
    }

    #[test]
    fn test_parse_with_separators() {
        let text = "\
5 3 . | . 7 . | . . .
6 . . | 1 9 5 | . . .
. 9 8 | . . . | . 6 .
------+-------+------
8 . . | . 6 . | . . 3
4 . . | 8 . 3 | . . 1
7 . . | . 2 . | . . 6
------+-------+------
. 6 . | . . . | 2 8 .
. . . | 4 1 9 | . . 5
. . . | . 8 . | . 7 9
";
        assert_eq!(Board::parse(text).unwrap(), Board::parse(PLAIN).unwrap());
    }

    #[test]
    fn test_parse_comma_separated() {
        let row = ".,.,.,.,.,.,.,.,.\n";
        let board: Board = row.repeat(9).parse().unwrap();
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn test_parse_short_row() {
        let text = PLAIN.replacen("53..7....", "53..7...", 1);
        let err = Board::parse(&text).unwrap_err();
        assert!(matches!(err, Error::InvalidBoard { line: 1, .. }));
    }

    #[test]
    fn test_parse_wrong_row_count() {
        let text: String = PLAIN.lines().take(8).collect::<Vec<_>>().join("\n");
        let err = Board::parse(&text).unwrap_err();
        assert!(matches!(err, Error::WrongRowCount { found: 8 }));

        let text = format!("{}.........\n", PLAIN);
        let err = Board::parse(&text).unwrap_err();
        assert!(matches!(err, Error::WrongRowCount { found: 10 }));
    }

    #[test]
    fn test_display_round_trips() {
        let board = Board::parse(PLAIN).unwrap();
        assert_eq!(board.to_string(), PLAIN);
    }

    #[test]
    fn test_from_char_grid() {
        let mut grid = [['.'; SIZE]; SIZE];
        grid[4][4] = '5';
        let board = Board::from(grid);
        assert_eq!(board.get(4, 4), Cell::Filled('5'));
        assert_eq!(board.filled_count(), 1);
    }
}
