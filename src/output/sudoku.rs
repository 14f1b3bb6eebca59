//! Output formatting for Sudoku validation

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::sudoku::{Board, Conflict, find_conflict};

#[derive(Debug, Serialize)]
pub struct SudokuReport {
    pub valid: bool,
    pub filled: usize,
    pub conflict: Option<Conflict>,
    #[serde(skip)]
    pub board: Board,
}

impl SudokuReport {
    pub fn new(board: Board) -> Self {
        let conflict = find_conflict(&board);
        Self {
            valid: conflict.is_none(),
            filled: board.filled_count(),
            conflict,
            board,
        }
    }
}

/// Format a validation result, echoing the board
pub fn format_sudoku(report: &SudokuReport) -> String {
    let mut output = String::new();

    for line in report.board.to_string().lines() {
        output.push_str(&format!("  {}\n", line.dimmed()));
    }
    output.push('\n');

    match report.conflict {
        None => output.push_str(&format!(
            "{} valid board ({} of 81 cells filled)\n",
            "OK".green(),
            report.filled
        )),
        Some(conflict) => output.push_str(&format!(
            "{} invalid board: '{}' at row {}, column {} repeats in {}\n",
            "X".red(),
            conflict.value.bold(),
            conflict.row + 1,
            conflict.col + 1,
            conflict.unit
        )),
    }

    output
}

pub fn format_sudoku_json(report: &SudokuReport) -> String {
    super::to_json(report)
}
