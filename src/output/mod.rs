mod palindrome;
mod sudoku;
mod top_k;
mod truncate;

pub use palindrome::{PalindromeReport, format_palindrome, format_palindrome_json};
pub use sudoku::{SudokuReport, format_sudoku, format_sudoku_json};
pub use top_k::{TopKReport, format_top_k, format_top_k_json};
pub use truncate::{TruncateReport, format_truncate, format_truncate_json};

/// Pretty JSON, or `{}` if the value cannot be serialized
pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
