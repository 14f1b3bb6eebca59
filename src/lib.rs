pub mod cli;
pub mod error;
pub mod frequency;
pub mod logging;
pub mod output;
pub mod sudoku;
pub mod text;

pub use error::{Error, Result};
