use thiserror::Error;

/// Errors produced by the fallible operations in this crate
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument is outside the range the operation accepts
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Board text could not be parsed into a 9x9 grid
    #[error("invalid board at line {line}: {reason}")]
    InvalidBoard { line: usize, reason: String },

    /// Board text had the wrong number of rows
    #[error("invalid board: expected 9 rows, found {found}")]
    WrongRowCount { found: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
