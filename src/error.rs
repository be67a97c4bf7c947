use thiserror::Error;

/// Failures raised by the board and the move-selection engine
///
/// None of these are recoverable inside the engine: each one points at a
/// logic error in the caller or in the search itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid move, column {column} out of range. Columns must be between 1 and {columns}")]
    ColumnOutOfRange { column: usize, columns: usize },
    #[error("Invalid move, column {column} full")]
    ColumnFull { column: usize },
    #[error("search returned no column while legal columns remain")]
    SearchInvariant,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("could not parse '{0}' as a valid move")]
    InvalidMove(char),
}

pub type Result<T> = std::result::Result<T, Error>;
