//! Error types for the tic-tac-toe crate

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("board string must hold exactly {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("expected a row and a column like '1 3', got '{input}'")]
    InvalidCoordinates { input: String },

    #[error("row {row} and column {col} must both be between 1 and 3")]
    CoordinatesOutOfRange { row: i64, col: i64 },

    #[error("row {row}, column {col} is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("input closed before a choice was made")]
    InputClosed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the operation that produced it
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Whether the error came from a bad human entry that can be retried
    pub fn is_recoverable_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidCoordinates { .. }
                | Error::CoordinatesOutOfRange { .. }
                | Error::CellOccupied { .. }
        )
    }
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;
