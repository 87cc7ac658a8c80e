//! Error types for the vectactoe crate

use thiserror::Error;

/// Main error type for the vectactoe crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("game already over: move {position} played after a win")]
    GameOver { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("invalid character '{character}' at index {index} in move history '{history}'")]
    InvalidHistoryCharacter {
        character: char,
        index: usize,
        history: String,
    },

    #[error("cell {position} appears more than once in move history '{history}'")]
    DuplicateMove { position: usize, history: String },

    #[error("move history has {got} moves, at most 9 are possible")]
    HistoryTooLong { got: usize },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
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

    #[error("embedding has {got} components, expected {expected}")]
    InvalidEmbeddingLength { expected: usize, got: usize },

    #[error("similarity index failed: {message}")]
    Index { message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid padding '{input}'. Expected one of: {expected}")]
    ParsePadding { input: String, expected: String },

    #[error("invalid candidate order '{input}'. Expected one of: {expected}")]
    ParseCandidateOrder { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error was caused by client-supplied input (a bad move history)
    /// rather than by a collaborator or the environment.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidMove { .. }
                | Error::GameOver { .. }
                | Error::InvalidPosition { .. }
                | Error::InvalidHistoryCharacter { .. }
                | Error::DuplicateMove { .. }
                | Error::HistoryTooLong { .. }
        )
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
