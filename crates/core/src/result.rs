//! Core results and error types

use thiserror::Error;

/// Core error type encompassing all core module errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read file at the specified path.
    #[error("could not read file '{path}': {source}")]
    FileRead {
        /// The path to the file that could not be read.
        path: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file at the specified path.
    #[error("could not write file '{path}': {source}")]
    FileWrite {
        /// The path to the file that could not be written.
        path: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The source contains no contract declaration.
    #[error("no contract declaration found")]
    NoContract,

    /// Expected a delimiter at the given offset.
    #[error("expected '{expected}' at offset {offset}")]
    NotADelimiter {
        /// The delimiter character that was expected.
        expected: char,
        /// The byte offset where it was expected.
        offset: usize,
    },

    /// A delimited block opened at the given offset never closes.
    #[error("unbalanced block starting at offset {0}")]
    UnbalancedBlock(usize),

    /// A block comment opened at the given offset never closes.
    #[error("unterminated block comment at offset {0}")]
    UnterminatedComment(usize),

    /// A string literal opened at the given offset never closes.
    #[error("unterminated string literal at offset {0}")]
    UnterminatedString(usize),
}

/// Core result type
pub type Result<T> = std::result::Result<T, Error>;
