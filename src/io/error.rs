//! # Error reporting for text reading
//!
//! Reading is token-based, so errors carry the position of the offending token. A matrix wraps a
//! row's error with the row number to keep the context.
use std::error;
use std::fmt;
use std::fmt::Display;

/// A `ReadError` is created when the token stream ends early or a token fails to parse.
#[derive(Debug)]
pub enum ReadError {
    /// The token stream ended before the container was filled.
    UnexpectedEnd {
        /// Zero-based position of the missing token within the current read.
        position: usize,
    },
    /// A token could not be parsed as the element type.
    Token {
        /// Zero-based position of the token within the current read.
        position: usize,
        /// The token and the underlying parse failure, formatted for the end user.
        description: String,
    },
    /// A row of a matrix failed to read.
    Row {
        /// Zero-based index of the failing row.
        row: usize,
        /// What went wrong within the row.
        source: Box<ReadError>,
    },
}

impl Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReadError::UnexpectedEnd { position } => {
                write!(f, "token stream ended at position {}", position)
            },
            ReadError::Token { position, description } => {
                write!(f, "token at position {}: {}", position, description)
            },
            ReadError::Row { row, source } => {
                write!(f, "row {}: {}", row, source)
            },
        }
    }
}

impl error::Error for ReadError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ReadError::UnexpectedEnd { .. } | ReadError::Token { .. } => None,
            ReadError::Row { source, .. } => Some(source),
        }
    }
}
