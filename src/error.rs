//! # Error reporting for container operations
//!
//! All failures are signaled at the point of violation; there is no deferred error state and no
//! recovery logic anywhere in this crate.
use std::error;
use std::fmt;
use std::fmt::Display;

/// Any way in which a container operation can fail.
///
/// Construction, element access and the binary operations each reject invalid input with one of
/// these variants. Callers wanting to avoid them can validate the preconditions themselves; the
/// crate never logs or suppresses a violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A size, start index or dimension passed at construction is out of its allowed range.
    ///
    /// The contained `String` is a message for the end user.
    InvalidArgument(String),
    /// An element was addressed outside the valid logical window `[start_index, size)`.
    IndexOutOfRange {
        /// The offending logical index.
        index: usize,
        /// First valid logical index of the container that rejected the access.
        start_index: usize,
        /// One past the last valid logical index.
        size: usize,
    },
    /// The operands of a binary operation have incompatible shapes.
    ///
    /// The contained `String` describes both shapes.
    ShapeMismatch(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(message) => {
                write!(f, "invalid argument: {}", message)
            },
            Error::IndexOutOfRange { index, start_index, size } => {
                write!(
                    f,
                    "index {} out of range: valid indices are {} through {}",
                    index, start_index, size.saturating_sub(1),
                )
            },
            Error::ShapeMismatch(message) => {
                write!(f, "shape mismatch: {}", message)
            },
        }
    }
}

impl error::Error for Error {
}
