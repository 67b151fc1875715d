//! Error types for the diff crate.

use std::fmt;

/// Which input of a pairwise diff an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The first (original) sequence.
    Old,
    /// The second (changed) sequence.
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Old => f.write_str("old"),
            Side::New => f.write_str("new"),
        }
    }
}

/// Errors that can occur during guarded diff operations.
///
/// The diff algorithm itself is total; the only failures come from the
/// caller-configured input limits in [`DiffConfig`](crate::DiffConfig).
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// One of the inputs has more lines than the configured limit allows.
    #[error("{side} input has {lines} lines, exceeding the limit of {limit}")]
    InputTooLarge {
        /// The offending input.
        side: Side,
        /// Number of lines in that input.
        lines: usize,
        /// The configured maximum.
        limit: usize,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
