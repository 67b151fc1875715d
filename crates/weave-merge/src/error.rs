//! Error types for the merge crate.

use weave_diff::DiffError;

/// Errors that can occur during guarded merge operations.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// Diffing the original against one of the versions failed.
    #[error("diff of version {version} failed: {source}")]
    Diff {
        /// Zero-based position of the version in the input list.
        version: usize,
        /// The underlying diff error.
        #[source]
        source: DiffError,
    },

    /// The original was rejected before any diff ran (no versions given).
    #[error("original rejected: {0}")]
    Original(#[source] DiffError),
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
