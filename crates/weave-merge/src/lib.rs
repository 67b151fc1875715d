//! N-way line merge for weave.
//!
//! Diffs every version against a shared original with the patience engine and
//! then walks all of the resulting edit scripts in lock-step, folding their
//! insertions and deletions into a single sequence of lines.
//!
//! # Key Types
//!
//! - [`Merger`] -- Configured merge engine
//! - [`MergeError`] -- Failures of the guarded [`Merger::try_merge`]

pub mod error;
pub mod merge;

pub use error::{MergeError, MergeResult};
pub use merge::{merge, Merger};
