//! Patience diff engine for weave.
//!
//! Computes line-level differences between two sequences of text lines. Lines
//! that occur exactly once on both sides anchor the alignment; regions
//! without such anchors fall back to a classic longest-common-subsequence
//! edit script.
//!
//! # Key Types
//!
//! - [`IndexedLine`] -- A line tagged with its position in its source sequence
//! - [`DiffItem`] / [`ItemKind`] -- One classified line of a diff
//! - [`LcsTable`] -- Dynamic-programming LCS table with subsequence and diff walks
//! - [`Patience`] / [`DiffConfig`] -- The configured patience engine and its limits

pub mod config;
pub mod error;
pub mod item;
pub mod lcs;
pub mod line;
pub mod patience;

pub use config::DiffConfig;
pub use error::{DiffError, DiffResult, Side};
pub use item::{DiffItem, DiffStats, ItemKind, Items};
pub use lcs::LcsTable;
pub use line::{to_lines, IndexedLine};
pub use patience::{diff, unique_lines, Patience};
