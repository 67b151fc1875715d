use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DiffError, DiffResult, Side};

/// Resource limits for the patience engine.
///
/// The LCS fallback allocates `(|a|+1) * (|b|+1)` cells, so callers that
/// accept untrusted input should bound the number of lines per side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Maximum number of lines accepted on either side. `None` means no limit.
    pub max_lines: Option<usize>,
    /// Fallback LCS tables larger than this many cells are logged at warn level.
    pub table_warn_cells: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_lines: None,
            table_warn_cells: 4_000_000,
        }
    }
}

impl DiffConfig {
    /// A configuration that rejects inputs longer than `max_lines`.
    pub fn with_max_lines(max_lines: usize) -> Self {
        Self {
            max_lines: Some(max_lines),
            ..Default::default()
        }
    }

    /// Verify that an input of `lines` lines is within the configured limit.
    pub fn check(&self, side: Side, lines: usize) -> DiffResult<()> {
        match self.max_lines {
            Some(limit) if lines > limit => {
                debug!(%side, lines, limit, "rejecting oversized diff input");
                Err(DiffError::InputTooLarge { side, lines, limit })
            }
            _ => Ok(()),
        }
    }
}
