//! Lock-step reconciliation of several diffs against one original.
//!
//! The algorithm, repeated until every diff is exhausted:
//!
//! - Each diff is visited in turn. A diff starting with insertions has the
//!   whole run removed and joined into a block, which is appended unless the
//!   most recently appended entry already starts with it (another version
//!   proposed the same text).
//! - A diff starting with deletions has the whole run removed. Each deleted
//!   line is popped from the original if it is the original's next line, and
//!   every other diff drops its leading unchanged items with the same text.
//! - If no diff started with an insertion or deletion, every diff advances by
//!   one item and the next original line is appended.

use std::collections::VecDeque;

use tracing::debug;
use weave_diff::{DiffConfig, DiffItem, ItemKind, Patience, Side};

use crate::error::{MergeError, MergeResult};

/// Merge `versions` of `original` into one sequence of lines.
///
/// With no versions, `original` is returned unchanged.
pub fn merge<S, V>(original: &[S], versions: &[V]) -> Vec<String>
where
    S: AsRef<str>,
    V: AsRef<[S]>,
{
    Merger::default().merge(original, versions)
}

/// A configured merge engine.
#[derive(Clone, Debug, Default)]
pub struct Merger {
    engine: Patience,
}

impl Merger {
    /// Create a merger whose pairwise diffs use `config`.
    pub fn new(config: DiffConfig) -> Self {
        Self {
            engine: Patience::new(config),
        }
    }

    /// Merge, rejecting any input longer than the configured line limit.
    pub fn try_merge<S, V>(&self, original: &[S], versions: &[V]) -> MergeResult<Vec<String>>
    where
        S: AsRef<str>,
        V: AsRef<[S]>,
    {
        let diffs = versions
            .iter()
            .enumerate()
            .map(|(version, lines)| {
                self.engine
                    .try_diff(original, lines.as_ref())
                    .map_err(|source| MergeError::Diff { version, source })
            })
            .collect::<MergeResult<Vec<_>>>()?;
        if diffs.is_empty() {
            // No diff ran, so the original has not been checked yet.
            self.engine
                .config()
                .check(Side::Old, original.len())
                .map_err(MergeError::Original)?;
        }
        Ok(reconcile(original, diffs))
    }

    /// Merge without applying the configured line limit.
    pub fn merge<S, V>(&self, original: &[S], versions: &[V]) -> Vec<String>
    where
        S: AsRef<str>,
        V: AsRef<[S]>,
    {
        let diffs = versions
            .iter()
            .map(|lines| self.engine.diff(original, lines.as_ref()))
            .collect();
        reconcile(original, diffs)
    }
}

/// Merged lines plus the text of the most recently appended entry, which is
/// either a single original line or a whole inserted block.
#[derive(Default)]
struct Output {
    lines: Vec<String>,
    last: Option<String>,
}

impl Output {
    fn push_line(&mut self, line: &str) {
        self.lines.push(line.to_owned());
        self.last = Some(line.to_owned());
    }

    fn push_block(&mut self, block: Vec<String>) {
        let joined = block.join("\n");
        if self.last.as_deref().is_some_and(|last| last.starts_with(&joined)) {
            return;
        }
        self.lines.extend(block);
        self.last = Some(joined);
    }
}

fn reconcile<S: AsRef<str>>(original: &[S], diffs: Vec<Vec<DiffItem>>) -> Vec<String> {
    let versions = diffs.len();
    if versions == 0 {
        return original.iter().map(|line| line.as_ref().to_owned()).collect();
    }

    let mut original: VecDeque<&str> = original.iter().map(|line| line.as_ref()).collect();
    let mut diffs: Vec<VecDeque<DiffItem>> = diffs.into_iter().map(VecDeque::from).collect();
    let mut out = Output::default();

    loop {
        let mut changed = false;
        let mut exhausted = true;

        for i in 0..diffs.len() {
            let Some(kind) = diffs[i].front().map(|item| item.kind) else {
                continue;
            };
            exhausted = false;

            match kind {
                ItemKind::Insertion => {
                    changed = true;
                    let mut block = Vec::new();
                    while let Some(item) = pop_kind(&mut diffs[i], ItemKind::Insertion) {
                        block.push(item.line.text);
                    }
                    out.push_block(block);
                }
                ItemKind::Deletion => {
                    changed = true;
                    while let Some(item) = pop_kind(&mut diffs[i], ItemKind::Deletion) {
                        let text = item.text();
                        if original.front() == Some(&text) {
                            original.pop_front();
                        }
                        for (j, other) in diffs.iter_mut().enumerate() {
                            if j != i {
                                while other
                                    .front()
                                    .is_some_and(|head| head.is_unchanged() && head.text() == text)
                                {
                                    other.pop_front();
                                }
                            }
                        }
                    }
                }
                ItemKind::Unchanged => {}
            }
        }

        if !changed {
            for diff in &mut diffs {
                diff.pop_front();
            }
            // The terminating pass may still flush one original line.
            if let Some(line) = original.pop_front() {
                out.push_line(line);
            }
        }
        if exhausted {
            break;
        }
    }

    debug!(versions, lines = out.lines.len(), "merge complete");
    out.lines
}

/// Pop the head of `diff` if it has the given kind.
fn pop_kind(diff: &mut VecDeque<DiffItem>, kind: ItemKind) -> Option<DiffItem> {
    if diff.front()?.kind == kind {
        diff.pop_front()
    } else {
        None
    }
}
