//! The patience diff strategy.
//!
//! Each region of the two inputs is reduced in the following order:
//!
//! 1. A common prefix is emitted as unchanged and the rest is diffed.
//! 2. Otherwise a common suffix is split off; the rest is diffed first and
//!    the suffix emitted after it.
//! 3. Otherwise lines occurring exactly once on each side are matched with an
//!    [`LcsTable`]; each matched pair becomes an unchanged anchor and the gaps
//!    between anchors are diffed.
//! 4. With no anchors, the region's full [`LcsTable::diff`] is used as-is.
//!
//! Regions are processed from an explicit work stack rather than by native
//! recursion, so deeply fragmented inputs cannot exhaust the thread's stack.

use std::collections::HashMap;
use std::ops::Range;

use tracing::{trace, warn};

use crate::config::DiffConfig;
use crate::error::{DiffResult, Side};
use crate::item::DiffItem;
use crate::lcs::LcsTable;
use crate::line::{to_lines, IndexedLine};

/// Compute the patience diff of `a` against `b`.
///
/// Total over all inputs: no limits are applied.
pub fn diff<S: AsRef<str>>(a: &[S], b: &[S]) -> Vec<DiffItem> {
    Patience::default().diff(a, b)
}

/// A configured patience diff engine.
#[derive(Clone, Debug, Default)]
pub struct Patience {
    config: DiffConfig,
}

/// A unit of pending work. Tasks are popped in LIFO order, so they are
/// pushed in reverse of the order their output must appear in.
enum Task {
    /// Diff the lines of `a` and `b` in these ranges.
    Diff { a: Range<usize>, b: Range<usize> },
    /// Emit the lines of `a` in this range as unchanged.
    Unchanged(Range<usize>),
}

impl Patience {
    /// Create an engine with the given configuration.
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Diff `a` against `b`, first checking both against `max_lines`.
    pub fn try_diff<S: AsRef<str>>(&self, a: &[S], b: &[S]) -> DiffResult<Vec<DiffItem>> {
        self.config.check(Side::Old, a.len())?;
        self.config.check(Side::New, b.len())?;
        Ok(self.diff(a, b))
    }

    /// Diff `a` against `b` without applying `max_lines`.
    pub fn diff<S: AsRef<str>>(&self, a: &[S], b: &[S]) -> Vec<DiffItem> {
        let a = to_lines(a);
        let b = to_lines(b);

        let mut items = Vec::with_capacity(a.len().max(b.len()));
        let mut stack = vec![Task::Diff {
            a: 0..a.len(),
            b: 0..b.len(),
        }];

        while let Some(task) = stack.pop() {
            match task {
                Task::Unchanged(range) => {
                    items.extend(a[range].iter().map(DiffItem::unchanged));
                }
                Task::Diff { a: ar, b: br } => {
                    self.diff_region(&a, &b, ar, br, &mut items, &mut stack);
                }
            }
        }

        items
    }

    /// Reduce one region: emit what can be emitted now and push the rest.
    fn diff_region(
        &self,
        a: &[IndexedLine],
        b: &[IndexedLine],
        ar: Range<usize>,
        br: Range<usize>,
        items: &mut Vec<DiffItem>,
        stack: &mut Vec<Task>,
    ) {
        let xs = &a[ar.clone()];
        let ys = &b[br.clone()];

        if xs.is_empty() {
            items.extend(ys.iter().map(DiffItem::insertion));
            return;
        }
        if ys.is_empty() {
            items.extend(xs.iter().map(DiffItem::deletion));
            return;
        }

        let prefix = xs
            .iter()
            .zip(ys)
            .take_while(|(x, y)| x.text == y.text)
            .count();
        if prefix > 0 {
            items.extend(xs[..prefix].iter().map(DiffItem::unchanged));
            push_diff(stack, ar.start + prefix..ar.end, br.start + prefix..br.end);
            return;
        }

        let suffix = xs
            .iter()
            .rev()
            .zip(ys.iter().rev())
            .take_while(|(x, y)| x.text == y.text)
            .count();
        if suffix > 0 {
            stack.push(Task::Unchanged(ar.end - suffix..ar.end));
            push_diff(stack, ar.start..ar.end - suffix, br.start..br.end - suffix);
            return;
        }

        let unique_a = unique_lines(xs);
        let unique_b = unique_lines(ys);
        let anchors = LcsTable::build(&unique_a, &unique_b).longest_common_subsequence();

        if anchors.is_empty() {
            trace!(old = xs.len(), new = ys.len(), "no unique anchors, using LCS diff");
            let cells = LcsTable::cells_for(xs.len(), ys.len());
            if cells > self.config.table_warn_cells {
                warn!(
                    cells,
                    limit = self.config.table_warn_cells,
                    "large LCS table in patience fallback"
                );
            }
            items.extend(LcsTable::build(xs, ys).diff());
            return;
        }

        trace!(anchors = anchors.len(), "matched unique lines");
        // Anchor indices are absolute positions, as are the range bounds.
        let (tail_a, tail_b) = anchors
            .last()
            .map_or((ar.start, br.start), |&(x, y)| (x + 1, y + 1));
        push_diff(stack, tail_a..ar.end, tail_b..br.end);
        for (i, &(x, y)) in anchors.iter().enumerate().rev() {
            stack.push(Task::Unchanged(x..x + 1));
            let (start_a, start_b) = match i {
                0 => (ar.start, br.start),
                _ => (anchors[i - 1].0 + 1, anchors[i - 1].1 + 1),
            };
            push_diff(stack, start_a..x, start_b..y);
        }
    }
}

fn push_diff(stack: &mut Vec<Task>, a: Range<usize>, b: Range<usize>) {
    if !a.is_empty() || !b.is_empty() {
        stack.push(Task::Diff { a, b });
    }
}

/// Lines whose text occurs exactly once in `lines`, in their original order.
pub fn unique_lines(lines: &[IndexedLine]) -> Vec<IndexedLine> {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(lines.len());
    for line in lines {
        *counts.entry(line.text.as_str()).or_default() += 1;
    }
    lines
        .iter()
        .filter(|line| counts[line.text.as_str()] == 1)
        .cloned()
        .collect()
}
