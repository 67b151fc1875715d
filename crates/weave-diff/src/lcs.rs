//! Longest-common-subsequence table and its two backtracking walks.
//!
//! [`LcsTable`] pre-computes the classic dynamic-programming length table for
//! two line sequences. From it, [`LcsTable::longest_common_subsequence`]
//! recovers the matched index pairs and [`LcsTable::diff`] recovers a full
//! edit script.
//!
//! # Tie-breaks
//!
//! When neither neighbour cell is strictly larger, the subsequence walk
//! steps towards the previous line of `a`, and the diff walk emits a
//! deletion. Downstream output depends on both choices.

use crate::item::DiffItem;
use crate::line::IndexedLine;

/// Dense `(|a|+1) x (|b|+1)` table of LCS lengths over two line sequences.
///
/// Building the table costs `O(|a| * |b|)` time and memory.
#[derive(Clone, Debug)]
pub struct LcsTable<'a> {
    lengths: Vec<usize>,
    a: &'a [IndexedLine],
    b: &'a [IndexedLine],
}

impl<'a> LcsTable<'a> {
    /// Build the length table for `a` and `b`.
    pub fn build(a: &'a [IndexedLine], b: &'a [IndexedLine]) -> Self {
        let width = b.len() + 1;
        let mut lengths = vec![0; (a.len() + 1) * width];

        for (i, x) in a.iter().enumerate() {
            for (j, y) in b.iter().enumerate() {
                let k = (i + 1) * width + (j + 1);
                lengths[k] = if x.text == y.text {
                    lengths[i * width + j] + 1
                } else {
                    lengths[(i + 1) * width + j].max(lengths[i * width + j + 1])
                };
            }
        }

        Self { lengths, a, b }
    }

    /// LCS length of the first `i` lines of `a` and the first `j` lines of `b`.
    ///
    /// # Panics
    ///
    /// Panics if `i > |a|` or `j > |b|`.
    pub fn length(&self, i: usize, j: usize) -> usize {
        self.lengths[i * (self.b.len() + 1) + j]
    }

    /// The raw table in row-major order.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Number of cells in the table.
    pub fn cells(&self) -> usize {
        self.lengths.len()
    }

    /// Number of cells a table over `a_len` and `b_len` lines would allocate.
    pub fn cells_for(a_len: usize, b_len: usize) -> usize {
        a_len.saturating_add(1).saturating_mul(b_len.saturating_add(1))
    }

    /// The longest common subsequence as `(a.index, b.index)` pairs.
    ///
    /// Pairs use the lines' own indices and are strictly increasing in both
    /// components.
    pub fn longest_common_subsequence(&self) -> Vec<(usize, usize)> {
        let (mut i, mut j) = (self.a.len(), self.b.len());
        let mut pairs = Vec::with_capacity(self.length(i, j));

        while i > 0 && j > 0 {
            let (x, y) = (&self.a[i - 1], &self.b[j - 1]);
            if x.text == y.text {
                pairs.push((x.index, y.index));
                i -= 1;
                j -= 1;
            } else if self.length(i, j - 1) > self.length(i - 1, j) {
                j -= 1;
            } else {
                i -= 1;
            }
        }

        pairs.reverse();
        pairs
    }

    /// A full edit script transforming `a` into `b`.
    pub fn diff(&self) -> Vec<DiffItem> {
        let (mut i, mut j) = (self.a.len(), self.b.len());
        let mut items = Vec::with_capacity(i + j);

        while i > 0 || j > 0 {
            if i == 0 {
                items.push(DiffItem::insertion(&self.b[j - 1]));
                j -= 1;
            } else if j == 0 {
                items.push(DiffItem::deletion(&self.a[i - 1]));
                i -= 1;
            } else if self.a[i - 1].text == self.b[j - 1].text {
                items.push(DiffItem::unchanged(&self.a[i - 1]));
                i -= 1;
                j -= 1;
            } else if self.length(i, j - 1) > self.length(i - 1, j) {
                items.push(DiffItem::insertion(&self.b[j - 1]));
                j -= 1;
            } else {
                items.push(DiffItem::deletion(&self.a[i - 1]));
                i -= 1;
            }
        }

        items.reverse();
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Items;
    use crate::line::to_lines;

    fn split(s: &str) -> Vec<IndexedLine> {
        to_lines(&s.split('\n').collect::<Vec<_>>())
    }

    #[test]
    fn length_table_for_single_substitution() {
        let (a, b) = (split("a\nx\nb"), split("a\nb\nc"));
        let table = LcsTable::build(&a, &b);
        assert_eq!(
            table.lengths(),
            &[0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 2, 2]
        );
        assert_eq!(Items(&table.diff()).to_string(), " a\n-x\n b\n+c");
    }

    #[test]
    fn length_table_for_reordered_lines() {
        let (a, b) = (split("g\na\nc"), split("a\ng\nc\na\nt"));
        let table = LcsTable::build(&a, &b);
        assert_eq!(
            table.lengths(),
            &[
                0, 0, 0, 0, 0, 0, //
                0, 0, 1, 1, 1, 1, //
                0, 1, 1, 1, 2, 2, //
                0, 1, 1, 2, 2, 2,
            ]
        );
        assert_eq!(table.cells(), 24);
        assert_eq!(Items(&table.diff()).to_string(), "+a\n g\n+c\n a\n+t\n-c");
    }

    #[test]
    fn borders_are_zero_and_rows_monotonic() {
        let (a, b) = (split("p\nq\np\nr\nq"), split("q\np\nr\np"));
        let table = LcsTable::build(&a, &b);
        for i in 0..=a.len() {
            assert_eq!(table.length(i, 0), 0);
        }
        for j in 0..=b.len() {
            assert_eq!(table.length(0, j), 0);
        }
        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let cell = table.length(i, j);
                assert!(cell >= table.length(i - 1, j));
                assert!(cell >= table.length(i, j - 1));
            }
        }
    }

    #[test]
    fn subsequence_of_single_substitution() {
        let (a, b) = (split("a\nx\nb"), split("a\nb\nc"));
        let table = LcsTable::build(&a, &b);
        assert_eq!(table.longest_common_subsequence(), vec![(0, 0), (2, 1)]);
    }

    #[test]
    fn subsequence_skips_filler_lines() {
        let a = split("X\nX\nX\na\nX\nX\nX\nb\nX\nX\nX\nc");
        let b = split("Y\nY\na\nY\nY\nb\nY\nY\nc");
        let table = LcsTable::build(&a, &b);
        assert_eq!(
            table.longest_common_subsequence(),
            vec![(3, 2), (7, 5), (11, 8)]
        );
    }

    #[test]
    fn subsequence_ties_step_back_in_a() {
        // At (2, 2) both neighbours hold 1; stepping back in `a` keeps "x".
        let (a, b) = (split("x\ny"), split("y\nx"));
        let table = LcsTable::build(&a, &b);
        assert_eq!(table.length(2, 1), table.length(1, 2));
        assert_eq!(table.longest_common_subsequence(), vec![(0, 1)]);
    }

    #[test]
    fn cells_for_matches_built_table() {
        let (a, b) = (split("a\nb\nc"), split("d\ne"));
        assert_eq!(LcsTable::cells_for(a.len(), b.len()), LcsTable::build(&a, &b).cells());
        assert_eq!(LcsTable::cells_for(0, 0), 1);
        assert_eq!(LcsTable::cells_for(usize::MAX, 1), usize::MAX);
    }

    #[test]
    fn subsequence_reports_line_indices() {
        let a = vec![IndexedLine::new(10, "k"), IndexedLine::new(14, "m")];
        let b = vec![IndexedLine::new(3, "m")];
        let table = LcsTable::build(&a, &b);
        assert_eq!(table.longest_common_subsequence(), vec![(14, 3)]);
    }

    #[test]
    fn empty_sides() {
        let a = split("a\nb");
        let table = LcsTable::build(&a, &[]);
        assert!(table.longest_common_subsequence().is_empty());
        assert_eq!(Items(&table.diff()).to_string(), "-a\n-b");

        let table = LcsTable::build(&[], &a);
        assert_eq!(Items(&table.diff()).to_string(), "+a\n+b");

        let table = LcsTable::build(&[], &[]);
        assert_eq!(table.cells(), 1);
        assert!(table.diff().is_empty());
    }

    #[test]
    fn ties_prefer_deletion_in_diff() {
        let (a, b) = (split("a"), split("b"));
        let table = LcsTable::build(&a, &b);
        assert_eq!(Items(&table.diff()).to_string(), "+b\n-a");
    }
}
