//! Classified diff items and their text rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::line::IndexedLine;

/// How a line relates to the two compared sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Present only in the new sequence.
    Insertion,
    /// Present in both sequences.
    Unchanged,
    /// Present only in the old sequence.
    Deletion,
}

impl ItemKind {
    /// The one-character sigil used when rendering an item.
    pub fn sigil(self) -> char {
        match self {
            ItemKind::Insertion => '+',
            ItemKind::Unchanged => ' ',
            ItemKind::Deletion => '-',
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sigil())
    }
}

/// A single entry of a diff result.
///
/// Unchanged and deleted items carry the line's index in the old sequence;
/// inserted items carry its index in the new sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffItem {
    /// Classification of the line.
    pub kind: ItemKind,
    /// The line itself.
    pub line: IndexedLine,
}

impl DiffItem {
    /// Create a new item.
    pub fn new(kind: ItemKind, line: IndexedLine) -> Self {
        Self { kind, line }
    }

    pub(crate) fn insertion(line: &IndexedLine) -> Self {
        Self::new(ItemKind::Insertion, line.clone())
    }

    pub(crate) fn unchanged(line: &IndexedLine) -> Self {
        Self::new(ItemKind::Unchanged, line.clone())
    }

    pub(crate) fn deletion(line: &IndexedLine) -> Self {
        Self::new(ItemKind::Deletion, line.clone())
    }

    /// The item's text.
    pub fn text(&self) -> &str {
        &self.line.text
    }

    /// Returns `true` if the item is an insertion.
    pub fn is_insertion(&self) -> bool {
        self.kind == ItemKind::Insertion
    }

    /// Returns `true` if the item is unchanged.
    pub fn is_unchanged(&self) -> bool {
        self.kind == ItemKind::Unchanged
    }

    /// Returns `true` if the item is a deletion.
    pub fn is_deletion(&self) -> bool {
        self.kind == ItemKind::Deletion
    }
}

impl fmt::Display for DiffItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.line.text)
    }
}

/// Display adapter rendering a diff as newline-separated sigil lines.
#[derive(Clone, Copy, Debug)]
pub struct Items<'a>(pub &'a [DiffItem]);

impl fmt::Display for Items<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Per-kind item counts of a diff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Number of inserted lines.
    pub insertions: usize,
    /// Number of deleted lines.
    pub deletions: usize,
    /// Number of unchanged lines.
    pub unchanged: usize,
}

impl DiffStats {
    /// Count the items of a diff by kind.
    pub fn from_items(items: &[DiffItem]) -> Self {
        items.iter().fold(Self::default(), |mut stats, item| {
            match item.kind {
                ItemKind::Insertion => stats.insertions += 1,
                ItemKind::Unchanged => stats.unchanged += 1,
                ItemKind::Deletion => stats.deletions += 1,
            }
            stats
        })
    }

    /// Returns `true` if the diff contains no insertions or deletions.
    pub fn is_identity(&self) -> bool {
        self.insertions == 0 && self.deletions == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: ItemKind, index: usize, text: &str) -> DiffItem {
        DiffItem::new(kind, IndexedLine::new(index, text))
    }

    #[test]
    fn sigils() {
        assert_eq!(ItemKind::Insertion.to_string(), "+");
        assert_eq!(ItemKind::Unchanged.to_string(), " ");
        assert_eq!(ItemKind::Deletion.to_string(), "-");
    }

    #[test]
    fn item_renders_sigil_then_text() {
        assert_eq!(item(ItemKind::Insertion, 0, "foo").to_string(), "+foo");
        assert_eq!(item(ItemKind::Unchanged, 0, "").to_string(), " ");
    }

    #[test]
    fn items_are_newline_joined() {
        let items = vec![
            item(ItemKind::Unchanged, 0, "a"),
            item(ItemKind::Deletion, 1, "x"),
            item(ItemKind::Insertion, 1, "c"),
        ];
        assert_eq!(Items(&items).to_string(), " a\n-x\n+c");
        assert_eq!(Items(&[]).to_string(), "");
    }

    #[test]
    fn stats_count_each_kind() {
        let items = vec![
            item(ItemKind::Unchanged, 0, "a"),
            item(ItemKind::Deletion, 1, "x"),
            item(ItemKind::Insertion, 1, "c"),
            item(ItemKind::Insertion, 2, "d"),
        ];
        let stats = DiffStats::from_items(&items);
        assert_eq!(stats.insertions, 2);
        assert_eq!(stats.deletions, 1);
        assert_eq!(stats.unchanged, 1);
        assert!(!stats.is_identity());
        assert!(DiffStats::from_items(&items[..1]).is_identity());
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&item(ItemKind::Deletion, 3, "x")).unwrap();
        assert_eq!(json, r#"{"kind":"deletion","line":{"index":3,"text":"x"}}"#);
    }
}
