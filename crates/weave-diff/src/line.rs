use serde::{Deserialize, Serialize};

/// A line of text together with its position in the sequence it came from.
///
/// The index is assigned once, when the source sequence is indexed, and is
/// never rewritten while the engine slices the input into smaller regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexedLine {
    /// Zero-based position in the source sequence.
    pub index: usize,
    /// The line's text, without its terminator.
    pub text: String,
}

impl IndexedLine {
    /// Create a new indexed line.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// Index every line of `lines` by its position.
pub fn to_lines<S: AsRef<str>>(lines: &[S]) -> Vec<IndexedLine> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| IndexedLine::new(i, line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_follow_position() {
        let lines = to_lines(&["x", "y", "x"]);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], IndexedLine::new(0, "x"));
        assert_eq!(lines[2], IndexedLine::new(2, "x"));
    }

    #[test]
    fn empty_input() {
        let lines = to_lines::<&str>(&[]);
        assert!(lines.is_empty());
    }
}
