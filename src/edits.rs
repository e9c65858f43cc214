//! Edit compositing over a base text.
//!
//! [`MutableText`] holds a base string plus a queue of pending
//! `(start, end, replacement)` edits over disjoint character ranges, and
//! splices them into a single output string. It is a transient helper:
//! build it, queue edits, read the edited text, discard it.

use std::fmt;

/// A single pending replacement of the chars in `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Edit {
    start: usize,
    end: usize,
    replacement: String,
}

/// A base text plus pending edits over disjoint character ranges.
///
/// The compositor does not check that edits are disjoint; that is the
/// caller's responsibility (the annotation set's no-overlap invariant
/// already guarantees it). Edits queued with equal spans are emitted in
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct MutableText {
    text: String,
    edits: Vec<Edit>,
}

impl MutableText {
    /// Wrap a base text with an empty edit queue.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            edits: Vec::new(),
        }
    }

    /// Queue a replacement of the chars in `[start, end)` with `replacement`.
    ///
    /// A zero-length span (`start == end`) queues a pure insertion.
    pub fn replace(&mut self, start: usize, end: usize, replacement: impl Into<String>) {
        self.edits.push(Edit {
            start,
            end,
            replacement: replacement.into(),
        });
    }

    /// The base text, untouched by pending edits.
    pub fn source_text(&self) -> &str {
        &self.text
    }

    /// Splice all pending edits into a new string.
    ///
    /// Edits are applied in ascending `(start, end)` order: the untouched
    /// gap before each edit is copied, the replacement emitted, and the
    /// cursor advanced past the edited span; trailing text is copied
    /// verbatim. Offsets are character offsets.
    ///
    /// # Panics
    ///
    /// Panics if an edit reaches past the end of the text.
    pub fn edited_text(&self) -> String {
        let mut order: Vec<&Edit> = self.edits.iter().collect();
        // Stable, so equal spans keep their insertion order.
        order.sort_by_key(|e| (e.start, e.end));

        // Byte offset of every char boundary, plus the end of the text.
        let boundary: Vec<usize> = self
            .text
            .char_indices()
            .map(|(b, _)| b)
            .chain(std::iter::once(self.text.len()))
            .collect();

        let mut out = String::new();
        let mut cursor = 0usize;
        for edit in order {
            out.push_str(&self.text[boundary[cursor]..boundary[edit.start]]);
            out.push_str(&edit.replacement);
            cursor = edit.end;
        }
        out.push_str(&self.text[boundary[cursor]..]);
        out
    }
}

impl fmt::Display for MutableText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.edited_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- No edits ---

    #[test]
    fn test_no_edits_returns_base_text() {
        let text = MutableText::new("hello world");
        assert_eq!(text.edited_text(), "hello world");
        assert_eq!(text.source_text(), "hello world");
    }

    #[test]
    fn test_empty_text() {
        let text = MutableText::new("");
        assert_eq!(text.edited_text(), "");
    }

    // --- Single edits ---

    #[test]
    fn test_replace_middle() {
        let mut text = MutableText::new("The cat sat.");
        text.replace(4, 7, "dog");
        assert_eq!(text.edited_text(), "The dog sat.");
    }

    #[test]
    fn test_replace_with_different_length() {
        let mut text = MutableText::new("The cat sat.");
        text.replace(4, 7, "elephant");
        assert_eq!(text.edited_text(), "The elephant sat.");
    }

    #[test]
    fn test_delete_span() {
        let mut text = MutableText::new("The cat sat.");
        text.replace(3, 7, "");
        assert_eq!(text.edited_text(), "The sat.");
    }

    #[test]
    fn test_insert_at_point() {
        let mut text = MutableText::new("The sat.");
        text.replace(4, 4, "cat ");
        assert_eq!(text.edited_text(), "The cat sat.");
    }

    #[test]
    fn test_replace_at_start_and_end() {
        let mut text = MutableText::new("abc");
        text.replace(0, 1, "X");
        text.replace(2, 3, "Z");
        assert_eq!(text.edited_text(), "XbZ");
    }

    // --- Multiple edits ---

    #[test]
    fn test_edits_apply_in_span_order_regardless_of_queue_order() {
        let mut text = MutableText::new("one two three");
        text.replace(8, 13, "3");
        text.replace(0, 3, "1");
        text.replace(4, 7, "2");
        assert_eq!(text.edited_text(), "1 2 3");
    }

    #[test]
    fn test_adjacent_edits() {
        let mut text = MutableText::new("abcd");
        text.replace(0, 2, "X");
        text.replace(2, 4, "Y");
        assert_eq!(text.edited_text(), "XY");
    }

    #[test]
    fn test_equal_spans_keep_insertion_order() {
        let mut text = MutableText::new("ab");
        text.replace(1, 1, "x");
        text.replace(1, 1, "y");
        assert_eq!(text.edited_text(), "axyb");
    }

    #[test]
    fn test_queue_is_not_consumed() {
        let mut text = MutableText::new("cat");
        text.replace(0, 3, "dog");
        assert_eq!(text.edited_text(), "dog");
        assert_eq!(text.edited_text(), "dog");
    }

    // --- Unicode ---

    #[test]
    fn test_offsets_are_char_offsets() {
        let mut text = MutableText::new("café au lait");
        text.replace(5, 7, "et");
        assert_eq!(text.edited_text(), "café et lait");
    }

    #[test]
    fn test_multibyte_replacement() {
        let mut text = MutableText::new("naive");
        text.replace(1, 3, "aï");
        assert_eq!(text.edited_text(), "naïve");
    }
}
