//! Error types for annotation operations.

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by annotation operations.
///
/// All of these are local, synchronous failures; nothing is retried
/// internally. A missing suggestion level during corrected-text rendering
/// is *not* an error — the span keeps its original substring instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `start > end` was passed to an annotation operation.
    #[error("invalid span: start {start} is greater than end {end}")]
    InvalidSpan {
        /// Requested span start (char offset).
        start: usize,
        /// Requested span end (char offset).
        end: usize,
    },

    /// A span reaches past the end of the text.
    #[error("span ({start}, {end}) lies outside a text of {len} characters")]
    OutOfBounds {
        /// Requested span start (char offset).
        start: usize,
        /// Requested span end (char offset).
        end: usize,
        /// Text length in characters.
        len: usize,
    },

    /// A new or decoded span conflicts with existing annotations.
    #[error("overlap detected: span ({start}, {end}) conflicts with {count} existing annotation(s)")]
    Overlap {
        /// Conflicting span start (char offset).
        start: usize,
        /// Conflicting span end (char offset).
        end: usize,
        /// Number of existing annotations the span conflicts with.
        count: usize,
    },

    /// The targeted annotation is not in the set.
    #[error("annotation `{markup}` is not in the set")]
    NotFound {
        /// Markup rendering of the missing annotation.
        markup: String,
    },
}
