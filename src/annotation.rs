//! The annotation value type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::markup::NO_SUGGESTIONS;

/// A single annotation: a span of the base text, the substring it
/// originally covered, an ordered list of replacement suggestions, and
/// arbitrary string metadata.
///
/// Annotations are immutable values. Equality and hashing cover all
/// fields; metadata compares as an unordered set of key/value pairs
/// (keys are unique). Offsets are character offsets into the owning
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    start: usize,
    end: usize,
    source_text: String,
    suggestions: Vec<String>,
    meta: BTreeMap<String, String>,
}

impl Annotation {
    /// Create an annotation covering `[start, end)` with the given
    /// original substring, suggestions, and metadata.
    pub fn new(
        start: usize,
        end: usize,
        source_text: impl Into<String>,
        suggestions: Vec<String>,
        meta: BTreeMap<String, String>,
    ) -> Self {
        Self {
            start,
            end,
            source_text: source_text.into(),
            suggestions,
            meta,
        }
    }

    /// Span start (char offset, inclusive).
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Span end (char offset, exclusive).
    pub const fn end(&self) -> usize {
        self.end
    }

    /// The `(start, end)` span pair.
    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// The substring of the base text this annotation covered when it was
    /// created.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// The ordered replacement suggestions. Empty means "flagged, no
    /// suggestion offered".
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// The first suggestion, if any.
    pub fn top_suggestion(&self) -> Option<&str> {
        self.suggestions.first().map(String::as_str)
    }

    /// The metadata map.
    pub const fn meta(&self) -> &BTreeMap<String, String> {
        &self.meta
    }

    /// Render this annotation as a markup token.
    ///
    /// Suggestions are joined with `|`, or replaced by the sentinel when
    /// the list is empty; with `with_meta`, each metadata entry is
    /// appended as a `:::key=value` group.
    ///
    /// ```
    /// use redline::Annotation;
    ///
    /// let ann = Annotation::new(4, 7, "cat", vec!["cats".into(), "cat's".into()], Default::default());
    /// assert_eq!(ann.to_markup(true), "{cat=>cats|cat's}");
    /// ```
    pub fn to_markup(&self, with_meta: bool) -> String {
        let replacement = if self.suggestions.is_empty() {
            NO_SUGGESTIONS.to_string()
        } else {
            self.suggestions.join("|")
        };
        let meta = if with_meta {
            self.format_meta()
        } else {
            String::new()
        };
        format!("{{{}=>{}{}}}", self.source_text, replacement, meta)
    }

    /// Render the metadata portion of the markup token.
    fn format_meta(&self) -> String {
        self.meta
            .iter()
            .map(|(k, v)| format!(":::{k}={v}"))
            .collect()
    }

    /// A copy of this annotation with both offsets moved by `delta`.
    pub(crate) fn shifted(&self, delta: isize) -> Self {
        Self {
            start: (self.start as isize + delta) as usize,
            end: (self.end as isize + delta) as usize,
            ..self.clone()
        }
    }
}

/// Conversion into an ordered suggestion list.
///
/// Lets [`AnnotatedText::annotate`](crate::AnnotatedText::annotate)
/// accept a single replacement string, an optional one (`None` meaning
/// "flag only"), or any sequence of candidates in preference order.
pub trait IntoSuggestions {
    /// Normalize into the ordered suggestion list.
    fn into_suggestions(self) -> Vec<String>;
}

impl IntoSuggestions for Vec<String> {
    fn into_suggestions(self) -> Vec<String> {
        self
    }
}

impl IntoSuggestions for String {
    fn into_suggestions(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoSuggestions for &str {
    fn into_suggestions(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoSuggestions for &[&str] {
    fn into_suggestions(self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl<const N: usize> IntoSuggestions for [&str; N] {
    fn into_suggestions(self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl IntoSuggestions for Option<&str> {
    fn into_suggestions(self) -> Vec<String> {
        self.map(|s| vec![s.to_string()]).unwrap_or_default()
    }
}
