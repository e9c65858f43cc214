//! The annotated-text aggregate.
//!
//! [`AnnotatedText`] owns the current base text and its annotation set,
//! enforces the no-overlap invariant, and renders the text in three
//! forms: untouched, corrected, or as inline markup. Applying a
//! correction destructively rewrites the base text and re-establishes
//! every remaining annotation's offsets through one named shift
//! primitive.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::annotation::{Annotation, IntoSuggestions};
use crate::edits::MutableText;
use crate::error::{Error, Result};
use crate::markup;
use crate::span;

/// A text with a set of non-overlapping annotations over it.
///
/// Offsets are char offsets into [`original_text`](Self::original_text).
/// Between any two public operations both invariants hold: no two
/// annotations conflict (twin zero-length markers at one point count as
/// conflicting, touching boundaries do not), and every annotation's span
/// lies within the text with its `source_text` equal to the spanned
/// substring.
///
/// # Example
///
/// ```
/// use redline::AnnotatedText;
///
/// let text = AnnotatedText::from_markup("The {cat=>cats} is {nere=>here}.")?;
/// assert_eq!(text.original_text(), "The cat is nere.");
/// assert_eq!(text.corrected_text(0), "The cats is here.");
/// # Ok::<(), redline::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnnotatedText {
    text: String,
    annotations: Vec<Annotation>,
}

impl AnnotatedText {
    /// Decode a markup string into an annotated text.
    ///
    /// Plain text without tokens constructs an empty annotation set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overlap`] when the decoded annotations would
    /// conflict (see [`markup::decode`]).
    pub fn from_markup(raw: &str) -> Result<Self> {
        let (text, annotations) = markup::decode(raw)?;
        Ok(Self { text, annotations })
    }

    /// The current base text, with no markup embedded.
    pub fn original_text(&self) -> &str {
        &self.text
    }

    /// The annotations, in insertion order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// The annotation covering exactly `[start, end)`, if any.
    pub fn annotation_at(&self, start: usize, end: usize) -> Option<&Annotation> {
        self.annotations
            .iter()
            .find(|a| a.start() == start && a.end() == end)
    }

    /// The annotation whose span contains the char position `pos`, if any.
    pub fn annotation_covering(&self, pos: usize) -> Option<&Annotation> {
        self.annotations
            .iter()
            .find(|a| a.start() <= pos && pos < a.end())
    }

    /// Every annotation that conflicts with `[start, end)` under the span
    /// rules.
    pub fn overlaps(&self, start: usize, end: usize) -> Vec<&Annotation> {
        self.annotations
            .iter()
            .filter(|a| span::conflicts(a.span(), (start, end)))
            .collect()
    }

    /// Annotate `[start, end)` with replacement suggestions.
    ///
    /// `suggestions` may be a single string, `None` (flag only), or a
    /// sequence of candidates in preference order; the covered substring
    /// is captured as the annotation's source text.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSpan`] when `start > end`, [`Error::OutOfBounds`]
    /// when the span reaches past the text, and [`Error::Overlap`]
    /// (carrying the conflict count) when the span conflicts with
    /// existing annotations. On error the annotation set is unchanged.
    pub fn annotate(
        &mut self,
        start: usize,
        end: usize,
        suggestions: impl IntoSuggestions,
    ) -> Result<()> {
        self.annotate_with_meta(start, end, suggestions, BTreeMap::new())
    }

    /// Like [`annotate`](Self::annotate), with a metadata map attached.
    pub fn annotate_with_meta(
        &mut self,
        start: usize,
        end: usize,
        suggestions: impl IntoSuggestions,
        meta: BTreeMap<String, String>,
    ) -> Result<()> {
        if start > end {
            return Err(Error::InvalidSpan { start, end });
        }
        let len = self.text.chars().count();
        if end > len {
            return Err(Error::OutOfBounds { start, end, len });
        }

        let conflicting = self.overlaps(start, end);
        if !conflicting.is_empty() {
            return Err(Error::Overlap {
                start,
                end,
                count: conflicting.len(),
            });
        }

        let source_text: String = self.text.chars().skip(start).take(end - start).collect();
        tracing::debug!(start, end, source = %source_text, "annotating span");
        self.annotations.push(Annotation::new(
            start,
            end,
            source_text,
            suggestions.into_suggestions(),
            meta,
        ));
        Ok(())
    }

    /// Remove `annotation` from the set, comparing by value.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no equal annotation is present.
    pub fn remove(&mut self, annotation: &Annotation) -> Result<()> {
        let index = self
            .annotations
            .iter()
            .position(|a| a == annotation)
            .ok_or_else(|| Error::NotFound {
                markup: annotation.to_markup(true),
            })?;
        self.annotations.remove(index);
        Ok(())
    }

    /// Apply one correction destructively.
    ///
    /// Removes `annotation`, splices its suggestion at `level` into the
    /// base text (when no such suggestion exists the original substring
    /// is kept — the correction is silently accepted as a textual no-op),
    /// and shifts every annotation behind the corrected span by the
    /// length delta, keeping all spans valid.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when `annotation` is not in the set; the text
    /// is untouched in that case.
    pub fn apply_correction(&mut self, annotation: &Annotation, level: usize) -> Result<()> {
        self.remove(annotation)?;

        let replacement = match annotation.suggestions().get(level) {
            Some(suggestion) => suggestion.clone(),
            None => {
                tracing::warn!(level, "no suggestion at requested level, keeping original text");
                annotation.source_text().to_string()
            }
        };

        let mut text = MutableText::new(std::mem::take(&mut self.text));
        text.replace(annotation.start(), annotation.end(), replacement.as_str());
        self.text = text.edited_text();

        let delta = replacement.chars().count() as isize
            - annotation.source_text().chars().count() as isize;
        tracing::debug!(
            start = annotation.start(),
            end = annotation.end(),
            delta,
            "applied correction"
        );
        self.shift(annotation.end(), delta);
        Ok(())
    }

    /// Render the corrected text, non-destructively.
    ///
    /// Every annotation with a suggestion at `level` has its span
    /// replaced by that suggestion; spans lacking one keep their original
    /// substring (best-effort rendering, not an error).
    pub fn corrected_text(&self, level: usize) -> String {
        let mut text = MutableText::new(self.text.as_str());
        for annotation in &self.annotations {
            if let Some(suggestion) = annotation.suggestions().get(level) {
                text.replace(annotation.start(), annotation.end(), suggestion.as_str());
            }
        }
        text.edited_text()
    }

    /// Render the text with every annotation embedded as inline markup.
    pub fn to_markup(&self, with_meta: bool) -> String {
        markup::encode(&self.text, &self.annotations, with_meta)
    }

    /// Encode each input (metadata included), concatenate with `token`,
    /// and decode the result as a fresh annotated text. Annotation
    /// offsets in the result are relative to the concatenated stripped
    /// text.
    ///
    /// # Errors
    ///
    /// [`Error::Overlap`] when re-decoding the concatenation conflicts —
    /// e.g. zero-length markers from adjacent inputs landing on the same
    /// position.
    pub fn join(token: &str, texts: &[Self]) -> Result<Self> {
        let merged = texts
            .iter()
            .map(|t| t.to_markup(true))
            .collect::<Vec<_>>()
            .join(token);
        Self::from_markup(&merged)
    }

    /// Shift every annotation starting at or after `from` by `delta`
    /// chars, both ends.
    ///
    /// The one primitive that restores span validity after the base text
    /// is rewritten; never mutate offsets anywhere else.
    fn shift(&mut self, from: usize, delta: isize) {
        if delta == 0 {
            return;
        }
        for annotation in &mut self.annotations {
            if annotation.start() >= from {
                *annotation = annotation.shifted(delta);
            }
        }
    }
}

impl FromStr for AnnotatedText {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_markup(s)
    }
}

impl fmt::Display for AnnotatedText {
    /// Renders the markup form, metadata included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup(true))
    }
}

/// Equal iff the base texts match and the annotation sets are equal as
/// sets of values, regardless of insertion order.
impl PartialEq for AnnotatedText {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.annotations.len() == other.annotations.len()
            && other
                .annotations
                .iter()
                .all(|a| self.annotation_at(a.start(), a.end()) == Some(a))
    }
}

impl Eq for AnnotatedText {}
