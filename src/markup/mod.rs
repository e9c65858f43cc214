//! The inline markup codec.
//!
//! Converts between plain text with embedded `{old=>new:::k=v}` tokens
//! and a (stripped text, annotation list) pair, in both directions. The
//! round trip is lossless: decoding the encoded form of an annotated
//! text reproduces an equal text and annotation set.

mod scanner;

use std::collections::BTreeMap;

use crate::annotation::Annotation;
use crate::edits::MutableText;
use crate::error::{Error, Result};
use crate::span;

/// Sentinel suggestion field meaning "flagged, no replacement offered".
pub const NO_SUGGESTIONS: &str = "noSuggestions";

/// Decode a markup string into its stripped text and annotation list.
///
/// Tokens are matched left to right, non-nested and non-overlapping; the
/// stripped text replaces each token with its own source segment, and
/// each annotation's offsets are char positions in the stripped text
/// (raw match positions corrected by the running shrinkage of all
/// earlier tokens). Text outside tokens is copied verbatim, so malformed
/// markup simply stays literal.
///
/// # Errors
///
/// Returns [`Error::Overlap`] when the decoded annotations would violate
/// the no-overlap invariant — only possible for two zero-length source
/// segments landing on the same stripped position, e.g. `"{=>a}{=>b}"`.
pub fn decode(raw: &str) -> Result<(String, Vec<Annotation>)> {
    let mut annotations: Vec<Annotation> = Vec::new();
    let mut spans: Vec<span::Span> = Vec::new();
    let mut stripped = String::new();
    let mut stripped_chars = 0usize;
    let mut last = 0usize;

    for token in scanner::tokens(raw) {
        let gap = &raw[last..token.start];
        stripped.push_str(gap);
        stripped_chars += gap.chars().count();

        let start = stripped_chars;
        let end = start + token.source.chars().count();

        if span::first_conflict(&spans, start, end).is_some() {
            let count = spans
                .iter()
                .filter(|&&existing| span::conflicts(existing, (start, end)))
                .count();
            return Err(Error::Overlap { start, end, count });
        }

        let suggestions = if token.suggestions == NO_SUGGESTIONS {
            Vec::new()
        } else {
            token.suggestions.split('|').map(ToString::to_string).collect()
        };
        let meta = token.meta.map_or_else(BTreeMap::new, parse_meta);

        annotations.push(Annotation::new(start, end, token.source, suggestions, meta));
        spans.push((start, end));
        stripped.push_str(token.source);
        stripped_chars = end;
        last = token.end;
    }

    stripped.push_str(&raw[last..]);
    Ok((stripped, annotations))
}

/// Render every annotation back into its span over `text`.
pub fn encode(text: &str, annotations: &[Annotation], with_meta: bool) -> String {
    let mut out = MutableText::new(text);
    for annotation in annotations {
        out.replace(
            annotation.start(),
            annotation.end(),
            annotation.to_markup(with_meta),
        );
    }
    out.edited_text()
}

/// Split a raw metadata field into key/value pairs.
///
/// The field arrives with its leading `:::`; every `:::`-delimited piece
/// is partitioned on its first `=` (a piece without `=` becomes a key
/// with an empty value). Duplicate keys keep the last value.
fn parse_meta(field: &str) -> BTreeMap<String, String> {
    field
        .split(":::")
        .skip(1)
        .map(|piece| {
            let (key, value) = piece.split_once('=').unwrap_or((piece, ""));
            (key.to_string(), value.to_string())
        })
        .collect()
}
