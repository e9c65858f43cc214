//! Left-to-right token scanner for the inline annotation grammar.
//!
//! One token is `{` *source* `=>` *suggestions* (`:::` *key* `=` *value*)* `}`.
//! Matching is non-nested and non-overlapping. The rules, spelled out:
//!
//! - a token opens at `{` and the source segment never contains another `{`;
//! - when the segment before the suggestion field contains several `=>`,
//!   the *last* one is the separator (so a source containing `=>` still
//!   round-trips);
//! - the suggestion field may not span a line break;
//! - a metadata group starts at the first `:::` that is not followed by
//!   another `:`, and runs to the closing `}`;
//! - without metadata, the token closes at the first `}` after the
//!   separator.
//!
//! Positions are byte offsets into the scanned text; all delimiters are
//! ASCII, so the offsets always fall on character boundaries.

/// One matched token, borrowing from the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawToken<'a> {
    /// Byte offset of the opening `{`.
    pub start: usize,
    /// Byte offset one past the closing `}`.
    pub end: usize,
    /// The source segment.
    pub source: &'a str,
    /// The raw suggestion field (unsplit, sentinel not yet interpreted).
    pub suggestions: &'a str,
    /// The raw metadata field, including its leading `:::`.
    pub meta: Option<&'a str>,
}

/// Iterate over all tokens in `text`, left to right.
pub(crate) fn tokens(text: &str) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}

/// Iterator over the tokens of one text.
#[derive(Debug, Clone)]
pub(crate) struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

/// Where the tail of a token (suggestions, metadata, closing brace) ended.
struct Tail {
    /// Byte offset one past the end of the suggestion field.
    suggestions_end: usize,
    /// Byte range of the metadata field.
    meta: Option<(usize, usize)>,
    /// Byte offset one past the closing `}`.
    end: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = RawToken<'a>;

    fn next(&mut self) -> Option<RawToken<'a>> {
        let text = self.text;
        let bytes = text.as_bytes();
        let mut search = self.pos;

        while let Some(rel) = bytes[search..].iter().position(|&b| b == b'{') {
            let open = search + rel;
            let body_start = open + 1;
            // The source candidate runs to the next `{` (tokens never nest).
            let body_end = bytes[body_start..]
                .iter()
                .position(|&b| b == b'{')
                .map_or(text.len(), |i| body_start + i);
            let body = &text[body_start..body_end];

            // Try each separator, rightmost first.
            let separators: Vec<usize> = body.match_indices("=>").map(|(i, _)| i).collect();
            for &sep in separators.iter().rev() {
                let field_start = body_start + sep + 2;
                if let Some(tail) = match_tail(bytes, field_start) {
                    self.pos = tail.end;
                    return Some(RawToken {
                        start: open,
                        end: tail.end,
                        source: &text[body_start..body_start + sep],
                        suggestions: &text[field_start..tail.suggestions_end],
                        meta: tail.meta.map(|(a, b)| &text[a..b]),
                    });
                }
            }

            // No token opens here; the next candidate is the `{` that
            // terminated the body (if any).
            search = body_end;
        }
        None
    }
}

/// Match the suggestion field, optional metadata group, and closing brace
/// starting at byte `from`.
///
/// The suggestion field grows one character at a time; at each position a
/// metadata group is attempted first, then the bare closing brace. A line
/// break (or the end of input) before the token closes means there is no
/// token here.
fn match_tail(bytes: &[u8], from: usize) -> Option<Tail> {
    let mut p = from;
    loop {
        // Metadata: `:::` not followed by another `:`, closed by `}`.
        if bytes[p..].starts_with(b":::")
            && bytes.get(p + 3).is_some_and(|&lead| lead != b':')
            && let Some(rel) = bytes[p + 4..].iter().position(|&b| b == b'}')
        {
            let close = p + 4 + rel;
            return Some(Tail {
                suggestions_end: p,
                meta: Some((p, close)),
                end: close + 1,
            });
        }
        match bytes.get(p) {
            Some(b'}') => {
                return Some(Tail {
                    suggestions_end: p,
                    meta: None,
                    end: p + 1,
                });
            }
            Some(b'\n') | None => return None,
            Some(_) => p += 1,
        }
    }
}
