// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. annotation::Annotation)
    clippy::module_name_repetitions
)]

//! # Redline
//!
//! An annotated-text engine for error-correction corpora.
//!
//! Redline keeps a plain text together with a set of non-overlapping
//! *annotations* — spans of the original text paired with replacement
//! suggestions and key/value metadata — and renders it three ways:
//!
//! - the untouched original text,
//! - a corrected text with a chosen suggestion spliced into each span,
//! - inline `{old=>new:::key=value}` markup that re-embeds every
//!   annotation (a lossless round trip with parsing).
//!
//! Corrections can also be applied destructively, one at a time, with
//! every remaining annotation's offsets kept valid.
//!
//! ## Example
//!
//! ```
//! use redline::AnnotatedText;
//!
//! let mut text = AnnotatedText::from_markup("I {goed=>went:::error_type=VerbForm} home.")?;
//! assert_eq!(text.original_text(), "I goed home.");
//! assert_eq!(text.corrected_text(0), "I went home.");
//!
//! let annotation = text.annotations()[0].clone();
//! text.apply_correction(&annotation, 0)?;
//! assert_eq!(text.original_text(), "I went home.");
//! # Ok::<(), redline::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`annotated`]: the [`AnnotatedText`] aggregate and its operations
//! - [`annotation`]: the [`Annotation`] value type
//! - [`markup`]: the inline markup codec (parse and render)
//! - [`edits`]: edit compositing over a base text
//! - [`span`]: span conflict arithmetic
//! - [`error`]: error types
//!
//! All offsets throughout the crate are character offsets.

pub mod annotated;
pub mod annotation;
pub mod edits;
pub mod error;
pub mod markup;
pub mod span;

pub use annotated::AnnotatedText;
pub use annotation::{Annotation, IntoSuggestions};
pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::annotated::AnnotatedText;
    pub use crate::annotation::{Annotation, IntoSuggestions};
    pub use crate::edits::MutableText;
    pub use crate::error::{Error, Result};
}
