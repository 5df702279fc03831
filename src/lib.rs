//! # rs-doczones
//!
//! Structural zone classification for TEI-encoded thesis documents.
//!
//! This library assigns each paragraph of an academic document to a structural
//! zone - title page, table of contents, abstracts, numbered chapters,
//! conclusion, bibliography, and the coarse front/body/back macro-regions -
//! using an ordered table of pattern rules followed by a stateful propagation
//! pass over the document's reading order.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_doczones::{classify, Zone};
//!
//! let xml = r#"<p xml:id="1.1">UNIVERZA V LJUBLJANI</p>
//! <p xml:id="1.2">Mentor: dr. Novak</p>
//! <p xml:id="4.1">1 Uvod</p>"#;
//!
//! let result = classify(xml);
//! assert_eq!(result.records[0].zone, Zone::TitlePage);
//! assert_eq!(result.records[1].zone, Zone::TitlePage); // inherited
//! assert_eq!(result.records[2].zone, Zone::Chapter);
//! ```
//!
//! ## Design
//!
//! - **Rule table**: first-match-wins over a fixed priority order; no match
//!   falls back to `body`. Configurable via a JSON list of rule specs.
//! - **Propagation**: paragraphs inherit the established label of their
//!   enclosing section, and everything outside matched zones partitions
//!   monotonically into front, body, and back matter.
//! - **No hard failures**: classification degrades to default labels; an
//!   empty document yields an empty result.

mod error;
mod options;
mod paragraph;
mod patterns;
mod rules;
mod zone;

/// The classification pass: provisional labels, propagation, synthesis.
pub mod classifier;

/// Corpus driver: directory enumeration and the per-document pipeline.
pub mod corpus;

/// Character encoding detection from the XML declaration.
pub mod encoding;

/// Line-oriented paragraph extraction from document markup.
pub mod extract;

/// Result-table serialization (`ID CLASS` format).
pub mod writer;

// Public API - re-exports
pub use classifier::{ChapterHeading, ClassifyResult, SectionRegion};
pub use error::{Error, Result};
pub use options::Options;
pub use paragraph::{section_prefix, Classification, Paragraph};
pub use rules::{MatchTarget, Rule, RuleSpec, RuleTable};
pub use zone::Zone;

/// Classifies a document's paragraphs using the canonical rules and defaults.
///
/// # Arguments
///
/// * `document` - The document markup as a string slice
///
/// # Example
///
/// ```rust
/// use rs_doczones::classify;
///
/// let result = classify(r#"<p xml:id="2.1">POVZETEK</p>"#);
/// assert_eq!(result.records.len(), 1);
/// ```
#[must_use]
pub fn classify(document: &str) -> ClassifyResult {
    classify_with(document, &RuleTable::canonical(), &Options::default())
}

/// Classifies a document's paragraphs with a custom rule table and options.
///
/// # Example
///
/// ```rust
/// use rs_doczones::{classify_with, Options, RuleTable};
///
/// let options = Options {
///     synthesize_sections: true,
///     ..Options::default()
/// };
/// let result = classify_with(
///     r#"<p xml:id="4.1">1 Uvod</p>"#,
///     &RuleTable::canonical(),
///     &options,
/// );
/// assert_eq!(result.sections.len(), 1);
/// ```
#[must_use]
pub fn classify_with(document: &str, rules: &RuleTable, options: &Options) -> ClassifyResult {
    let paragraphs = extract::parse_document(document);
    classifier::classify_sequence(&paragraphs, rules, options)
}

/// Classifies a document given as raw bytes, with encoding detection.
///
/// The character encoding is detected from the XML declaration and the bytes
/// are transcoded to UTF-8 before extraction. Defaults to UTF-8; invalid
/// characters are replaced rather than causing errors.
///
/// # Example
///
/// ```rust
/// use rs_doczones::{classify_bytes, Zone};
///
/// let xml = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<p xml:id=\"1.1\">KAZALO</p>";
/// let result = classify_bytes(xml);
/// assert_eq!(result.records[0].zone, Zone::Toc);
/// ```
#[must_use]
pub fn classify_bytes(document: &[u8]) -> ClassifyResult {
    let text = encoding::transcode_to_utf8(document);
    classify(&text)
}

/// Classifies a pre-extracted paragraph sequence.
///
/// This is the core contract: the ordered `(id, text)` pairs of one document
/// go in, one zone label per paragraph comes out. Use this when paragraphs
/// come from somewhere other than the built-in extractor.
#[must_use]
pub fn classify_paragraphs(paragraphs: &[Paragraph]) -> ClassifyResult {
    classifier::classify_sequence(paragraphs, &RuleTable::canonical(), &Options::default())
}
