//! Paragraph extraction from TEI-style document markup.
//!
//! The extractor is a line-oriented scan, not an XML parser: each line
//! containing a `<p xml:id="...">...</p>` element yields one paragraph, and
//! every other line is silently skipped. Well-formedness is never validated.
//! This keeps the raw source line available alongside the inner text, which
//! the chapter-heading rule needs.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::encoding;
use crate::error::Result;
use crate::paragraph::Paragraph;

/// Matches a paragraph element with a stable identifier on a single line.
#[allow(clippy::expect_used)]
static PARAGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<p\b[^>]*\bxml:id\s*=\s*"([^"]+)"[^>]*>([^<]*)</p>"#).expect("valid regex")
});

/// Replaces the predefined XML entities with their characters.
fn unescape_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let s = s.replace("&amp;", "&");
    let s = s.replace("&quot;", "\"");
    let s = s.replace("&#34;", "\"");
    let s = s.replace("&apos;", "'");
    let s = s.replace("&#39;", "'");
    let s = s.replace("&lt;", "<");
    s.replace("&gt;", ">")
}

/// Extracts the ordered paragraph sequence from one document's text.
///
/// Extraction order equals document reading order; the classifier's
/// propagation and first-chapter logic depend on it.
#[must_use]
pub fn parse_document(input: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    for line in input.lines() {
        for captures in PARAGRAPH_RE.captures_iter(line) {
            let id = &captures[1];
            let inner = &captures[2];
            paragraphs.push(Paragraph::new(id, unescape_entities(inner), line));
        }
    }
    paragraphs
}

/// Reads a document from disk and extracts its paragraph sequence.
///
/// The file is read as bytes and transcoded to UTF-8 according to its XML
/// declaration before the line scan.
pub fn read_document(path: &Path) -> Result<Vec<Paragraph>> {
    let bytes = fs::read(path)?;
    let text = encoding::transcode_to_utf8(&bytes);
    Ok(parse_document(&text))
}
