//! Compiled regex patterns for zone detection.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! Patterns are organized by their position in the canonical rule order; the
//! order itself lives in `rules::RuleTable::canonical`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Front-matter patterns
// =============================================================================

/// Matches title-page markers: institution, faculty, and degree lines.
pub static TITLE_PAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)UNIVERZA|EKONOMSKA FAKULTETA|DIPLOMSKO DELO").expect("TITLE_PAGE regex")
});

/// Matches a foreword marker.
pub static FOREWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)PREDGOVOR").expect("FOREWORD regex"));

/// Matches table-of-contents markers or a run of leader dots.
///
/// The leader-dot alternative also claims individual TOC entry lines
/// (`1 Uvod ........ 7`), which would otherwise match the chapter-heading
/// pattern further down the table.
pub static TOC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)KAZALO|CONTENTS|\.{5,}").expect("TOC regex"));

/// Matches list-of-abbreviations markers.
pub static TOA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)SEZNAM\s+(?:UPORABLJENIH\s+)?KRATIC|ABBREVIATIONS").expect("TOA regex")
});

/// Matches the Slovenian abstract marker.
pub static ABSTRACT_SLO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)POVZETEK").expect("ABSTRACT_SLO regex"));

/// Matches the English abstract marker.
///
/// Word-bounded so that compounds like "abstraction" stay in the body.
pub static ABSTRACT_EN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bABSTRACT\b").expect("ABSTRACT_EN regex"));

/// Matches the German abstract marker.
pub static ABSTRACT_DE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ZUSAMMENFASSUNG").expect("ABSTRACT_DE regex"));

// =============================================================================
// Body and back-matter patterns
// =============================================================================

/// Matches a numbered chapter heading sitting inside a markup tag.
///
/// The pattern is anchored by the delimiters that wrapped the heading in the
/// source markup (`>1 Uvod<`), so it must be matched against the RAW source
/// line, not the stripped inner text. A numeral alone does not qualify; the
/// heading text after it is required.
pub static CHAPTER_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r">\s*\d+(?:\.\d+)*\.?\s+[^<>]+<").expect("CHAPTER_HEADING regex")
});

/// Captures the inner text of a numbered chapter heading, numeral included.
pub static CHAPTER_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r">\s*(\d+(?:\.\d+)*\.?\s+[^<>]+?)\s*<").expect("CHAPTER_TITLE regex")
});

/// Matches conclusion markers, numbered or bare.
pub static CONCLUSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)SKLEP|ZAKLJUČEK|CONCLUSION").expect("CONCLUSION regex"));

/// Matches bibliography markers or a bracketed-numeral citation (`[12]`).
pub static BIBLIOGRAPHY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)LITERATURA|BIBLIOGRAPHY|\[\d+\]").expect("BIBLIOGRAPHY regex")
});

/// Matches legacy keyword-list tokens.
///
/// Deliberately case-sensitive: case-folded, `html` or `feri` would claim
/// ordinary body text. Weak signal; `RuleTable::without` drops it cleanly.
pub static ACRONYM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"HTML|LaTeX|FERI").expect("ACRONYM regex"));

/// Extracts the inner heading text of a chapter line, if present.
#[must_use]
pub fn chapter_title(raw_line: &str) -> Option<&str> {
    CHAPTER_TITLE
        .captures(raw_line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
