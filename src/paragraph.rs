//! Paragraph and classification record types.

use serde::{Deserialize, Serialize};

use crate::zone::Zone;

/// One paragraph extracted from a document, in reading order.
///
/// `text` is the entity-unescaped inner text of the paragraph element; `raw` is
/// the full source line that contained it. Rules declare which of the two they
/// match against: keyword rules use the inner text, while the chapter-heading
/// rule keys off the markup delimiters still present in the raw line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Dotted hierarchical identifier, e.g. `"3.2.1"`.
    pub id: String,
    /// Inner text of the paragraph element.
    pub text: String,
    /// Full source line the paragraph element was found on.
    pub raw: String,
}

impl Paragraph {
    /// Creates a paragraph record.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            raw: raw.into(),
        }
    }

    /// The enclosing top-level section of this paragraph.
    #[must_use]
    pub fn section_prefix(&self) -> &str {
        section_prefix(&self.id)
    }
}

/// A zone assignment for one paragraph identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Paragraph identifier the zone was assigned to.
    pub id: String,
    /// Assigned zone label.
    pub zone: Zone,
}

/// Returns the leading component of a dotted identifier.
///
/// An identifier without a `.` is its own section prefix; section granularity
/// then collapses to a single paragraph. Never fails.
#[must_use]
pub fn section_prefix(id: &str) -> &str {
    id.split('.').next().unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_prefix_takes_leading_component() {
        assert_eq!(section_prefix("3.2.1"), "3");
        assert_eq!(section_prefix("12.4"), "12");
    }

    #[test]
    fn section_prefix_of_undotted_id_is_whole_id() {
        assert_eq!(section_prefix("preface"), "preface");
        assert_eq!(section_prefix("7"), "7");
    }

    #[test]
    fn section_prefix_of_empty_id_is_empty() {
        assert_eq!(section_prefix(""), "");
    }

    #[test]
    fn paragraph_exposes_its_section_prefix() {
        let p = Paragraph::new("4.1", "Uvod", "<p xml:id=\"4.1\">Uvod</p>");
        assert_eq!(p.section_prefix(), "4");
    }
}
