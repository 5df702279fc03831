//! The zone classification pass.
//!
//! Turns the ordered paragraph sequence of one document into the final label
//! stream: the rule table assigns provisional labels, and a single stateful
//! left-to-right scan folds in section continuity and the monotonic
//! front → body → back document structure. Optionally the same scan
//! synthesizes per-section macro-region entries and chapter-title entries.
//!
//! Classification never fails: anomalous paragraphs degrade to default
//! labels, and an empty input produces an empty record stream.

pub mod state;

use serde::{Deserialize, Serialize};

use crate::options::Options;
use crate::paragraph::{Classification, Paragraph};
use crate::patterns;
use crate::rules::RuleTable;
use crate::zone::Zone;

use state::ScanState;

/// Macro region of one top-level section, keyed by section prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRegion {
    /// Top-level section prefix.
    pub prefix: String,
    /// Macro region the section falls into: `front`, `body`, or `back`.
    pub region: Zone,
}

/// A captured chapter heading, keyed by section prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterHeading {
    /// Section prefix of the paragraph the heading was found on.
    pub prefix: String,
    /// Heading text between the markup delimiters, numeral included.
    pub title: String,
}

/// Result of classifying one document.
///
/// `records` holds exactly one entry per input paragraph, in input order.
/// `sections` and `chapters` are populated only when
/// [`Options::synthesize_sections`] is enabled; the writer appends them after
/// the per-paragraph stream, sections first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifyResult {
    /// One zone assignment per input paragraph, in input order.
    pub records: Vec<Classification>,
    /// Synthesized per-section macro regions, in first-entry order.
    pub sections: Vec<SectionRegion>,
    /// Synthesized chapter headings, in match order.
    pub chapters: Vec<ChapterHeading>,
}

impl ClassifyResult {
    /// Total number of output records, synthesized entries included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len() + self.sections.len() + self.chapters.len()
    }

    /// Whether the result holds no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classifies one document's paragraph sequence.
///
/// The paragraphs must be in document reading order; both the propagation
/// pass and the first-chapter detection depend on it.
#[must_use]
pub fn classify_sequence(
    paragraphs: &[Paragraph],
    rules: &RuleTable,
    options: &Options,
) -> ClassifyResult {
    let mut state = ScanState::new();
    let mut records = Vec::with_capacity(paragraphs.len());

    for paragraph in paragraphs {
        let provisional = rules.classify(paragraph);
        let zone = if options.propagate {
            let title = if provisional == Zone::Chapter && options.synthesize_sections {
                patterns::chapter_title(&paragraph.raw)
            } else {
                None
            };
            let (next, outcome) = state.step(
                &paragraph.id,
                provisional,
                title,
                options.synthesize_sections,
            );
            state = next;
            outcome.zone
        } else {
            provisional
        };
        records.push(Classification {
            id: paragraph.id.clone(),
            zone,
        });
    }

    let (sections, chapters) = state.into_synthesis();
    ClassifyResult {
        records,
        sections: sections
            .into_iter()
            .map(|(prefix, region)| SectionRegion { prefix, region })
            .collect(),
        chapters: chapters
            .into_iter()
            .map(|(prefix, title)| ChapterHeading { prefix, title })
            .collect(),
    }
}
