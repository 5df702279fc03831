//! Scan state carried across the classification pass.
//!
//! The pass is a left-to-right fold with exactly one paragraph of trailing
//! state. The state is an explicit value consumed and returned by
//! [`ScanState::step`] rather than ambient mutable variables, so partial
//! sequences can be fed in and the resulting state inspected directly.

use crate::paragraph::section_prefix;
use crate::zone::Zone;

/// Outcome of one step of the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// Final label emitted for the paragraph.
    pub zone: Zone,
    /// Whether the label was inherited from the previous paragraph rather
    /// than produced by a rule or macro-region decision.
    pub propagated: bool,
}

/// State threaded through one document's classification pass.
///
/// Lives for the duration of a single document and is never persisted.
#[derive(Debug, Clone, Default)]
pub struct ScanState {
    /// Section prefix and final label of the previous paragraph.
    previous: Option<(String, Zone)>,
    /// A chapter-provisional label has been produced.
    seen_chapter: bool,
    /// A conclusion- or bibliography-provisional label has been produced.
    seen_back_matter: bool,
    /// Most recent non-propagated emission.
    last_direct: Option<Zone>,
    /// Macro region of each top-level section, in first-entry order.
    sections: Vec<(String, Zone)>,
    /// Captured chapter headings, keyed by section prefix, in match order.
    chapters: Vec<(String, String)>,
}

impl ScanState {
    /// Fresh state for a new document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a chapter-provisional label has been produced so far.
    #[must_use]
    pub fn seen_chapter(&self) -> bool {
        self.seen_chapter
    }

    /// Whether back matter has started (conclusion or bibliography seen).
    #[must_use]
    pub fn seen_back_matter(&self) -> bool {
        self.seen_back_matter
    }

    /// The macro region paragraphs currently fall into when no finer rule
    /// or propagation applies.
    #[must_use]
    pub fn macro_region(&self) -> Zone {
        if !self.seen_chapter {
            Zone::Front
        } else if !self.seen_back_matter {
            Zone::Body
        } else {
            Zone::Back
        }
    }

    /// Advances the scan by one paragraph, returning the successor state and
    /// the final label to emit.
    ///
    /// `provisional` is the rule table's output for the paragraph;
    /// `chapter_title` is the captured heading text when the paragraph matched
    /// the chapter pattern and synthesis is enabled; `record_synthesis`
    /// controls whether section/chapter accumulators are maintained.
    ///
    /// The seen-flags flip on the provisional label, independent of what is
    /// finally emitted. The carried previous label is the previous paragraph's
    /// final label, so a section opened by a macro-region paragraph propagates
    /// that region and a non-body label never leaks across a section boundary.
    #[must_use]
    pub fn step(
        mut self,
        id: &str,
        provisional: Zone,
        chapter_title: Option<&str>,
        record_synthesis: bool,
    ) -> (Self, StepOutcome) {
        let prefix = section_prefix(id);

        if provisional == Zone::Chapter {
            self.seen_chapter = true;
        }
        if provisional.starts_back_matter() {
            self.seen_back_matter = true;
        }

        if record_synthesis {
            self.record_section(prefix);
            if provisional == Zone::Chapter {
                if let Some(title) = chapter_title {
                    self.chapters.push((prefix.to_string(), title.to_string()));
                }
            }
        }

        let same_section = self
            .previous
            .as_ref()
            .is_some_and(|(prev_prefix, _)| prev_prefix == prefix);

        let outcome = if provisional != Zone::Body {
            StepOutcome { zone: provisional, propagated: false }
        } else if same_section {
            // A structural marker often appears only on the first paragraph of
            // a section; the rest of the section inherits its label instead of
            // defaulting to the macro region.
            let inherited = self
                .previous
                .as_ref()
                .map_or(Zone::Body, |(_, label)| *label);
            StepOutcome { zone: inherited, propagated: true }
        } else if !self.seen_chapter {
            StepOutcome { zone: Zone::Front, propagated: false }
        } else if !self.seen_back_matter {
            StepOutcome { zone: Zone::Body, propagated: false }
        } else if self.last_direct != Some(Zone::Chapter) {
            StepOutcome { zone: Zone::Back, propagated: false }
        } else {
            // A numbered section after the bibliography (appendix); its
            // unmatched paragraphs stay plain body.
            StepOutcome { zone: Zone::Body, propagated: false }
        };

        if !outcome.propagated {
            self.last_direct = Some(outcome.zone);
        }
        self.previous = Some((prefix.to_string(), outcome.zone));

        (self, outcome)
    }

    /// Records the macro region of a section the first time it is entered.
    fn record_section(&mut self, prefix: &str) {
        let already_entered = self
            .previous
            .as_ref()
            .is_some_and(|(prev_prefix, _)| prev_prefix == prefix)
            || self.sections.iter().any(|(p, _)| p == prefix);
        if !already_entered {
            self.sections.push((prefix.to_string(), self.macro_region()));
        }
    }

    /// Consumes the state, returning the accumulated section regions and
    /// chapter headings.
    #[must_use]
    pub fn into_synthesis(self) -> (Vec<(String, Zone)>, Vec<(String, String)>) {
        (self.sections, self.chapters)
    }
}
