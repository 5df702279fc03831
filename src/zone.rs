//! The closed set of structural zone labels.
//!
//! Every paragraph of a document is assigned exactly one `Zone`. The serialized
//! names (`titlePage`, `abstractSlo`, ...) are fixed: downstream result
//! comparisons depend on them, so they must not change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Structural zone of a thesis document.
///
/// The first eleven variants are produced directly by the rule table; `Front`,
/// `Body`, and `Back` are the coarse macro-regions produced by the propagation
/// pass for paragraphs no finer rule claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Zone {
    /// Title page: institution, faculty, and degree markers.
    TitlePage,
    /// Table of contents.
    Toc,
    /// List of abbreviations.
    Toa,
    /// Slovenian abstract (povzetek).
    AbstractSlo,
    /// English abstract.
    AbstractEn,
    /// German abstract (Zusammenfassung).
    AbstractDe,
    /// Foreword.
    Foreword,
    /// Numbered chapter heading and the paragraphs under it.
    Chapter,
    /// Concluding chapter.
    Conclusion,
    /// Bibliography / list of references.
    Bibliography,
    /// Legacy keyword-list signal. Low confidence; kept for compatibility.
    Acronym,
    /// Front matter before the first detected chapter.
    Front,
    /// Body matter between the first chapter and the conclusion/bibliography.
    Body,
    /// Back matter after the conclusion/bibliography.
    Back,
}

impl Zone {
    /// All zone labels, in declaration order.
    pub const ALL: [Zone; 14] = [
        Zone::TitlePage,
        Zone::Toc,
        Zone::Toa,
        Zone::AbstractSlo,
        Zone::AbstractEn,
        Zone::AbstractDe,
        Zone::Foreword,
        Zone::Chapter,
        Zone::Conclusion,
        Zone::Bibliography,
        Zone::Acronym,
        Zone::Front,
        Zone::Body,
        Zone::Back,
    ];

    /// The serialized name of this zone, as written to result tables.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Zone::TitlePage => "titlePage",
            Zone::Toc => "toc",
            Zone::Toa => "toa",
            Zone::AbstractSlo => "abstractSlo",
            Zone::AbstractEn => "abstractEn",
            Zone::AbstractDe => "abstractDe",
            Zone::Foreword => "foreword",
            Zone::Chapter => "chapter",
            Zone::Conclusion => "conclusion",
            Zone::Bibliography => "bibliography",
            Zone::Acronym => "acronym",
            Zone::Front => "front",
            Zone::Body => "body",
            Zone::Back => "back",
        }
    }

    /// Whether this is one of the coarse macro-region labels.
    #[must_use]
    pub fn is_macro_region(self) -> bool {
        matches!(self, Zone::Front | Zone::Body | Zone::Back)
    }

    /// Whether a provisional occurrence of this label starts the back matter.
    #[must_use]
    pub(crate) fn starts_back_matter(self) -> bool {
        matches!(self, Zone::Conclusion | Zone::Bibliography)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::ALL
            .into_iter()
            .find(|zone| zone.as_str() == s)
            .ok_or_else(|| Error::UnknownZone(s.to_string()))
    }
}
