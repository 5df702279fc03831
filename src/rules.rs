//! The ordered rule table mapping paragraph text to provisional zone labels.
//!
//! Rule evaluation is first-match-wins over a total order; a paragraph no rule
//! claims falls back to [`Zone::Body`]. Several hard-coded variants of this
//! table existed historically; they are unified here behind one builder, and a
//! custom table can be loaded from a JSON list of [`RuleSpec`] entries.
//!
//! Priority collisions resolve silently by table order (a line matching both
//! the bracketed-citation and chapter-heading patterns is whatever comes first
//! in the table). This is documented behavior that downstream result
//! comparisons depend on, not something to reorder casually.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::paragraph::Paragraph;
use crate::patterns;
use crate::zone::Zone;

/// Which representation of a paragraph a rule matches against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTarget {
    /// The entity-unescaped inner text of the paragraph element.
    #[default]
    Inner,
    /// The full source line, markup delimiters included.
    Raw,
}

/// One entry of the rule table.
#[derive(Debug, Clone)]
pub struct Rule {
    label: Zone,
    regex: Regex,
    target: MatchTarget,
}

impl Rule {
    /// Zone label this rule assigns.
    #[must_use]
    pub fn label(&self) -> Zone {
        self.label
    }

    /// Representation this rule matches against.
    #[must_use]
    pub fn target(&self) -> MatchTarget {
        self.target
    }

    fn matches(&self, paragraph: &Paragraph) -> bool {
        let haystack = match self.target {
            MatchTarget::Inner => &paragraph.text,
            MatchTarget::Raw => &paragraph.raw,
        };
        self.regex.is_match(haystack)
    }
}

/// A serializable rule description, as found in a JSON rule-table file.
///
/// ```json
/// { "label": "chapter", "pattern": ">\\s*\\d+\\s+[^<>]+<", "target": "raw" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Zone label assigned on match.
    pub label: Zone,
    /// Regular expression, without inline flags.
    pub pattern: String,
    /// Compile the pattern case-insensitively. Default: `true`.
    #[serde(default = "default_case_insensitive")]
    pub case_insensitive: bool,
    /// Representation to match against. Default: `inner`.
    #[serde(default)]
    pub target: MatchTarget,
}

fn default_case_insensitive() -> bool {
    true
}

/// Ordered rule table with first-match-wins evaluation.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// The canonical rule table, in the fixed priority order.
    ///
    /// The order must be preserved for compatibility with existing result
    /// tables; see the module docs for the collision policy.
    #[must_use]
    pub fn canonical() -> Self {
        let precompiled = [
            (Zone::TitlePage, &patterns::TITLE_PAGE, MatchTarget::Inner),
            (Zone::Foreword, &patterns::FOREWORD, MatchTarget::Inner),
            (Zone::Toc, &patterns::TOC, MatchTarget::Inner),
            (Zone::Toa, &patterns::TOA, MatchTarget::Inner),
            (Zone::AbstractSlo, &patterns::ABSTRACT_SLO, MatchTarget::Inner),
            (Zone::AbstractEn, &patterns::ABSTRACT_EN, MatchTarget::Inner),
            (Zone::AbstractDe, &patterns::ABSTRACT_DE, MatchTarget::Inner),
            (Zone::Chapter, &patterns::CHAPTER_HEADING, MatchTarget::Raw),
            (Zone::Conclusion, &patterns::CONCLUSION, MatchTarget::Inner),
            (Zone::Bibliography, &patterns::BIBLIOGRAPHY, MatchTarget::Inner),
            (Zone::Acronym, &patterns::ACRONYM, MatchTarget::Inner),
        ];

        Self {
            rules: precompiled
                .into_iter()
                .map(|(label, regex, target)| Rule {
                    label,
                    regex: Regex::clone(regex),
                    target,
                })
                .collect(),
        }
    }

    /// Builds a table from an ordered list of rule descriptions.
    pub fn from_specs(specs: &[RuleSpec]) -> Result<Self> {
        let mut rules = Vec::with_capacity(specs.len());
        for spec in specs {
            let regex = RegexBuilder::new(&spec.pattern)
                .case_insensitive(spec.case_insensitive)
                .build()
                .map_err(|source| Error::Pattern {
                    label: spec.label.to_string(),
                    source,
                })?;
            rules.push(Rule {
                label: spec.label,
                regex,
                target: spec.target,
            });
        }
        Ok(Self { rules })
    }

    /// Builds a table from a JSON array of rule descriptions.
    pub fn from_json(json: &str) -> Result<Self> {
        let specs: Vec<RuleSpec> = serde_json::from_str(json)?;
        Self::from_specs(&specs)
    }

    /// Returns a copy of this table with every rule for `label` removed.
    ///
    /// Intended for the legacy `acronym` rule, which can be dropped without
    /// losing correctness.
    #[must_use]
    pub fn without(&self, label: Zone) -> Self {
        Self {
            rules: self
                .rules
                .iter()
                .filter(|rule| rule.label != label)
                .cloned()
                .collect(),
        }
    }

    /// Assigns a provisional zone label to one paragraph.
    ///
    /// Pure function of the paragraph and the table: re-classifying the same
    /// text always yields the same label. The first matching rule wins; no
    /// match falls back to [`Zone::Body`].
    #[must_use]
    pub fn classify(&self, paragraph: &Paragraph) -> Zone {
        self.rules
            .iter()
            .find(|rule| rule.matches(paragraph))
            .map_or(Zone::Body, Rule::label)
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table holds no rules (everything falls back to `body`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::canonical()
    }
}
