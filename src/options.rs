//! Configuration options for the classification pass.

/// Configuration options for document classification.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_doczones::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     synthesize_sections: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Run the propagation pass over the provisional label stream.
    ///
    /// When disabled, every paragraph keeps the raw rule-table label (with
    /// `body` as the fallback), the behavior of the earliest table variants.
    /// Mainly useful for comparing against historical result tables.
    ///
    /// Default: `true`
    pub propagate: bool,

    /// Emit synthesized per-section and chapter-title records.
    ///
    /// When enabled, the result additionally carries one macro-region entry
    /// per top-level section and one title entry per detected chapter heading,
    /// appended after the per-paragraph stream. The entries are recorded by
    /// the propagation pass, so `propagate` must also be on.
    ///
    /// Default: `false`
    pub synthesize_sections: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            propagate: true,
            synthesize_sections: false,
        }
    }
}
