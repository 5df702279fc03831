//! Serialization of classification results as a two-column table.
//!
//! The format is fixed: a `ID CLASS` header line, then one whitespace-separated
//! record per line in emission order. Per-paragraph records come first,
//! followed by any synthesized section and chapter entries.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::classifier::ClassifyResult;

/// Writes a classification result to any sink in the `ID CLASS` table format.
pub fn write_results<W: Write>(mut sink: W, result: &ClassifyResult) -> io::Result<()> {
    writeln!(sink, "ID CLASS")?;
    for record in &result.records {
        writeln!(sink, "{} {}", record.id, record.zone)?;
    }
    for section in &result.sections {
        writeln!(sink, "{} {}", section.prefix, section.region)?;
    }
    for chapter in &result.chapters {
        writeln!(sink, "{} {}", chapter.prefix, chapter.title)?;
    }
    Ok(())
}

/// Writes a classification result to a file, buffered.
pub fn write_results_to_path(path: &Path, result: &ClassifyResult) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_results(&mut writer, result)?;
    writer.flush()
}
