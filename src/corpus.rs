//! Corpus driver: enumerate documents, classify each, write result tables.
//!
//! Documents are processed independently with no shared mutable state, so the
//! driver fans out one document per worker. Within a document the scan is
//! inherently sequential. A document that fails to read is logged and counted;
//! it never aborts the corpus run.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::classifier::{self, ClassifyResult};
use crate::error::Result;
use crate::extract;
use crate::options::Options;
use crate::rules::RuleTable;
use crate::writer;

/// Summary of one processed document.
#[derive(Debug, Clone)]
pub struct DocumentSummary {
    /// Source document path.
    pub path: PathBuf,
    /// Result table path.
    pub result_path: PathBuf,
    /// Number of extracted paragraphs.
    pub paragraphs: usize,
    /// Total emitted records, synthesized entries included.
    pub records: usize,
}

/// Summary of a corpus run.
#[derive(Debug, Clone, Default)]
pub struct CorpusReport {
    /// Documents classified and written successfully.
    pub processed: usize,
    /// Documents skipped because of an I/O failure.
    pub failed: usize,
    /// Paragraphs classified across all successful documents.
    pub paragraphs: usize,
}

/// Lists the XML documents of a corpus directory, sorted by path.
///
/// Sorting keeps corpus runs deterministic regardless of directory iteration
/// order.
pub fn list_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut documents: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
        })
        .collect();
    documents.sort();
    Ok(documents)
}

/// Derives the result-table path for a document: `<out_dir>/<stem>.res`.
#[must_use]
pub fn result_path(out_dir: &Path, document: &Path) -> PathBuf {
    let stem = document
        .file_stem()
        .map_or_else(|| "document".into(), std::ffi::OsStr::to_os_string);
    let mut name = stem;
    name.push(".res");
    out_dir.join(name)
}

/// Runs the Extractor → Classifier → Writer pipeline for one document.
pub fn process_document(
    document: &Path,
    out_dir: &Path,
    rules: &RuleTable,
    options: &Options,
) -> Result<DocumentSummary> {
    let paragraphs = extract::read_document(document)?;
    let result: ClassifyResult = classifier::classify_sequence(&paragraphs, rules, options);
    let result_path = result_path(out_dir, document);
    writer::write_results_to_path(&result_path, &result)?;

    debug!(
        document = %document.display(),
        paragraphs = paragraphs.len(),
        records = result.len(),
        "classified document"
    );

    Ok(DocumentSummary {
        path: document.to_path_buf(),
        result_path,
        paragraphs: paragraphs.len(),
        records: result.len(),
    })
}

/// Classifies every XML document under `input_dir`, writing one result table
/// per document into `out_dir`.
///
/// Documents are fanned out across the rayon thread pool; per-document
/// failures are logged and counted, not propagated.
pub fn process_corpus(
    input_dir: &Path,
    out_dir: &Path,
    rules: &RuleTable,
    options: &Options,
) -> Result<CorpusReport> {
    let documents = list_documents(input_dir)?;
    fs::create_dir_all(out_dir)?;
    info!(
        corpus = %input_dir.display(),
        documents = documents.len(),
        "starting corpus run"
    );

    let outcomes: Vec<Result<DocumentSummary>> = documents
        .par_iter()
        .map(|document| process_document(document, out_dir, rules, options))
        .collect();

    let mut report = CorpusReport::default();
    for (document, outcome) in documents.iter().zip(outcomes) {
        match outcome {
            Ok(summary) => {
                report.processed += 1;
                report.paragraphs += summary.paragraphs;
                info!(
                    document = %document.display(),
                    result = %summary.result_path.display(),
                    "classification completed"
                );
            }
            Err(error) => {
                report.failed += 1;
                warn!(document = %document.display(), %error, "skipping document");
            }
        }
    }

    Ok(report)
}
