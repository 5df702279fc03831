//! Corpus CLI: classify every XML document of a directory and write one
//! `ID CLASS` result table per document.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rs_doczones::{corpus, Options, RuleTable, Zone};

#[derive(Debug, Parser)]
#[command(name = "classify_corpus", version, about = "Zone classification over a thesis corpus")]
struct Args {
    /// Directory containing the TEI XML documents
    #[arg(default_value = "korpus")]
    input: PathBuf,

    /// Output directory for the result tables
    #[arg(short, long, default_value = "results")]
    output: PathBuf,

    /// JSON rule table overriding the built-in canonical rules
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Drop the legacy acronym rule from the table
    #[arg(long)]
    no_acronym: bool,

    /// Emit synthesized per-section and chapter-title records
    #[arg(long)]
    sections: bool,

    /// Skip the propagation pass and keep raw rule-table labels
    #[arg(long)]
    no_propagate: bool,

    /// Worker threads (0 = one per core)
    #[arg(short, long, default_value_t = 0)]
    jobs: usize,
}

fn run(args: &Args) -> rs_doczones::Result<()> {
    let mut rules = match &args.rules {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            RuleTable::from_json(&json)?
        }
        None => RuleTable::canonical(),
    };
    if args.no_acronym {
        rules = rules.without(Zone::Acronym);
    }

    let options = Options {
        propagate: !args.no_propagate,
        synthesize_sections: args.sections,
    };

    if args.jobs > 0 {
        // The global pool can only be configured once per process.
        let _ = rayon::ThreadPoolBuilder::new()
            .num_threads(args.jobs)
            .build_global();
    }

    let report = corpus::process_corpus(&args.input, &args.output, &rules, &options)?;
    println!(
        "Classified {} documents ({} paragraphs), {} failed. Results in {}",
        report.processed,
        report.paragraphs,
        report.failed,
        args.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("classify_corpus: {error}");
            ExitCode::FAILURE
        }
    }
}
