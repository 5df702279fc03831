//! Simple CLI that reads one document from stdin and writes the `ID CLASS`
//! table to stdout. Used for piping single documents through the classifier.

use std::io::{self, Read, Write};

use rs_doczones::{classify_bytes, writer};

fn main() {
    let mut document = Vec::new();
    if io::stdin().read_to_end(&mut document).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    // Classify with canonical rules and default options; encoding is
    // detected from the XML declaration.
    let result = classify_bytes(&document);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if writer::write_results(&mut handle, &result).is_err() || handle.flush().is_err() {
        std::process::exit(1);
    }
}
