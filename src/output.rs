//! CLI output formatting for the pipeline stages.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! The display is record-centric. Entities show as a positional index plus
//! title, with the source path as context:
//!
//! ```text
//! Extracted 4 records from books.csv
//!     001 Intro to Testing
//!     002 Rust in Practice
//!     ...
//! Generated index with 4 records at generated-index.html
//! ```

use crate::types::BookRecord;
use std::path::Path;

/// How many leading titles the extract summary shows before eliding.
const PREVIEW_LEN: usize = 5;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format a record line: titled records show the title, untitled show the
/// author in parens as a fallback identity.
fn record_line(index: usize, record: &BookRecord) -> String {
    if record.title.is_empty() {
        format!("    {} ({})", format_index(index), record.author)
    } else {
        format!("    {} {}", format_index(index), record.title)
    }
}

/// Summary of the extract stage: record count, source path, leading titles.
pub fn format_extract_output(records: &[BookRecord], source: &Path) -> Vec<String> {
    let mut lines = vec![format!(
        "Extracted {} records from {}",
        records.len(),
        source.display()
    )];
    for (idx, record) in records.iter().take(PREVIEW_LEN).enumerate() {
        lines.push(record_line(idx + 1, record));
    }
    if records.len() > PREVIEW_LEN {
        lines.push(format!("    ... {} more", records.len() - PREVIEW_LEN));
    }
    lines
}

pub fn print_extract_output(records: &[BookRecord], source: &Path) {
    for line in format_extract_output(records, source) {
        println!("{}", line);
    }
}

/// Summary of the render and write stages.
pub fn format_generate_output(record_count: usize, output_path: &Path) -> Vec<String> {
    vec![format!(
        "Generated index with {} records at {}",
        record_count,
        output_path.display()
    )]
}

pub fn print_generate_output(record_count: usize, output_path: &Path) {
    for line in format_generate_output(record_count, output_path) {
        println!("{}", line);
    }
}
