//! Shared test utilities for the book-index test suite.
//!
//! Record builders, catalog fixture writers, and an extractor for the JSON
//! literal embedded in rendered documents.

use std::path::{Path, PathBuf};

use crate::types::BookRecord;

/// A record with the given title and all other fields empty.
pub fn record(title: &str) -> BookRecord {
    BookRecord {
        title: title.to_string(),
        ..BookRecord::default()
    }
}

/// All titles in record order.
pub fn titles(records: &[BookRecord]) -> Vec<&str> {
    records.iter().map(|r| r.title.as_str()).collect()
}

/// A small fully populated catalog, already in title order.
pub fn sample_records() -> Vec<BookRecord> {
    vec![
        BookRecord {
            author: "Jane Doe".to_string(),
            title: "Intro to Testing".to_string(),
            volume_number: "1".to_string(),
            edition: "2nd".to_string(),
            series_title: "Test Series".to_string(),
            subject_classification: "QA".to_string(),
            url: "http://example.com/book".to_string(),
            doi: "http://doi.org/x".to_string(),
        },
        BookRecord {
            author: "John Roe".to_string(),
            title: "Rust in Practice".to_string(),
            volume_number: "3".to_string(),
            edition: "1st".to_string(),
            series_title: "Systems Series".to_string(),
            subject_classification: "Computer Science".to_string(),
            url: "http://example.com/rust".to_string(),
            doi: "http://doi.org/y".to_string(),
        },
    ]
}

/// The full header row every catalog column contract names.
pub fn full_header() -> &'static str {
    "Author,Book Title,Volume Number,Edition,Series Title,Subject Classification,OpenURL,DOI URL"
}

/// Write a catalog file into `dir` and return its path.
pub fn write_catalog(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Parse the record literal back out of a rendered document.
///
/// The literal is the single line `let bookIndex = [...];` in the script
/// block; compact JSON contains no newlines, so slicing to the end of that
/// line recovers the whole array. Panics on malformed documents so test
/// failures point at the right place.
pub fn embedded_records(html: &str) -> Vec<BookRecord> {
    let marker = "let bookIndex = ";
    let start = html
        .find(marker)
        .unwrap_or_else(|| panic!("no record literal in document"))
        + marker.len();
    let rest = &html[start..];
    let end = rest
        .find('\n')
        .unwrap_or_else(|| panic!("unterminated record literal"));
    let literal = rest[..end].trim_end().trim_end_matches(';');
    serde_json::from_str(literal).expect("embedded literal is valid JSON")
}
