//! CSV extraction.
//!
//! Stage 1 of the book-index pipeline. Reads a delimited catalog file whose
//! first row is a header and produces an ordered sequence of [`BookRecord`]s,
//! one per data row, in file order.
//!
//! ## Column Contract
//!
//! Columns are matched by exact header name:
//!
//! | Header                   | Field                    |
//! |--------------------------|--------------------------|
//! | `Author`                 | `author`                 |
//! | `Book Title`             | `title`                  |
//! | `Volume Number`          | `volume_number`          |
//! | `Edition`                | `edition`                |
//! | `Series Title`           | `series_title`           |
//! | `Subject Classification` | `subject_classification` |
//! | `OpenURL`                | `url`                    |
//! | `DOI URL`                | `doi`                    |
//!
//! Each wanted header is resolved to a column index once, before any row is
//! read. A header that is absent yields an empty string for that field in
//! every record rather than an error, and columns the catalog has but this
//! table does not are ignored. Rows shorter than the header row are padded
//! with empty fields the same way.
//!
//! ## Failure Modes
//!
//! An unreadable path is an I/O error; structurally invalid CSV (bad quoting,
//! non-UTF-8 bytes) is a parse error carrying the reader's position.

use crate::types::BookRecord;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Column indices resolved from the header row, one per record field.
///
/// `None` means the catalog does not carry that column and the field stays
/// empty for every row.
#[derive(Debug)]
struct ColumnMap {
    author: Option<usize>,
    title: Option<usize>,
    volume_number: Option<usize>,
    edition: Option<usize>,
    series_title: Option<usize>,
    subject_classification: Option<usize>,
    url: Option<usize>,
    doi: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Self {
        let index_of = |name: &str| headers.iter().position(|h| h == name);
        ColumnMap {
            author: index_of("Author"),
            title: index_of("Book Title"),
            volume_number: index_of("Volume Number"),
            edition: index_of("Edition"),
            series_title: index_of("Series Title"),
            subject_classification: index_of("Subject Classification"),
            url: index_of("OpenURL"),
            doi: index_of("DOI URL"),
        }
    }

    fn record(&self, row: &StringRecord) -> BookRecord {
        let field = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i)).unwrap_or_default().to_string()
        };
        BookRecord {
            author: field(self.author),
            title: field(self.title),
            volume_number: field(self.volume_number),
            edition: field(self.edition),
            series_title: field(self.series_title),
            subject_classification: field(self.subject_classification),
            url: field(self.url),
            doi: field(self.doi),
        }
    }
}

/// Extract all records from the catalog at `path`, in file order.
pub fn extract(path: &Path) -> Result<Vec<BookRecord>, ExtractError> {
    // Open the file ourselves so a missing path surfaces as an IO error,
    // not a CSV one.
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

    let columns = ColumnMap::resolve(reader.headers()?);

    let mut records = Vec::new();
    for row in reader.records() {
        records.push(columns.record(&row?));
    }
    Ok(records)
}
