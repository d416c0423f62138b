//! Title ordering.
//!
//! Stage 2 of the book-index pipeline. Ordering is plain ordinal string
//! comparison (byte-wise, which is codepoint order for UTF-8): no case
//! folding, no locale collation. Uppercase therefore sorts before lowercase
//! and the empty title sorts first.

use crate::types::BookRecord;

/// Return `records` ordered by ascending title.
///
/// The sort is stable: records with equal titles keep their relative order
/// from the catalog.
pub fn sort_by_title(mut records: Vec<BookRecord>) -> Vec<BookRecord> {
    records.sort_by(|a, b| a.title.cmp(&b.title));
    records
}
