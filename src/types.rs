//! Shared types used across all pipeline stages.
//!
//! A [`BookRecord`] is constructed once during extraction and passed forward
//! unchanged through sorting and rendering. Serde field renaming fixes the
//! JSON keys embedded in the generated page, so the client-side script and
//! the extractor never disagree on spelling.

use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// Every field is an owned string and may be empty; a catalog column that is
/// absent from the input renders as blank in the output. Records carry no
/// identity beyond their position in the sequence: no deduplication, no
/// uniqueness constraint.
///
/// Serialized keys are camelCase (`volumeNumber`, `seriesTitle`, ...) because
/// that is what the embedded search script indexes into.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub author: String,
    /// Primary sort key.
    pub title: String,
    pub volume_number: String,
    pub edition: String,
    pub series_title: String,
    pub subject_classification: String,
    /// Canonical link target for the title cell.
    pub url: String,
    /// Persistent identifier. Carried through to the embedded data but not
    /// displayed in the table.
    pub doi: String,
}
