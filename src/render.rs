//! HTML document rendering.
//!
//! Stage 3 of the book-index pipeline. Takes the sorted record sequence and
//! produces the full text of the output page: a single self-contained HTML
//! document whose embedded script renders the table and answers searches
//! entirely client-side.
//!
//! ## Page Anatomy
//!
//! - `<style>`: two-mode layout. Checking the `#toggleMisc` checkbox hides
//!   every non-title column through sibling selectors; `tr.hide` is the
//!   marker class the search script uses to filter rows.
//! - `#q`: the search input. Enter runs the search, Backspace down to an
//!   empty field restores all rows.
//! - `#index`: the table. The body starts empty and is filled at load time,
//!   one row per record.
//! - `<script>`: `let bookIndex = [...]` followed by the search program.
//!
//! The style block and the search program are embedded at compile time from
//! `static/`; the record literal is the template's only substitution point.
//!
//! ## Search Semantics
//!
//! Each rendered row carries a `data-haystack` attribute: the lowercased
//! join of author, title, subject classification, and series title with
//! single spaces. A query is split on whitespace into lowercased words and a
//! row stays visible only if every word is a substring of its haystack.
//! An empty query shows all rows. There is no ranking and no fuzziness.
//!
//! ## Escaping
//!
//! Record values reach the page inside a JSON literal and are interpolated
//! into row markup client-side via `innerHTML`, without sanitization.
//! `serde_json` guarantees a valid script literal, not HTML safety: a field
//! value containing markup is interpreted as markup in the rendered table.
//! Catalogs are trusted input; see DESIGN.md before hardening this.

use crate::types::BookRecord;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS: &str = include_str!("../static/style.css");
const SEARCH_JS: &str = include_str!("../static/search.js");

/// Page title of the generated document.
pub const PAGE_TITLE: &str = "Book index";

/// Render the full document for the given (already sorted) records.
///
/// Pure text generation: records are neither reordered nor dropped.
pub fn render(records: &[BookRecord]) -> Result<String, RenderError> {
    let script = format!("let bookIndex = {};\n\n{}", data_literal(records)?, SEARCH_JS);
    Ok(document(&script).into_string())
}

/// Serialize records to the JSON array literal embedded in the script block.
///
/// Key order follows the field declaration order on [`BookRecord`], so the
/// literal reads `author`, `title`, `volumeNumber`, ... for every record.
pub fn data_literal(records: &[BookRecord]) -> Result<String, RenderError> {
    Ok(serde_json::to_string(records)?)
}

// ============================================================================
// Document template
// ============================================================================

fn document(script: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (PAGE_TITLE) }
                style { (PreEscaped(CSS)) }
            }
            body {
                input id="q" type="text" onblur="this.focus()" autofocus
                    placeholder="Type title, author, or subject then press enter to search";
                input id="toggleMisc" type="checkbox";
                label for="toggleMisc" { "Show only title" }
                table id="index" cellspacing="0" {
                    thead {
                        tr {
                            td.title { "Title" }
                            td.misc { "Author" }
                            td.misc { "Misc" }
                        }
                    }
                    tbody {}
                }
                script { (PreEscaped(script)) }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
