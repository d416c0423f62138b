//! # Book Index
//!
//! A static HTML index generator for book catalogs. A CSV catalog goes in,
//! a single self-contained HTML page comes out: table of all books, a search
//! box answered entirely in the browser, and a title-only display toggle.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! The generator is a strictly linear pipeline. Each stage is a pure
//! function over the previous stage's value; the only side effect is the
//! final file write:
//!
//! ```text
//! 1. Extract   books.csv  →  Vec<BookRecord>     (CSV rows → structured data)
//! 2. Sort      records    →  records             (stable ordinal sort by title)
//! 3. Render    records    →  String              (records embedded in the page)
//! 4. Write     document   →  generated-index.html
//! ```
//!
//! Keeping the stages separate keeps each one trivially testable: extraction
//! and sorting are exercised on plain vectors, rendering on strings, and
//! writing on temp directories.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`extract`] | Stage 1 — reads the CSV catalog into `BookRecord`s by header-name lookup |
//! | [`sort`] | Stage 2 — stable ordinal ordering by title |
//! | [`render`] | Stage 3 — produces the final HTML document with the embedded search index |
//! | [`write`] | Stage 4 — persists the document, defaulting to `generated-index.html` |
//! | [`types`] | `BookRecord`, shared across stages |
//! | [`output`] | CLI output formatting for pipeline results |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! The document shell is generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro: malformed markup is a build error and template
//! variables are Rust expressions. The page's style block and search program
//! are static files embedded with `include_str!` and spliced in unescaped;
//! the serialized record literal is the template's only substitution point.
//!
//! ## The Page Is the Program
//!
//! Search does not happen at generation time. The generator embeds the full
//! record list as a JSON literal plus a small script that renders rows at
//! load time and filters them on Enter by substring match against a
//! precomputed per-row haystack. The output is plain HTML, CSS, and vanilla
//! JavaScript that any file server (or `file://`) can deliver.
//!
//! ## Ordinal Sort
//!
//! Titles are compared byte-wise, with no case folding and no locale
//! collation. That keeps ordering deterministic across machines and locales;
//! "Apple" sorts before "Zebra" sorts before "apple", and empty titles come
//! first.
//!
//! ## Trusted Input, No Sanitization
//!
//! Field values flow into the page through the record literal and are
//! interpolated into row markup client-side without escaping. A catalog cell
//! containing HTML will be rendered as HTML. Catalogs are treated as trusted
//! build input; the trade-off is recorded in DESIGN.md.

pub mod extract;
pub mod output;
pub mod render;
pub mod sort;
pub mod types;
pub mod write;

#[cfg(test)]
pub(crate) mod test_helpers;
