use book_index::{extract, output, render, sort, write};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "book-index")]
#[command(about = "Static HTML index generator for book catalogs")]
#[command(long_about = "\
Static HTML index generator for book catalogs

Reads a CSV catalog, sorts it by title, and emits a single self-contained
HTML page with an embedded, client-side-searchable index. The page needs no
server: search and the title-only toggle run entirely in the browser.

Catalog format (first row = headers, matched by exact name):

  Author, Book Title, Volume Number, Edition, Series Title,
  Subject Classification, OpenURL, DOI URL

Columns may appear in any order. A missing column leaves that field blank in
every record; extra columns are ignored.

Pipeline: extract → sort → render → write. Output defaults to
generated-index.html in the current directory.")]
#[command(version)]
struct Cli {
    /// Path to the catalog CSV (header row required)
    input: Option<PathBuf>,

    /// Output HTML path [default: generated-index.html]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Missing input is a usage question, not a failure.
    let Some(input) = cli.input else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let records = extract::extract(&input)?;
    output::print_extract_output(&records, &input);

    let records = sort::sort_by_title(records);
    let document = render::render(&records)?;
    let written = write::write_document(&document, cli.output.as_deref())?;
    output::print_generate_output(records.len(), &written);

    Ok(())
}
