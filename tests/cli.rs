//! Binary-level tests for the book-index CLI.

use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("book-index").unwrap()
}

const SCENARIO_CSV: &str = "\
Author,Book Title,Volume Number,Edition,Series Title,Subject Classification,OpenURL,DOI URL
Jane Doe,Intro to Testing,1,2nd,Test Series,QA,http://example.com/book,http://doi.org/x
";

#[test]
fn no_args_prints_usage_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(contains("Usage"));

    assert!(!tmp.path().join("generated-index.html").exists());
}

#[test]
fn generates_index_with_explicit_output_path() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("books.csv"), SCENARIO_CSV).unwrap();

    cmd()
        .current_dir(tmp.path())
        .args(["books.csv", "out.html"])
        .assert()
        .success()
        .stdout(contains("Extracted 1 records from books.csv"))
        .stdout(contains("Generated index with 1 records at out.html"));

    let html = fs::read_to_string(tmp.path().join("out.html")).unwrap();
    assert!(html.contains("Intro to Testing"));
    assert!(html.contains("http://example.com/book"));
}

#[test]
fn defaults_to_generated_index_html() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("books.csv"), SCENARIO_CSV).unwrap();

    cmd()
        .current_dir(tmp.path())
        .arg("books.csv")
        .assert()
        .success();

    assert!(tmp.path().join("generated-index.html").exists());
}

#[test]
fn output_rows_are_sorted_by_title() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("books.csv"),
        "Author,Book Title\nA,Zebra\nB,Apple\nC,apple\n",
    )
    .unwrap();

    cmd()
        .current_dir(tmp.path())
        .arg("books.csv")
        .assert()
        .success();

    let html = fs::read_to_string(tmp.path().join("generated-index.html")).unwrap();
    let apple = html.find(r#""title":"Apple""#).unwrap();
    let zebra = html.find(r#""title":"Zebra""#).unwrap();
    let lower = html.find(r#""title":"apple""#).unwrap();
    assert!(apple < zebra, "ordinal order puts Apple before Zebra");
    assert!(zebra < lower, "uppercase sorts before lowercase");
}

#[test]
fn missing_input_file_fails() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .current_dir(tmp.path())
        .arg("no-such-catalog.csv")
        .assert()
        .failure();

    assert!(!tmp.path().join("generated-index.html").exists());
}

#[test]
fn unparseable_catalog_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("books.csv"),
        b"Author,Book Title\nJane,\xff\xfe\n",
    )
    .unwrap();

    cmd()
        .current_dir(tmp.path())
        .arg("books.csv")
        .assert()
        .failure();
}
