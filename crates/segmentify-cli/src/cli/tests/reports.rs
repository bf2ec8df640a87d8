//! Tests for the `foldercount` and `paramcount` argument surfaces.

use super::{parse_foldercount, parse_paramcount};
use clap::error::ErrorKind;
use std::path::PathBuf;

#[test]
fn cli_parse_foldercount() {
    let cli = parse_foldercount(&["foldercount", "crawl.csv"]).unwrap();
    assert_eq!(cli.input, PathBuf::from("crawl.csv"));
}

#[test]
fn cli_parse_paramcount() {
    let cli = parse_paramcount(&["paramcount", "./out/crawl.csv"]).unwrap();
    assert_eq!(cli.input, PathBuf::from("./out/crawl.csv"));
}

#[test]
fn cli_parse_reports_require_input() {
    assert_eq!(
        parse_foldercount(&["foldercount"]).unwrap_err().kind(),
        ErrorKind::MissingRequiredArgument
    );
    assert_eq!(
        parse_paramcount(&["paramcount"]).unwrap_err().kind(),
        ErrorKind::MissingRequiredArgument
    );
}
