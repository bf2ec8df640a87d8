//! Tests for the `segmentify` argument surface.

use super::parse_segmentify;
use clap::error::ErrorKind;
use std::path::PathBuf;

#[test]
fn cli_parse_input() {
    let cli = parse_segmentify(&["segmentify", "crawl.csv"]).unwrap();
    assert_eq!(cli.input, PathBuf::from("crawl.csv"));
}

#[test]
fn cli_parse_missing_input_is_usage_error() {
    let err = parse_segmentify(&["segmentify"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn cli_parse_rejects_flags() {
    let err = parse_segmentify(&["segmentify", "crawl.csv", "--verbose"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn cli_parse_rejects_second_input() {
    assert!(parse_segmentify(&["segmentify", "a.csv", "b.csv"]).is_err());
}
