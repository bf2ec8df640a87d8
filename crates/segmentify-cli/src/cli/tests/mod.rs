//! CLI parse tests, one file per binary.

use super::{FolderCountCli, ParamCountCli, SegmentifyCli};
use clap::Parser;

mod reports;
mod segment;

pub(super) fn parse_segmentify(args: &[&str]) -> Result<SegmentifyCli, clap::Error> {
    SegmentifyCli::try_parse_from(args)
}

pub(super) fn parse_foldercount(args: &[&str]) -> Result<FolderCountCli, clap::Error> {
    FolderCountCli::try_parse_from(args)
}

pub(super) fn parse_paramcount(args: &[&str]) -> Result<ParamCountCli, clap::Error> {
    ParamCountCli::try_parse_from(args)
}
