//! `foldercount <INPUT>`: URLs per first-level folder.

use anyhow::Result;
use colored::Colorize;
use segmentify_core::config::SegmentifyConfig;
use segmentify_core::progress::Ticker;
use segmentify_core::report::{self, FolderReport};
use std::io::Write;
use std::path::Path;

use crate::cli::console::ConsoleObserver;

pub fn run_foldercount(input: &Path, cfg: &SegmentifyConfig) -> Result<FolderReport> {
    let mut console = ConsoleObserver::stdout();
    let report = report::folder_report(
        input,
        cfg.header_rows,
        Ticker::new(cfg.progress_interval),
        &mut console,
    )?;
    console.total(report.urls_processed);
    tracing::info!(folders = report.folders.len(), "folder count complete");

    let mut out = console.into_inner().lock();
    write_folder_report(&mut out, &report)?;
    Ok(report)
}

pub(crate) fn write_folder_report<W: Write>(out: &mut W, report: &FolderReport) -> Result<()> {
    writeln!(out, "{}", "Folders by number of URLs:".purple())?;
    for f in &report.folders {
        writeln!(out, "{} (count: {})", f.key, f.count)?;
    }
    Ok(())
}
