//! `paramcount <INPUT>`: query-string usage and parameter keys.

use anyhow::Result;
use colored::Colorize;
use segmentify_core::config::SegmentifyConfig;
use segmentify_core::progress::Ticker;
use segmentify_core::report::{self, ParamReport};
use std::io::Write;
use std::path::Path;

use crate::cli::console::ConsoleObserver;

pub fn run_paramcount(input: &Path, cfg: &SegmentifyConfig) -> Result<ParamReport> {
    let mut console = ConsoleObserver::stdout();
    let report = report::param_report(
        input,
        cfg.header_rows,
        Ticker::new(cfg.progress_interval),
        &mut console,
    )?;
    console.total(report.urls_processed);
    tracing::info!(
        with_parameters = report.with_parameters,
        keys = report.keys.len(),
        "parameter count complete"
    );

    let mut out = console.into_inner().lock();
    write_param_report(&mut out, &report)?;
    Ok(report)
}

pub(crate) fn write_param_report<W: Write>(out: &mut W, report: &ParamReport) -> Result<()> {
    writeln!(out, "URLs with parameters: {}", report.with_parameters)?;
    writeln!(out, "URLs without parameters: {}", report.without_parameters())?;
    writeln!(
        out,
        "Percentage of URLs with parameters: {:.2}%",
        report.percentage_with_parameters()
    )?;
    writeln!(out, "{}", "Parameter keys by number of occurrences:".purple())?;
    for k in &report.keys {
        writeln!(out, "{} (count: {})", k.key, k.count)?;
    }
    Ok(())
}
