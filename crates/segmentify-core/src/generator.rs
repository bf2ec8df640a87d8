//! End-to-end rule generation.
//!
//! Each data-driven section gets its own pass over the extract and its own
//! tally, which is dropped once the section is written. Static sections follow.
//! The output file is only created after the first pass has validated the
//! extract, so a bad input never produces (or clobbers) a segment file.

use std::path::{Path, PathBuf};

use crate::config::SegmentifyConfig;
use crate::error::Result;
use crate::extract::{self, ExtractReader};
use crate::output::SegmentFileWriter;
use crate::progress::{ScanObserver, SectionReport, Ticker};
use crate::rules::{self, SectionKind, SectionPlan};
use crate::tally::{apply_threshold, FrequencyTally, KeyCount};
use crate::tokenize::{self, PlatformHints};

/// Everything a generation run needs besides the input path.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorOptions {
    pub output_path: PathBuf,
    pub header_rows: u64,
    pub progress_interval: u64,
    pub folder_threshold_percent: f64,
    pub plan: SectionPlan,
}

impl GeneratorOptions {
    /// Default options writing to `output_path`.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        let defaults = SegmentifyConfig::default();
        Self {
            output_path: output_path.into(),
            ..Self::from_config(&defaults, Path::new(""))
        }
    }

    /// Options from config, with the output file placed in `output_dir`.
    pub fn from_config(cfg: &SegmentifyConfig, output_dir: &Path) -> Self {
        Self {
            output_path: cfg.output_path(output_dir),
            header_rows: cfg.header_rows,
            progress_interval: cfg.progress_interval,
            folder_threshold_percent: cfg.folder_threshold_percent,
            plan: cfg.section_plan(),
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    pub output_path: PathBuf,
    /// Extract lines minus header rows, from the last data pass.
    pub urls_processed: u64,
    pub sections: Vec<SectionReport>,
    pub platforms: PlatformHints,
}

/// Sorted tally from one pass over the extract.
#[derive(Debug, Clone, PartialEq)]
pub struct PassResult {
    pub sorted: Vec<KeyCount>,
    pub lines_read: u64,
    pub platforms: PlatformHints,
}

fn tally_line(kind: SectionKind, line: &str, tally: &mut FrequencyTally) {
    if kind == SectionKind::ParameterKeys {
        for key in tokenize::query_keys(line) {
            tally.record(key);
        }
    } else if let Some(depth) = kind.depth() {
        if let Some((key, _label)) = depth.key_and_label(line) {
            tally.record(key);
        }
    }
}

/// Read the whole extract once and tally keys for one data-driven section.
/// Quoted lines are ignored. Platform hints are gathered on the subdomain pass.
pub fn tally_section(
    input: &Path,
    kind: SectionKind,
    ticker: Ticker,
    observer: &mut dyn ScanObserver,
) -> Result<PassResult> {
    debug_assert!(kind.is_data_driven(), "{} is not data-driven", kind.name());

    let mut reader = ExtractReader::open(input)?;
    let mut tally = FrequencyTally::new();
    let mut platforms = PlatformHints::default();
    let watch_platforms = kind == SectionKind::Subdomains;

    while let Some(line) = reader.next_line()? {
        if !tokenize::is_skipped(line) {
            tally_line(kind, line, &mut tally);
            if watch_platforms {
                platforms.observe(line);
            }
        }
        ticker.observe(reader.lines_read(), observer);
    }

    tracing::debug!(
        section = kind.name(),
        lines = reader.lines_read(),
        keys = tally.len(),
        "tally pass complete"
    );

    Ok(PassResult {
        lines_read: reader.lines_read(),
        sorted: tally.into_sorted(),
        platforms,
    })
}

/// Generate the segment file for `input`.
pub fn generate(
    input: &Path,
    opts: &GeneratorOptions,
    observer: &mut dyn ScanObserver,
) -> Result<GenerationSummary> {
    let ticker = Ticker::new(opts.progress_interval);
    let mut writer: Option<SegmentFileWriter> = None;
    let mut sections = Vec::new();
    let mut platforms = PlatformHints::default();
    let mut urls_processed = 0;

    for kind in opts.plan.data_sections() {
        observer.section_started(kind);
        let pass = tally_section(input, kind, ticker, observer)?;
        urls_processed = extract::urls_processed(pass.lines_read, opts.header_rows);
        if kind == SectionKind::Subdomains {
            platforms = pass.platforms;
        }

        let distinct_keys = pass.sorted.len();
        let (entries, excluded) = if kind.is_folder_section() {
            let t = apply_threshold(pass.sorted, opts.folder_threshold_percent);
            if t.excluded > 0 {
                tracing::info!(
                    section = kind.name(),
                    excluded = t.excluded,
                    threshold = t.threshold,
                    "folders at or below threshold left out"
                );
            }
            (t.kept, t.excluded)
        } else {
            (pass.sorted, 0)
        };

        let w = match writer.take() {
            Some(w) => writer.insert(w),
            None => writer.insert(SegmentFileWriter::create(&opts.output_path)?),
        };
        let written = w.write_section(|out| rules::write_data_section(out, kind, &entries))?;

        let report = SectionReport {
            kind,
            rules: written,
            distinct_keys,
            excluded,
            urls_processed: Some(urls_processed),
        };
        tracing::info!(section = kind.name(), rules = written, "section written");
        observer.section_finished(&report);
        sections.push(report);
    }

    let mut writer = match writer {
        Some(w) => w,
        None => SegmentFileWriter::create(&opts.output_path)?,
    };
    if platforms.sfcc || platforms.shopify {
        tracing::info!(sfcc = platforms.sfcc, shopify = platforms.shopify, "platform detected");
    }
    for kind in opts.plan.static_sections(platforms.sfcc, platforms.shopify) {
        observer.section_started(kind);
        writer.write_section(|out| rules::write_static_section(out, kind))?;
        let report = SectionReport::fixed(kind);
        tracing::info!(section = kind.name(), "section written");
        observer.section_finished(&report);
        sections.push(report);
    }

    let output_path = writer.finalize()?;
    Ok(GenerationSummary {
        output_path,
        urls_processed,
        sections,
        platforms,
    })
}
