//! `segmentify <INPUT>`: write the segment file into the working directory.

use anyhow::Result;
use segmentify_core::config::SegmentifyConfig;
use segmentify_core::generator::{self, GenerationSummary, GeneratorOptions};
use std::io::Write;
use std::path::Path;

use crate::cli::console::ConsoleObserver;

/// Generate rules for `input` into `output_dir` and print progress and a summary.
pub fn run_segment(
    input: &Path,
    cfg: &SegmentifyConfig,
    output_dir: &Path,
) -> Result<GenerationSummary> {
    let opts = GeneratorOptions::from_config(cfg, output_dir);
    tracing::info!(
        input = %input.display(),
        output = %opts.output_path.display(),
        "generating segment file"
    );

    let mut console = ConsoleObserver::stdout();
    let summary = generator::generate(input, &opts, &mut console)?;

    let mut out = console.into_inner().lock();
    write_summary(&mut out, &summary)?;
    Ok(summary)
}

/// Per-section rule counts, then the completion line.
pub(crate) fn write_summary<W: Write>(out: &mut W, summary: &GenerationSummary) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Wrote {}", summary.output_path.display())?;
    for s in &summary.sections {
        if s.kind.is_data_driven() {
            write!(out, "  {:<22} {} rules", s.kind.name(), s.rules)?;
            if s.excluded > 0 {
                write!(out, " ({} below threshold)", s.excluded)?;
            }
            writeln!(out)?;
        } else {
            writeln!(out, "  {:<22} fixed", s.kind.name())?;
        }
    }
    writeln!(out, "Regex generation complete.")?;
    Ok(())
}
