//! Console feedback while scanning: section banners, `#` progress ticks and
//! per-pass totals. Diagnostics go through `tracing` instead.

use colored::Colorize;
use segmentify_core::progress::{ScanObserver, SectionReport};
use segmentify_core::rules::SectionKind;
use std::io::{self, Write};

/// Prints progress for a generation run or a report scan to `W`.
pub struct ConsoleObserver<W: Write> {
    out: W,
    /// A tick line is open and needs a newline before the next message.
    ticking: bool,
}

impl ConsoleObserver<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            ticking: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn end_ticks(&mut self) {
        if self.ticking {
            let _ = writeln!(self.out);
            self.ticking = false;
        }
    }

    /// Total line shown after every pass.
    pub fn total(&mut self, urls_processed: u64) {
        self.end_ticks();
        let _ = writeln!(self.out, "Total URLs processed: {urls_processed}");
    }
}

/// `"<name>: <description>"` in purple.
pub fn banner(kind: SectionKind) -> String {
    format!("{}: {}", kind.name(), kind.description())
        .purple()
        .to_string()
}

impl<W: Write> ScanObserver for ConsoleObserver<W> {
    fn section_started(&mut self, kind: SectionKind) {
        self.end_ticks();
        let _ = writeln!(self.out, "{}", banner(kind));
    }

    fn lines_scanned(&mut self, _lines: u64) {
        let _ = write!(self.out, "#");
        let _ = self.out.flush();
        self.ticking = true;
    }

    fn section_finished(&mut self, report: &SectionReport) {
        if let Some(n) = report.urls_processed {
            self.total(n);
        }
        self.end_ticks();
    }
}
