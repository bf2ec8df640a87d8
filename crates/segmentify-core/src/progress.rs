//! Progress reporting hooks for long scans.
//!
//! The core never prints. Callers that want console feedback implement
//! [`ScanObserver`]; every method has a no-op default.

use crate::rules::SectionKind;

/// Outcome of emitting one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    pub kind: SectionKind,
    /// Labelled rules written (0 for static sections).
    pub rules: usize,
    /// Distinct keys tallied before any threshold was applied.
    pub distinct_keys: usize,
    /// Keys dropped by the folder threshold.
    pub excluded: usize,
    /// Extract lines minus header rows, for data-driven sections.
    pub urls_processed: Option<u64>,
}

impl SectionReport {
    pub fn fixed(kind: SectionKind) -> Self {
        Self {
            kind,
            rules: 0,
            distinct_keys: 0,
            excluded: 0,
            urls_processed: None,
        }
    }
}

/// Receives events while sections are generated.
pub trait ScanObserver {
    /// A section is about to be tallied or written.
    fn section_started(&mut self, _kind: SectionKind) {}

    /// Another `progress_interval` lines were read; `lines` is the running
    /// count for the current pass.
    fn lines_scanned(&mut self, _lines: u64) {}

    /// A section has been written and flushed.
    fn section_finished(&mut self, _report: &SectionReport) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// Calls `observer.lines_scanned` every `interval` lines (never if 0).
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: u64,
}

impl Ticker {
    pub fn new(interval: u64) -> Self {
        Self { interval }
    }

    pub fn observe(&self, lines: u64, observer: &mut dyn ScanObserver) {
        if self.interval > 0 && lines % self.interval == 0 {
            observer.lines_scanned(lines);
        }
    }
}
