//! Plain count reports over an extract: first-level folder names and
//! query-parameter keys. These share the reader, tokenizer and tally with the
//! generator but write no file.

use std::path::Path;

use crate::error::Result;
use crate::extract::{self, ExtractReader};
use crate::progress::{ScanObserver, Ticker};
use crate::tally::{FrequencyTally, KeyCount};
use crate::tokenize::{self, Depth};

/// First-level folder names by number of URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderReport {
    pub urls_processed: u64,
    pub folders: Vec<KeyCount>,
}

/// Query-parameter usage and keys by number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamReport {
    pub urls_processed: u64,
    /// Lines with a `?`.
    pub with_parameters: u64,
    pub keys: Vec<KeyCount>,
}

impl ParamReport {
    pub fn without_parameters(&self) -> u64 {
        self.urls_processed.saturating_sub(self.with_parameters)
    }

    /// Share of processed URLs carrying a query string, in percent.
    pub fn percentage_with_parameters(&self) -> f64 {
        if self.urls_processed == 0 {
            return 0.0;
        }
        self.with_parameters as f64 / self.urls_processed as f64 * 100.0
    }
}

/// Count URLs per first-level folder name (the segment after the host).
pub fn folder_report(
    input: &Path,
    header_rows: u64,
    ticker: Ticker,
    observer: &mut dyn ScanObserver,
) -> Result<FolderReport> {
    let mut reader = ExtractReader::open(input)?;
    let mut tally = FrequencyTally::new();

    while let Some(line) = reader.next_line()? {
        if !tokenize::is_skipped(line) {
            if let Some((_, folder)) = Depth::Level1.key_and_label(line) {
                let folder = folder.trim();
                if !folder.is_empty() {
                    tally.record(folder);
                }
            }
        }
        ticker.observe(reader.lines_read(), observer);
    }

    Ok(FolderReport {
        urls_processed: extract::urls_processed(reader.lines_read(), header_rows),
        folders: tally.into_sorted(),
    })
}

/// Count URLs with a query string and occurrences of each parameter key.
pub fn param_report(
    input: &Path,
    header_rows: u64,
    ticker: Ticker,
    observer: &mut dyn ScanObserver,
) -> Result<ParamReport> {
    let mut reader = ExtractReader::open(input)?;
    let mut tally = FrequencyTally::new();
    let mut with_parameters = 0;

    while let Some(line) = reader.next_line()? {
        if !tokenize::is_skipped(line) {
            if tokenize::has_query(line) {
                with_parameters += 1;
            }
            for key in tokenize::query_keys(line) {
                tally.record(key);
            }
        }
        ticker.observe(reader.lines_read(), observer);
    }

    Ok(ParamReport {
        urls_processed: extract::urls_processed(reader.lines_read(), header_rows),
        with_parameters,
        keys: tally.into_sorted(),
    })
}
