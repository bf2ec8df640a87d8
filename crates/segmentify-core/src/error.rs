//! Error types for the segmentation pipeline.
//!
//! Every failure is fatal to a run; the variants exist so callers (and tests)
//! can tell input problems from output problems without string matching.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SegmentifyError>;

/// Output file operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputOp {
    Create,
    Write,
    Flush,
    Finalize,
}

impl fmt::Display for OutputOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputOp::Create => "creating",
            OutputOp::Write => "writing to",
            OutputOp::Flush => "flushing",
            OutputOp::Finalize => "finalizing",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum SegmentifyError {
    /// The URL extract could not be opened.
    #[error("error opening input {}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The first non-empty line of the extract does not start with `sep=`.
    #[error("invalid URL extract {}: first line does not start with \"sep=\"", path.display())]
    MissingSepMarker { path: PathBuf },

    /// Reading a line from the extract failed part way through.
    #[error("error scanning input {}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating, writing, flushing or renaming the output file failed.
    #[error("error {op} output {}", path.display())]
    Output {
        op: OutputOp,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SegmentifyError {
    pub(crate) fn output(op: OutputOp, path: impl Into<PathBuf>, source: io::Error) -> Self {
        SegmentifyError::Output {
            op,
            path: path.into(),
            source,
        }
    }

    /// True for failures caused by the input file (open, format or read).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SegmentifyError::OpenInput { .. }
                | SegmentifyError::MissingSepMarker { .. }
                | SegmentifyError::Scan { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_operation() {
        let err = SegmentifyError::output(
            OutputOp::Write,
            "segment.txt",
            io::Error::new(io::ErrorKind::Other, "disk full"),
        );
        assert_eq!(err.to_string(), "error writing to output segment.txt");
        assert!(!err.is_input_error());
    }

    #[test]
    fn missing_marker_is_input_error() {
        let err = SegmentifyError::MissingSepMarker {
            path: PathBuf::from("urls.csv"),
        };
        assert!(err.is_input_error());
        assert!(err.to_string().contains("sep="));
    }

    #[test]
    fn source_is_preserved_for_anyhow_chains() {
        let err = SegmentifyError::OpenInput {
            path: PathBuf::from("missing.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let chained = format!("{:#}", anyhow::Error::new(err));
        assert_eq!(chained, "error opening input missing.csv: no such file");
    }
}
