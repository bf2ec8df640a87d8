//! Streaming reader for URL extract files.
//!
//! An extract is plain text with one URL per line. Its first non-empty line is
//! a `sep=` CSV-dialect marker; anything else means the file is not an extract.
//! Lines are read one at a time into a reused buffer, so line length is not
//! bounded and memory does not grow with file size.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Result, SegmentifyError};

/// Marker that must open every URL extract.
pub const SEP_MARKER: &str = "sep=";

const READ_BUF_SIZE: usize = 64 * 1024;

/// Line reader over a URL extract. The `sep=` line is validated on open and
/// counted, but not yielded.
pub struct ExtractReader<R> {
    inner: R,
    path: PathBuf,
    buf: Vec<u8>,
    line: String,
    lines_read: u64,
}

impl ExtractReader<BufReader<File>> {
    /// Open `path` and validate the `sep=` marker.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| SegmentifyError::OpenInput {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened URL extract");
        Self::from_reader(BufReader::with_capacity(READ_BUF_SIZE, file), path)
    }
}

impl<R: BufRead> ExtractReader<R> {
    /// Wrap an already open reader. `path` is only used in error messages.
    pub fn from_reader(inner: R, path: &Path) -> Result<Self> {
        let mut reader = ExtractReader {
            inner,
            path: path.to_path_buf(),
            buf: Vec::new(),
            line: String::new(),
            lines_read: 0,
        };
        reader.expect_sep_marker()?;
        Ok(reader)
    }

    fn expect_sep_marker(&mut self) -> Result<()> {
        while let Some(line) = self.next_line()? {
            if line.trim().is_empty() {
                continue;
            }
            if line.starts_with(SEP_MARKER) {
                return Ok(());
            }
            break;
        }
        Err(SegmentifyError::MissingSepMarker {
            path: self.path.clone(),
        })
    }

    /// Read the next line without its line terminator. Invalid UTF-8 is
    /// replaced rather than rejected.
    pub fn next_line(&mut self) -> Result<Option<&str>> {
        self.buf.clear();
        let n = self
            .inner
            .read_until(b'\n', &mut self.buf)
            .map_err(|source| SegmentifyError::Scan {
                path: self.path.clone(),
                source,
            })?;
        if n == 0 {
            return Ok(None);
        }
        self.lines_read += 1;

        let mut end = self.buf.len();
        if end > 0 && self.buf[end - 1] == b'\n' {
            end -= 1;
            if end > 0 && self.buf[end - 1] == b'\r' {
                end -= 1;
            }
        }
        self.line.clear();
        self.line.push_str(&String::from_utf8_lossy(&self.buf[..end]));
        Ok(Some(self.line.as_str()))
    }

    /// Lines consumed so far, header lines included.
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Number of URLs to report for `lines_read` lines, discounting the extract
/// header rows. Display only; never drives control flow.
pub fn urls_processed(lines_read: u64, header_rows: u64) -> u64 {
    lines_read.saturating_sub(header_rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(text: &str) -> Result<ExtractReader<Cursor<Vec<u8>>>> {
        ExtractReader::from_reader(Cursor::new(text.as_bytes().to_vec()), Path::new("test.csv"))
    }

    fn collect(mut r: ExtractReader<Cursor<Vec<u8>>>) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(line) = r.next_line().unwrap() {
            out.push(line.to_string());
        }
        out
    }

    #[test]
    fn yields_lines_after_marker() {
        let r = reader("sep=,\nurl\nhttps://a.example.com/x\n").unwrap();
        assert_eq!(collect(r), vec!["url", "https://a.example.com/x"]);
    }

    #[test]
    fn strips_crlf() {
        let r = reader("sep=,\r\nhttps://a.example.com/x\r\nlast").unwrap();
        assert_eq!(collect(r), vec!["https://a.example.com/x", "last"]);
    }

    #[test]
    fn leading_blank_lines_before_marker_are_allowed() {
        let r = reader("\n  \nsep=;\nhttps://a.example.com/\n").unwrap();
        assert_eq!(r.lines_read(), 3);
        assert_eq!(collect(r), vec!["https://a.example.com/"]);
    }

    #[test]
    fn missing_marker_is_rejected() {
        let err = reader("not-sep\nhttps://a.example.com/x\n").err().unwrap();
        assert!(matches!(err, SegmentifyError::MissingSepMarker { .. }));
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = reader("").err().unwrap();
        assert!(matches!(err, SegmentifyError::MissingSepMarker { .. }));
    }

    #[test]
    fn long_lines_are_not_truncated() {
        let long = format!("https://a.example.com/{}", "x".repeat(200_000));
        let r = reader(&format!("sep=,\n{long}\n")).unwrap();
        assert_eq!(collect(r), vec![long]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut bytes = b"sep=,\nhttps://a.example.com/".to_vec();
        bytes.push(0xff);
        bytes.push(b'\n');
        let r = ExtractReader::from_reader(Cursor::new(bytes), Path::new("t")).unwrap();
        let lines = collect(r);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with('\u{FFFD}'));
    }

    #[test]
    fn counts_every_line() {
        let mut r = reader("sep=,\nurl\na\nb\n").unwrap();
        while r.next_line().unwrap().is_some() {}
        assert_eq!(r.lines_read(), 4);
        assert_eq!(urls_processed(r.lines_read(), 2), 2);
    }

    #[test]
    fn urls_processed_saturates() {
        assert_eq!(urls_processed(1, 2), 0);
        assert_eq!(urls_processed(10_002, 2), 10_000);
    }

    #[test]
    fn open_missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ExtractReader::open(&dir.path().join("nope.csv")).err().unwrap();
        assert!(matches!(err, SegmentifyError::OpenInput { .. }));
    }
}
