//! Output file lifecycle for the generated rule file.
//!
//! Sections are written through one buffered handle to a `.part` file next to
//! the destination. The temp file is created (truncated) by the first section,
//! later sections append, each section is flushed before it returns, and a
//! successful run renames the temp file over the destination. A failed run
//! never touches an existing destination file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{OutputOp, Result, SegmentifyError};

/// Temporary file suffix used before the final rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Blank lines written between consecutive sections.
const SECTION_SEPARATOR: &[u8] = b"\n\n";

/// Path for the temp file: appends `.part` to the final path
/// (e.g. `segment.txt` → `segment.txt.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Comment line that opens every generated file.
pub fn file_header() -> String {
    format!("# Regex made with segmentify v{}\n\n", env!("CARGO_PKG_VERSION"))
}

/// Buffered writer for the segment file.
pub struct SegmentFileWriter {
    out: BufWriter<File>,
    temp_path: PathBuf,
    final_path: PathBuf,
    sections: usize,
}

impl SegmentFileWriter {
    /// Create (or truncate) the temp file for `final_path` and write the file
    /// header.
    pub fn create(final_path: &Path) -> Result<Self> {
        let temp_path = temp_path(final_path);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| SegmentifyError::output(OutputOp::Create, &temp_path, e))?;
        tracing::debug!(path = %temp_path.display(), "created segment temp file");

        let mut writer = SegmentFileWriter {
            out: BufWriter::new(file),
            temp_path,
            final_path: final_path.to_path_buf(),
            sections: 0,
        };
        let header = file_header();
        writer
            .out
            .write_all(header.as_bytes())
            .map_err(|e| writer.write_error(e))?;
        Ok(writer)
    }

    fn write_error(&self, e: io::Error) -> SegmentifyError {
        SegmentifyError::output(OutputOp::Write, &self.final_path, e)
    }

    /// Append one section. `render` writes the section text; its return value
    /// is passed through. The buffer is flushed before returning.
    pub fn write_section<T, F>(&mut self, render: F) -> Result<T>
    where
        F: FnOnce(&mut BufWriter<File>) -> io::Result<T>,
    {
        if self.sections > 0 {
            self.out
                .write_all(SECTION_SEPARATOR)
                .map_err(|e| self.write_error(e))?;
        }
        let value = render(&mut self.out).map_err(|e| self.write_error(e))?;
        self.out
            .flush()
            .map_err(|e| SegmentifyError::output(OutputOp::Flush, &self.final_path, e))?;
        self.sections += 1;
        Ok(value)
    }

    /// Number of sections written so far.
    pub fn sections_written(&self) -> usize {
        self.sections
    }

    /// Path to the current temp file.
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Sync and rename the temp file to the final path. Consumes the writer
    /// and closes the file.
    pub fn finalize(self) -> Result<PathBuf> {
        let SegmentFileWriter {
            out,
            temp_path,
            final_path,
            ..
        } = self;
        let file = out
            .into_inner()
            .map_err(|e| SegmentifyError::output(OutputOp::Flush, &final_path, e.into_error()))?;
        file.sync_all()
            .map_err(|e| SegmentifyError::output(OutputOp::Flush, &final_path, e))?;
        drop(file);

        std::fs::rename(&temp_path, &final_path)
            .map_err(|e| SegmentifyError::output(OutputOp::Finalize, &final_path, e))?;
        tracing::debug!(path = %final_path.display(), "segment file finalized");
        Ok(final_path)
    }
}
