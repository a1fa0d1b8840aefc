use super::SEGMENT_HEADER;
use crate::error::{Error, Result};
use crate::io::ensure_parent_dir;
use crate::types::SegmentRecord;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Formats a record as one line without the trailing newline.
pub fn format_record(record: &SegmentRecord) -> String {
    format!(
        "{:?},{:?},{:?},{:?},{:?}",
        record.length, record.heading_change, record.flight_time, record.pause_time, record.speed
    )
}

/// Line-oriented writer for segment records.
pub struct SegmentWriter<W: Write> {
    inner: W,
    path: PathBuf,
    written: usize,
}

impl SegmentWriter<BufWriter<File>> {
    /// Creates (or truncates) `path`, creating parent directories.
    pub fn create(path: &Path) -> Result<Self> {
        ensure_parent_dir(path)?;
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> SegmentWriter<W> {
    /// `path` only labels I/O errors.
    pub fn new(inner: W, path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            path: path.into(),
            written: 0,
        }
    }

    pub fn write_header(&mut self) -> Result<()> {
        writeln!(self.inner, "{SEGMENT_HEADER}").map_err(|e| Error::io(&self.path, e))
    }

    pub fn write_record(&mut self, record: &SegmentRecord) -> Result<()> {
        writeln!(self.inner, "{}", format_record(record)).map_err(|e| Error::io(&self.path, e))?;
        self.written += 1;
        Ok(())
    }

    pub fn records_written(&self) -> usize {
        self.written
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush().map_err(|e| Error::io(&self.path, e))?;
        debug!("wrote {} segment records to {}", self.written, self.path.display());
        Ok(self.inner)
    }
}

/// Writes all `records` to `path`, replacing any existing file.
pub fn write_segments(path: &Path, records: &[SegmentRecord], with_header: bool) -> Result<()> {
    let mut writer = SegmentWriter::create(path)?;
    if with_header {
        writer.write_header()?;
    }
    for record in records {
        writer.write_record(record)?;
    }
    writer.finish()?;
    Ok(())
}
