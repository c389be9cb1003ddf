//! Counting line writer.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::error::Error;

/// Writes one item per physical line and counts written lines.
///
/// The destination is created (or truncated) on [LineWriter::create].
/// [LineWriter::finish] flushes and returns the line count.
/// If the writer is dropped without being finished (on an error path for example),
/// buffered content is still flushed, so that everything written before the failure is on disk.
pub struct LineWriter {
    dst: PathBuf,
    inner: BufWriter<File>,
    count: usize,
}

impl LineWriter {
    pub fn create(dst: &Path) -> Result<Self, Error> {
        debug!("creating {:?}", dst);
        let f = File::create(dst)?;
        Ok(Self {
            dst: dst.to_path_buf(),
            inner: BufWriter::new(f),
            count: 0,
        })
    }

    /// Write `line` followed by a newline.
    ///
    /// `line` is expected not to contain newlines itself.
    pub fn write_line(&mut self, line: &str) -> Result<(), Error> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.count += 1;
        Ok(())
    }

    /// Number of lines written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Flush remaining content and return the number of written lines.
    pub fn finish(mut self) -> Result<usize, Error> {
        self.inner.flush()?;
        debug!("wrote {} lines to {:?}", self.count, self.dst);
        Ok(self.count)
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        // no-op if already finished
        if let Err(e) = self.inner.flush() {
            error!("could not flush {:?}: {}", self.dst, e);
        }
    }
}
