//! Replay lines from a buffered reader

use super::{line_from_bytes, LineSource, SourceError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Line source over any [`BufRead`]
///
/// Each poll yields at most one line. Once the reader is exhausted every
/// further poll returns `None`; the source cannot be restarted.
pub struct ReaderLineSource<R> {
    reader: R,
    name: String,
    exhausted: bool,
    buf: Vec<u8>,
}

impl<R: BufRead> ReaderLineSource<R> {
    pub fn new(reader: R, name: impl Into<String>) -> Self {
        ReaderLineSource {
            reader,
            name: name.into(),
            exhausted: false,
            buf: Vec::new(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl ReaderLineSource<BufReader<File>> {
    /// Replay a captured bridge log
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        info!(path = %path.display(), "replaying capture");
        Ok(ReaderLineSource::new(
            BufReader::new(file),
            format!("replay {}", path.display()),
        ))
    }
}

impl<R: BufRead> LineSource for ReaderLineSource<R> {
    fn poll_line(&mut self) -> Result<Option<String>, SourceError> {
        if self.exhausted {
            return Ok(None);
        }

        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            info!(source = %self.name, "end of input");
            self.exhausted = true;
            return Ok(None);
        }

        Ok(Some(line_from_bytes(&self.buf)))
    }

    fn describe(&self) -> String {
        if self.exhausted {
            format!("{} (done)", self.name)
        } else {
            self.name.clone()
        }
    }
}
