//! Line sources feeding the monitor
//!
//! A [`LineSource`] yields complete text lines when they are available and
//! `None` otherwise, so the polling loop never stalls waiting for the bus.
//!
//! - [`serial`]: the bridge's serial port
//! - [`reader`]: any buffered reader, used to replay captured traffic

pub mod reader;
pub mod serial;

pub use reader::ReaderLineSource;
pub use serial::{LineAssembler, SerialLineSource, SerialSettings};

use thiserror::Error;

/// Transport failure while reading lines
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Producer of bridge lines
pub trait LineSource {
    /// Return the next complete line if one is available right now
    ///
    /// The returned line has its terminator stripped.
    fn poll_line(&mut self) -> Result<Option<String>, SourceError>;

    /// Short human-readable description for the status bar
    fn describe(&self) -> String;
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn poll_line(&mut self) -> Result<Option<String>, SourceError> {
        (**self).poll_line()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Turn raw line bytes into text, dropping the terminator
///
/// Bytes that are not valid UTF-8 are replaced; the parser then rejects them
/// as non-hex characters.
pub(crate) fn line_from_bytes(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.trim_end_matches(['\r', '\n']).to_string()
}
