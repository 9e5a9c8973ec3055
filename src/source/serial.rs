//! Serial port line source

use super::{line_from_bytes, LineSource, SourceError};
use serialport::SerialPort;
use std::io::{self, BufRead, BufReader};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Lines longer than this without a terminator are discarded
const MAX_LINE_LEN: usize = 4096;

/// Serial port configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialSettings {
    /// Device path (e.g., "/dev/ttyUSB0", "COM3")
    pub path: String,
    pub baud_rate: u32,
    /// How long a started line may take to complete before the poll gives up
    pub read_timeout: Duration,
}

impl Default for SerialSettings {
    fn default() -> Self {
        SerialSettings {
            path: "/dev/ttyUSB0".to_string(),
            baud_rate: 115_200,
            read_timeout: Duration::from_millis(100),
        }
    }
}

/// Collects bytes until a full line is available
///
/// Bytes read before a timeout stay pending and are completed by later reads.
/// Input that grows past [`MAX_LINE_LEN`] without a terminator is dropped.
#[derive(Debug, Default)]
pub struct LineAssembler {
    pending: Vec<u8>,
}

impl LineAssembler {
    /// Buffer to append freshly read bytes to
    pub fn pending_mut(&mut self) -> &mut Vec<u8> {
        &mut self.pending
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Append bytes and return the line if it is now complete
    pub fn push(&mut self, bytes: &[u8]) -> Option<String> {
        self.pending.extend_from_slice(bytes);
        self.take_line()
    }

    /// Return the pending line if it ends with a terminator
    pub fn take_line(&mut self) -> Option<String> {
        if self.pending.ends_with(b"\n") {
            let line = line_from_bytes(&self.pending);
            self.pending.clear();
            return Some(line);
        }

        if self.pending.len() > MAX_LINE_LEN {
            warn!(len = self.pending.len(), "discarding unterminated input");
            self.pending.clear();
        }
        None
    }
}

/// Line source reading the bridge's serial output
///
/// The port is only read when it reports pending bytes. A line cut off by the
/// read timeout is kept and completed on a later poll. The port closes when
/// the source is dropped.
pub struct SerialLineSource {
    reader: BufReader<Box<dyn SerialPort>>,
    settings: SerialSettings,
    assembler: LineAssembler,
}

impl SerialLineSource {
    pub fn open(settings: SerialSettings) -> Result<Self, SourceError> {
        let port = serialport::new(&settings.path, settings.baud_rate)
            .timeout(settings.read_timeout)
            .open()?;

        info!(
            port = %settings.path,
            baud = settings.baud_rate,
            "serial port opened"
        );

        Ok(SerialLineSource {
            reader: BufReader::new(port),
            settings,
            assembler: LineAssembler::default(),
        })
    }

    fn has_pending_input(&self) -> Result<bool, SourceError> {
        if !self.reader.buffer().is_empty() {
            return Ok(true);
        }
        Ok(self.reader.get_ref().bytes_to_read()? > 0)
    }
}

impl LineSource for SerialLineSource {
    fn poll_line(&mut self) -> Result<Option<String>, SourceError> {
        if !self.has_pending_input()? {
            return Ok(None);
        }

        match self.reader.read_until(b'\n', self.assembler.pending_mut()) {
            Ok(_) => Ok(self.assembler.take_line()),
            Err(e) if e.kind() == io::ErrorKind::TimedOut => {
                debug!(
                    buffered = self.assembler.pending_len(),
                    "line incomplete at read timeout"
                );
                Ok(self.assembler.take_line())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self) -> String {
        format!("{} @ {} baud", self.settings.path, self.settings.baud_rate)
    }
}

impl Drop for SerialLineSource {
    fn drop(&mut self) {
        info!(port = %self.settings.path, "serial port closed");
    }
}
