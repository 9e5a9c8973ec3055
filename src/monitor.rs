//! Polling step tying a line source to the frame table
//!
//! [`Monitor`] owns all mutable state of a session: the table, the source and
//! the counters. Each [`Monitor::poll_once`] consumes at most one line.

use crate::protocol::{parse_line, FrameId, InvalidFrame};
use crate::source::{LineSource, SourceError};
use crate::table::{FrameTable, RenderOptions, RenderedRow};
use tracing::{debug, warn};

/// Result of a single poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// No line was available
    Idle,
    /// A frame was decoded and stored
    Updated(FrameId),
    /// A line was received but rejected; the table is unchanged
    Rejected,
}

/// Counters shown in the status bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorStats {
    pub lines_read: u64,
    pub frames_accepted: u64,
    pub frames_rejected: u64,
    pub last_rejected: Option<InvalidFrame>,
}

pub struct Monitor<S> {
    source: S,
    table: FrameTable,
    stats: MonitorStats,
}

impl<S: LineSource> Monitor<S> {
    pub fn new(source: S) -> Self {
        Monitor {
            source,
            table: FrameTable::new(),
            stats: MonitorStats::default(),
        }
    }

    /// Read and apply at most one line
    ///
    /// Malformed lines are logged and dropped. Only transport failures are
    /// returned as errors.
    pub fn poll_once(&mut self) -> Result<PollOutcome, SourceError> {
        let Some(line) = self.source.poll_line()? else {
            return Ok(PollOutcome::Idle);
        };

        self.stats.lines_read += 1;
        debug!(%line, "received");

        Ok(self.apply_line(&line))
    }

    /// Parse `line` and store the frame if it is valid
    pub fn apply_line(&mut self, line: &str) -> PollOutcome {
        match parse_line(line) {
            Ok(frame) => {
                let id = frame.id.clone();
                self.table.insert_frame(frame);
                self.stats.frames_accepted += 1;
                PollOutcome::Updated(id)
            }
            Err(err) => {
                warn!(error = %err, "discarding line");
                self.stats.frames_rejected += 1;
                self.stats.last_rejected = Some(err);
                PollOutcome::Rejected
            }
        }
    }

    pub fn render(&self, options: &RenderOptions) -> Vec<RenderedRow> {
        self.table.render_with(options)
    }

    pub fn table(&self) -> &FrameTable {
        &self.table
    }

    pub fn stats(&self) -> &MonitorStats {
        &self.stats
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
