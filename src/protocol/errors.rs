//! Parse failure type for bridge lines
//!
//! Every malformed line collapses into [`InvalidFrame`]. The attached
//! [`InvalidFrameReason`] is diagnostic only: callers treat all reasons the
//! same way (log the line, discard it, keep polling).

use thiserror::Error;

/// Why a line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidFrameReason {
    /// Fewer colon-delimited segments than `ID`, `LEN` and a payload remainder
    MissingField,

    /// The `ID=` marker is absent or its suffix is not a decimal integer
    BadIdentifier,

    /// The `LEN=` marker is absent or its suffix is not a decimal integer
    BadLength,

    /// The payload remainder has odd length or contains a non-hex character
    BadHex,

    /// The payload decoded fine but its size disagrees with `LEN=`
    ///
    /// `declared` holds the canonical digits of the `LEN=` value, which may be
    /// too large for any integer type.
    LengthMismatch { declared: String, actual: usize },
}

impl std::fmt::Display for InvalidFrameReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidFrameReason::MissingField => write!(f, "missing field"),
            InvalidFrameReason::BadIdentifier => write!(f, "invalid identifier"),
            InvalidFrameReason::BadLength => write!(f, "invalid length"),
            InvalidFrameReason::BadHex => write!(f, "invalid hex payload"),
            InvalidFrameReason::LengthMismatch { declared, actual } => write!(
                f,
                "wrong frame length: declared {}, got {} byte(s)",
                declared, actual
            ),
        }
    }
}

/// A line that could not be decoded into a frame
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid frame ({reason}): {line:?}")]
pub struct InvalidFrame {
    /// The offending line exactly as received, terminator included
    pub line: String,
    pub reason: InvalidFrameReason,
}

impl InvalidFrame {
    pub fn new(line: impl Into<String>, reason: InvalidFrameReason) -> Self {
        InvalidFrame {
            line: line.into(),
            reason,
        }
    }
}
