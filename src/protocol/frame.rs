//! Frame identifier and decoded frame

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Bridge-assigned frame identifier
///
/// The bridge prints identifiers in decimal and this layer does not bound them
/// to any bit width, so the value is kept as canonical decimal digits: no
/// leading zeros, `"0"` for zero. Ordering is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameId {
    digits: String,
}

/// Error for text that is not a non-negative decimal integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFrameIdError;

impl fmt::Display for ParseFrameIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a non-negative decimal integer")
    }
}

impl std::error::Error for ParseFrameIdError {}

impl FrameId {
    /// Canonical decimal digits of the identifier
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// The identifier as a `u64`, if it fits
    pub fn to_u64(&self) -> Option<u64> {
        self.digits.parse().ok()
    }

    /// Zero-padded to at least `width` digits, like `{:04}` on an integer
    pub fn padded(&self, width: usize) -> String {
        format!("{:0>width$}", self.digits, width = width)
    }
}

impl FromStr for FrameId {
    type Err = ParseFrameIdError;

    /// Accepts surrounding ASCII whitespace and an optional leading `+`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        canonical_decimal(s)
            .map(|digits| FrameId { digits })
            .ok_or(ParseFrameIdError)
    }
}

/// Canonical digits of a non-negative decimal integer of any size
///
/// Surrounding ASCII whitespace and a leading `+` are accepted; leading zeros
/// are stripped, leaving `"0"` for zero.
pub(crate) fn canonical_decimal(s: &str) -> Option<String> {
    let s = s.trim_matches(|c: char| c.is_ascii_whitespace());
    let s = s.strip_prefix('+').unwrap_or(s);

    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let trimmed = s.trim_start_matches('0');
    Some(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
}

impl From<u64> for FrameId {
    fn from(value: u64) -> Self {
        FrameId {
            digits: value.to_string(),
        }
    }
}

impl Ord for FrameId {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical digits: a longer string is always the larger number
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for FrameId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.digits)
    }
}

/// One decoded protocol unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub id: FrameId,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn new(id: impl Into<FrameId>, payload: Vec<u8>) -> Self {
        Frame {
            id: id.into(),
            payload,
        }
    }
}
