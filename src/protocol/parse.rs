//! Line parser for the bridge framing protocol
//!
//! A line is split on `:` into a bounded number of segments because the
//! payload remainder itself is colon-separated:
//!
//! ```text
//! ID=234 : LEN=3 : AB:EE:69        bare form
//! FRAME  : ID=234 : LEN=3 : AB:EE:69   tagged form, leading tag ignored
//! ```

use super::errors::{InvalidFrame, InvalidFrameReason};
use super::frame::{canonical_decimal, Frame, FrameId};
use tracing::trace;

const ID_MARKER: &str = "ID=";
const LEN_MARKER: &str = "LEN=";
const SEPARATOR: char = ':';

/// Parse one line from the bridge into a [`Frame`]
///
/// Trailing whitespace (including the line terminator) is ignored. Any other
/// deviation from the format rejects the whole line; there is no partial
/// recovery. A rejection carries `raw` unmodified.
pub fn parse_line(raw: &str) -> Result<Frame, InvalidFrame> {
    let line = raw.trim_end();
    let invalid = |reason| InvalidFrame::new(raw, reason);

    let (id_field, len_field, remainder) = split_fields(line).ok_or_else(|| {
        trace!(line, "line has too few segments");
        invalid(InvalidFrameReason::MissingField)
    })?;

    let id: FrameId = id_field
        .strip_prefix(ID_MARKER)
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| invalid(InvalidFrameReason::BadIdentifier))?;

    let declared = len_field
        .strip_prefix(LEN_MARKER)
        .and_then(canonical_decimal)
        .ok_or_else(|| invalid(InvalidFrameReason::BadLength))?;

    let hex_text: String = remainder.chars().filter(|&c| c != SEPARATOR).collect();
    let payload = hex::decode(&hex_text).map_err(|_| invalid(InvalidFrameReason::BadHex))?;

    // A declared length beyond `usize` can never match
    if declared.parse::<usize>().ok() != Some(payload.len()) {
        return Err(invalid(InvalidFrameReason::LengthMismatch {
            declared,
            actual: payload.len(),
        }));
    }

    Ok(Frame { id, payload })
}

/// Locate the `ID`, `LEN` and payload segments, skipping a leading tag if present
fn split_fields(line: &str) -> Option<(&str, &str, &str)> {
    let mut segments = if line.starts_with(ID_MARKER) {
        line.splitn(3, SEPARATOR)
    } else {
        let mut segments = line.splitn(4, SEPARATOR);
        segments.next()?;
        segments
    };

    let id_field = segments.next()?;
    let len_field = segments.next()?;
    let remainder = segments.next()?;
    Some((id_field, len_field, remainder))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(line: &str) -> InvalidFrameReason {
        parse_line(line).unwrap_err().reason
    }

    #[test]
    fn test_parse_bare_form() {
        let frame = parse_line("ID=234:LEN=3:AB:EE:69").unwrap();
        assert_eq!(frame.id, FrameId::from(234));
        assert_eq!(frame.payload, vec![0xAB, 0xEE, 0x69]);
    }

    #[test]
    fn test_parse_tagged_form() {
        let frame = parse_line("FRAME:ID=1:LEN=2:41:42").unwrap();
        assert_eq!(frame.id, FrameId::from(1));
        assert_eq!(frame.payload, b"AB".to_vec());
    }

    #[test]
    fn test_parse_strips_line_terminator() {
        let frame = parse_line("ID=5:LEN=1:0a\r\n").unwrap();
        assert_eq!(frame.id, FrameId::from(5));
        assert_eq!(frame.payload, vec![0x0A]);
    }

    #[test]
    fn test_parse_empty_payload() {
        let frame = parse_line("ID=9:LEN=0:").unwrap();
        assert!(frame.payload.is_empty());
    }

    #[test]
    fn test_parse_unbounded_identifier() {
        let frame = parse_line("ID=340282366920938463463374607431768211456:LEN=1:FF").unwrap();
        assert_eq!(frame.id.as_str(), "340282366920938463463374607431768211456");
    }

    #[test]
    fn test_missing_segments() {
        assert_eq!(reason("ID=1:LEN=0"), InvalidFrameReason::MissingField);
        assert_eq!(reason("ID=1"), InvalidFrameReason::MissingField);
        assert_eq!(reason("FRAME:ID=1:LEN=0"), InvalidFrameReason::MissingField);
        assert_eq!(reason(""), InvalidFrameReason::MissingField);
    }

    #[test]
    fn test_bad_identifier() {
        assert_eq!(reason("ID=x1:LEN=1:00"), InvalidFrameReason::BadIdentifier);
        assert_eq!(reason("ID=:LEN=1:00"), InvalidFrameReason::BadIdentifier);
        assert_eq!(reason("X:ID=-3:LEN=1:00"), InvalidFrameReason::BadIdentifier);
        assert_eq!(reason("X:NODE=3:LEN=1:00"), InvalidFrameReason::BadIdentifier);
    }

    #[test]
    fn test_bad_length() {
        assert_eq!(reason("ID=1:LEN=two:00"), InvalidFrameReason::BadLength);
        assert_eq!(reason("ID=1:SIZE=1:00"), InvalidFrameReason::BadLength);
    }

    #[test]
    fn test_bad_hex() {
        assert_eq!(reason("ID=1:LEN=1:0"), InvalidFrameReason::BadHex);
        assert_eq!(reason("ID=1:LEN=1:ZZ"), InvalidFrameReason::BadHex);
        assert_eq!(reason("ID=1:LEN=2:41 42"), InvalidFrameReason::BadHex);
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            reason("ID=1:LEN=5:41:42"),
            InvalidFrameReason::LengthMismatch {
                declared: "5".to_string(),
                actual: 2
            }
        );
    }

    #[test]
    fn test_oversized_length_is_a_mismatch() {
        assert_eq!(
            reason("ID=1:LEN=99999999999999999999999:41"),
            InvalidFrameReason::LengthMismatch {
                declared: "99999999999999999999999".to_string(),
                actual: 1
            }
        );
        assert_eq!(
            reason("ID=1:LEN=007:41"),
            InvalidFrameReason::LengthMismatch {
                declared: "7".to_string(),
                actual: 1
            }
        );
    }

    #[test]
    fn test_error_carries_raw_line() {
        let err = parse_line("ID=1:LEN=5:41:42 \r\n").unwrap_err();
        assert_eq!(err.line, "ID=1:LEN=5:41:42 \r\n");
        assert!(err.to_string().contains("ID=1:LEN=5:41:42"));
    }
}
