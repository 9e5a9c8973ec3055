//! Display classification for table rows
//!
//! Every payload byte is shown twice: as a hex token and as a decoded text
//! character. Both get a [`Tag`] that the display layer maps to a style. Tags
//! only drive emphasis and carry no protocol meaning.
//!
//! Rows are recomputed from scratch on every render; nothing here is cached.

use crate::protocol::FrameId;

/// Substituted for any byte that is not single-byte ASCII
pub const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// Highest code point the reference display could draw
pub const DEFAULT_MAX_CODE_POINT: u32 = 0xFFFF;

/// Bytes per row before the text column starts
pub const DEFAULT_BLOCK_WIDTH: usize = 8;

/// Minimum digits of the identifier column
pub const ID_WIDTH: usize = 4;

/// Characters shown as `.` and flagged, since they would break the row layout
const SEPARATOR_CHARS: [char; 7] = [
    '\u{2028}', // line separator
    '\u{2029}', // paragraph separator
    '\t',
    '\n',
    '\r',
    '\u{0B}', // vertical tab
    '\u{0C}', // form feed
];

/// Display emphasis attached to a byte or character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Default,
    Printable,
    Replaced,
    Error,
}

/// Parameters of the display layer that affect rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Byte columns reserved in the hex area; shorter rows are padded to it
    pub block_width: usize,
    /// Characters above this code point are drawn as `?`
    pub max_code_point: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            block_width: DEFAULT_BLOCK_WIDTH,
            max_code_point: DEFAULT_MAX_CODE_POINT,
        }
    }
}

/// One payload byte in the hex column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexToken {
    pub byte: u8,
    pub tag: Tag,
}

impl HexToken {
    /// Two uppercase hex digits followed by a space
    pub fn text(&self) -> String {
        format!("{:02X} ", self.byte)
    }
}

/// One decoded character in the text column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChar {
    pub ch: char,
    pub tag: Tag,
}

/// Classified view of one table entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub id: FrameId,
    pub hex: Vec<HexToken>,
    pub text: Vec<TextChar>,
}

/// What a piece of a laid-out row represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Id,
    Hex(Tag),
    Spacing,
    Text(Tag),
}

/// A run of row text with a single kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

impl Segment {
    fn new(text: impl Into<String>, kind: SegmentKind) -> Self {
        Segment {
            text: text.into(),
            kind,
        }
    }
}

/// Tag for a byte in the hex column
pub fn classify_byte(byte: u8) -> Tag {
    if 0x20 < byte && byte < 0x7F {
        Tag::Printable
    } else {
        Tag::Default
    }
}

/// Decode bytes as ASCII, replacing anything above 0x7F with [`REPLACEMENT_CHAR`]
pub fn decode_ascii(payload: &[u8]) -> impl Iterator<Item = char> + '_ {
    payload.iter().map(|&byte| {
        if byte.is_ascii() {
            char::from(byte)
        } else {
            REPLACEMENT_CHAR
        }
    })
}

/// Classify a decoded character, substituting it where it cannot be shown
pub fn classify_char(ch: char, max_code_point: u32) -> TextChar {
    let code = u32::from(ch);

    if ch == REPLACEMENT_CHAR {
        TextChar {
            ch,
            tag: Tag::Replaced,
        }
    } else if SEPARATOR_CHARS.contains(&ch) {
        TextChar {
            ch: '.',
            tag: Tag::Error,
        }
    } else if 0x20 < code && code < 0x7F {
        TextChar {
            ch,
            tag: Tag::Printable,
        }
    } else if code > max_code_point {
        TextChar {
            ch: '?',
            tag: Tag::Error,
        }
    } else {
        TextChar {
            ch,
            tag: Tag::Default,
        }
    }
}

impl RenderedRow {
    pub fn new(id: FrameId, payload: &[u8], options: &RenderOptions) -> Self {
        let hex = payload
            .iter()
            .map(|&byte| HexToken {
                byte,
                tag: classify_byte(byte),
            })
            .collect();

        let text = decode_ascii(payload)
            .map(|ch| classify_char(ch, options.max_code_point))
            .collect();

        RenderedRow { id, hex, text }
    }

    /// Lay the row out as consecutive segments
    ///
    /// `0234  AB EE 69                ...` : identifier, two spaces, one `XX `
    /// token per byte, padding up to `block_width` tokens, one space, text.
    pub fn segments(&self, block_width: usize) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.hex.len() + self.text.len() + 4);

        segments.push(Segment::new(self.id.padded(ID_WIDTH), SegmentKind::Id));
        segments.push(Segment::new("  ", SegmentKind::Spacing));

        for token in &self.hex {
            segments.push(Segment::new(token.text(), SegmentKind::Hex(token.tag)));
        }

        let missing = block_width.saturating_sub(self.hex.len());
        if missing > 0 {
            segments.push(Segment::new(" ".repeat(missing * 3), SegmentKind::Spacing));
        }
        segments.push(Segment::new(" ", SegmentKind::Spacing));

        for text_char in &self.text {
            segments.push(Segment::new(
                text_char.ch.to_string(),
                SegmentKind::Text(text_char.tag),
            ));
        }

        segments
    }

    /// The row as unstyled text
    pub fn to_plain_line(&self, block_width: usize) -> String {
        self.segments(block_width)
            .into_iter()
            .map(|segment| segment.text)
            .collect()
    }

    /// Decoded text column without tags
    pub fn text_string(&self) -> String {
        self.text.iter().map(|text_char| text_char.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u64, payload: &[u8]) -> RenderedRow {
        RenderedRow::new(FrameId::from(id), payload, &RenderOptions::default())
    }

    #[test]
    fn test_byte_classification_bounds() {
        assert_eq!(classify_byte(0x41), Tag::Printable);
        assert_eq!(classify_byte(0x21), Tag::Printable);
        assert_eq!(classify_byte(0x7E), Tag::Printable);
        assert_eq!(classify_byte(0x20), Tag::Default);
        assert_eq!(classify_byte(0x7F), Tag::Default);
        assert_eq!(classify_byte(0x00), Tag::Default);
        assert_eq!(classify_byte(0xFF), Tag::Default);
    }

    #[test]
    fn test_char_classification() {
        assert_eq!(
            classify_char(REPLACEMENT_CHAR, DEFAULT_MAX_CODE_POINT),
            TextChar {
                ch: REPLACEMENT_CHAR,
                tag: Tag::Replaced
            }
        );
        for ch in ['\t', '\n', '\r', '\u{0B}', '\u{0C}', '\u{2028}', '\u{2029}'] {
            assert_eq!(
                classify_char(ch, DEFAULT_MAX_CODE_POINT),
                TextChar {
                    ch: '.',
                    tag: Tag::Error
                }
            );
        }
        assert_eq!(classify_char('A', DEFAULT_MAX_CODE_POINT).tag, Tag::Printable);
        assert_eq!(classify_char(' ', DEFAULT_MAX_CODE_POINT).tag, Tag::Default);
        assert_eq!(classify_char('\0', DEFAULT_MAX_CODE_POINT).tag, Tag::Default);
        assert_eq!(classify_char('\u{7F}', DEFAULT_MAX_CODE_POINT).tag, Tag::Default);
    }

    #[test]
    fn test_code_point_bound_is_configurable() {
        let emoji = '\u{1F600}';
        assert_eq!(
            classify_char(emoji, DEFAULT_MAX_CODE_POINT),
            TextChar {
                ch: '?',
                tag: Tag::Error
            }
        );
        assert_eq!(classify_char(emoji, 0x10FFFF).tag, Tag::Default);
        assert_eq!(classify_char('é', 0x7F).ch, '?');
    }

    #[test]
    fn test_non_ascii_bytes_are_replaced() {
        let row = row(1, &[0x41, 0xFF, 0x09, 0x80]);
        let tags: Vec<Tag> = row.text.iter().map(|c| c.tag).collect();

        assert_eq!(
            tags,
            vec![Tag::Printable, Tag::Replaced, Tag::Error, Tag::Replaced]
        );
        assert_eq!(row.text_string(), "A\u{FFFD}.\u{FFFD}");
    }

    #[test]
    fn test_row_layout_full_block() {
        let row = row(234, &[0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48]);
        assert_eq!(
            row.to_plain_line(8),
            "0234  41 42 43 44 45 46 47 48  ABCDEFGH"
        );
    }

    #[test]
    fn test_row_layout_padding() {
        let short = row(1, &[0x41, 0x42]).to_plain_line(8);
        let full = row(2, &[0x30; 8]).to_plain_line(8);

        assert_eq!(short, format!("0001  41 42 {} AB", " ".repeat(18)));
        // Text column starts at the same offset for every row
        assert_eq!(short.find("AB"), full.find("00000000"));
    }

    #[test]
    fn test_row_layout_overflow_and_empty() {
        let wide = row(3, &[0x61; 10]).to_plain_line(8);
        assert_eq!(wide, format!("0003  {} aaaaaaaaaa", "61 ".repeat(10)));

        let empty = row(4, &[]).to_plain_line(2);
        assert_eq!(empty, "0004         ");
    }

    #[test]
    fn test_segment_kinds() {
        let segments = row(7, &[0x41, 0x00]).segments(2);
        let kinds: Vec<SegmentKind> = segments.iter().map(|s| s.kind).collect();

        assert_eq!(
            kinds,
            vec![
                SegmentKind::Id,
                SegmentKind::Spacing,
                SegmentKind::Hex(Tag::Printable),
                SegmentKind::Hex(Tag::Default),
                SegmentKind::Spacing,
                SegmentKind::Text(Tag::Printable),
                SegmentKind::Text(Tag::Default),
            ]
        );
    }
}
