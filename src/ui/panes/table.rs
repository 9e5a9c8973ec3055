//! Frame table pane
//!
//! One line per stored identifier, in ascending order:
//!
//! ```text
//! 0001  41 42                    AB
//! 0234  AB EE 69                 .?i
//! ```
//!
//! Styling follows the row classification: identifiers in blue, printable
//! bytes and characters in green, substituted characters in red and bytes
//! that could not be decoded on a grey background.

use super::utils::terminal_safe;
use crate::table::{RenderedRow, SegmentKind, Tag};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub const TABLE_TITLE: &str = " CAN Bus Spy ";

/// Scroll state for the table pane
#[derive(Debug, Clone, Copy, Default)]
pub struct TableScrollState {
    pub offset: usize,
}

/// Data needed to render the table pane
pub struct TableRenderData<'a> {
    pub rows: &'a [RenderedRow],
    pub block_width: usize,
}

/// Style for one laid-out piece of a row
pub fn segment_style(kind: SegmentKind) -> Style {
    match kind {
        SegmentKind::Id => Style::default().fg(DEFAULT_THEME.primary),
        SegmentKind::Spacing => Style::default(),
        SegmentKind::Hex(tag) | SegmentKind::Text(tag) => tag_style(tag),
    }
}

fn tag_style(tag: Tag) -> Style {
    match tag {
        Tag::Printable => Style::default().fg(DEFAULT_THEME.success),
        Tag::Error => Style::default().fg(DEFAULT_THEME.error),
        Tag::Replaced => Style::default()
            .fg(Color::Black)
            .bg(DEFAULT_THEME.replaced_bg),
        Tag::Default => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Build the styled line for one row
pub fn row_line(row: &RenderedRow, block_width: usize) -> Line<'static> {
    let spans: Vec<Span<'static>> = row
        .segments(block_width)
        .into_iter()
        .map(|segment| {
            let style = segment_style(segment.kind);
            let text = match segment.kind {
                SegmentKind::Text(_) => terminal_safe(&segment.text),
                _ => segment.text,
            };
            Span::styled(text, style)
        })
        .collect();

    Line::from(spans)
}

/// Render the frame table pane
pub fn render_table_pane(
    frame: &mut Frame,
    area: Rect,
    data: TableRenderData,
    scroll_state: &mut TableScrollState,
) {
    let block = Block::default()
        .title(TABLE_TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    if data.rows.is_empty() {
        scroll_state.offset = 0;
        let paragraph = Paragraph::new("(waiting for frames)")
            .block(block)
            .style(
                Style::default()
                    .fg(DEFAULT_THEME.comment)
                    .bg(DEFAULT_THEME.bg),
            );
        frame.render_widget(paragraph, area);
        return;
    }

    let total_items = data.rows.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        scroll_state.offset = scroll_state.offset.min(max_scroll);
    } else {
        scroll_state.offset = 0;
    }

    let visible_items: Vec<ListItem> = data
        .rows
        .iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|row| ListItem::new(row_line(row, data.block_width)))
        .collect();

    let list = List::new(visible_items)
        .block(block)
        .style(Style::default().bg(DEFAULT_THEME.bg));
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::FrameId;
    use crate::table::{FrameTable, RenderOptions};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|cells| cells.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_row_line_styles() {
        let row = RenderedRow::new(FrameId::from(1), &[0x41, 0xFF], &RenderOptions::default());
        let line = row_line(&row, 8);

        let id_span = &line.spans[0];
        assert_eq!(id_span.content, "0001");
        assert_eq!(id_span.style.fg, Some(DEFAULT_THEME.primary));

        let hex_a = &line.spans[2];
        assert_eq!(hex_a.content, "41 ");
        assert_eq!(hex_a.style.fg, Some(DEFAULT_THEME.success));

        let replaced = line.spans.last().unwrap();
        assert_eq!(replaced.content, "\u{FFFD}");
        assert_eq!(replaced.style.bg, Some(DEFAULT_THEME.replaced_bg));
    }

    #[test]
    fn test_control_chars_are_blanked() {
        let row = RenderedRow::new(FrameId::from(2), &[0x1B, 0x00], &RenderOptions::default());
        let line = row_line(&row, 2);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();

        assert_eq!(text, "0002  1B 00    ");
    }

    #[test]
    fn test_render_rows_in_order() {
        let mut table = FrameTable::new();
        table.update(FrameId::from(234), vec![0xAB, 0xEE, 0x69]);
        table.update(FrameId::from(1), vec![0x41, 0x42]);
        let rows = table.render();

        let mut terminal = Terminal::new(TestBackend::new(48, 5)).unwrap();
        let mut scroll = TableScrollState::default();
        terminal
            .draw(|f| {
                render_table_pane(
                    f,
                    f.area(),
                    TableRenderData {
                        rows: &rows,
                        block_width: 8,
                    },
                    &mut scroll,
                )
            })
            .unwrap();

        let lines = screen_lines(&terminal);
        assert!(lines[0].contains("CAN Bus Spy"));
        assert!(lines[1].starts_with("│0001  41 42 "));
        assert!(lines[1].contains(" AB"));
        assert!(lines[2].starts_with("│0234  AB EE 69 "));

        // Blank cells below the rows carry the table background
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.content[3 * 48 + 10].bg, DEFAULT_THEME.bg);
    }

    #[test]
    fn test_scroll_offset_is_clamped() {
        let mut table = FrameTable::new();
        for id in 0..10u64 {
            table.update(FrameId::from(id), vec![id as u8]);
        }
        let rows = table.render();

        let mut terminal = Terminal::new(TestBackend::new(48, 6)).unwrap();
        let mut scroll = TableScrollState { offset: usize::MAX };
        terminal
            .draw(|f| {
                render_table_pane(
                    f,
                    f.area(),
                    TableRenderData {
                        rows: &rows,
                        block_width: 8,
                    },
                    &mut scroll,
                )
            })
            .unwrap();

        // 4 visible rows out of 10
        assert_eq!(scroll.offset, 6);
        let lines = screen_lines(&terminal);
        assert!(lines[1].starts_with("│0006"));
    }

    #[test]
    fn test_empty_table_placeholder() {
        let mut terminal = Terminal::new(TestBackend::new(40, 4)).unwrap();
        let mut scroll = TableScrollState { offset: 3 };
        terminal
            .draw(|f| {
                render_table_pane(
                    f,
                    f.area(),
                    TableRenderData {
                        rows: &[],
                        block_width: 8,
                    },
                    &mut scroll,
                )
            })
            .unwrap();

        assert_eq!(scroll.offset, 0);
        assert!(screen_lines(&terminal)[1].contains("(waiting for frames)"));
    }
}
