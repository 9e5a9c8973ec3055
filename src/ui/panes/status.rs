//! Status bar rendering with source, counters and keybindings

use super::utils::terminal_safe;
use crate::monitor::MonitorStats;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Longest rejected line echoed in the status bar
const MAX_REJECTED_ECHO: usize = 40;

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub source: &'a str,
    pub identifiers: usize,
    pub stats: &'a MonitorStats,
}

/// Counters and the last rejected line, as plain text
pub fn status_summary(data: &StatusRenderData) -> String {
    let mut summary = format!(
        "{} ids | {} ok | {} bad",
        data.identifiers, data.stats.frames_accepted, data.stats.frames_rejected
    );
    if let Some(rejected) = &data.stats.last_rejected {
        let echo: String = rejected.line.chars().take(MAX_REJECTED_ECHO).collect();
        summary.push_str(&format!(" | last bad: {}", terminal_safe(&echo)));
    }
    summary
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let has_errors = data.stats.frames_rejected > 0;

    let left_spans = vec![
        Span::styled(
            format!(" {} ", data.source),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", status_summary(&data)),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(if has_errors {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let right_spans = vec![
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" scroll ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
