//! Main TUI application state and polling loop

use crate::monitor::{Monitor, PollOutcome};
use crate::source::{LineSource, SourceError};
use crate::table::RenderOptions;
use crate::ui::panes::{
    render_status_bar, render_table_pane, StatusRenderData, TableRenderData, TableScrollState,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

/// Rows moved by PageUp / PageDown
const PAGE_ROWS: usize = 10;

/// Failure that ends the application loop
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// The main application state
pub struct App<S> {
    /// Table, line source and counters
    pub monitor: Monitor<S>,

    pub render_options: RenderOptions,

    /// How long to wait for key input between polls
    pub poll_interval: Duration,

    pub scroll: TableScrollState,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl<S: LineSource> App<S> {
    pub fn new(monitor: Monitor<S>, render_options: RenderOptions, poll_interval: Duration) -> Self {
        App {
            monitor,
            render_options,
            poll_interval,
            scroll: TableScrollState::default(),
            should_quit: false,
        }
    }

    /// Run the loop until the user quits or the source fails
    ///
    /// Each iteration handles at most one line, redraws the whole table and
    /// then waits up to `poll_interval` for a key press.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        info!(source = %self.monitor.source().describe(), "monitor started");

        loop {
            if let Err(e) = self.tick() {
                error!(error = %e, "line source failed");
                return Err(e.into());
            }

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(self.poll_interval)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        info!(
            accepted = self.monitor.stats().frames_accepted,
            rejected = self.monitor.stats().frames_rejected,
            "monitor stopped"
        );
        Ok(())
    }

    /// One polling step
    pub fn tick(&mut self) -> Result<PollOutcome, SourceError> {
        self.monitor.poll_once()
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let rows = self.monitor.render(&self.render_options);

        render_table_pane(
            frame,
            main_chunks[0],
            TableRenderData {
                rows: &rows,
                block_width: self.render_options.block_width,
            },
            &mut self.scroll,
        );

        let source = self.monitor.source().describe();
        render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                source: &source,
                identifiers: self.monitor.table().len(),
                stats: self.monitor.stats(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.scroll.offset = self.scroll.offset.saturating_sub(1);
            }
            KeyCode::Down => {
                self.scroll.offset = self.scroll.offset.saturating_add(1);
            }
            KeyCode::PageUp => {
                self.scroll.offset = self.scroll.offset.saturating_sub(PAGE_ROWS);
            }
            KeyCode::PageDown => {
                self.scroll.offset = self.scroll.offset.saturating_add(PAGE_ROWS);
            }
            KeyCode::Home => {
                self.scroll.offset = 0;
            }
            // Clamped to the last page when drawn
            KeyCode::End => {
                self.scroll.offset = usize::MAX;
            }
            _ => {}
        }
    }
}
