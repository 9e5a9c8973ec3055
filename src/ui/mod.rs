//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — polling loop, keyboard handling, scroll state
//! - **[`panes`]** — stateless render functions for the frame table and the status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point is [`App`]: construct it with a [`Monitor`] and call
//! [`App::run`] to start the loop.
//!
//! [`Monitor`]: crate::monitor::Monitor
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{App, AppError};
