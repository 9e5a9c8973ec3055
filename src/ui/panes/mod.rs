//! TUI pane rendering modules
//!
//! - [`table`]: the frame table, one classified row per identifier
//! - [`status`]: status bar with source, counters and keybindings
//! - `utils`: helpers shared by the panes
//!
//! Each pane module exports a primary `render_*` function taking a
//! `*RenderData` struct, so the panes stay free of application state.

mod utils;

pub mod status;
pub mod table;

pub use status::{render_status_bar, StatusRenderData};
pub use table::{render_table_pane, TableRenderData, TableScrollState};
