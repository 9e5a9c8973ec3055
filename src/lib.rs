//! # Introduction
//!
//! canspy decodes the line protocol of a CAN-bus-to-serial bridge and shows
//! the most recent payload of every frame identifier as a live hex/ASCII
//! table in the terminal, built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Line source → Parser → Frame table → Rendered rows → TUI
//! ```
//!
//! 1. [`source`] — serial port or replayed capture, one line per poll.
//! 2. [`protocol`] — strict parsing of `ID=<i>:LEN=<n>:<hex>…` lines into
//!    [`protocol::Frame`]s.
//! 3. [`table`] — latest payload per identifier and the per-byte /
//!    per-character display classification.
//! 4. [`monitor`] — owned session state driving one polling step at a time.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! Ambient pieces: [`config`] (command line), [`logging`] (file logging).

pub mod config;
pub mod logging;
pub mod monitor;
pub mod protocol;
pub mod source;
pub mod table;
pub mod ui;
