//! Bridge line protocol
//!
//! The CAN-to-serial bridge emits one text line per received bus frame:
//!
//! ```text
//! ID=234:LEN=3:AB:EE:69
//! FRAME:ID=234:LEN=3:AB:EE:69
//! ```
//!
//! - [`frame`]: [`FrameId`] and [`Frame`], the decoded protocol unit
//! - [`parse`]: [`parse_line`], turning one raw line into a [`Frame`]
//! - [`errors`]: [`InvalidFrame`], the single failure kind of this layer
//!
//! Parsing is strict. A line either decodes completely and its payload length
//! matches the declared `LEN=` value, or it is rejected as a whole.

pub mod errors;
pub mod frame;
pub mod parse;

pub use errors::{InvalidFrame, InvalidFrameReason};
pub use frame::{Frame, FrameId};
pub use parse::parse_line;
