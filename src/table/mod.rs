//! Latest-frame-per-identifier table
//!
//! [`FrameTable`] keeps only the most recent payload for every identifier the
//! bridge has reported. Entries are overwritten, never merged or removed.
//! [`render`] turns the table into classified rows for the display layer.

pub mod render;

use crate::protocol::{Frame, FrameId};
use rustc_hash::FxHashMap;

pub use render::{HexToken, RenderOptions, RenderedRow, Segment, SegmentKind, Tag, TextChar};

/// Most recent payload per frame identifier
#[derive(Debug, Clone, Default)]
pub struct FrameTable {
    entries: FxHashMap<FrameId, Vec<u8>>,
}

impl FrameTable {
    pub fn new() -> Self {
        FrameTable {
            entries: FxHashMap::default(),
        }
    }

    /// Store `payload` as the latest data for `id`, replacing anything older
    pub fn update(&mut self, id: FrameId, payload: Vec<u8>) {
        self.entries.insert(id, payload);
    }

    /// Store a decoded frame
    pub fn insert_frame(&mut self, frame: Frame) {
        self.update(frame.id, frame.payload);
    }

    pub fn get(&self, id: &FrameId) -> Option<&[u8]> {
        self.entries.get(id).map(Vec::as_slice)
    }

    /// Number of distinct identifiers seen
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total payload bytes currently stored
    pub fn total_bytes(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Entries in ascending identifier order
    pub fn iter_sorted(&self) -> Vec<(&FrameId, &[u8])> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(id, payload)| (id, payload.as_slice()))
            .collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }

    /// Render every entry with the default display options
    pub fn render(&self) -> Vec<RenderedRow> {
        self.render_with(&RenderOptions::default())
    }

    /// Render every entry, one row per identifier, ascending by identifier
    pub fn render_with(&self, options: &RenderOptions) -> Vec<RenderedRow> {
        self.iter_sorted()
            .into_iter()
            .map(|(id, payload)| RenderedRow::new(id.clone(), payload, options))
            .collect()
    }
}
