// src/segment/mod.rs
mod header;
mod info;

pub use header::HeaderLayout;
pub use info::{ResolvedOffsets, SegmentInfo};

use crate::types::SegmentKind;
use bytes::Bytes;
use tracing::warn;

/// Raw payloads of the four segments of one dataset.
///
/// `None` means the segment is absent from the header; an empty payload is a
/// present, zero-length segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments {
    payloads: [Option<Bytes>; 4],
}

impl Segments {
    pub fn new() -> Self {
        Segments::default()
    }

    /// Slice every located segment out of `buffer` without copying.
    ///
    /// Ranges running past the end of the buffer are dropped as absent.
    pub fn slice_from(buffer: &Bytes, offsets: &ResolvedOffsets) -> Self {
        let mut segments = Segments::new();
        for (kind, info) in offsets.iter() {
            let Some(range) = info.byte_range() else {
                continue;
            };
            if range.end > buffer.len() {
                warn!(
                    segment = %kind,
                    start = range.start,
                    end = range.end,
                    buffer_len = buffer.len(),
                    "Segment extends past end of buffer, treating as absent"
                );
                continue;
            }
            segments.set(kind, Some(buffer.slice(range)));
        }
        segments
    }

    pub fn get(&self, kind: SegmentKind) -> Option<&Bytes> {
        self.payloads[kind.index()].as_ref()
    }

    pub fn set(&mut self, kind: SegmentKind, payload: Option<Bytes>) {
        self.payloads[kind.index()] = payload;
    }

    pub fn len_of(&self, kind: SegmentKind) -> Option<usize> {
        self.get(kind).map(|b| b.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = (SegmentKind, Option<&Bytes>)> + '_ {
        SegmentKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}
