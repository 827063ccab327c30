// src/segment/info.rs
use crate::types::SegmentKind;

/// Start and end offsets of one segment as read from a header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentInfo {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl SegmentInfo {
    pub fn new(start: Option<usize>, end: Option<usize>) -> Self {
        SegmentInfo { start, end }
    }

    /// Byte range of the payload, if both offsets are known.
    ///
    /// `(0, 0)` is the zero-length convention and yields an empty range.
    pub fn byte_range(&self) -> Option<std::ops::Range<usize>> {
        match (self.start, self.end) {
            (Some(0), Some(0)) => Some(0..0),
            (Some(start), Some(end)) if start <= end => Some(start..end + 1),
            _ => None,
        }
    }
}

/// Offsets of all four segments, indexed by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedOffsets {
    entries: [SegmentInfo; 4],
}

impl ResolvedOffsets {
    pub fn get(&self, kind: SegmentKind) -> SegmentInfo {
        self.entries[kind.index()]
    }

    pub(crate) fn set(&mut self, kind: SegmentKind, info: SegmentInfo) {
        self.entries[kind.index()] = info;
    }

    pub fn iter(&self) -> impl Iterator<Item = (SegmentKind, SegmentInfo)> + '_ {
        SegmentKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}
