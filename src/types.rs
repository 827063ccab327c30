// src/types.rs
use std::fmt;

/// The four named segments of an FCS container, in header scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SegmentKind {
    Text = 0,
    Data = 1,
    Analysis = 2,
    Other = 3,
}

impl SegmentKind {
    /// Fixed scan order used by both the locator and the header builder
    pub const ALL: [SegmentKind; 4] = [
        SegmentKind::Text,
        SegmentKind::Data,
        SegmentKind::Analysis,
        SegmentKind::Other,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(SegmentKind::Text),
            1 => Some(SegmentKind::Data),
            2 => Some(SegmentKind::Analysis),
            3 => Some(SegmentKind::Other),
            _ => None,
        }
    }

    /// Get the name of the segment as it appears in the FCS standard
    pub fn name(&self) -> &'static str {
        match self {
            SegmentKind::Text => "TEXT",
            SegmentKind::Data => "DATA",
            SegmentKind::Analysis => "ANALYSIS",
            SegmentKind::Other => "OTHER",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which of a segment's two header fields is meant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    Start,
    End,
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRole::Start => f.write_str("start"),
            FieldRole::End => f.write_str("end"),
        }
    }
}

/// Inclusive byte window of an offset field inside the header.
///
/// An `end` of `None` marks an implicit-width field: it runs until one byte
/// before the earliest offset resolved so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    pub start: usize,
    pub end: Option<usize>,
}

impl FieldRange {
    pub const fn fixed(start: usize, end: usize) -> Self {
        FieldRange { start, end: Some(end) }
    }

    pub const fn implicit(start: usize) -> Self {
        FieldRange { start, end: None }
    }

    /// Width in bytes for fixed fields; `None` when implicit or inverted
    pub fn width(&self) -> Option<usize> {
        self.end.and_then(|end| (end + 1).checked_sub(self.start)).filter(|width| *width > 0)
    }

    pub fn is_fixed(&self) -> bool {
        self.end.is_some()
    }
}

/// Pair of header fields describing where one segment lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub start: Option<FieldRange>,
    pub end: Option<FieldRange>,
}

impl FieldSpec {
    pub fn field(&self, role: FieldRole) -> Option<FieldRange> {
        match role {
            FieldRole::Start => self.start,
            FieldRole::End => self.end,
        }
    }
}
