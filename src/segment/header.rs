// src/segment/header.rs
use crate::types::{FieldRange, FieldSpec, SegmentKind};

/// Positions of the offset fields inside an FCS header.
///
/// One immutable table shared by the segment locator and the header builder,
/// so both sides always agree on where each offset lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    specs: [FieldSpec; 4],
}

impl HeaderLayout {
    pub const DEFAULT_HEADER_SIZE: usize = 256;
    pub const DEFAULT_PADDING: usize = 128;
    pub const DEFAULT_TAG: &'static str = "FCS2.0";

    /// Field table of FCS 2.0/3.x headers. OTHER only has a start field,
    /// terminated by the first binary offset.
    pub const STANDARD: HeaderLayout = HeaderLayout {
        specs: [
            FieldSpec {
                start: Some(FieldRange::fixed(10, 17)),
                end: Some(FieldRange::fixed(18, 25)),
            },
            FieldSpec {
                start: Some(FieldRange::fixed(26, 33)),
                end: Some(FieldRange::fixed(34, 41)),
            },
            FieldSpec {
                start: Some(FieldRange::fixed(42, 49)),
                end: Some(FieldRange::fixed(50, 57)),
            },
            FieldSpec {
                start: Some(FieldRange::implicit(58)),
                end: None,
            },
        ],
    };

    pub const fn new(specs: [FieldSpec; 4]) -> Self {
        HeaderLayout { specs }
    }

    pub fn spec(&self, kind: SegmentKind) -> &FieldSpec {
        &self.specs[kind.index()]
    }

    /// Iterate field specs in scan order
    pub fn iter(&self) -> impl Iterator<Item = (SegmentKind, &FieldSpec)> {
        SegmentKind::ALL.into_iter().map(move |kind| (kind, self.spec(kind)))
    }
}

impl Default for HeaderLayout {
    fn default() -> Self {
        HeaderLayout::STANDARD
    }
}
