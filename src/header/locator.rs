// src/header/locator.rs
use crate::header::field::decode_field;
use crate::segment::{HeaderLayout, ResolvedOffsets, SegmentInfo};
use crate::types::FieldRole;
use smallvec::SmallVec;
use tracing::trace;

/// Resolve the offsets of every segment described by `layout`.
///
/// Kinds are scanned in order, and each resolved value lowers the
/// `next_segment` boundary that terminates later implicit-width fields. The
/// same routine reads original files and freshly built headers.
pub fn locate_segments(buffer: &[u8], layout: &HeaderLayout) -> ResolvedOffsets {
    let mut offsets = ResolvedOffsets::default();
    let mut seen: SmallVec<[usize; 8]> = SmallVec::new();
    let mut next_segment: Option<usize> = None;

    for (kind, spec) in layout.iter() {
        let start = decode_field(buffer, spec.field(FieldRole::Start), next_segment).value();
        let end = decode_field(buffer, spec.field(FieldRole::End), next_segment).value();

        seen.extend(start);
        seen.extend(end);
        next_segment = seen.iter().copied().min();

        trace!(segment = %kind, ?start, ?end, ?next_segment, "Located segment");
        offsets.set(kind, SegmentInfo::new(start, end));
    }

    offsets
}
