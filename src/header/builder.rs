// src/header/builder.rs
use crate::error::{FcsError, Result};
use crate::options::CompileOptions;
use crate::segment::{HeaderLayout, Segments};
use crate::types::{FieldRange, FieldRole, SegmentKind};

/// A generated header plus the layout end it implies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltHeader {
    pub bytes: Vec<u8>,
    /// Position after the last segment and its trailing padding
    pub last_pos: usize,
}

/// Build a space-filled header with the tag and every segment offset.
///
/// Segments are laid out back to back after the header, separated by
/// `options.padding` bytes. Empty segments get offsets `0`/`0` and take no
/// space; absent ones get nothing. OTHER's implicit-width start field is
/// never written.
pub fn build_header(segments: &Segments, options: &CompileOptions) -> Result<BuiltHeader> {
    let header_size = options.header_size;
    let tag = options.tag.as_bytes();
    let max_len = first_field_start(&options.layout).unwrap_or(header_size).min(header_size);
    if tag.len() > max_len {
        return Err(FcsError::TagTooLong { tag_len: tag.len(), max_len });
    }
    let required = required_header_size(&options.layout);
    if required > header_size {
        return Err(FcsError::HeaderTooSmall { required, header_size });
    }
    // a padding of 1 places segments back to back
    let padding = options.padding.max(1);

    let mut header = vec![b' '; header_size];
    header[..tag.len()].copy_from_slice(tag);

    let mut last_pos = header_size;
    for (kind, spec) in options.layout.iter() {
        let Some(length) = segments.len_of(kind) else {
            continue;
        };

        if length == 0 {
            insert_pair(&mut header, kind, spec.start, spec.end, 0, 0)?;
            continue;
        }

        let segment_start = last_pos;
        let segment_end = last_pos + length - 1;
        insert_pair(&mut header, kind, spec.start, spec.end, segment_start, segment_end)?;
        last_pos = segment_end + padding;
    }

    Ok(BuiltHeader { bytes: header, last_pos })
}

fn insert_pair(
    header: &mut [u8],
    kind: SegmentKind,
    start_field: Option<FieldRange>,
    end_field: Option<FieldRange>,
    segment_start: usize,
    segment_end: usize,
) -> Result<()> {
    if let Some(range) = start_field.filter(FieldRange::is_fixed) {
        insert_value(header, kind, FieldRole::Start, range, segment_start)?;
    }
    if let Some(range) = end_field {
        insert_value(header, kind, FieldRole::End, range, segment_end)?;
    }
    Ok(())
}

/// Right-justify `value` in a fixed-width ASCII field.
///
/// A fixed field whose end lies before its start holds no digits, so any
/// value overflows it.
fn insert_value(
    header: &mut [u8],
    kind: SegmentKind,
    role: FieldRole,
    range: FieldRange,
    value: usize,
) -> Result<()> {
    if !range.is_fixed() {
        return Ok(());
    }
    let width = range.width().unwrap_or(0);
    let text = value.to_string();
    if text.len() > width {
        return Err(FcsError::OffsetOverflow { kind, field: role, value, width });
    }

    let end = range.start + width;
    header[end - text.len()..end].copy_from_slice(text.as_bytes());
    Ok(())
}

fn fields(layout: &HeaderLayout) -> impl Iterator<Item = FieldRange> + '_ {
    layout.iter()
        .flat_map(|(_, spec)| [spec.start, spec.end])
        .flatten()
}

fn first_field_start(layout: &HeaderLayout) -> Option<usize> {
    fields(layout).map(|range| range.start).min()
}

fn required_header_size(layout: &HeaderLayout) -> usize {
    fields(layout)
        .filter_map(|range| range.end.map(|end| end + 1))
        .max()
        .unwrap_or(0)
}
