// src/header/field.rs
use crate::types::FieldRange;
use crate::utils::{decode_ascii_lossy, parse_ascii_uint};
use tracing::{trace, warn};

/// Outcome of reading one offset field.
///
/// Absence is the normal case for optional segments, so it is a value here
/// rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    Value(usize),
    /// No field defined, or its implicit end could not be resolved
    Absent,
    /// The field bytes are not a decimal number
    Malformed,
}

impl FieldValue {
    pub fn value(&self) -> Option<usize> {
        match self {
            FieldValue::Value(v) => Some(*v),
            FieldValue::Absent | FieldValue::Malformed => None,
        }
    }
}

/// Decode the ASCII offset stored in `range`.
///
/// Implicit-width fields end one byte before `next_segment`. The window is
/// clamped to the buffer; nothing here can fail the surrounding decode.
pub fn decode_field(buffer: &[u8], range: Option<FieldRange>, next_segment: Option<usize>) -> FieldValue {
    let Some(range) = range else {
        return FieldValue::Absent;
    };

    let end_exclusive = match range.end {
        Some(end) => end + 1,
        None => match next_segment {
            Some(boundary) => boundary,
            None => return FieldValue::Absent,
        },
    };
    let end_exclusive = end_exclusive.min(buffer.len());
    if end_exclusive <= range.start {
        return FieldValue::Absent;
    }

    let raw = &buffer[range.start..end_exclusive];
    match parse_ascii_uint(raw) {
        Some(value) => {
            trace!(start = range.start, end = end_exclusive - 1, value, "Decoded offset field");
            FieldValue::Value(value)
        }
        None if raw.iter().all(|b| *b == b' ') => FieldValue::Malformed,
        None => {
            warn!(
                start = range.start,
                end = end_exclusive - 1,
                raw = %decode_ascii_lossy(raw),
                "Offset field is not a decimal number"
            );
            FieldValue::Malformed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_field() {
        let mut header = vec![b' '; 64];
        header[15..18].copy_from_slice(b"256");
        let value = decode_field(&header, Some(FieldRange::fixed(10, 17)), None);
        assert_eq!(value, FieldValue::Value(256));
    }

    #[test]
    fn test_absent_range() {
        assert_eq!(decode_field(b"anything", None, Some(4)), FieldValue::Absent);
    }

    #[test]
    fn test_implicit_without_boundary_is_absent() {
        let header = vec![b'1'; 80];
        assert_eq!(decode_field(&header, Some(FieldRange::implicit(58)), None), FieldValue::Absent);
    }

    #[test]
    fn test_implicit_ends_before_boundary() {
        let mut header = vec![b' '; 80];
        header[58..60].copy_from_slice(b"58");
        // byte at the boundary itself must not be read
        header[64] = b'\\';
        let value = decode_field(&header, Some(FieldRange::implicit(58)), Some(64));
        assert_eq!(value, FieldValue::Value(58));
    }

    #[test]
    fn test_boundary_before_field_is_absent() {
        let header = vec![b'7'; 80];
        assert_eq!(decode_field(&header, Some(FieldRange::implicit(58)), Some(0)), FieldValue::Absent);
    }

    #[test]
    fn test_blank_and_garbage_are_malformed() {
        let header = vec![b' '; 32];
        assert_eq!(decode_field(&header, Some(FieldRange::fixed(10, 17)), None), FieldValue::Malformed);

        let mut header = vec![b' '; 32];
        header[10..18].copy_from_slice(b"12ab  34");
        let value = decode_field(&header, Some(FieldRange::fixed(10, 17)), None);
        assert_eq!(value, FieldValue::Malformed);
        assert_eq!(value.value(), None);
    }

    #[test]
    fn test_field_clamped_to_short_buffer() {
        let header = b"FCS2.0    1234";
        let value = decode_field(header, Some(FieldRange::fixed(10, 17)), None);
        assert_eq!(value, FieldValue::Value(1234));
    }
}
