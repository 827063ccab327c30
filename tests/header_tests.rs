// tests/header_tests.rs
use bytes::Bytes;
use fcs_rs::*;

fn write_field(header: &mut [u8], range: FieldRange, value: usize) {
    let width = range.width().unwrap();
    let text = format!("{:>width$}", value, width = width);
    header[range.start..range.start + width].copy_from_slice(text.as_bytes());
}

#[test]
fn test_other_start_resolves_from_literal_field() {
    let layout = HeaderLayout::STANDARD;
    let mut header = vec![b' '; 256];
    header[..6].copy_from_slice(b"FCS2.0");
    write_field(&mut header, layout.spec(SegmentKind::Text).start.unwrap(), 64);
    write_field(&mut header, layout.spec(SegmentKind::Text).end.unwrap(), 120);
    header[58..60].copy_from_slice(b"58");

    let offsets = locate_segments(&header, &layout);
    assert_eq!(offsets.get(SegmentKind::Text), SegmentInfo::new(Some(64), Some(120)));

    let literal: usize = std::str::from_utf8(&header[58..64]).unwrap().trim().parse().unwrap();
    assert_eq!(offsets.get(SegmentKind::Other).start, Some(literal));
    assert_eq!(offsets.get(SegmentKind::Other).start, Some(58));
}

#[test]
fn test_other_field_stops_before_payload() {
    let layout = HeaderLayout::STANDARD;
    let mut header = vec![b' '; 256];
    write_field(&mut header, layout.spec(SegmentKind::Text).start.unwrap(), 64);
    write_field(&mut header, layout.spec(SegmentKind::Text).end.unwrap(), 120);
    header[58..64].copy_from_slice(b"  1234");
    // first TEXT byte is a delimiter right at the boundary
    header[64] = b'\\';

    let other = decode_field(&header, layout.spec(SegmentKind::Other).start, Some(64));
    assert_eq!(other, FieldValue::Value(1234));
    assert_eq!(locate_segments(&header, &layout).get(SegmentKind::Other).start, Some(1234));
}

#[test]
fn test_built_header_reads_back() {
    let mut segments = Segments::new();
    segments.set(SegmentKind::Text, Some(Bytes::from_static(b"\\$TOT\\1\\")));
    segments.set(SegmentKind::Data, Some(Bytes::from(vec![0u8; 1000])));
    segments.set(SegmentKind::Analysis, Some(Bytes::from(vec![1u8; 10])));

    let options = CompileOptions::default();
    let built = build_header(&segments, &options).unwrap();
    let offsets = locate_segments(&built.bytes, &options.layout);

    assert_eq!(offsets.get(SegmentKind::Text).byte_range(), Some(256..264));
    assert_eq!(offsets.get(SegmentKind::Data).byte_range(), Some(391..1391));
    assert_eq!(offsets.get(SegmentKind::Analysis).byte_range(), Some(1518..1528));
    assert_eq!(offsets.get(SegmentKind::Other), SegmentInfo::default());
    assert_eq!(built.last_pos, 1527 + 128);
}

#[test]
fn test_custom_header_size_and_tag() {
    let mut segments = Segments::new();
    segments.set(SegmentKind::Text, Some(Bytes::from_static(b"\\$TOT\\1\\")));

    let options = CompileOptions::default()
        .with_header_size(512)
        .with_tag("FCS3.1")
        .with_padding(1);
    let built = build_header(&segments, &options).unwrap();
    assert_eq!(built.bytes.len(), 512);
    assert_eq!(&built.bytes[..6], b"FCS3.1");
    assert_eq!(&built.bytes[10..26], b"     512     519");
    assert_eq!(built.last_pos, 520);
}

#[test]
fn test_text_overflow_produces_no_output() {
    let value = vec![b'x'; 99_999_730];
    let mut meta = Metadata::new();
    meta.insert("$COM", &value);
    let mut dataset = Dataset::new(meta);
    assert_eq!(dataset.segment(SegmentKind::Text).unwrap().len(), 99_999_737);

    // compiling adds `$NEXTDATA\0\`, pushing TEXT's end to 256 + 99_999_749 - 1
    match dataset.compile() {
        Err(FcsError::OffsetOverflow { kind, field, value, width }) => {
            assert_eq!(kind, SegmentKind::Text);
            assert_eq!(field, FieldRole::End);
            assert_eq!(value, 100_000_004);
            assert_eq!(width, 8);
        }
        Err(other) => panic!("Expected overflow, got {other}"),
        Ok(bytes) => panic!("Expected overflow, got {} bytes", bytes.len()),
    }
}
