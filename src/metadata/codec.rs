// src/metadata/codec.rs
use crate::metadata::Metadata;
use crate::utils::decode_ascii_lossy;
use tracing::debug;

/// Decode a TEXT segment into metadata.
///
/// The first byte is the delimiter and the remaining fields pair up as key,
/// value, key, value. A trailing unpaired field is dropped: this covers the
/// empty field left by the closing delimiter and truncated segments alike.
pub fn decode_text(text: &[u8]) -> Metadata {
    let Some((&delimiter, rest)) = text.split_first() else {
        return Metadata::new();
    };

    let fields: Vec<&[u8]> = rest.split(|b| *b == delimiter).collect();
    let pairs = fields.chunks_exact(2);
    if let [unpaired] = pairs.remainder() {
        if !unpaired.is_empty() {
            debug!(field = %decode_ascii_lossy(unpaired), "Dropping unpaired TEXT field");
        }
    }

    let mut metadata = Metadata::with_delimiter(delimiter);
    for pair in pairs {
        metadata.insert(pair[0], pair[1]);
    }
    metadata
}

/// Encode metadata as `delim key delim value ... delim`.
///
/// Empty metadata encodes to a lone delimiter.
pub fn encode_text(metadata: &Metadata) -> Vec<u8> {
    let delimiter = metadata.delimiter();
    let mut text = vec![delimiter];
    for (key, value) in metadata.iter() {
        text.extend_from_slice(key);
        text.push(delimiter);
        text.extend_from_slice(value);
        text.push(delimiter);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_basic() {
        let meta = decode_text(b"\\$TOT\\1000\\$PAR\\2\\");
        assert_eq!(meta.len(), 2);
        assert_eq!(meta.get("$TOT"), Some(b"1000".as_slice()));
        assert_eq!(meta.get("$PAR"), Some(b"2".as_slice()));
        assert_eq!(meta.delimiter(), b'\\');
    }

    #[test]
    fn test_decode_drops_unpaired_field() {
        let meta = decode_text(b"\\A\\1\\B");
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.get("A"), Some(b"1".as_slice()));
        assert!(!meta.contains_key("B"));
    }

    #[test]
    fn test_decode_custom_delimiter() {
        let meta = decode_text(b"|$MODE|L|$BYTEORD|1,2,3,4|");
        assert_eq!(meta.delimiter(), b'|');
        assert_eq!(meta.get_str("$BYTEORD"), Some("1,2,3,4"));
        assert_eq!(encode_text(&meta), b"|$MODE|L|$BYTEORD|1,2,3,4|".to_vec());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(decode_text(b"").is_empty());
        assert!(decode_text(b"\\").is_empty());
        assert_eq!(encode_text(&Metadata::new()), b"\\".to_vec());
    }

    #[test]
    fn test_encode_layout() {
        let meta: Metadata = [("A", "1"), ("B", "22")].into_iter().collect();
        assert_eq!(encode_text(&meta), b"\\A\\1\\B\\22\\".to_vec());
    }

    fn field() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(any::<u8>().prop_filter("no delimiter", |b| *b != b'\\'), 1..12)
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(entries in proptest::collection::vec((field(), field()), 0..16)) {
            let meta: Metadata = entries.into_iter().collect();
            prop_assert_eq!(decode_text(&encode_text(&meta)), meta);
        }
    }
}
