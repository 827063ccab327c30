// src/utils/ascii.rs

/// Parse a space-padded ASCII decimal, as found in header offset fields.
///
/// Returns `None` for empty, non-ASCII, or non-digit contents.
pub fn parse_ascii_uint(bytes: &[u8]) -> Option<usize> {
    let trimmed = bytes.trim_ascii();
    if trimmed.is_empty() || !trimmed.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(trimmed).ok()?.parse().ok()
}

pub fn decode_ascii_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).to_string()
}
