// src/checksum.rs
use std::fmt;

/// Width of the ASCII checksum trailer that follows each dataset
pub const CHECKSUM_WIDTH: usize = 8;

/// Produces the trailer appended after a dataset's segments
pub trait Checksum: fmt::Debug + Send + Sync {
    fn checksum(&self, data: &[u8]) -> [u8; CHECKSUM_WIDTH];
}

/// Placeholder trailer of ASCII zeros.
///
/// No CRC is computed; readers that validate the trailer will reject files
/// written with this.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubChecksum;

impl Checksum for StubChecksum {
    fn checksum(&self, _data: &[u8]) -> [u8; CHECKSUM_WIDTH] {
        *b"00000000"
    }
}
