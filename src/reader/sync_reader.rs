// src/reader/sync_reader.rs
use crate::dataset::Dataset;
use crate::error::Result;
use crate::options::DecodeOptions;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

#[cfg(feature = "mmap")]
use bytes::Bytes;
#[cfg(feature = "mmap")]
use memmap2::Mmap;

/// Read a whole FCS file and decode its dataset chain
pub fn read_file(path: impl AsRef<Path>) -> Result<Dataset> {
    read_file_with(path, &DecodeOptions::default())
}

pub fn read_file_with(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut buffer = Vec::with_capacity(file.metadata().map(|m| m.len() as usize).unwrap_or(0));
    BufReader::with_capacity(65536, file).read_to_end(&mut buffer)?;

    debug!(path = %path.display(), len = buffer.len(), "Read FCS file");
    Dataset::decode_with(buffer, options)
}

/// Decode straight from a memory map; segments borrow the mapping.
///
/// The file must not be modified while any decoded segment is alive.
#[cfg(feature = "mmap")]
pub fn read_file_mmap(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mmap = unsafe { Mmap::map(&file)? };

    debug!(path = %path.display(), len = mmap.len(), "Mapped FCS file");
    Dataset::decode_with(Bytes::from_owner(mmap), options)
}
