// src/reader/async_reader.rs
use crate::dataset::Dataset;
use crate::error::Result;
use crate::options::DecodeOptions;
use std::path::Path;
use tracing::debug;

/// Async counterpart of [`read_file`](crate::reader::read_file).
///
/// Only the file read is async; decoding runs inline.
pub async fn read_file_async(path: impl AsRef<Path>) -> Result<Dataset> {
    read_file_async_with(path, &DecodeOptions::default()).await
}

pub async fn read_file_async_with(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<Dataset> {
    let path = path.as_ref();
    let buffer = tokio::fs::read(path).await?;

    debug!(path = %path.display(), len = buffer.len(), "Read FCS file");
    Dataset::decode_with(buffer, options)
}
