// src/dataset/decode.rs
use crate::dataset::Dataset;
use crate::error::{FcsError, Result};
use crate::header::locate_segments;
use crate::options::DecodeOptions;
use crate::segment::Segments;
use bytes::Bytes;
use tracing::debug;

impl Dataset {
    /// Decode a dataset and everything chained after it
    pub fn decode(buffer: impl Into<Bytes>) -> Result<Self> {
        Self::decode_with(buffer, &DecodeOptions::default())
    }

    pub fn decode_with(buffer: impl Into<Bytes>, options: &DecodeOptions) -> Result<Self> {
        decode_chain(buffer.into(), options)
    }
}

/// Decode the dataset at the start of `buffer`, then follow `$NEXTDATA`
/// through the same buffer until a dataset ends the chain.
///
/// `$NEXTDATA` is read relative to each dataset's own buffer, so every hop
/// moves strictly forward and cycles cannot occur. The walk is a loop; the
/// successors are linked back to front once all of them are decoded.
fn decode_chain(buffer: Bytes, options: &DecodeOptions) -> Result<Dataset> {
    let (mut root, mut next) = decode_one(&buffer, options, 0)?;

    let mut buffer = buffer;
    let mut tail = Vec::new();
    while let Some(offset) = next {
        buffer = buffer.slice(offset..);
        let (dataset, following) = decode_one(&buffer, options, tail.len() + 1)?;
        tail.push(dataset);
        next = following;
    }

    let successors = tail.into_iter().rev().fold(None::<Dataset>, |chain, mut dataset| {
        dataset.set_successor(chain);
        Some(dataset)
    });
    root.set_successor(successors);
    Ok(root)
}

/// Decode one dataset and validate its `$NEXTDATA`, which is returned when it
/// points at a successor.
fn decode_one(buffer: &Bytes, options: &DecodeOptions, depth: usize) -> Result<(Dataset, Option<usize>)> {
    let offsets = locate_segments(buffer, &options.layout);
    let segments = Segments::slice_from(buffer, &offsets);
    let dataset = Dataset::from_segments(segments);

    let next_data = dataset.next_data();
    debug!(
        depth,
        buffer_len = buffer.len(),
        keys = dataset.metadata().len(),
        next_data,
        "Decoded dataset"
    );

    if next_data == 0 {
        return Ok((dataset, None));
    }
    if next_data >= buffer.len() {
        return Err(FcsError::Chain {
            offset: next_data,
            reason: format!("points past the end of a {} byte buffer", buffer.len()),
        });
    }
    if depth + 1 >= options.max_chain_len {
        return Err(FcsError::Chain {
            offset: next_data,
            reason: format!("chain longer than {} datasets", options.max_chain_len),
        });
    }

    Ok((dataset, Some(next_data)))
}
