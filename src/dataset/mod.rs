// src/dataset/mod.rs
mod compile;
mod decode;

use crate::metadata::{decode_text, encode_text, keys, Metadata};
use crate::segment::Segments;
use crate::types::SegmentKind;
use bytes::Bytes;
use std::fmt::Display;

/// One dataset of an FCS file: its segments, the metadata held in TEXT,
/// and the dataset chained after it.
///
/// The chain is owned front to back; there are no shared or backward links.
/// The TEXT segment is kept in sync with `metadata` on every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    segments: Segments,
    metadata: Metadata,
    successor: Option<Box<Dataset>>,
}

impl Dataset {
    /// Create a dataset whose only segment is the TEXT encoding of `metadata`
    pub fn new(metadata: Metadata) -> Self {
        let mut dataset = Dataset {
            segments: Segments::new(),
            metadata,
            successor: None,
        };
        dataset.sync_text();
        dataset
    }

    /// Create a dataset from raw segments, decoding metadata from TEXT
    pub fn from_segments(segments: Segments) -> Self {
        let metadata = segments.get(SegmentKind::Text)
            .map(|text| decode_text(text))
            .unwrap_or_default();
        Dataset { segments, metadata, successor: None }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    pub fn segment(&self, kind: SegmentKind) -> Option<&Bytes> {
        self.segments.get(kind)
    }

    /// Replace one segment. Replacing TEXT re-decodes the metadata.
    pub fn set_segment(&mut self, kind: SegmentKind, payload: Option<Bytes>) {
        if kind == SegmentKind::Text {
            self.metadata = payload.as_deref().map(decode_text).unwrap_or_default();
        }
        self.segments.set(kind, payload);
    }

    /// Set a TEXT key to the display form of `value` and re-encode TEXT
    pub fn set_text_key(&mut self, key: impl AsRef<[u8]>, value: impl Display) {
        self.metadata.insert(key, value.to_string());
        self.sync_text();
    }

    pub fn set_metadata(&mut self, metadata: Metadata) {
        self.metadata = metadata;
        self.sync_text();
    }

    pub fn remove_key(&mut self, key: impl AsRef<[u8]>) -> Option<Vec<u8>> {
        let removed = self.metadata.remove(key)?;
        self.sync_text();
        Some(removed)
    }

    /// Offset stored in `$NEXTDATA`, `0` when absent or malformed
    pub fn next_data(&self) -> usize {
        self.metadata.next_data()
    }

    pub fn successor(&self) -> Option<&Dataset> {
        self.successor.as_deref()
    }

    pub fn successor_mut(&mut self) -> Option<&mut Dataset> {
        self.successor.as_deref_mut()
    }

    /// Attach `successor`, returning the one it replaces
    pub fn set_successor(&mut self, successor: Option<Dataset>) -> Option<Dataset> {
        std::mem::replace(&mut self.successor, successor.map(Box::new)).map(|b| *b)
    }

    /// Detach the rest of the chain
    pub fn take_successor(&mut self) -> Option<Dataset> {
        self.successor.take().map(|b| *b)
    }

    /// Number of datasets in the chain starting here
    pub fn chain_len(&self) -> usize {
        self.iter().count()
    }

    /// Iterate this dataset and every successor
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter { current: Some(self) }
    }

    /// Remove `keys` from every dataset in the chain.
    ///
    /// Returns how many entries were removed.
    pub fn scrub_keys(&mut self, keys: &[&str]) -> usize {
        let mut removed = 0;
        let mut current = Some(self);
        while let Some(dataset) = current {
            let before = removed;
            for key in keys {
                if dataset.metadata.remove(key).is_some() {
                    removed += 1;
                }
            }
            if removed != before {
                dataset.sync_text();
            }
            current = dataset.successor.as_deref_mut();
        }
        removed
    }

    /// Remove instrument, operator and run identifiers from the chain
    pub fn scrub_identifying_keys(&mut self) -> usize {
        self.scrub_keys(keys::IDENTIFYING_KEYS)
    }

    fn sync_text(&mut self) {
        let text = encode_text(&self.metadata);
        self.segments.set(SegmentKind::Text, Some(Bytes::from(text)));
    }
}

impl Drop for Dataset {
    // unlink the chain one box at a time instead of recursing through it
    fn drop(&mut self) {
        let mut next = self.successor.take();
        while let Some(mut dataset) = next {
            next = dataset.successor.take();
        }
    }
}

/// Iterator over a dataset chain, front to back
pub struct ChainIter<'a> {
    current: Option<&'a Dataset>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Dataset;

    fn next(&mut self) -> Option<Self::Item> {
        let dataset = self.current?;
        self.current = dataset.successor();
        Some(dataset)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Dataset;
    type IntoIter = ChainIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
