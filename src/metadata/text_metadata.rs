// src/metadata/text_metadata.rs
use crate::metadata::keys;
use std::str::FromStr;

/// Key/value pairs stored in a TEXT segment.
///
/// Keys are unique and keep the order in which they were first inserted, so
/// a decoded TEXT segment re-encodes in its original order. The delimiter the
/// segment was decoded with is carried along and reused on encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    delimiter: u8,
    entries: Vec<(Vec<u8>, Vec<u8>)>,
}

impl Metadata {
    pub const DEFAULT_DELIMITER: u8 = b'\\';

    pub fn new() -> Self {
        Self::with_delimiter(Self::DEFAULT_DELIMITER)
    }

    /// Create empty metadata encoded with `delimiter`.
    ///
    /// Keys and values must not contain the delimiter byte; this is not
    /// checked and such entries will not decode back to themselves.
    pub fn with_delimiter(delimiter: u8) -> Self {
        Metadata { delimiter, entries: Vec::new() }
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn set_delimiter(&mut self, delimiter: u8) {
        self.delimiter = delimiter;
    }

    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&[u8]> {
        let key = key.as_ref();
        self.entries.iter()
            .find(|(k, _)| k.as_slice() == key)
            .map(|(_, v)| v.as_slice())
    }

    /// Value as UTF-8 text, if it is valid UTF-8
    pub fn get_str(&self, key: impl AsRef<[u8]>) -> Option<&str> {
        self.get(key).and_then(|v| std::str::from_utf8(v).ok())
    }

    /// Parse a value, e.g. `meta.parse::<usize>("$TOT")`
    pub fn parse<T: FromStr>(&self, key: impl AsRef<[u8]>) -> Option<T> {
        self.get_str(key)?.trim().parse().ok()
    }

    /// Offset of the next dataset, `0` when missing or malformed
    pub fn next_data(&self) -> usize {
        self.parse(keys::NEXTDATA).unwrap_or(0)
    }

    /// Insert or replace a value; a replaced key keeps its position
    pub fn insert(&mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> Option<Vec<u8>> {
        let key = key.as_ref();
        let value = value.as_ref().to_vec();
        match self.entries.iter_mut().find(|(k, _)| k.as_slice() == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key.to_vec(), value));
                None
            }
        }
    }

    pub fn remove(&mut self, key: impl AsRef<[u8]>) -> Option<Vec<u8>> {
        let key = key.as_ref();
        let index = self.entries.iter().position(|(k, _)| k.as_slice() == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.entries.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.iter().map(|(k, _)| k.as_slice())
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: AsRef<[u8]>, V: AsRef<[u8]>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Metadata::new();
        metadata.extend(iter);
        metadata
    }
}

impl<K: AsRef<[u8]>, V: AsRef<[u8]>> Extend<(K, V)> for Metadata {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
