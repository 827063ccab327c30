// src/reader/mod.rs
mod sync_reader;

#[cfg(feature = "async")]
mod async_reader;

pub use sync_reader::{read_file, read_file_with};

#[cfg(feature = "mmap")]
pub use sync_reader::read_file_mmap;

#[cfg(feature = "async")]
pub use async_reader::{read_file_async, read_file_async_with};
