// src/writer/mod.rs
mod sync_writer;

#[cfg(feature = "async")]
mod async_writer;

pub use sync_writer::{write_file, write_file_with};

#[cfg(feature = "async")]
pub use async_writer::{write_file_async, write_file_async_with};
