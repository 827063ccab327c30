// src/metadata/mod.rs
mod codec;
pub mod keys;
mod text_metadata;

pub use codec::{decode_text, encode_text};
pub use text_metadata::Metadata;
