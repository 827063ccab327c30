// src/header/mod.rs
mod builder;
mod field;
mod locator;

pub use builder::{build_header, BuiltHeader};
pub use field::{decode_field, FieldValue};
pub use locator::locate_segments;
