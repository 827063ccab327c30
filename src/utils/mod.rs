// src/utils/mod.rs
mod ascii;

pub(crate) use ascii::*;
