// src/error.rs
use crate::types::{FieldRole, SegmentKind};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FcsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Offset overflow: {kind} {field} value {value} does not fit in {width} header bytes")]
    OffsetOverflow {
        kind: SegmentKind,
        field: FieldRole,
        value: usize,
        width: usize,
    },

    #[error("Format tag of {tag_len} bytes overlaps offset fields starting at byte {max_len}")]
    TagTooLong { tag_len: usize, max_len: usize },

    #[error("Header of {header_size} bytes cannot hold offset fields ending at byte {required}")]
    HeaderTooSmall { required: usize, header_size: usize },

    #[error("Chain error at $NEXTDATA offset {offset}: {reason}")]
    Chain { offset: usize, reason: String },

    #[error("$NEXTDATA did not settle after {rounds} header rounds")]
    Unsettled { rounds: usize },
}

pub type Result<T> = std::result::Result<T, FcsError>;
