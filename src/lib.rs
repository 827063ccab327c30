// src/lib.rs
//! # fcs-rs
//!
//! A Rust library for reading, editing and re-writing FCS (Flow Cytometry
//! Standard) style container files, including files that chain several
//! datasets through `$NEXTDATA`.
//!
//! ## Features
//!
//! - 📦 **Zero-copy decode**: segments are slices of the input buffer
//! - 🔗 **Dataset chains**: decode and re-compile multi-dataset files
//! - 🧮 **Exact headers**: offsets re-encoded into fixed-width ASCII fields, with
//!   overflow reported instead of truncated
//! - 🧹 **Scrubbing**: strip instrument and operator identifiers from TEXT
//!
//! ## Quick Start
//!
//! ### Reading and re-writing a file
//!
//! ```rust,no_run
//! use fcs_rs::*;
//!
//! fn main() -> Result<()> {
//!     let mut dataset = reader::read_file("input.lmd")?;
//!
//!     for ds in &dataset {
//!         println!("{} events", ds.metadata().parse::<u64>("$TOT").unwrap_or(0));
//!     }
//!
//!     dataset.scrub_identifying_keys();
//!     writer::write_file("cleaned.lmd", &mut dataset)?;
//!     Ok(())
//! }
//! ```
//!
//! ### Building a dataset in memory
//!
//! ```rust
//! use fcs_rs::*;
//! use bytes::Bytes;
//!
//! # fn main() -> Result<()> {
//! let meta: Metadata = [("$TOT", "2"), ("$PAR", "1")].into_iter().collect();
//! let mut dataset = Dataset::new(meta);
//! dataset.set_segment(SegmentKind::Data, Some(Bytes::from_static(&[1, 2])));
//!
//! let bytes = dataset.compile()?;
//! let decoded = Dataset::decode(bytes)?;
//! assert_eq!(decoded.segment(SegmentKind::Data).unwrap().as_ref(), &[1, 2]);
//! # Ok(())
//! # }
//! ```

// Modules
pub mod checksum;
pub mod dataset;
pub mod error;
pub mod header;
pub mod metadata;
pub mod options;
pub mod reader;
pub mod segment;
pub mod types;
pub mod writer;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{FcsError, Result};

pub use types::{FieldRange, FieldRole, FieldSpec, SegmentKind};

pub use checksum::{Checksum, StubChecksum, CHECKSUM_WIDTH};

pub use dataset::{ChainIter, Dataset};

pub use header::{build_header, decode_field, locate_segments, BuiltHeader, FieldValue};

pub use metadata::{decode_text, encode_text, Metadata};

pub use options::{CompileOptions, DecodeOptions};

pub use segment::{HeaderLayout, ResolvedOffsets, SegmentInfo, Segments};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use fcs_rs::prelude::*;
    //! ```

    pub use crate::dataset::Dataset;
    pub use crate::error::{FcsError, Result};
    pub use crate::metadata::Metadata;
    pub use crate::options::{CompileOptions, DecodeOptions};
    pub use crate::reader::read_file;
    pub use crate::types::SegmentKind;
    pub use crate::writer::write_file;
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!LIBRARY_VERSION.is_empty());
    }

    #[test]
    fn test_segment_kind_order() {
        let names: Vec<&str> = SegmentKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, vec!["TEXT", "DATA", "ANALYSIS", "OTHER"]);
        for kind in SegmentKind::ALL {
            assert_eq!(SegmentKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(SegmentKind::from_index(4), None);
    }

    #[test]
    fn test_standard_layout_constants() {
        let layout = HeaderLayout::STANDARD;
        assert_eq!(layout.spec(SegmentKind::Text).start, Some(FieldRange::fixed(10, 17)));
        assert_eq!(layout.spec(SegmentKind::Text).end, Some(FieldRange::fixed(18, 25)));
        assert_eq!(layout.spec(SegmentKind::Data).start, Some(FieldRange::fixed(26, 33)));
        assert_eq!(layout.spec(SegmentKind::Data).end, Some(FieldRange::fixed(34, 41)));
        assert_eq!(layout.spec(SegmentKind::Analysis).start, Some(FieldRange::fixed(42, 49)));
        assert_eq!(layout.spec(SegmentKind::Analysis).end, Some(FieldRange::fixed(50, 57)));
        assert_eq!(layout.spec(SegmentKind::Other).start, Some(FieldRange::implicit(58)));
        assert_eq!(layout.spec(SegmentKind::Other).end, None);

        assert_eq!(FieldRange::fixed(10, 17).width(), Some(8));
        assert_eq!(FieldRange::implicit(58).width(), None);
    }

    #[test]
    fn test_segment_info_ranges() {
        assert_eq!(SegmentInfo::new(Some(256), Some(300)).byte_range(), Some(256..301));
        assert_eq!(SegmentInfo::new(Some(0), Some(0)).byte_range(), Some(0..0));
        assert_eq!(SegmentInfo::new(Some(300), Some(256)).byte_range(), None);
        assert_eq!(SegmentInfo::new(Some(256), None).byte_range(), None);
        assert_eq!(SegmentInfo::new(None, None).byte_range(), None);
    }

    #[test]
    fn test_error_messages() {
        let err = FcsError::OffsetOverflow {
            kind: SegmentKind::Data,
            field: FieldRole::End,
            value: 123_456_789,
            width: 8,
        };
        assert_eq!(
            err.to_string(),
            "Offset overflow: DATA end value 123456789 does not fit in 8 header bytes"
        );
    }
}
