// src/dataset/compile.rs
use crate::dataset::Dataset;
use crate::error::{FcsError, Result};
use crate::header::{build_header, locate_segments, BuiltHeader};
use crate::metadata::keys;
use crate::options::CompileOptions;
use crate::types::SegmentKind;
use tracing::debug;

/// Upper bound on header rebuilds while `$NEXTDATA` settles.
///
/// Each extra round only happens when the pointer gains a decimal digit.
const MAX_SETTLE_ROUNDS: usize = 8;

impl Dataset {
    /// Serialize this dataset and its successors with default options
    pub fn compile(&mut self) -> Result<Vec<u8>> {
        self.compile_with(&CompileOptions::default())
    }

    /// Serialize this dataset and its successors.
    ///
    /// Rewrites this dataset's `$NEXTDATA` (and each successor's) to match the
    /// produced layout; no other state is touched. On error nothing is
    /// returned for the chain.
    pub fn compile_with(&mut self, options: &CompileOptions) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut current = Some(self);
        while let Some(dataset) = current {
            if !out.is_empty() {
                out.resize(out.len() + options.chain_padding, 0);
            }
            dataset.compile_one(options, &mut out)?;
            current = dataset.successor.as_deref_mut();
        }
        Ok(out)
    }

    /// Append this dataset alone: header, segments, checksum
    fn compile_one(&mut self, options: &CompileOptions, out: &mut Vec<u8>) -> Result<()> {
        let header = self.settle_header(options)?;

        // positions come from reading the header back, not from the builder
        let offsets = locate_segments(&header.bytes, &options.layout);

        let start = out.len();
        out.resize(start + header.last_pos, 0);
        let body = &mut out[start..];
        body[..header.bytes.len()].copy_from_slice(&header.bytes);

        for (kind, info) in offsets.iter() {
            let (Some(range), Some(payload)) = (info.byte_range(), self.segments.get(kind)) else {
                continue;
            };
            debug_assert_eq!(range.len(), payload.len());
            let len = range.len().min(payload.len());
            body[range.start..range.start + len].copy_from_slice(&payload[..len]);
        }

        if self.segments.get(SegmentKind::Other).is_some_and(|p| !p.is_empty()) {
            debug!("OTHER payload has no fixed header field; its space is reserved but left blank");
        }

        let checksum = options.checksum.checksum(&out[start..]);
        out.extend_from_slice(&checksum);

        debug!(
            last_pos = header.last_pos,
            next_data = self.next_data(),
            has_successor = self.successor.is_some(),
            "Compiled dataset"
        );
        Ok(())
    }

    /// Build the header with a `$NEXTDATA` that agrees with it.
    ///
    /// The last dataset just stores `0`. Otherwise a probe build yields the
    /// layout end, the pointer is set past it, and the header is rebuilt. A
    /// pointer of different width changes TEXT's length and so the layout
    /// end; the settle round repeats until the rebuilt end matches the one
    /// the pointer was derived from.
    fn settle_header(&mut self, options: &CompileOptions) -> Result<BuiltHeader> {
        if self.successor.is_none() {
            self.set_text_key(keys::NEXTDATA, 0);
            return build_header(&self.segments, options);
        }

        let mut probe = build_header(&self.segments, options)?;
        for round in 1..=MAX_SETTLE_ROUNDS {
            self.set_text_key(keys::NEXTDATA, probe.last_pos + options.next_data_slack());
            let settled = build_header(&self.segments, options)?;
            if settled.last_pos == probe.last_pos {
                return Ok(settled);
            }
            debug!(
                round,
                probe = probe.last_pos,
                settled = settled.last_pos,
                "$NEXTDATA width shifted layout, settling again"
            );
            probe = settled;
        }

        Err(FcsError::Unsettled { rounds: MAX_SETTLE_ROUNDS })
    }
}
