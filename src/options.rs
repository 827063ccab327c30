// src/options.rs
use crate::checksum::{Checksum, StubChecksum, CHECKSUM_WIDTH};
use crate::segment::HeaderLayout;
use std::sync::Arc;

/// Settings used when turning a dataset chain back into bytes
#[derive(Debug, Clone)]
pub struct CompileOptions {
    pub layout: HeaderLayout,
    /// Header length; the first segment starts here
    pub header_size: usize,
    /// Format tag written at byte 0
    pub tag: String,
    /// Gap left after each non-empty segment
    pub padding: usize,
    /// Zero bytes between the checksum trailer and the next dataset
    pub chain_padding: usize,
    pub checksum: Arc<dyn Checksum>,
}

impl CompileOptions {
    pub const DEFAULT_CHAIN_PADDING: usize = 24;

    pub fn with_layout(mut self, layout: HeaderLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_header_size(mut self, header_size: usize) -> Self {
        self.header_size = header_size;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_chain_padding(mut self, chain_padding: usize) -> Self {
        self.chain_padding = chain_padding;
        self
    }

    pub fn with_checksum(mut self, checksum: impl Checksum + 'static) -> Self {
        self.checksum = Arc::new(checksum);
        self
    }

    /// Distance from `last_pos` to the start of the next dataset
    pub fn next_data_slack(&self) -> usize {
        CHECKSUM_WIDTH + self.chain_padding
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            layout: HeaderLayout::STANDARD,
            header_size: HeaderLayout::DEFAULT_HEADER_SIZE,
            tag: HeaderLayout::DEFAULT_TAG.to_string(),
            padding: HeaderLayout::DEFAULT_PADDING,
            chain_padding: Self::DEFAULT_CHAIN_PADDING,
            checksum: Arc::new(StubChecksum),
        }
    }
}

/// Settings used when parsing a buffer into a dataset chain
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    pub layout: HeaderLayout,
    /// Longest chain accepted before decoding fails
    pub max_chain_len: usize,
}

impl DecodeOptions {
    pub const DEFAULT_MAX_CHAIN_LEN: usize = 1024;

    pub fn with_layout(mut self, layout: HeaderLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_max_chain_len(mut self, max_chain_len: usize) -> Self {
        self.max_chain_len = max_chain_len;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            layout: HeaderLayout::STANDARD,
            max_chain_len: Self::DEFAULT_MAX_CHAIN_LEN,
        }
    }
}
