//! Configuration for graphwire
//!
//! Centralized codec configuration with sensible defaults.

use serde::{Deserialize, Serialize};

/// Main configuration for a codec instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    // -------------------------------------------------------------------------
    // Decode Configuration
    // -------------------------------------------------------------------------
    /// Alias columnar batches into the response buffer instead of copying them.
    /// Decoded elements never hold on to the aliased memory; the bridge copies
    /// strings out before the batch is released.
    pub nocopy: bool,

    /// Maximum container nesting accepted on decode
    pub max_nesting_depth: usize,

    /// Upper bound on the decompressed size of a snappy envelope (in bytes)
    pub max_decompressed_size: usize,

    // -------------------------------------------------------------------------
    // Encode Configuration
    // -------------------------------------------------------------------------
    /// Compress request envelopes with snappy (magic 0x0102)
    pub compression: bool,

    // -------------------------------------------------------------------------
    // Scratch Pool Configuration
    // -------------------------------------------------------------------------
    /// Idle cursors/tables kept per pool
    pub pool_capacity: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            nocopy: true,
            max_nesting_depth: 256,
            max_decompressed_size: 256 * 1024 * 1024, // 256 MB
            compression: false,
            pool_capacity: 64,
        }
    }
}

impl CodecConfig {
    /// Create a new config builder
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::default()
    }
}

/// Builder for CodecConfig
#[derive(Default)]
pub struct CodecConfigBuilder {
    config: CodecConfig,
}

impl CodecConfigBuilder {
    /// Enable or disable no-copy aliasing of columnar batches
    pub fn nocopy(mut self, nocopy: bool) -> Self {
        self.config.nocopy = nocopy;
        self
    }

    /// Set the maximum container nesting depth
    pub fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.config.max_nesting_depth = depth;
        self
    }

    /// Set the decompressed size limit (in bytes)
    pub fn max_decompressed_size(mut self, size: usize) -> Self {
        self.config.max_decompressed_size = size;
        self
    }

    /// Compress request envelopes
    pub fn compression(mut self, compression: bool) -> Self {
        self.config.compression = compression;
        self
    }

    /// Set the number of idle scratch objects kept per pool
    pub fn pool_capacity(mut self, capacity: usize) -> Self {
        self.config.pool_capacity = capacity;
        self
    }

    pub fn build(self) -> CodecConfig {
        self.config
    }
}
