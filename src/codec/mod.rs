//! Codec Module
//!
//! Entry point for turning response buffers into elements and elements into
//! request buffers.
//!
//! ## Element Format
//! ```text
//! ┌──────────┬──────────────────────────────────────────────┐
//! │ Tag (1)  │ Payload (depends on tag, big-endian)         │
//! └──────────┴──────────────────────────────────────────────┘
//! ```
//! - Scalars: fixed-width value, strings as i32 length + UTF-8 bytes
//! - Property: key string + tagged scalar
//! - Vertex: i64 id + i32 type, or two strings; property list when tagged so
//! - Edge: label + two endpoints; reverse edges swap them on decode
//! - Path: labels List (ignored) + objects List
//! - List/Map/LinkedMap: i32 count + members
//!
//! A List whose first member starts with tag 40 holds `count` columnar
//! batches instead; their rows are flattened into the list.
//!
//! ## Scratch Objects
//! Columnar batches decode into pooled cursors and tables. Guards return
//! them on every exit path, reset, so a failed decode never leaks state
//! into the next call.

mod decoder;
mod encoder;
mod envelope;

pub use envelope::{ENVELOPE_HEADER_SIZE, MAGIC_PLAIN, MAGIC_SNAPPY};

use bytes::Bytes;
use tracing::debug;

use crate::bridge::{table_to_elements, BatchShape};
use crate::columnar::{decode_table_into, Table};
use crate::config::CodecConfig;
use crate::cursor::{BigEndianCursor, BigEndianWriter, LittleEndianCursor, ScratchPool};
use crate::element::Element;
use crate::error::Result;
use decoder::ElementDecoder;

/// Thread-safe codec; share one instance across callers
pub struct Codec {
    config: CodecConfig,
    cursors: ScratchPool<BigEndianCursor>,
    batch_cursors: ScratchPool<LittleEndianCursor>,
    tables: ScratchPool<Table>,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        let capacity = config.pool_capacity;
        Self {
            config,
            cursors: ScratchPool::new(capacity),
            batch_cursors: ScratchPool::new(capacity),
            tables: ScratchPool::new(capacity),
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn decoder(&self) -> ElementDecoder<'_> {
        ElementDecoder {
            config: &self.config,
            batch_cursors: &self.batch_cursors,
            tables: &self.tables,
        }
    }

    // =========================================================================
    // Decoding
    // =========================================================================

    /// Decode a full response: envelope, then one element
    pub fn decode_response(&self, buf: impl Into<Bytes>) -> Result<Element> {
        let buf = buf.into();
        debug!(len = buf.len(), "Decoding response");
        let payload = envelope::open(buf, self.config.max_decompressed_size).map_err(|e| {
            debug!(error = %e, "Rejected response envelope");
            e
        })?;
        self.decode_element(payload)
    }

    /// Decode one element from a bare payload (no envelope)
    ///
    /// Bytes left over after the element are ignored.
    pub fn decode_element(&self, payload: impl Into<Bytes>) -> Result<Element> {
        let mut cursor = self.cursors.acquire();
        cursor.reset_to(payload.into(), self.config.nocopy);

        let element = self.decoder().decode(&mut cursor).map_err(|e| {
            debug!(error = %e, pos = cursor.position(), "Rejected element payload");
            e
        })?;

        if cursor.remaining() > 0 {
            debug!(trailing = cursor.remaining(), "Ignoring trailing bytes after element");
        }
        Ok(element)
    }

    /// Decode a standalone columnar table and rebuild it as `shape`
    pub fn decode_batch(&self, shape: BatchShape, blob: impl Into<Bytes>) -> Result<Vec<Element>> {
        let mut cursor = self.batch_cursors.acquire();
        cursor.reset_to(blob.into(), self.config.nocopy);
        let mut table = self.tables.acquire();
        decode_table_into(&mut cursor, &mut table)?;
        table_to_elements(&table, shape)
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    /// Encode one element without an envelope
    pub fn encode_element(&self, element: &Element) -> Result<Bytes> {
        let mut w = BigEndianWriter::new();
        encoder::encode_element(&mut w, element)?;
        Ok(w.into_bytes())
    }

    /// Encode one element inside a request envelope
    pub fn encode_request(&self, element: &Element) -> Result<Bytes> {
        let payload = self.encode_element(element)?;
        envelope::seal(&payload, self.config.compression)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec")
            .field("config", &self.config)
            .field("idle_cursors", &self.cursors.idle())
            .field("idle_batch_cursors", &self.batch_cursors.idle())
            .field("idle_tables", &self.tables.idle())
            .finish()
    }
}
