//! Response/request envelope
//!
//! ```text
//! ┌────────────┬─────────────────────────────────────┐
//! │ Magic (2)  │ Element payload (plain or snappy)   │
//! └────────────┴─────────────────────────────────────┘
//! ```
//!
//! The magic is big-endian. Snappy payloads use the raw (block) format.

use bytes::Bytes;
use tracing::{debug, warn};

use crate::cursor::BigEndianWriter;
use crate::error::{GraphWireError, Result};

/// Uncompressed element payload follows
pub const MAGIC_PLAIN: u16 = 0x0101;

/// Snappy-compressed element payload follows
pub const MAGIC_SNAPPY: u16 = 0x0102;

/// Envelope header size
pub const ENVELOPE_HEADER_SIZE: usize = 2;

/// Strip the envelope, decompressing if needed
pub fn open(buf: Bytes, max_decompressed_size: usize) -> Result<Bytes> {
    if buf.len() < ENVELOPE_HEADER_SIZE {
        return Err(GraphWireError::TruncatedInput {
            needed: ENVELOPE_HEADER_SIZE,
            remaining: buf.len(),
        });
    }

    let magic = u16::from_be_bytes([buf[0], buf[1]]);
    let body = buf.slice(ENVELOPE_HEADER_SIZE..);
    match magic {
        MAGIC_PLAIN => {
            debug!(len = body.len(), "Plain response envelope");
            Ok(body)
        }
        MAGIC_SNAPPY => decompress(&body, max_decompressed_size),
        other => Err(GraphWireError::UnknownMagicNumber(other)),
    }
}

fn decompress(body: &[u8], limit: usize) -> Result<Bytes> {
    let len = snap::raw::decompress_len(body).map_err(|e| {
        warn!(error = %e, "Invalid snappy header");
        GraphWireError::DecompressionFailed(e.to_string())
    })?;
    if len > limit {
        return Err(GraphWireError::PayloadTooLarge { len, limit });
    }

    let out = snap::raw::Decoder::new().decompress_vec(body).map_err(|e| {
        warn!(error = %e, "Snappy decompression failed");
        GraphWireError::DecompressionFailed(e.to_string())
    })?;
    debug!(compressed = body.len(), len = out.len(), "Snappy response envelope");
    Ok(Bytes::from(out))
}

/// Wrap an encoded element payload in an envelope
pub fn seal(payload: &[u8], compression: bool) -> Result<Bytes> {
    if !compression {
        let mut w = BigEndianWriter::with_capacity(ENVELOPE_HEADER_SIZE + payload.len());
        w.write_u16(MAGIC_PLAIN);
        w.write_raw(payload);
        return Ok(w.into_bytes());
    }

    let compressed = snap::raw::Encoder::new()
        .compress_vec(payload)
        .map_err(|e| GraphWireError::CompressionFailed(e.to_string()))?;
    let mut w = BigEndianWriter::with_capacity(ENVELOPE_HEADER_SIZE + compressed.len());
    w.write_u16(MAGIC_SNAPPY);
    w.write_raw(&compressed);
    Ok(w.into_bytes())
}
