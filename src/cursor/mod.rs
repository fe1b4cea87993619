//! Cursor Module
//!
//! Bounded readers and growable writers over byte buffers, in either byte
//! order, plus the scratch pool the decoders draw their cursors from.
//!
//! ## Responsibilities
//! - Fixed-width integer/float reads in the cursor's declared byte order
//! - Length-prefixed bytes/strings (4-byte length in the same byte order)
//! - One-token lookahead (`peek_*`) for list decoding
//! - Position only advances when a read succeeds
//!
//! ## No-copy Mode
//! Buffers are `bytes::Bytes`. In no-copy mode `next(n)` hands out a
//! ref-counted slice of the source buffer, so a view keeps its source alive
//! instead of dangling. In copying mode the same call returns a fresh buffer.
//!
//! ## Length-prefixed Layout
//! ```text
//! ┌──────────┬─────────────────────────────┐
//! │ Len (4)  │         Payload             │
//! └──────────┴─────────────────────────────┘
//! ```

mod reader;
mod writer;
mod pool;

pub use reader::{checked_len, ByteCursor, BigEndianCursor, LittleEndianCursor};
pub use writer::{ByteWriter, BigEndianWriter, LittleEndianWriter};
pub use pool::{Reusable, Scratch, ScratchPool};

use bytes::{BufMut, BytesMut};

/// Round `size` up to the next multiple of 8
pub fn round_up8(size: usize) -> usize {
    (size + 7) & !7
}

/// Byte order of a cursor or writer
///
/// Implemented by the zero-sized markers [`BigEndian`] and [`LittleEndian`].
pub trait ByteOrder: Send + Sync + 'static {
    /// Human-readable name, used in logs
    const NAME: &'static str;

    fn u16_from(bytes: [u8; 2]) -> u16;
    fn u32_from(bytes: [u8; 4]) -> u32;
    fn u64_from(bytes: [u8; 8]) -> u64;

    fn put_u16(buf: &mut BytesMut, value: u16);
    fn put_u32(buf: &mut BytesMut, value: u32);
    fn put_u64(buf: &mut BytesMut, value: u64);
}

/// Network byte order, used by the element protocol
#[derive(Debug, Clone, Copy, Default)]
pub struct BigEndian;

/// Used by the columnar sub-protocol
#[derive(Debug, Clone, Copy, Default)]
pub struct LittleEndian;

impl ByteOrder for BigEndian {
    const NAME: &'static str = "big-endian";

    fn u16_from(bytes: [u8; 2]) -> u16 {
        u16::from_be_bytes(bytes)
    }

    fn u32_from(bytes: [u8; 4]) -> u32 {
        u32::from_be_bytes(bytes)
    }

    fn u64_from(bytes: [u8; 8]) -> u64 {
        u64::from_be_bytes(bytes)
    }

    fn put_u16(buf: &mut BytesMut, value: u16) {
        buf.put_u16(value);
    }

    fn put_u32(buf: &mut BytesMut, value: u32) {
        buf.put_u32(value);
    }

    fn put_u64(buf: &mut BytesMut, value: u64) {
        buf.put_u64(value);
    }
}

impl ByteOrder for LittleEndian {
    const NAME: &'static str = "little-endian";

    fn u16_from(bytes: [u8; 2]) -> u16 {
        u16::from_le_bytes(bytes)
    }

    fn u32_from(bytes: [u8; 4]) -> u32 {
        u32::from_le_bytes(bytes)
    }

    fn u64_from(bytes: [u8; 8]) -> u64 {
        u64::from_le_bytes(bytes)
    }

    fn put_u16(buf: &mut BytesMut, value: u16) {
        buf.put_u16_le(value);
    }

    fn put_u32(buf: &mut BytesMut, value: u32) {
        buf.put_u32_le(value);
    }

    fn put_u64(buf: &mut BytesMut, value: u64) {
        buf.put_u64_le(value);
    }
}
