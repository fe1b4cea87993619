//! Byte cursor
//!
//! Reads over an immutable `Bytes` buffer in a fixed byte order.

use std::marker::PhantomData;

use bytes::Bytes;

use crate::error::{GraphWireError, Result};
use super::{round_up8, BigEndian, ByteOrder, LittleEndian, Reusable};

/// Cursor over the big-endian element protocol
pub type BigEndianCursor = ByteCursor<BigEndian>;

/// Cursor over the little-endian columnar protocol
pub type LittleEndianCursor = ByteCursor<LittleEndian>;

/// Validate a length declared on the wire.
///
/// Negative lengths fail with `InvalidLength`.
pub fn checked_len(declared: i64) -> Result<usize> {
    usize::try_from(declared).map_err(|_| GraphWireError::InvalidLength(declared))
}

/// Bounded reader over a byte buffer
pub struct ByteCursor<E: ByteOrder> {
    /// Source buffer (ref-counted, never mutated)
    buf: Bytes,
    /// Read position
    pos: usize,
    /// Hand out views of `buf` instead of copies
    nocopy: bool,
    _order: PhantomData<E>,
}

impl<E: ByteOrder> ByteCursor<E> {
    /// Create a cursor positioned at the start of `buf`
    pub fn new(buf: Bytes, nocopy: bool) -> Self {
        Self {
            buf,
            pos: 0,
            nocopy,
            _order: PhantomData,
        }
    }

    /// Point a (pooled) cursor at a new buffer
    pub fn reset_to(&mut self, buf: Bytes, nocopy: bool) {
        self.buf = buf;
        self.pos = 0;
        self.nocopy = nocopy;
    }

    /// Current read position
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_nocopy(&self) -> bool {
        self.nocopy
    }

    /// The unread tail, borrowed from the cursor
    pub fn rest(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    /// Reserve the next `n` bytes, returning their start offset
    fn take(&mut self, n: usize) -> Result<usize> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(GraphWireError::TruncatedInput {
                needed: n,
                remaining,
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(start)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let start = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buf[start..start + N]);
        Ok(out)
    }

    // =========================================================================
    // Raw Reads
    // =========================================================================

    /// Next `n` bytes: a view of the source in no-copy mode, a copy otherwise
    pub fn next(&mut self, n: usize) -> Result<Bytes> {
        let start = self.take(n)?;
        if self.nocopy {
            Ok(self.buf.slice(start..start + n))
        } else {
            Ok(Bytes::copy_from_slice(&self.buf[start..start + n]))
        }
    }

    /// Next `n` bytes borrowed from the cursor, regardless of mode
    pub fn next_slice(&mut self, n: usize) -> Result<&[u8]> {
        let start = self.take(n)?;
        Ok(&self.buf[start..start + n])
    }

    /// Advance `n` bytes without reading them
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    /// Skip padding until the position is a multiple of 8
    pub fn align8(&mut self) -> Result<()> {
        let padding = round_up8(self.pos) - self.pos;
        self.skip(padding)
    }

    // =========================================================================
    // Typed Reads
    // =========================================================================

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.array::<1>()?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Any non-zero byte is `true`
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(E::u16_from(self.array()?))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(E::u32_from(self.array()?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(E::u64_from(self.array()?) as i64)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(E::u64_from(self.array()?)))
    }

    // =========================================================================
    // Lookahead
    // =========================================================================

    /// Next byte without advancing
    pub fn peek_u8(&self) -> Result<u8> {
        self.buf
            .get(self.pos)
            .copied()
            .ok_or(GraphWireError::TruncatedInput {
                needed: 1,
                remaining: 0,
            })
    }

    pub fn peek_i8(&self) -> Result<i8> {
        Ok(self.peek_u8()? as i8)
    }

    // =========================================================================
    // Length-prefixed Reads
    // =========================================================================

    /// Read a 4-byte length prefix
    ///
    /// The position does not move if the prefix is negative.
    pub fn read_len(&mut self) -> Result<usize> {
        let start = self.pos;
        let declared = self.read_i32()?;
        checked_len(declared as i64).map_err(|e| {
            self.pos = start;
            e
        })
    }

    /// Length-prefixed bytes; honours no-copy mode
    pub fn read_bytes(&mut self) -> Result<Bytes> {
        let start = self.pos;
        let len = self.read_len()?;
        self.next(len).map_err(|e| {
            self.pos = start;
            e
        })
    }

    /// Length-prefixed UTF-8 string, always copied out
    pub fn read_string(&mut self) -> Result<String> {
        let start = self.pos;
        let result = self.read_len().and_then(|len| {
            let raw = self.next_slice(len)?;
            Ok(std::str::from_utf8(raw)?.to_owned())
        });
        if result.is_err() {
            self.pos = start;
        }
        result
    }

    /// Skip a length-prefixed blob
    pub fn skip_bytes(&mut self) -> Result<()> {
        let start = self.pos;
        let len = self.read_len()?;
        self.skip(len).map_err(|e| {
            self.pos = start;
            e
        })
    }
}

impl<E: ByteOrder> Default for ByteCursor<E> {
    fn default() -> Self {
        Self::new(Bytes::new(), false)
    }
}

impl<E: ByteOrder> Reusable for ByteCursor<E> {
    /// Drop the reference to the source buffer so it can be freed
    fn reset(&mut self) {
        self.buf = Bytes::new();
        self.pos = 0;
        self.nocopy = false;
    }
}

impl<E: ByteOrder> std::fmt::Debug for ByteCursor<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteCursor")
            .field("order", &E::NAME)
            .field("len", &self.buf.len())
            .field("pos", &self.pos)
            .field("nocopy", &self.nocopy)
            .finish()
    }
}
