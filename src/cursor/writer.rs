//! Byte writer
//!
//! Growable output buffer in a fixed byte order.

use std::marker::PhantomData;

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{GraphWireError, Result};
use super::{round_up8, BigEndian, ByteOrder, LittleEndian};

/// Writer for the big-endian element protocol
pub type BigEndianWriter = ByteWriter<BigEndian>;

/// Writer for the little-endian columnar protocol
pub type LittleEndianWriter = ByteWriter<LittleEndian>;

/// Append-only byte writer
pub struct ByteWriter<E: ByteOrder> {
    buf: BytesMut,
    _order: PhantomData<E>,
}

impl<E: ByteOrder> ByteWriter<E> {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            _order: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes written so far
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Discard everything written, keeping the allocation
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Freeze into an immutable buffer
    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    pub fn write_i8(&mut self, value: i8) {
        self.buf.put_i8(value);
    }

    pub fn write_bool(&mut self, value: bool) {
        self.buf.put_u8(value as u8);
    }

    pub fn write_u16(&mut self, value: u16) {
        E::put_u16(&mut self.buf, value);
    }

    pub fn write_i16(&mut self, value: i16) {
        E::put_u16(&mut self.buf, value as u16);
    }

    pub fn write_i32(&mut self, value: i32) {
        E::put_u32(&mut self.buf, value as u32);
    }

    pub fn write_i64(&mut self, value: i64) {
        E::put_u64(&mut self.buf, value as u64);
    }

    pub fn write_f32(&mut self, value: f32) {
        E::put_u32(&mut self.buf, value.to_bits());
    }

    pub fn write_f64(&mut self, value: f64) {
        E::put_u64(&mut self.buf, value.to_bits());
    }

    /// Raw bytes, no length prefix
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    /// Write a 4-byte length; fails past `i32::MAX`
    pub fn write_len(&mut self, len: usize) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| GraphWireError::InvalidLength(len as i64))?;
        self.write_i32(len);
        Ok(())
    }

    /// Length-prefixed bytes
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_len(bytes.len())?;
        self.buf.put_slice(bytes);
        Ok(())
    }

    /// Length-prefixed UTF-8 string
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_bytes(value.as_bytes())
    }

    /// Zero-fill until the length is a multiple of 8
    pub fn pad8(&mut self) {
        let padding = round_up8(self.buf.len()) - self.buf.len();
        self.buf.put_bytes(0, padding);
    }
}

impl<E: ByteOrder> Default for ByteWriter<E> {
    fn default() -> Self {
        Self::new()
    }
}
