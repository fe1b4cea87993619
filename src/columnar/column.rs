//! Column storage
//!
//! One column of a decoded batch: a null bitmap plus either fixed-width
//! slots or an offset table over a concatenated payload. All buffers are
//! `Bytes`, so in no-copy mode they are views into the response buffer.

use bytes::Bytes;

use crate::error::Result;
use super::ValueType;

/// One bit per row, 0 = null, padded to a multiple of 8 bytes
#[derive(Debug, Clone, Default)]
pub struct NullBitmap {
    rows: usize,
    bytes: Bytes,
}

impl NullBitmap {
    pub(crate) fn new(rows: usize, bytes: Bytes) -> Self {
        Self { rows, bytes }
    }

    /// Rows past the end of the column count as null
    pub fn is_null(&self, row: usize) -> bool {
        if row >= self.rows {
            return true;
        }
        match self.bytes.get(row / 8) {
            Some(byte) => byte & (1 << (row & 7)) == 0,
            None => true,
        }
    }

    pub fn null_count(&self) -> usize {
        (0..self.rows).filter(|&row| self.is_null(row)).count()
    }
}

/// A decoded column
///
/// Typed getters index straight into the slot data; they panic if `row`
/// is out of range, like slice indexing.
#[derive(Debug, Clone)]
pub struct Column {
    value_type: ValueType,
    rows: usize,
    nulls: NullBitmap,
    /// `rows + 1` little-endian i32 offsets; empty for fixed-size columns
    offsets: Bytes,
    data: Bytes,
}

impl Column {
    pub(crate) fn fixed(value_type: ValueType, rows: usize, nulls: NullBitmap, data: Bytes) -> Self {
        Self {
            value_type,
            rows,
            nulls,
            offsets: Bytes::new(),
            data,
        }
    }

    pub(crate) fn variable(rows: usize, nulls: NullBitmap, offsets: Bytes, data: Bytes) -> Self {
        Self {
            value_type: ValueType::String,
            rows,
            nulls,
            offsets,
            data,
        }
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn null_bitmap(&self) -> &NullBitmap {
        &self.nulls
    }

    pub fn is_null(&self, row: usize) -> bool {
        self.nulls.is_null(row)
    }

    fn slot<const N: usize>(&self, row: usize) -> [u8; N] {
        debug_assert_eq!(self.value_type.slot_size(), Some(N));
        let start = row * N;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[start..start + N]);
        out
    }

    pub fn get_bool(&self, row: usize) -> bool {
        self.data[row] != 0
    }

    pub fn get_int32(&self, row: usize) -> i32 {
        i32::from_le_bytes(self.slot(row))
    }

    pub fn get_int64(&self, row: usize) -> i64 {
        i64::from_le_bytes(self.slot(row))
    }

    pub fn get_float32(&self, row: usize) -> f32 {
        f32::from_le_bytes(self.slot(row))
    }

    pub fn get_float64(&self, row: usize) -> f64 {
        f64::from_le_bytes(self.slot(row))
    }

    /// Offset `idx` of a string column
    pub(crate) fn offset(&self, idx: usize) -> usize {
        let start = idx * 4;
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&self.offsets[start..start + 4]);
        // Offsets are checked non-negative when the column is decoded.
        i32::from_le_bytes(raw) as usize
    }

    /// Raw payload of row `row` in a string column
    pub fn get_bytes(&self, row: usize) -> &[u8] {
        &self.data[self.offset(row)..self.offset(row + 1)]
    }

    /// Row `row` of a string column, borrowed from the column buffer
    pub fn get_str(&self, row: usize) -> Result<&str> {
        Ok(std::str::from_utf8(self.get_bytes(row))?)
    }
}
