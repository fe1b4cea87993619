//! Columnar batch decoder
//!
//! Strictly sequential state machine over a little-endian cursor:
//! header → schema → padding → columns. No backtracking.

use bytes::Bytes;
use tracing::trace;

use crate::cursor::{checked_len, round_up8, LittleEndianCursor};
use crate::error::{GraphWireError, Result};
use super::{Column, Field, NullBitmap, Table, ValueType, COLUMNAR_MAGIC, COLUMNAR_VERSION_V1};

/// Decode a batch into a freshly allocated table
pub fn decode_table(buf: Bytes, nocopy: bool) -> Result<Table> {
    let mut cursor = LittleEndianCursor::new(buf, nocopy);
    let mut table = Table::new();
    decode_table_into(&mut cursor, &mut table)?;
    Ok(table)
}

/// Decode a batch from `cursor` into an empty (reset) `table`
///
/// On error the table may be partially filled; pooled tables are reset on
/// release, so callers never observe it.
pub fn decode_table_into(cursor: &mut LittleEndianCursor, table: &mut Table) -> Result<()> {
    if cfg!(target_endian = "big") {
        return Err(GraphWireError::EndiannessUnsupported);
    }

    // =========================================================================
    // Header
    // =========================================================================
    let magic = cursor.read_u16()?;
    if magic != COLUMNAR_MAGIC {
        return Err(GraphWireError::UnknownProtocol(magic));
    }

    let version = cursor.read_u16()?;
    if version != COLUMNAR_VERSION_V1 {
        return Err(GraphWireError::UnknownColumnarVersion(version));
    }

    let declared_rows = cursor.read_i32()?;
    if declared_rows < 0 {
        return Err(GraphWireError::InvalidRowCount(declared_rows));
    }
    let rows = declared_rows as usize;
    if rows == 0 {
        trace!("Columnar batch is empty");
        return Ok(());
    }

    // =========================================================================
    // Schema
    // =========================================================================
    let field_count = cursor.read_i32()?;
    if field_count <= 0 {
        return Err(GraphWireError::InvalidFieldLength(field_count));
    }

    for _ in 0..field_count {
        let value_type = ValueType::try_from(cursor.read_i32()?)?;
        let name = cursor.read_string()?;
        table.schema_mut().push(Field::new(name, value_type))?;

        let meta_len = cursor.read_i32()?;
        if meta_len != 0 {
            return Err(GraphWireError::UnsupportedMetadata(meta_len));
        }
    }

    let schema_meta_len = cursor.read_i32()?;
    if schema_meta_len != 0 {
        return Err(GraphWireError::UnsupportedMetadata(schema_meta_len));
    }

    cursor.align8()?;

    trace!(rows, fields = field_count, "Decoding columnar batch");

    // =========================================================================
    // Columns
    // =========================================================================
    for idx in 0..field_count as usize {
        let value_type = match table.schema().field(idx) {
            Some(field) => field.value_type,
            None => {
                return Err(GraphWireError::RowCountMismatch {
                    expected: field_count as usize,
                    found: idx,
                })
            }
        };
        let column = decode_column(cursor, value_type, rows)?;
        table.push_column(column)?;
    }

    Ok(())
}

/// Read one column: null bitmap, then slots or offsets + payload
fn decode_column(cursor: &mut LittleEndianCursor, value_type: ValueType, rows: usize) -> Result<Column> {
    let bitmap_len = round_up8((rows + 7) / 8);
    let nulls = NullBitmap::new(rows, cursor.next(bitmap_len)?);

    match value_type.slot_size() {
        Some(slot_size) => {
            let data_len = byte_len(slot_size, rows)?;
            let mut data = cursor.next(round_up8(data_len))?;
            data.truncate(data_len);
            Ok(Column::fixed(value_type, rows, nulls, data))
        }
        None => {
            let offsets_len = byte_len(4, rows + 1)?;
            let mut offsets = cursor.next(round_up8(offsets_len))?;
            offsets.truncate(offsets_len);
            let payload_len = validate_offsets(&offsets)?;
            let mut data = cursor.next(round_up8(payload_len))?;
            data.truncate(payload_len);
            Ok(Column::variable(rows, nulls, offsets, data))
        }
    }
}

fn byte_len(slot_size: usize, count: usize) -> Result<usize> {
    slot_size
        .checked_mul(count)
        .ok_or(GraphWireError::InvalidLength(count as i64))
}

/// Offsets must be non-negative and non-decreasing; returns the last one
fn validate_offsets(raw: &[u8]) -> Result<usize> {
    let mut previous = 0usize;
    for chunk in raw.chunks_exact(4) {
        let declared = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let offset = checked_len(declared as i64)?;
        if offset < previous {
            return Err(GraphWireError::InvalidLength(declared as i64));
        }
        previous = offset;
    }
    Ok(previous)
}
