//! Columnar batch writer
//!
//! Produces the V1 batch layout from owned column values. Used to build
//! request fixtures and to exercise the decoder end to end.

use bytes::Bytes;

use crate::cursor::{round_up8, LittleEndianWriter};
use crate::error::{GraphWireError, Result};
use super::{ValueType, COLUMNAR_MAGIC, COLUMNAR_VERSION_V1};

/// Values for one column; `None` marks a null row
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Bool(Vec<Option<bool>>),
    Int32(Vec<Option<i32>>),
    Int64(Vec<Option<i64>>),
    Float(Vec<Option<f32>>),
    Double(Vec<Option<f64>>),
    String(Vec<Option<String>>),
}

impl ColumnValues {
    pub fn value_type(&self) -> ValueType {
        match self {
            ColumnValues::Bool(_) => ValueType::Bool,
            ColumnValues::Int32(_) => ValueType::Int32,
            ColumnValues::Int64(_) => ValueType::Int64,
            ColumnValues::Float(_) => ValueType::Float,
            ColumnValues::Double(_) => ValueType::Double,
            ColumnValues::String(_) => ValueType::String,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Bool(v) => v.len(),
            ColumnValues::Int32(v) => v.len(),
            ColumnValues::Int64(v) => v.len(),
            ColumnValues::Float(v) => v.len(),
            ColumnValues::Double(v) => v.len(),
            ColumnValues::String(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_present(&self, row: usize) -> bool {
        match self {
            ColumnValues::Bool(v) => v[row].is_some(),
            ColumnValues::Int32(v) => v[row].is_some(),
            ColumnValues::Int64(v) => v[row].is_some(),
            ColumnValues::Float(v) => v[row].is_some(),
            ColumnValues::Double(v) => v[row].is_some(),
            ColumnValues::String(v) => v[row].is_some(),
        }
    }
}

/// Builder for one columnar batch
///
/// Field names are written as given; the decoder is the one that rejects
/// duplicates.
#[derive(Debug, Clone)]
pub struct TableWriter {
    rows: usize,
    columns: Vec<(String, ColumnValues)>,
}

impl TableWriter {
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            columns: Vec::new(),
        }
    }

    pub fn column(mut self, name: impl Into<String>, values: ColumnValues) -> Self {
        self.columns.push((name.into(), values));
        self
    }

    /// Serialize the batch
    pub fn finish(self) -> Result<Bytes> {
        let rows = i32::try_from(self.rows)
            .map_err(|_| GraphWireError::InvalidLength(self.rows as i64))?;

        let mut w = LittleEndianWriter::new();
        w.write_u16(COLUMNAR_MAGIC);
        w.write_u16(COLUMNAR_VERSION_V1);
        w.write_i32(rows);
        if self.rows == 0 {
            return Ok(w.into_bytes());
        }

        for (_, values) in &self.columns {
            if values.len() != self.rows {
                return Err(GraphWireError::RowCountMismatch {
                    expected: self.rows,
                    found: values.len(),
                });
            }
        }

        // -------------------------------------------------------------------------
        // Schema
        // -------------------------------------------------------------------------
        w.write_i32(self.columns.len() as i32);
        for (name, values) in &self.columns {
            w.write_i32(values.value_type() as i32);
            w.write_string(name)?;
            w.write_i32(0);
        }
        w.write_i32(0);
        w.pad8();

        // -------------------------------------------------------------------------
        // Columns
        // -------------------------------------------------------------------------
        for (_, values) in &self.columns {
            write_bitmap(&mut w, values, self.rows);
            write_data(&mut w, values)?;
        }

        Ok(w.into_bytes())
    }
}

fn write_bitmap(w: &mut LittleEndianWriter, values: &ColumnValues, rows: usize) {
    let mut bitmap = vec![0u8; round_up8((rows + 7) / 8)];
    for row in 0..rows {
        if values.is_present(row) {
            bitmap[row / 8] |= 1 << (row & 7);
        }
    }
    w.write_raw(&bitmap);
}

fn write_data(w: &mut LittleEndianWriter, values: &ColumnValues) -> Result<()> {
    match values {
        ColumnValues::Bool(v) => v.iter().for_each(|x| w.write_bool(x.unwrap_or(false))),
        ColumnValues::Int32(v) => v.iter().for_each(|x| w.write_i32(x.unwrap_or(0))),
        ColumnValues::Int64(v) => v.iter().for_each(|x| w.write_i64(x.unwrap_or(0))),
        ColumnValues::Float(v) => v.iter().for_each(|x| w.write_f32(x.unwrap_or(0.0))),
        ColumnValues::Double(v) => v.iter().for_each(|x| w.write_f64(x.unwrap_or(0.0))),
        ColumnValues::String(v) => {
            let mut offset = 0usize;
            w.write_i32(0);
            for s in v {
                offset += s.as_deref().map(str::len).unwrap_or(0);
                let declared = i32::try_from(offset)
                    .map_err(|_| GraphWireError::InvalidLength(offset as i64))?;
                w.write_i32(declared);
            }
            w.pad8();
            for s in v.iter().flatten() {
                w.write_raw(s.as_bytes());
            }
        }
    }
    w.pad8();
    Ok(())
}
