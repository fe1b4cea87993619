//! Columnar table
//!
//! A schema plus one column per field. Every column carries the same row
//! count; `push` refuses a column that disagrees.

use smallvec::SmallVec;

use crate::cursor::Reusable;
use crate::error::{GraphWireError, Result};
use super::{Column, Field, Schema, INLINE_FIELDS};

/// Decoded columnar batch; reusable through the scratch pool
#[derive(Debug, Default)]
pub struct Table {
    schema: Schema,
    columns: SmallVec<[Column; INLINE_FIELDS]>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Shared row count (0 for an empty table)
    pub fn row_count(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn field_count(&self) -> usize {
        self.schema.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, idx: usize) -> Option<&Column> {
        self.columns.get(idx)
    }

    /// Column of the field called `name`
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.schema
            .field_index(name)
            .and_then(|idx| self.columns.get(idx))
    }

    /// Fields paired with their columns, in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&Field, &Column)> {
        self.schema.fields().zip(self.columns.iter())
    }

    pub(crate) fn schema_mut(&mut self) -> &mut Schema {
        &mut self.schema
    }

    /// Attach the column for the next field still lacking one
    pub(crate) fn push_column(&mut self, column: Column) -> Result<()> {
        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(GraphWireError::RowCountMismatch {
                    expected: first.len(),
                    found: column.len(),
                });
            }
        }
        if self.columns.len() >= self.schema.len() {
            return Err(GraphWireError::RowCountMismatch {
                expected: self.schema.len(),
                found: self.columns.len() + 1,
            });
        }
        self.columns.push(column);
        Ok(())
    }
}

impl Reusable for Table {
    /// Clears schema and columns and releases spilled storage, dropping
    /// every reference into the previous response buffer
    fn reset(&mut self) {
        self.schema.clear();
        self.columns.clear();
        self.columns.shrink_to_fit();
    }
}
