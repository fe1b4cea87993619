//! Columnar schema
//!
//! Ordered list of named, typed fields with unique names.

use smallvec::SmallVec;

use crate::error::{GraphWireError, Result};
use super::INLINE_FIELDS;

/// Value type of a column, as carried in the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ValueType {
    Bool = 1,
    Int32 = 2,
    Int64 = 3,
    Float = 4,
    Double = 5,
    String = 6,
}

impl ValueType {
    /// Slot width of fixed-size types; `None` for variable-size types
    pub fn slot_size(self) -> Option<usize> {
        match self {
            ValueType::Bool => Some(1),
            ValueType::Int32 | ValueType::Float => Some(4),
            ValueType::Int64 | ValueType::Double => Some(8),
            ValueType::String => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueType::Bool => "BOOL",
            ValueType::Int32 => "INT32",
            ValueType::Int64 => "INT64",
            ValueType::Float => "FLOAT",
            ValueType::Double => "DOUBLE",
            ValueType::String => "STRING",
        }
    }
}

impl TryFrom<i32> for ValueType {
    type Error = GraphWireError;

    fn try_from(tag: i32) -> Result<Self> {
        match tag {
            1 => Ok(ValueType::Bool),
            2 => Ok(ValueType::Int32),
            3 => Ok(ValueType::Int64),
            4 => Ok(ValueType::Float),
            5 => Ok(ValueType::Double),
            6 => Ok(ValueType::String),
            _ => Err(GraphWireError::UnknownColumnType(tag)),
        }
    }
}

/// A named column in the schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value_type: ValueType,
}

impl Field {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
        }
    }
}

/// Ordered field list; the first `INLINE_FIELDS` live inline
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: SmallVec<[Field; INLINE_FIELDS]>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Position of the field called `name`
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn field(&self, idx: usize) -> Option<&Field> {
        self.fields.get(idx)
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Whether the field list has spilled past the inline capacity
    pub fn spilled(&self) -> bool {
        self.fields.spilled()
    }

    /// Append a field, rejecting duplicate names
    pub fn push(&mut self, field: Field) -> Result<()> {
        if self.field_index(&field.name).is_some() {
            return Err(GraphWireError::FieldConflict(field.name));
        }
        self.fields.push(field);
        Ok(())
    }

    /// Remove every field and give back overflow storage
    pub(crate) fn clear(&mut self) {
        self.fields.clear();
        self.fields.shrink_to_fit();
    }
}
