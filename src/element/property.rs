//! Property element
//!
//! A key plus a scalar value. Property values are restricted to the six
//! scalar kinds; nothing else can appear on the wire after a property key.

use super::Element;

/// Scalar payload of a property
///
/// Equality is exact: floats compare bit for bit.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
}

impl PropertyValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Int32(_) => "int32",
            PropertyValue::Int64(_) => "int64",
            PropertyValue::Float32(_) => "float32",
            PropertyValue::Float64(_) => "float64",
            PropertyValue::String(_) => "string",
        }
    }

    /// The same value as a standalone scalar element
    pub fn to_element(&self) -> Element {
        match self {
            PropertyValue::Bool(v) => Element::Bool(*v),
            PropertyValue::Int32(v) => Element::Int32(*v),
            PropertyValue::Int64(v) => Element::Int64(*v),
            PropertyValue::Float32(v) => Element::Float32(*v),
            PropertyValue::Float64(v) => Element::Float64(*v),
            PropertyValue::String(v) => Element::String(v.clone()),
        }
    }
}

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropertyValue::Bool(a), PropertyValue::Bool(b)) => a == b,
            (PropertyValue::Int32(a), PropertyValue::Int32(b)) => a == b,
            (PropertyValue::Int64(a), PropertyValue::Int64(b)) => a == b,
            (PropertyValue::Float32(a), PropertyValue::Float32(b)) => a.to_bits() == b.to_bits(),
            (PropertyValue::Float64(a), PropertyValue::Float64(b)) => a.to_bits() == b.to_bits(),
            (PropertyValue::String(a), PropertyValue::String(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Int32(v)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Int64(v)
    }
}

impl From<f32> for PropertyValue {
    fn from(v: f32) -> Self {
        PropertyValue::Float32(v)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Float64(v)
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::String(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::String(v.to_owned())
    }
}

/// Key/value pair attached to vertices and edges, or returned on its own
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    key: String,
    value: PropertyValue,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    pub fn into_parts(self) -> (String, PropertyValue) {
        (self.key, self.value)
    }
}
