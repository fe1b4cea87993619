//! Element Module
//!
//! The value tree produced by decoding a query result.
//!
//! ## Variants
//! - Scalars: `Bool`, `Int32`, `Int64`, `Float32`, `Float64`, `String`
//! - Graph objects: `Property`, `Vertex`, `Edge`
//! - Containers: `Path`, `List`, `Map`, `LinkedMap`
//!
//! Every variant supports strict and loose equality, a canonical sort key,
//! a human-readable rendering (`Display`) and binding into caller types.
//! Decoded elements own all their data; nothing borrows the response
//! buffer.

mod tag;
mod property;
mod vertex;
mod edge;
mod map;
mod compare;
mod display;
mod bind;

pub use tag::CoreDataType;
pub use property::{Property, PropertyValue};
pub use vertex::{Vertex, VertexId};
pub use edge::{Direction, Edge};
pub use map::{ElementMap, LinkedMap};
pub use bind::{Bindable, RecordBinding};

/// A decoded (or to-be-encoded) value
#[derive(Debug, Clone)]
pub enum Element {
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
    Property(Property),
    Vertex(Vertex),
    Edge(Edge),
    Path(Vec<Element>),
    List(Vec<Element>),
    Map(ElementMap),
    LinkedMap(LinkedMap),
}

impl Element {
    /// Variant name, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Element::Bool(_) => "Bool",
            Element::Int32(_) => "Int32",
            Element::Int64(_) => "Int64",
            Element::Float32(_) => "Float32",
            Element::Float64(_) => "Float64",
            Element::String(_) => "String",
            Element::Property(_) => "Property",
            Element::Vertex(_) => "Vertex",
            Element::Edge(_) => "Edge",
            Element::Path(_) => "Path",
            Element::List(_) => "List",
            Element::Map(_) => "Map",
            Element::LinkedMap(_) => "LinkedMap",
        }
    }

    /// Whether this is a container holding nothing
    pub fn is_empty_container(&self) -> bool {
        match self {
            Element::Path(items) | Element::List(items) => items.is_empty(),
            Element::Map(map) => map.is_empty(),
            Element::LinkedMap(map) => map.is_empty(),
            _ => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Element::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer value, widening `Int32`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Element::Int32(v) => Some(*v as i64),
            Element::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Floating-point value, widening `Float32`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Element::Float32(v) => Some(*v as f64),
            Element::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_property(&self) -> Option<&Property> {
        match self {
            Element::Property(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_vertex(&self) -> Option<&Vertex> {
        match self {
            Element::Vertex(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Element::Edge(e) => Some(e),
            _ => None,
        }
    }

    /// Members of a List or Path
    pub fn as_slice(&self) -> Option<&[Element]> {
        match self {
            Element::List(items) | Element::Path(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ElementMap> {
        match self {
            Element::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_linked_map(&self) -> Option<&LinkedMap> {
        match self {
            Element::LinkedMap(m) => Some(m),
            _ => None,
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Element {
    fn from(v: bool) -> Self {
        Element::Bool(v)
    }
}

impl From<i32> for Element {
    fn from(v: i32) -> Self {
        Element::Int32(v)
    }
}

impl From<i64> for Element {
    fn from(v: i64) -> Self {
        Element::Int64(v)
    }
}

impl From<f32> for Element {
    fn from(v: f32) -> Self {
        Element::Float32(v)
    }
}

impl From<f64> for Element {
    fn from(v: f64) -> Self {
        Element::Float64(v)
    }
}

impl From<String> for Element {
    fn from(v: String) -> Self {
        Element::String(v)
    }
}

impl From<&str> for Element {
    fn from(v: &str) -> Self {
        Element::String(v.to_owned())
    }
}

impl From<PropertyValue> for Element {
    fn from(v: PropertyValue) -> Self {
        match v {
            PropertyValue::Bool(v) => Element::Bool(v),
            PropertyValue::Int32(v) => Element::Int32(v),
            PropertyValue::Int64(v) => Element::Int64(v),
            PropertyValue::Float32(v) => Element::Float32(v),
            PropertyValue::Float64(v) => Element::Float64(v),
            PropertyValue::String(v) => Element::String(v),
        }
    }
}

impl From<Property> for Element {
    fn from(v: Property) -> Self {
        Element::Property(v)
    }
}

impl From<Vertex> for Element {
    fn from(v: Vertex) -> Self {
        Element::Vertex(v)
    }
}

impl From<Edge> for Element {
    fn from(v: Edge) -> Self {
        Element::Edge(v)
    }
}

impl From<ElementMap> for Element {
    fn from(v: ElementMap) -> Self {
        Element::Map(v)
    }
}

impl From<LinkedMap> for Element {
    fn from(v: LinkedMap) -> Self {
        Element::LinkedMap(v)
    }
}

impl From<Vec<Element>> for Element {
    fn from(v: Vec<Element>) -> Self {
        Element::List(v)
    }
}
