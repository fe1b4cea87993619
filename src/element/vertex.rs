//! Vertex element
//!
//! A vertex is identified either by a numeric `(id, type)` pair or by a
//! pair of strings. The form is fixed at construction and drives which
//! wire tag the vertex is encoded with.

use super::Property;

/// Vertex identity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VertexId {
    /// 64-bit id and 32-bit type
    Numeric { id: i64, vtype: i32 },
    /// String id and string type
    Named { id: String, vtype: String },
}

impl VertexId {
    pub fn is_named(&self) -> bool {
        matches!(self, VertexId::Named { .. })
    }
}

/// A graph vertex with its (possibly empty) property list
#[derive(Debug, Clone)]
pub struct Vertex {
    identity: VertexId,
    properties: Vec<Property>,
}

impl Vertex {
    /// Numeric-id vertex without properties
    pub fn new(id: i64, vtype: i32) -> Self {
        Self {
            identity: VertexId::Numeric { id, vtype },
            properties: Vec::new(),
        }
    }

    /// String-id vertex without properties
    pub fn named(id: impl Into<String>, vtype: impl Into<String>) -> Self {
        Self {
            identity: VertexId::Named {
                id: id.into(),
                vtype: vtype.into(),
            },
            properties: Vec::new(),
        }
    }

    pub fn with_properties(mut self, properties: Vec<Property>) -> Self {
        self.properties = properties;
        self
    }

    pub(crate) fn push_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    pub fn identity(&self) -> &VertexId {
        &self.identity
    }

    /// Numeric id; `None` for string-id vertices
    pub fn id(&self) -> Option<i64> {
        match self.identity {
            VertexId::Numeric { id, .. } => Some(id),
            VertexId::Named { .. } => None,
        }
    }

    /// Numeric type; `None` for string-id vertices
    pub fn vtype(&self) -> Option<i32> {
        match self.identity {
            VertexId::Numeric { vtype, .. } => Some(vtype),
            VertexId::Named { .. } => None,
        }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.key() == key)
    }

    /// Short form, e.g. `vertex(1, 2)`
    pub fn simple_string(&self) -> String {
        match &self.identity {
            VertexId::Numeric { id, vtype } => format!("vertex({}, {})", id, vtype),
            VertexId::Named { id, vtype } => format!("vertex({:?}, {:?})", id, vtype),
        }
    }
}
