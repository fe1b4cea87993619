//! Edge element

use super::{Property, Vertex};

/// Edge direction as carried by the wire tag
///
/// Only consulted while decoding: a reverse edge has its endpoints swapped
/// so that `out_v` is always the logical source. Double edges keep the
/// wire order, same as forward ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Reverse,
    Double,
}

/// A labelled edge between two vertices
#[derive(Debug, Clone)]
pub struct Edge {
    out_v: Vertex,
    in_v: Vertex,
    label: String,
    properties: Vec<Property>,
}

impl Edge {
    pub fn new(out_v: Vertex, in_v: Vertex, label: impl Into<String>) -> Self {
        Self {
            out_v,
            in_v,
            label: label.into(),
            properties: Vec::new(),
        }
    }

    /// Build from endpoints in wire order (`first`, `second`)
    pub fn with_direction(
        first: Vertex,
        second: Vertex,
        label: impl Into<String>,
        direction: Direction,
    ) -> Self {
        match direction {
            Direction::Reverse => Self::new(second, first, label),
            Direction::Forward | Direction::Double => Self::new(first, second, label),
        }
    }

    pub fn with_properties(mut self, properties: Vec<Property>) -> Self {
        self.properties = properties;
        self
    }

    pub(crate) fn push_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    pub fn out_v(&self) -> &Vertex {
        &self.out_v
    }

    pub fn in_v(&self) -> &Vertex {
        &self.in_v
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.key() == key)
    }
}
