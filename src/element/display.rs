//! Human-readable rendering

use std::fmt;

use super::{Edge, Element, Property, PropertyValue, Vertex, VertexId};

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Bool(true) => f.write_str("True"),
            Element::Bool(false) => f.write_str("False"),
            Element::Int32(v) => write!(f, "{}", v),
            Element::Int64(v) => write!(f, "{}", v),
            Element::Float32(v) => write!(f, "{}", v),
            Element::Float64(v) => write!(f, "{}", v),
            Element::String(v) => f.write_str(v),
            Element::Property(p) => write!(f, "{}", p),
            Element::Vertex(v) => write!(f, "{}", v),
            Element::Edge(e) => write!(f, "{}", e),
            Element::Path(items) => {
                f.write_str("Path[")?;
                write_joined(f, items.iter())?;
                f.write_str("]")
            }
            Element::List(items) => {
                f.write_str("[")?;
                write_joined(f, items.iter())?;
                f.write_str("]")
            }
            Element::Map(map) => {
                let mut pairs: Vec<String> =
                    map.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                pairs.sort();
                write!(f, "Map{{{}}}", pairs.join(", "))
            }
            Element::LinkedMap(map) => {
                f.write_str("LinkedMap{")?;
                for (idx, (k, v)) in map.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_joined<'a>(f: &mut fmt::Formatter<'_>, items: impl Iterator<Item = &'a Element>) -> fmt::Result {
    for (idx, item) in items.enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(v) => write!(f, "{}", v),
            PropertyValue::Int32(v) => write!(f, "{}", v),
            PropertyValue::Int64(v) => write!(f, "{}", v),
            PropertyValue::Float32(v) => write!(f, "{}", v),
            PropertyValue::Float64(v) => write!(f, "{}", v),
            // Strings are quoted so "1" and 1 render differently
            PropertyValue::String(v) => write!(f, "{:?}", v),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Property{{Key:{}, Value:{}}}", self.key(), self.value())
    }
}

/// `, properties:[...]` with the entries sorted; nothing when empty
fn write_properties(f: &mut fmt::Formatter<'_>, properties: &[Property]) -> fmt::Result {
    if properties.is_empty() {
        return Ok(());
    }
    let mut rendered: Vec<String> = properties.iter().map(|p| p.to_string()).collect();
    rendered.sort();
    write!(f, ", properties:[{}]", rendered.join(", "))
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.identity() {
            VertexId::Numeric { id, vtype } => write!(f, "Vertex{{Id:{}, Type:{}", id, vtype)?,
            VertexId::Named { id, vtype } => write!(f, "Vertex{{SId:{}, SType:{}", id, vtype)?,
        }
        write_properties(f, self.properties())?;
        f.write_str("}")
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edge{{OutV:{}, InV:{}, Type:{}",
            self.out_v(),
            self.in_v(),
            self.label()
        )?;
        write_properties(f, self.properties())?;
        f.write_str("}")
    }
}
