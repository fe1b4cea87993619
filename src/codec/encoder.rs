//! Element encoder
//!
//! Mirrors the decoder. The "with properties" tag is chosen exactly when
//! the property list is non-empty; edges are always written forward, with
//! `out_v` first.

use crate::cursor::BigEndianWriter;
use crate::element::{CoreDataType, Edge, Element, Property, PropertyValue, Vertex, VertexId};
use crate::error::{GraphWireError, Result};

/// Append `element` to `w`
pub(crate) fn encode_element(w: &mut BigEndianWriter, element: &Element) -> Result<()> {
    match element {
        Element::Bool(v) => write_bool(w, *v),
        Element::Int32(v) => {
            write_tag(w, CoreDataType::Int32);
            w.write_i32(*v);
        }
        Element::Int64(v) => {
            write_tag(w, CoreDataType::Int64);
            w.write_i64(*v);
        }
        Element::Float32(v) => {
            write_tag(w, CoreDataType::Float);
            w.write_f32(*v);
        }
        Element::Float64(v) => {
            write_tag(w, CoreDataType::Double);
            w.write_f64(*v);
        }
        Element::String(v) => {
            write_tag(w, CoreDataType::String);
            w.write_string(v)?;
        }
        Element::Property(p) => write_property(w, p)?,
        Element::Vertex(v) => write_vertex(w, v)?,
        Element::Edge(e) => write_edge(w, e)?,
        Element::Path(items) => {
            write_tag(w, CoreDataType::Path);
            // Labels are not supported: always an empty list.
            write_tag(w, CoreDataType::List);
            w.write_len(0)?;
            write_tag(w, CoreDataType::List);
            write_items(w, items)?;
        }
        Element::List(items) => {
            write_tag(w, CoreDataType::List);
            write_items(w, items)?;
        }
        Element::Map(map) => {
            write_tag(w, CoreDataType::Map);
            w.write_len(map.len())?;
            for (k, v) in map.iter() {
                encode_element(w, k)?;
                encode_element(w, v)?;
            }
        }
        Element::LinkedMap(map) => {
            write_tag(w, CoreDataType::LinkedMap);
            w.write_len(map.len())?;
            for (k, v) in map.iter() {
                encode_element(w, k)?;
                encode_element(w, v)?;
            }
        }
    }
    Ok(())
}

fn write_tag(w: &mut BigEndianWriter, tag: CoreDataType) {
    w.write_u8(tag as u8);
}

fn write_bool(w: &mut BigEndianWriter, v: bool) {
    write_tag(w, if v { CoreDataType::True } else { CoreDataType::False });
}

fn write_items(w: &mut BigEndianWriter, items: &[Element]) -> Result<()> {
    w.write_len(items.len())?;
    for item in items {
        encode_element(w, item)?;
    }
    Ok(())
}

fn write_property(w: &mut BigEndianWriter, p: &Property) -> Result<()> {
    write_tag(w, CoreDataType::Property);
    w.write_string(p.key())?;
    match p.value() {
        PropertyValue::Bool(v) => write_bool(w, *v),
        PropertyValue::Int32(v) => {
            write_tag(w, CoreDataType::Int32);
            w.write_i32(*v);
        }
        PropertyValue::Int64(v) => {
            write_tag(w, CoreDataType::Int64);
            w.write_i64(*v);
        }
        PropertyValue::Float32(v) => {
            write_tag(w, CoreDataType::Float);
            w.write_f32(*v);
        }
        PropertyValue::Float64(v) => {
            write_tag(w, CoreDataType::Double);
            w.write_f64(*v);
        }
        PropertyValue::String(v) => {
            write_tag(w, CoreDataType::String);
            w.write_string(v)?;
        }
    }
    Ok(())
}

/// Numeric-id forms carry an i32 property count, string-id forms an i16
fn write_property_list(w: &mut BigEndianWriter, properties: &[Property], named: bool) -> Result<()> {
    if named {
        let count = i16::try_from(properties.len())
            .map_err(|_| GraphWireError::InvalidLength(properties.len() as i64))?;
        w.write_i16(count);
    } else {
        w.write_len(properties.len())?;
    }
    for p in properties {
        write_property(w, p)?;
    }
    Ok(())
}

fn write_identity(w: &mut BigEndianWriter, identity: &VertexId) -> Result<()> {
    match identity {
        VertexId::Numeric { id, vtype } => {
            w.write_i64(*id);
            w.write_i32(*vtype);
        }
        VertexId::Named { id, vtype } => {
            w.write_string(id)?;
            w.write_string(vtype)?;
        }
    }
    Ok(())
}

fn write_vertex(w: &mut BigEndianWriter, v: &Vertex) -> Result<()> {
    let named = v.identity().is_named();
    let tag = match (named, v.properties().is_empty()) {
        (false, true) => CoreDataType::Vertex,
        (false, false) => CoreDataType::VertexWithProperties,
        (true, true) => CoreDataType::StringIdVertex,
        (true, false) => CoreDataType::StringIdVertexWithProperties,
    };
    write_tag(w, tag);
    write_identity(w, v.identity())?;
    if !v.properties().is_empty() {
        write_property_list(w, v.properties(), named)?;
    }
    Ok(())
}

fn write_edge(w: &mut BigEndianWriter, e: &Edge) -> Result<()> {
    let named = e.out_v().identity().is_named();
    if named != e.in_v().identity().is_named() {
        return Err(GraphWireError::InconsistentIdForm);
    }
    let tag = match (named, e.properties().is_empty()) {
        (false, true) => CoreDataType::ForwardEdge,
        (false, false) => CoreDataType::ForwardEdgeWithProperties,
        (true, true) => CoreDataType::ForwardStringIdEdge,
        (true, false) => CoreDataType::ForwardStringIdEdgeWithProperties,
    };
    write_tag(w, tag);
    w.write_string(e.label())?;
    write_identity(w, e.out_v().identity())?;
    write_identity(w, e.in_v().identity())?;
    if !e.properties().is_empty() {
        write_property_list(w, e.properties(), named)?;
    }
    Ok(())
}
