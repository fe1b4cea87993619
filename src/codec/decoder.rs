//! Element decoder
//!
//! Recursive descent over the big-endian element protocol. One tag byte
//! selects the variant; containers recurse up to the configured depth.
//! Any error aborts the whole decode and drops what was built so far.

use tracing::trace;

use crate::bridge::{table_to_elements, BatchShape};
use crate::columnar::{decode_table_into, Table};
use crate::config::CodecConfig;
use crate::cursor::{checked_len, BigEndianCursor, LittleEndianCursor, ScratchPool};
use crate::element::{
    CoreDataType, Direction, Edge, Element, ElementMap, LinkedMap, Property, PropertyValue,
    Vertex,
};
use crate::error::{GraphWireError, Result};

/// Borrowed decode context: settings plus the scratch pools for columnar batches
pub(crate) struct ElementDecoder<'c> {
    pub(crate) config: &'c CodecConfig,
    pub(crate) batch_cursors: &'c ScratchPool<LittleEndianCursor>,
    pub(crate) tables: &'c ScratchPool<Table>,
}

impl ElementDecoder<'_> {
    /// Decode one element from the cursor position
    pub(crate) fn decode(&self, cursor: &mut BigEndianCursor) -> Result<Element> {
        self.decode_at(cursor, 0)
    }

    fn decode_at(&self, cursor: &mut BigEndianCursor, depth: usize) -> Result<Element> {
        let raw = cursor.read_u8()?;
        let tag = CoreDataType::try_from(raw)?;

        match tag {
            CoreDataType::True => Ok(Element::Bool(true)),
            CoreDataType::False => Ok(Element::Bool(false)),
            CoreDataType::Int32 => Ok(Element::Int32(cursor.read_i32()?)),
            CoreDataType::Int64 => Ok(Element::Int64(cursor.read_i64()?)),
            CoreDataType::Float => Ok(Element::Float32(cursor.read_f32()?)),
            CoreDataType::Double => Ok(Element::Float64(cursor.read_f64()?)),
            CoreDataType::String => Ok(Element::String(cursor.read_string()?)),
            CoreDataType::Property => Ok(Element::Property(read_property_body(cursor)?)),

            CoreDataType::Vertex | CoreDataType::VertexWithProperties => {
                let vertex = read_numeric_vertex(cursor)?;
                if !tag.has_properties() {
                    return Ok(Element::Vertex(vertex));
                }
                let count = checked_len(cursor.read_i32()? as i64)?;
                Ok(Element::Vertex(vertex.with_properties(read_properties(cursor, count)?)))
            }
            CoreDataType::StringIdVertex | CoreDataType::StringIdVertexWithProperties => {
                let vertex = read_named_vertex(cursor)?;
                if !tag.has_properties() {
                    return Ok(Element::Vertex(vertex));
                }
                let count = checked_len(cursor.read_i16()? as i64)?;
                Ok(Element::Vertex(vertex.with_properties(read_properties(cursor, count)?)))
            }

            CoreDataType::ForwardEdge
            | CoreDataType::ReverseEdge
            | CoreDataType::DoubleEdge
            | CoreDataType::ForwardEdgeWithProperties
            | CoreDataType::ReverseEdgeWithProperties
            | CoreDataType::DoubleEdgeWithProperties
            | CoreDataType::ForwardStringIdEdge
            | CoreDataType::ReverseStringIdEdge
            | CoreDataType::DoubleStringIdEdge
            | CoreDataType::ForwardStringIdEdgeWithProperties
            | CoreDataType::ReverseStringIdEdgeWithProperties
            | CoreDataType::DoubleStringIdEdgeWithProperties => read_edge(cursor, tag).map(Element::Edge),

            CoreDataType::Path => {
                self.enter(depth)?;
                self.read_path(cursor, depth + 1).map(Element::Path)
            }
            CoreDataType::List => {
                self.enter(depth)?;
                self.read_list(cursor, depth + 1).map(Element::List)
            }
            CoreDataType::Map => {
                self.enter(depth)?;
                let count = cursor.read_len()?;
                let mut map = ElementMap::with_capacity(capped(count, cursor));
                for _ in 0..count {
                    let key = self.decode_at(cursor, depth + 1)?;
                    let value = self.decode_at(cursor, depth + 1)?;
                    map.insert(key, value);
                }
                Ok(Element::Map(map))
            }
            CoreDataType::LinkedMap => {
                self.enter(depth)?;
                let count = cursor.read_len()?;
                let mut map = LinkedMap::with_capacity(capped(count, cursor));
                for _ in 0..count {
                    let key = self.decode_at(cursor, depth + 1)?;
                    let value = self.decode_at(cursor, depth + 1)?;
                    map.insert(key, value);
                }
                Ok(Element::LinkedMap(map))
            }

            // Only meaningful inside a List
            CoreDataType::ColumnarBinary | CoreDataType::ColumnarValue => {
                Err(GraphWireError::UnknownTypeTag(raw))
            }
        }
    }

    fn enter(&self, depth: usize) -> Result<()> {
        if depth >= self.config.max_nesting_depth {
            return Err(GraphWireError::NestingTooDeep {
                limit: self.config.max_nesting_depth,
            });
        }
        Ok(())
    }

    /// Labels list (discarded) followed by the objects list
    fn read_path(&self, cursor: &mut BigEndianCursor, depth: usize) -> Result<Vec<Element>> {
        expect_tag(cursor, CoreDataType::List)?;
        let labels = cursor.read_len()?;
        for _ in 0..labels {
            self.decode_at(cursor, depth)?;
        }

        expect_tag(cursor, CoreDataType::List)?;
        let count = cursor.read_len()?;
        let mut objects = Vec::with_capacity(capped(count, cursor));
        for _ in 0..count {
            objects.push(self.decode_at(cursor, depth)?);
        }
        Ok(objects)
    }

    /// List body; a leading columnar tag switches to batch mode
    fn read_list(&self, cursor: &mut BigEndianCursor, depth: usize) -> Result<Vec<Element>> {
        let count = cursor.read_len()?;
        if count == 0 {
            return Ok(Vec::new());
        }

        if cursor.peek_u8()? == CoreDataType::ColumnarBinary as u8 {
            let mut items = Vec::new();
            for _ in 0..count {
                items.extend(self.read_batch(cursor)?);
            }
            return Ok(items);
        }

        let mut items = Vec::with_capacity(capped(count, cursor));
        for _ in 0..count {
            items.push(self.decode_at(cursor, depth)?);
        }
        Ok(items)
    }

    /// One embedded columnar batch: tag, shape byte, length-prefixed table
    pub(crate) fn read_batch(&self, cursor: &mut BigEndianCursor) -> Result<Vec<Element>> {
        expect_tag(cursor, CoreDataType::ColumnarBinary)?;
        let shape = BatchShape::from_tag(cursor.read_u8()?)?;
        let blob = cursor.read_bytes()?;
        trace!(?shape, len = blob.len(), "Embedded columnar batch");

        let mut batch_cursor = self.batch_cursors.acquire();
        batch_cursor.reset_to(blob, self.config.nocopy);
        let mut table = self.tables.acquire();
        decode_table_into(&mut batch_cursor, &mut table)?;
        table_to_elements(&table, shape)
    }
}

/// Pre-allocation bound: every element takes at least one byte
fn capped(count: usize, cursor: &BigEndianCursor) -> usize {
    count.min(cursor.remaining())
}

fn expect_tag(cursor: &mut BigEndianCursor, expected: CoreDataType) -> Result<()> {
    let found = cursor.read_u8()?;
    if found != expected as u8 {
        return Err(GraphWireError::UnexpectedTag {
            expected: expected as u8,
            found,
        });
    }
    Ok(())
}

// =============================================================================
// Graph Objects
// =============================================================================

/// Key, then a scalar-only value
fn read_property_body(cursor: &mut BigEndianCursor) -> Result<Property> {
    let key = cursor.read_string()?;
    let tag = cursor.read_u8()?;
    let value = match CoreDataType::try_from(tag) {
        Ok(CoreDataType::True) => PropertyValue::Bool(true),
        Ok(CoreDataType::False) => PropertyValue::Bool(false),
        Ok(CoreDataType::Int32) => PropertyValue::Int32(cursor.read_i32()?),
        Ok(CoreDataType::Int64) => PropertyValue::Int64(cursor.read_i64()?),
        Ok(CoreDataType::Float) => PropertyValue::Float32(cursor.read_f32()?),
        Ok(CoreDataType::Double) => PropertyValue::Float64(cursor.read_f64()?),
        Ok(CoreDataType::String) => PropertyValue::String(cursor.read_string()?),
        _ => return Err(GraphWireError::InvalidPropertyValue(tag)),
    };
    Ok(Property::new(key, value))
}

/// `count` tagged property elements
fn read_properties(cursor: &mut BigEndianCursor, count: usize) -> Result<Vec<Property>> {
    let mut properties = Vec::with_capacity(count.min(cursor.remaining()));
    for _ in 0..count {
        expect_tag(cursor, CoreDataType::Property)?;
        properties.push(read_property_body(cursor)?);
    }
    Ok(properties)
}

fn read_numeric_vertex(cursor: &mut BigEndianCursor) -> Result<Vertex> {
    let id = cursor.read_i64()?;
    let vtype = cursor.read_i32()?;
    Ok(Vertex::new(id, vtype))
}

fn read_named_vertex(cursor: &mut BigEndianCursor) -> Result<Vertex> {
    let id = cursor.read_string()?;
    let vtype = cursor.read_string()?;
    Ok(Vertex::named(id, vtype))
}

/// Label, two endpoints in wire order, then optional properties
fn read_edge(cursor: &mut BigEndianCursor, tag: CoreDataType) -> Result<Edge> {
    let direction = tag.edge_direction().unwrap_or(Direction::Forward);
    let label = cursor.read_string()?;

    let (first, second, count) = if tag.is_string_id() {
        let first = read_named_vertex(cursor)?;
        let second = read_named_vertex(cursor)?;
        let count = if tag.has_properties() {
            checked_len(cursor.read_i16()? as i64)?
        } else {
            0
        };
        (first, second, count)
    } else {
        let first = read_numeric_vertex(cursor)?;
        let second = read_numeric_vertex(cursor)?;
        let count = if tag.has_properties() {
            checked_len(cursor.read_i32()? as i64)?
        } else {
            0
        };
        (first, second, count)
    };

    let edge = Edge::with_direction(first, second, label, direction);
    if count == 0 {
        return Ok(edge);
    }
    Ok(edge.with_properties(read_properties(cursor, count)?))
}
