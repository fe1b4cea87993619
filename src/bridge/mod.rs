//! Columnar Bridge
//!
//! Turns a decoded columnar table into the batch of elements it stands for.
//!
//! ## Identity Columns
//! ```text
//! bg__to_client_vtx_id        INT64   vertex id, or edge end id
//! bg__to_client_vtx_type      INT32   vertex type, or edge end type
//! bg__to_client_start_v_id    INT64   edge start id
//! bg__to_client_start_v_type  INT32   edge start type
//! bg__to_client_edge_type     STRING  edge label
//! ```
//!
//! Identity columns are consumed by name. Every other column becomes one
//! property per row, skipping null rows. The table is only read; strings
//! are copied out so no element outlives the batch buffer.

use tracing::trace;

use crate::columnar::{Column, Table, ValueType};
use crate::element::{CoreDataType, Direction, Edge, Element, Property, PropertyValue, Vertex};
use crate::error::{GraphWireError, Result};

pub const VERTEX_ID_FIELD: &str = "bg__to_client_vtx_id";
pub const VERTEX_TYPE_FIELD: &str = "bg__to_client_vtx_type";
pub const EDGE_START_ID_FIELD: &str = "bg__to_client_start_v_id";
pub const EDGE_START_TYPE_FIELD: &str = "bg__to_client_start_v_type";
pub const EDGE_LABEL_FIELD: &str = "bg__to_client_edge_type";

/// Fields skipped when a batch carries bare values
const VALUE_SKIPPED_FIELDS: [&str; 2] = ["id", "type"];

const VERTEX_IDENTITY: [&str; 2] = [VERTEX_ID_FIELD, VERTEX_TYPE_FIELD];
const EDGE_IDENTITY: [&str; 5] = [
    VERTEX_ID_FIELD,
    VERTEX_TYPE_FIELD,
    EDGE_START_ID_FIELD,
    EDGE_START_TYPE_FIELD,
    EDGE_LABEL_FIELD,
];

/// What a columnar batch should be rebuilt into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchShape {
    Vertices,
    Edges(Direction),
    /// One property per non-null cell, field by field
    Properties,
    /// One scalar per non-null cell, field by field
    Values,
}

impl BatchShape {
    /// Shape selected by the type byte following a columnar batch tag
    pub fn from_tag(tag: u8) -> Result<Self> {
        let shape = match CoreDataType::try_from(tag)? {
            // Double edges keep wire order, like forward ones.
            CoreDataType::ForwardEdge
            | CoreDataType::DoubleEdge
            | CoreDataType::ForwardEdgeWithProperties
            | CoreDataType::DoubleEdgeWithProperties => BatchShape::Edges(Direction::Forward),
            CoreDataType::ReverseEdge | CoreDataType::ReverseEdgeWithProperties => {
                BatchShape::Edges(Direction::Reverse)
            }
            CoreDataType::Vertex | CoreDataType::VertexWithProperties => BatchShape::Vertices,
            CoreDataType::Property => BatchShape::Properties,
            CoreDataType::ColumnarValue => BatchShape::Values,
            _ => return Err(GraphWireError::UnknownTypeTag(tag)),
        };
        Ok(shape)
    }
}

/// Rebuild the elements carried by `table`
pub fn table_to_elements(table: &Table, shape: BatchShape) -> Result<Vec<Element>> {
    let rows = table.row_count();
    trace!(?shape, rows, fields = table.field_count(), "Bridging columnar batch");
    if rows == 0 {
        return Ok(Vec::new());
    }

    match shape {
        BatchShape::Vertices => vertices(table, rows),
        BatchShape::Edges(direction) => edges(table, rows, direction),
        BatchShape::Properties => properties(table),
        BatchShape::Values => values(table),
    }
}

// =============================================================================
// Shapes
// =============================================================================

fn vertices(table: &Table, rows: usize) -> Result<Vec<Element>> {
    let ids = identity_column(table, VERTEX_ID_FIELD, ValueType::Int64)?;
    let types = identity_column(table, VERTEX_TYPE_FIELD, ValueType::Int32)?;

    let mut vertices: Vec<Vertex> = (0..rows)
        .map(|row| Vertex::new(ids.get_int64(row), types.get_int32(row)))
        .collect();

    for_each_property(table, &VERTEX_IDENTITY, |row, property| {
        vertices[row].push_property(property)
    })?;

    Ok(vertices.into_iter().map(Element::Vertex).collect())
}

fn edges(table: &Table, rows: usize, direction: Direction) -> Result<Vec<Element>> {
    let start_ids = identity_column(table, EDGE_START_ID_FIELD, ValueType::Int64)?;
    let start_types = identity_column(table, EDGE_START_TYPE_FIELD, ValueType::Int32)?;
    let end_ids = identity_column(table, VERTEX_ID_FIELD, ValueType::Int64)?;
    let end_types = identity_column(table, VERTEX_TYPE_FIELD, ValueType::Int32)?;
    let labels = identity_column(table, EDGE_LABEL_FIELD, ValueType::String)?;

    let mut edges = Vec::with_capacity(rows);
    for row in 0..rows {
        let start = Vertex::new(start_ids.get_int64(row), start_types.get_int32(row));
        let end = Vertex::new(end_ids.get_int64(row), end_types.get_int32(row));
        edges.push(Edge::with_direction(start, end, labels.get_str(row)?, direction));
    }

    for_each_property(table, &EDGE_IDENTITY, |row, property| {
        edges[row].push_property(property)
    })?;

    Ok(edges.into_iter().map(Element::Edge).collect())
}

fn properties(table: &Table) -> Result<Vec<Element>> {
    let mut out = Vec::with_capacity(table.row_count() * table.field_count());
    for_each_property(table, &[], |_, property| out.push(Element::Property(property)))?;
    Ok(out)
}

fn values(table: &Table) -> Result<Vec<Element>> {
    let mut out = Vec::with_capacity(table.row_count() * table.field_count());
    for (field, column) in table.iter() {
        if VALUE_SKIPPED_FIELDS.contains(&field.name.as_str()) {
            continue;
        }
        for row in 0..column.len() {
            if !column.is_null(row) {
                out.push(Element::from(cell(column, row)?));
            }
        }
    }
    Ok(out)
}

// =============================================================================
// Helpers
// =============================================================================

/// Look up an identity column and check its type
fn identity_column<'t>(table: &'t Table, name: &str, expected: ValueType) -> Result<&'t Column> {
    let column = table
        .column_by_name(name)
        .ok_or_else(|| GraphWireError::MissingColumn(name.to_owned()))?;
    if column.value_type() != expected {
        return Err(GraphWireError::ColumnTypeMismatch {
            field: name.to_owned(),
            expected: expected.name(),
            found: column.value_type().name(),
        });
    }
    Ok(column)
}

/// Visit every non-null cell outside `skipped` as a property, column-major
fn for_each_property<F>(table: &Table, skipped: &[&str], mut visit: F) -> Result<()>
where
    F: FnMut(usize, Property),
{
    for (field, column) in table.iter() {
        if skipped.contains(&field.name.as_str()) {
            continue;
        }
        for row in 0..column.len() {
            if column.is_null(row) {
                continue;
            }
            visit(row, Property::new(field.name.clone(), cell(column, row)?));
        }
    }
    Ok(())
}

/// Owned copy of one cell
fn cell(column: &Column, row: usize) -> Result<PropertyValue> {
    Ok(match column.value_type() {
        ValueType::Bool => PropertyValue::Bool(column.get_bool(row)),
        ValueType::Int32 => PropertyValue::Int32(column.get_int32(row)),
        ValueType::Int64 => PropertyValue::Int64(column.get_int64(row)),
        ValueType::Float => PropertyValue::Float32(column.get_float32(row)),
        ValueType::Double => PropertyValue::Float64(column.get_float64(row)),
        ValueType::String => PropertyValue::String(column.get_str(row)?.to_owned()),
    })
}
