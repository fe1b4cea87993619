//! Wire type tags
//!
//! One byte in front of every element. The values are fixed by the wire
//! format and must never be renumbered.

use crate::error::{GraphWireError, Result};
use super::Direction;

/// Element type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CoreDataType {
    True = 1,
    False = 2,
    Int32 = 3,
    Int64 = 4,
    Float = 5,
    Double = 6,
    String = 7,
    Vertex = 8,
    Path = 9,
    // Edge tags keep the Forward/Reverse/Double order in every group.
    ForwardEdge = 10,
    ReverseEdge = 11,
    DoubleEdge = 12,
    List = 13,
    Map = 14,
    Property = 15,
    VertexWithProperties = 16,
    ForwardEdgeWithProperties = 17,
    ReverseEdgeWithProperties = 18,
    DoubleEdgeWithProperties = 19,
    StringIdVertex = 24,
    StringIdVertexWithProperties = 25,
    ForwardStringIdEdge = 26,
    ReverseStringIdEdge = 27,
    DoubleStringIdEdge = 28,
    ForwardStringIdEdgeWithProperties = 29,
    ReverseStringIdEdgeWithProperties = 30,
    DoubleStringIdEdgeWithProperties = 31,
    LinkedMap = 32,
    /// Embedded columnar batch; only valid as a List member
    ColumnarBinary = 40,
    /// Marks a columnar batch of bare values; never a standalone element
    ColumnarValue = 41,
}

impl CoreDataType {
    /// Direction of an edge tag, `None` for anything else
    pub fn edge_direction(self) -> Option<Direction> {
        use CoreDataType::*;
        match self {
            ForwardEdge
            | ForwardEdgeWithProperties
            | ForwardStringIdEdge
            | ForwardStringIdEdgeWithProperties => Some(Direction::Forward),
            ReverseEdge
            | ReverseEdgeWithProperties
            | ReverseStringIdEdge
            | ReverseStringIdEdgeWithProperties => Some(Direction::Reverse),
            DoubleEdge
            | DoubleEdgeWithProperties
            | DoubleStringIdEdge
            | DoubleStringIdEdgeWithProperties => Some(Direction::Double),
            _ => None,
        }
    }

    /// Whether the tag is followed by a property list
    pub fn has_properties(self) -> bool {
        use CoreDataType::*;
        matches!(
            self,
            VertexWithProperties
                | StringIdVertexWithProperties
                | ForwardEdgeWithProperties
                | ReverseEdgeWithProperties
                | DoubleEdgeWithProperties
                | ForwardStringIdEdgeWithProperties
                | ReverseStringIdEdgeWithProperties
                | DoubleStringIdEdgeWithProperties
        )
    }

    /// Whether vertex ids behind this tag use the string form
    pub fn is_string_id(self) -> bool {
        (self as u8) >= 24 && (self as u8) <= 31
    }
}

impl TryFrom<u8> for CoreDataType {
    type Error = GraphWireError;

    fn try_from(tag: u8) -> Result<Self> {
        use CoreDataType::*;
        Ok(match tag {
            1 => True,
            2 => False,
            3 => Int32,
            4 => Int64,
            5 => Float,
            6 => Double,
            7 => String,
            8 => Vertex,
            9 => Path,
            10 => ForwardEdge,
            11 => ReverseEdge,
            12 => DoubleEdge,
            13 => List,
            14 => Map,
            15 => Property,
            16 => VertexWithProperties,
            17 => ForwardEdgeWithProperties,
            18 => ReverseEdgeWithProperties,
            19 => DoubleEdgeWithProperties,
            24 => StringIdVertex,
            25 => StringIdVertexWithProperties,
            26 => ForwardStringIdEdge,
            27 => ReverseStringIdEdge,
            28 => DoubleStringIdEdge,
            29 => ForwardStringIdEdgeWithProperties,
            30 => ReverseStringIdEdgeWithProperties,
            31 => DoubleStringIdEdgeWithProperties,
            32 => LinkedMap,
            40 => ColumnarBinary,
            41 => ColumnarValue,
            other => return Err(GraphWireError::UnknownTypeTag(other)),
        })
    }
}
