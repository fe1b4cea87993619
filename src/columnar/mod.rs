//! Columnar Module
//!
//! Little-endian sub-protocol used to ship homogeneous batches of vertices,
//! edges or properties one column at a time.
//!
//! ## Batch Format (V1)
//! ```text
//! ┌────────────┬────────────┬────────────┐
//! │ Magic (2)  │ Version(2) │  Rows (4)  │
//! └────────────┴────────────┴────────────┘
//! ┌────────────┬──────────────────────────────────────────────┐
//! │ Fields (4) │ per field: Type (4) │ Name (4+n) │ Meta (4)  │
//! └────────────┴──────────────────────────────────────────────┘
//! ┌──────────────────┬──────────────┐
//! │ Schema Meta (4)  │ Pad to 8     │
//! └──────────────────┴──────────────┘
//! per column:
//! ┌────────────────────────┬──────────────────────────────────┐
//! │ Null bitmap (pad to 8) │ Slots (pad to 8)                 │  fixed size
//! ├────────────────────────┼──────────────────────────────────┤
//! │ Null bitmap (pad to 8) │ Offsets[rows+1] │ Payload (pad)  │  string
//! └────────────────────────┴──────────────────────────────────┘
//! ```
//!
//! A row count of zero ends the batch right after the header.
//!
//! ## Host Requirement
//! The protocol is only defined for little-endian hosts; decoding refuses to
//! run anywhere else.

mod schema;
mod column;
mod table;
mod decoder;
mod writer;

pub use schema::{Field, Schema, ValueType};
pub use column::{Column, NullBitmap};
pub use table::Table;
pub use decoder::{decode_table, decode_table_into};
pub use writer::{ColumnValues, TableWriter};

/// Columnar protocol magic number ("AF" little-endian)
pub const COLUMNAR_MAGIC: u16 = 17985;

/// The only supported columnar protocol version
pub const COLUMNAR_VERSION_V1: u16 = 1;

/// Fields/columns stored inline before spilling to the heap
pub const INLINE_FIELDS: usize = 12;
