//! Error types for graphwire
//!
//! Provides a unified error type for every decode, encode and bind operation.
//! Every error is terminal for the call that produced it.

use thiserror::Error;

/// Result type alias using GraphWireError
pub type Result<T> = std::result::Result<T, GraphWireError>;

/// Unified error type for graphwire operations
#[derive(Debug, Error)]
pub enum GraphWireError {
    // -------------------------------------------------------------------------
    // Cursor Errors
    // -------------------------------------------------------------------------
    #[error("Truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    #[error("Invalid length: {0}")]
    InvalidLength(i64),

    #[error("Invalid UTF-8 in wire string")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    // -------------------------------------------------------------------------
    // Envelope Errors
    // -------------------------------------------------------------------------
    #[error("Unknown protocol header magic number: 0x{0:04x}")]
    UnknownMagicNumber(u16),

    #[error("Snappy decompression failed: {0}")]
    DecompressionFailed(String),

    #[error("Snappy compression failed: {0}")]
    CompressionFailed(String),

    #[error("Payload too large: {len} bytes (max {limit})")]
    PayloadTooLarge { len: usize, limit: usize },

    // -------------------------------------------------------------------------
    // Element Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Unknown type tag: {0}")]
    UnknownTypeTag(u8),

    #[error("Unexpected type tag: expected {expected}, got {found}")]
    UnexpectedTag { expected: u8, found: u8 },

    #[error("Property value can only be a basic type, got tag {0}")]
    InvalidPropertyValue(u8),

    #[error("Nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("Edge endpoints use different id forms")]
    InconsistentIdForm,

    // -------------------------------------------------------------------------
    // Columnar Errors
    // -------------------------------------------------------------------------
    #[error("Unknown columnar protocol magic: {0}")]
    UnknownProtocol(u16),

    #[error("Unknown columnar protocol version: {0}")]
    UnknownColumnarVersion(u16),

    #[error("Invalid row count: {0}")]
    InvalidRowCount(i32),

    #[error("Invalid field count: {0}")]
    InvalidFieldLength(i32),

    #[error("Field conflict: duplicate field name {0:?}")]
    FieldConflict(String),

    #[error("Unsupported metadata of length {0}")]
    UnsupportedMetadata(i32),

    #[error("Unknown column value type: {0}")]
    UnknownColumnType(i32),

    #[error("Row count mismatch: expected {expected}, got {found}")]
    RowCountMismatch { expected: usize, found: usize },

    #[error("Columnar protocol cannot work on a big-endian host")]
    EndiannessUnsupported,

    // -------------------------------------------------------------------------
    // Bridge Errors
    // -------------------------------------------------------------------------
    #[error("Missing identity column {0:?}")]
    MissingColumn(String),

    #[error("Column {field:?} has type {found}, expected {expected}")]
    ColumnTypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    // -------------------------------------------------------------------------
    // Binding Errors
    // -------------------------------------------------------------------------
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),
}

impl GraphWireError {
    /// Shorthand used by the binding layer.
    pub(crate) fn mismatch(source: &str, target: &str) -> Self {
        GraphWireError::TypeMismatch(format!(
            "cannot map {} to a {} target",
            source, target
        ))
    }
}
