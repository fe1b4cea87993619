//! # graphwire
//!
//! Client-side codec for a graph database's query-result wire format:
//! - Big-endian, self-describing element protocol (scalars, vertices,
//!   edges, paths, lists, maps, properties)
//! - Embedded little-endian columnar batches for bulk vertices/edges
//! - Optional snappy compression behind a 2-byte envelope
//! - No-copy decoding over ref-counted buffers
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Response buffer (from RPC)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Envelope (magic + snappy)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Element Decoder                           │
//! │               (BE cursor, recursive tags)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ tag 40 inside a List
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Columnar   │─────────▶│   Bridge    │──▶ Vec<Element>
//!   │ (LE, Table) │          │             │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use graphwire::{Codec, Element, Vertex};
//!
//! let codec = Codec::default();
//! let request = codec.encode_request(&Element::Vertex(Vertex::new(1, 2))).unwrap();
//! let decoded = codec.decode_response(request).unwrap();
//! assert_eq!(decoded.to_string(), "Vertex{Id:1, Type:2}");
//! ```

use std::sync::OnceLock;

use bytes::Bytes;

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod cursor;
pub mod columnar;
pub mod element;
pub mod bridge;
pub mod codec;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{GraphWireError, Result};
pub use config::{CodecConfig, CodecConfigBuilder};
pub use codec::Codec;
pub use bridge::BatchShape;
pub use element::{
    Bindable, CoreDataType, Direction, Edge, Element, ElementMap, LinkedMap, Property,
    PropertyValue, RecordBinding, Vertex, VertexId,
};

// =============================================================================
// Shared Codec
// =============================================================================

fn shared_codec() -> &'static Codec {
    static CODEC: OnceLock<Codec> = OnceLock::new();
    CODEC.get_or_init(Codec::default)
}

/// Decode a response with the default configuration
pub fn decode_response(buf: impl Into<Bytes>) -> Result<Element> {
    shared_codec().decode_response(buf)
}

/// Encode a request with the default configuration
pub fn encode_request(element: &Element) -> Result<Bytes> {
    shared_codec().encode_request(element)
}

// =============================================================================
// Version Info
// =============================================================================

/// Current version of graphwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
