//! **Normalize flat hardware/software BOMs into a typed graph document model.**
//!
//! `bomgraph` converts a flat, record-based bill of materials — component
//! records plus pairwise relationship records — into a normalized directed
//! graph: one uniform [`Node`](model::Node) per component, canonical
//! deduplicated [`Edge`](model::Edge)s for the relationships, and
//! document-level metadata, packaged as a [`Document`](model::Document)
//! ready for downstream analysis or interchange.
//!
//! ## Core concepts
//!
//! - **[`model`]**: the source records ([`SourceBom`], [`SourceComponent`],
//!   [`SourceRelationship`]) and the normalized output ([`Document`],
//!   [`NodeList`], [`Node`], [`Edge`]). Hardware and software records share
//!   one component shape; category-specific fields live in a tagged payload.
//! - **[`convert`]**: the [`Converter`] entry point. Conversion is
//!   all-or-nothing: every malformed record is reported through
//!   [`ConvertErrors`] and no document is produced on failure. Edges sharing
//!   a (from, kind) key are merged with their target sets deduplicated.
//!
//! Decoding raw bytes beyond the JSON loader boundary, serializing the
//! resulting document, and any command-line surface are left to external
//! collaborators.
//!
//! ## Getting started
//!
//! ```
//! use bomgraph::{Converter, SourceBom, SourceComponent, SourceRelationship};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut bom = SourceBom::new("bom-1", "1");
//!     bom.components.push(SourceComponent::hardware("hw-1", "main board"));
//!     bom.components.push(SourceComponent::software("sw-1", "firmware"));
//!     bom.relationships.push(SourceRelationship::new("hw-1", "sw-1", "runs"));
//!
//!     let doc = Converter::new("1.5", "json").convert(&bom)?;
//!
//!     println!(
//!         "Converted '{}' into {} nodes and {} edges.",
//!         doc.metadata.id,
//!         doc.node_count(),
//!         doc.edge_count()
//!     );
//!
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod convert;
pub mod error;
pub mod model;

// Re-export main types for convenience
pub use convert::{ConvertOptions, Converter, dedupe_edges};
pub use error::{
    ComponentErrorKind, ConvertError, ConvertErrors, RelationshipErrorKind, Result,
};
pub use model::{
    ComponentCategory, ComponentDetail, Document, DocumentMetadata, Edge, EdgeKind, Node, NodeId,
    NodeKind, NodeList, SourceBom, SourceComponent, SourceRelationship,
};
