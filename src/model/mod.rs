//! Data model: source BOM records and the normalized graph document.

mod document;
mod metadata;
mod source;

pub use document::{Document, Edge, EdgeKind, Node, NodeId, NodeKind, NodeList, UNKNOWN_VERSION};
pub use metadata::{
    DocumentKind, DocumentMetadata, DocumentType, ExternalRefKind, ExternalReference, Person, Tool,
};
pub use source::{
    ComponentCategory, ComponentDetail, HardwareDetail, SoftwareDetail, SourceBom, SourceComponent,
    SourceRelationship,
};
