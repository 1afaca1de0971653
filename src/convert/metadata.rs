//! Document metadata derivation.

use crate::model::{DocumentKind, DocumentMetadata, DocumentType};

/// Placeholder document name until the source format grows one.
const DEFAULT_NAME: &str = "unknown";

/// Derive document-level metadata from the source BOM header.
///
/// Pure transform with no error conditions: id and version come straight
/// from the header, everything else is the fixed default shape. The single
/// classification record is a placeholder; extracting real document types
/// from the source taxonomy is deferred until the target model grows the
/// matching kinds.
pub(crate) fn build_metadata(id: &str, version: &str) -> DocumentMetadata {
    DocumentMetadata {
        id: id.to_string(),
        version: version.to_string(),
        name: DEFAULT_NAME.to_string(),
        date: None,
        tools: Vec::new(),
        authors: Vec::new(),
        document_types: vec![DocumentType {
            name: Some("Flat BOM".to_string()),
            description: Some("A flat hardware/software bill of materials".to_string()),
            kind: DocumentKind::Other,
        }],
    }
}
