//! Metadata structures for graph documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document-level metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document identifier, carried over from the source BOM header
    pub id: String,
    /// Document version, carried over from the source BOM header
    pub version: String,
    /// Document name
    pub name: String,
    /// Creation timestamp; the source format has no document date, so this
    /// stays unset until an external tool stamps it
    pub date: Option<DateTime<Utc>>,
    /// Tools that produced the document
    pub tools: Vec<Tool>,
    /// Document authors
    pub authors: Vec<Person>,
    /// Document type classification records
    pub document_types: Vec<DocumentType>,
}

/// A document type classification record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentType {
    /// Human-readable type name
    pub name: Option<String>,
    /// Longer description of the type
    pub description: Option<String>,
    /// Classification kind
    pub kind: DocumentKind,
}

/// Document classification kinds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DocumentKind {
    Design,
    Build,
    Analyzed,
    #[default]
    Other,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Design => write!(f, "design"),
            Self::Build => write!(f, "build"),
            Self::Analyzed => write!(f, "analyzed"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Person or organization referenced by a document or node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Name of the person or organization
    pub name: String,
    /// Optional email
    pub email: Option<String>,
    /// Whether this entry names an organization rather than an individual
    pub is_org: bool,
}

impl Person {
    /// Create a person entry with just a name
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            email: None,
            is_org: false,
        }
    }
}

/// Tool that produced or processed a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name
    pub name: String,
    /// Tool version
    pub version: Option<String>,
    /// Tool vendor
    pub vendor: Option<String>,
}

/// External reference attached to a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalReference {
    /// Reference type
    pub ref_type: ExternalRefKind,
    /// URL or locator
    pub url: String,
    /// Comment or description
    pub comment: Option<String>,
}

/// External reference types
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ExternalRefKind {
    Website,
    Vcs,
    Documentation,
    Other(String),
}

impl std::fmt::Display for ExternalRefKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Website => write!(f, "website"),
            Self::Vcs => write!(f, "vcs"),
            Self::Documentation => write!(f, "documentation"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}
