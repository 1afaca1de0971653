//! Unified error types for bomgraph.
//!
//! Conversion never panics on malformed input and never aborts on the first
//! bad record: per-record failures are collected into a [`ConvertErrors`]
//! aggregate and returned to the caller, who decides what to do with them.

use thiserror::Error;

/// A single conversion failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertError {
    /// The source BOM could not be decoded at the loader boundary.
    #[error("failed to decode source BOM: {0}")]
    Decode(String),

    /// A component record cannot be turned into a node.
    #[error("invalid component at position {index}: {kind}")]
    InvalidComponent {
        /// Position in the conversion order (hardware entries first, then
        /// software entries, each in source order).
        index: usize,
        #[source]
        kind: ComponentErrorKind,
    },

    /// A relationship record cannot be turned into an edge.
    #[error("invalid relationship at position {index}: {kind}")]
    InvalidRelationship {
        /// Position in the source relationship sequence.
        index: usize,
        #[source]
        kind: RelationshipErrorKind,
    },

    /// An edge endpoint does not name any node in the document.
    #[error("edge from '{edge_from}' references unknown node id '{missing}'")]
    DanglingReference { edge_from: String, missing: String },

    /// An internal invariant of the conversion was violated. Reported,
    /// never a panic.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

/// Specific component error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ComponentErrorKind {
    #[error("component id is empty")]
    EmptyId,

    #[error("duplicate component id '{id}'")]
    DuplicateId { id: String },
}

/// Specific relationship error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RelationshipErrorKind {
    #[error("relationship fromId is empty")]
    EmptyFromId,

    #[error("relationship toId is empty")]
    EmptyToId,
}

impl ConvertError {
    /// Create an invalid-component error
    pub fn invalid_component(index: usize, kind: ComponentErrorKind) -> Self {
        Self::InvalidComponent { index, kind }
    }

    /// Create an invalid-relationship error
    pub fn invalid_relationship(index: usize, kind: RelationshipErrorKind) -> Self {
        Self::InvalidRelationship { index, kind }
    }

    /// Create a dangling-reference error
    pub fn dangling(edge_from: impl Into<String>, missing: impl Into<String>) -> Self {
        Self::DanglingReference {
            edge_from: edge_from.into(),
            missing: missing.into(),
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Every failure encountered while converting one source BOM.
///
/// The orchestrating loop pushes one entry per bad record instead of
/// stopping early, so a caller sees all diagnostics in a single pass.
/// Order follows the conversion order: components, then relationships,
/// then reference checks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConvertErrors {
    errors: Vec<ConvertError>,
}

impl ConvertErrors {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure
    pub fn push(&mut self, error: ConvertError) {
        self.errors.push(error);
    }

    /// Number of recorded failures
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when no failure has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over the recorded failures in conversion order
    pub fn iter(&self) -> std::slice::Iter<'_, ConvertError> {
        self.errors.iter()
    }

    /// Keep only the first `len` failures, dropping the rest.
    pub fn truncate(&mut self, len: usize) {
        self.errors.truncate(len);
    }

    /// Consume the collection and return the underlying list
    #[must_use]
    pub fn into_vec(self) -> Vec<ConvertError> {
        self.errors
    }
}

impl std::fmt::Display for ConvertErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conversion failed with {} error(s)", self.errors.len())?;
        for error in &self.errors {
            write!(f, "; {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConvertErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.errors
            .first()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<ConvertError> for ConvertErrors {
    fn from(error: ConvertError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl IntoIterator for ConvertErrors {
    type Item = ConvertError;
    type IntoIter = std::vec::IntoIter<ConvertError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConvertErrors {
    type Item = &'a ConvertError;
    type IntoIter = std::slice::Iter<'a, ConvertError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Convenient Result type for bomgraph operations
pub type Result<T> = std::result::Result<T, ConvertErrors>;
