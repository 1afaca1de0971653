//! Core graph document data structures.
//!
//! A [`Document`] is the normalized output of a conversion: uniform nodes for
//! every source component, canonical deduplicated edges for the source
//! relationships, and document-level metadata. The shape matches what the
//! downstream graph-model tooling expects; serializing it to bytes is an
//! external encoder's job.

use super::metadata::{DocumentMetadata, ExternalReference, Person};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version sentinel for source formats without a per-component version.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Identifier of a node in the graph, equal to the source component id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a new node id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying id string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Node type classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum NodeKind {
    /// A packaged component (the granularity every BOM record maps to today)
    #[default]
    Package,
    /// An individual file
    File,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Package => write!(f, "package"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Typed relation classification for edges
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[non_exhaustive]
pub enum EdgeKind {
    /// Relation whose source taxonomy string has no mapping yet
    #[default]
    Unknown,
    Contains,
    DependsOn,
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Contains => write!(f, "contains"),
            Self::DependsOn => write!(f, "depends-on"),
        }
    }
}

/// A graph vertex representing one source component.
///
/// The collections past `description` exist for forward compatibility with
/// richer source formats; the flat BOM shape never populates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier (= source component id)
    pub id: NodeId,
    /// Node type
    pub kind: NodeKind,
    /// Component name
    pub name: String,
    /// Version string ([`UNKNOWN_VERSION`] when the source has none)
    pub version: String,
    /// Detailed description, empty when the source omits it
    pub description: String,
    /// Applicable licenses
    pub licenses: Vec<String>,
    /// Hashes by algorithm name
    pub hashes: BTreeMap<String, String>,
    /// Identifiers by identifier type
    pub identifiers: BTreeMap<String, String>,
    /// Entities providing the component
    pub suppliers: Vec<Person>,
    /// Entities involved in creating the component
    pub originators: Vec<Person>,
    /// External references
    pub external_references: Vec<ExternalReference>,
    /// File types associated with the component
    pub file_types: Vec<String>,
}

impl Node {
    /// Create a node with empty extensible collections
    #[must_use]
    pub fn new(id: NodeId, name: String) -> Self {
        Self {
            id,
            kind: NodeKind::Package,
            name,
            version: UNKNOWN_VERSION.to_string(),
            description: String::new(),
            licenses: Vec::new(),
            hashes: BTreeMap::new(),
            identifiers: BTreeMap::new(),
            suppliers: Vec::new(),
            originators: Vec::new(),
            external_references: Vec::new(),
            file_types: Vec::new(),
        }
    }
}

/// A directed, typed relation from one node to a set of target nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Relation type
    pub kind: EdgeKind,
    /// Source node id
    pub from: NodeId,
    /// Target node ids; never contains a duplicate
    pub to: Vec<NodeId>,
}

impl Edge {
    /// Create an edge with no targets yet
    #[must_use]
    pub const fn new(kind: EdgeKind, from: NodeId) -> Self {
        Self {
            kind,
            from,
            to: Vec::new(),
        }
    }

    /// Add a target id, skipping ids already present.
    ///
    /// Returns `true` if the id was newly added.
    pub fn add_target(&mut self, to: NodeId) -> bool {
        if self.to.contains(&to) {
            false
        } else {
            self.to.push(to);
            true
        }
    }
}

/// The node and edge sets of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeList {
    /// Nodes in conversion order (hardware entries first, then software)
    pub nodes: Vec<Node>,
    /// Canonical, deduplicated edges
    pub edges: Vec<Edge>,
    /// Top-level entry points of the graph; the flat BOM format does not
    /// declare roots, so this stays empty
    pub root_elements: Vec<NodeId>,
}

impl NodeList {
    /// Look up a node by id
    #[must_use]
    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Edges originating at the given node
    #[must_use]
    pub fn edges_from(&self, id: &NodeId) -> Vec<&Edge> {
        self.edges.iter().filter(|e| &e.from == id).collect()
    }
}

/// Normalized graph document - the output of a conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document-level metadata
    pub metadata: DocumentMetadata,
    /// Nodes, edges and root elements
    pub node_list: NodeList,
}

impl Document {
    /// Total node count
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_list.nodes.len()
    }

    /// Total canonical edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.node_list.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_has_sentinel_version_and_empty_collections() {
        let node = Node::new(NodeId::from("n1"), "widget".to_string());
        assert_eq!(node.version, UNKNOWN_VERSION);
        assert_eq!(node.kind, NodeKind::Package);
        assert!(node.description.is_empty());
        assert!(node.licenses.is_empty());
        assert!(node.hashes.is_empty());
        assert!(node.identifiers.is_empty());
        assert!(node.suppliers.is_empty());
        assert!(node.originators.is_empty());
        assert!(node.external_references.is_empty());
        assert!(node.file_types.is_empty());
    }

    #[test]
    fn test_edge_add_target_dedupes() {
        let mut edge = Edge::new(EdgeKind::Unknown, NodeId::from("a"));
        assert!(edge.add_target(NodeId::from("b")));
        assert!(edge.add_target(NodeId::from("c")));
        assert!(!edge.add_target(NodeId::from("b")));
        assert_eq!(edge.to, vec![NodeId::from("b"), NodeId::from("c")]);
    }

    #[test]
    fn test_node_list_lookups() {
        let mut nl = NodeList::default();
        nl.nodes.push(Node::new(NodeId::from("a"), "a".to_string()));
        let mut edge = Edge::new(EdgeKind::Unknown, NodeId::from("a"));
        edge.add_target(NodeId::from("b"));
        nl.edges.push(edge);

        assert!(nl.get_node(&NodeId::from("a")).is_some());
        assert!(nl.get_node(&NodeId::from("b")).is_none());
        assert_eq!(nl.edges_from(&NodeId::from("a")).len(), 1);
        assert!(nl.edges_from(&NodeId::from("b")).is_empty());
    }
}
