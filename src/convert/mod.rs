//! Conversion of a flat source BOM into a normalized graph document.
//!
//! The orchestration lives in [`Converter::convert`]: metadata derivation and
//! node construction run independently over the source BOM, relationships
//! become raw edges, raw edges are merged into canonical edges, and a final
//! reference check ties the edge set back to the node set. Per-record
//! failures are aggregated rather than aborting the run, and no document is
//! returned when anything failed.

mod edges;
mod metadata;
mod nodes;
mod validate;

pub use edges::dedupe_edges;

use crate::error::{ComponentErrorKind, ConvertError, ConvertErrors, Result};
use crate::model::{Document, Node, NodeId, NodeList, SourceBom};
use std::collections::HashSet;
use std::io::Read;

/// Conversion behavior switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Stop at the first failure instead of collecting every diagnostic
    pub fail_fast: bool,
    /// Sort canonical edges by (from, kind) instead of first-seen order
    pub sorted_edges: bool,
}

impl ConvertOptions {
    /// Create the default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return at the first failure
    #[must_use]
    pub const fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Sort canonical edges by (from, kind)
    #[must_use]
    pub const fn sorted_edges(mut self, sorted_edges: bool) -> Self {
        self.sorted_edges = sorted_edges;
        self
    }
}

/// Converts flat source BOMs into graph documents.
///
/// The converter holds no mutable state; one instance can serve many
/// conversions, concurrently, as long as each call gets its own source BOM.
///
/// # Example
///
/// ```
/// use bomgraph::{Converter, SourceBom, SourceComponent, SourceRelationship};
///
/// let mut bom = SourceBom::new("bom-1", "1");
/// bom.components.push(SourceComponent::hardware("hw-1", "board"));
/// bom.components.push(SourceComponent::software("sw-1", "firmware"));
/// bom.relationships.push(SourceRelationship::new("hw-1", "sw-1", "runs"));
///
/// let doc = Converter::new("1.5", "json").convert(&bom)?;
/// assert_eq!(doc.node_count(), 2);
/// assert_eq!(doc.edge_count(), 1);
/// # Ok::<(), bomgraph::ConvertErrors>(())
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    // Format-version tag and encoding hint are accepted for forward
    // compatibility; neither affects behavior yet.
    #[allow(dead_code)]
    version: String,
    #[allow(dead_code)]
    encoding: String,
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter for the given format version and encoding hint.
    #[must_use]
    pub fn new(version: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            encoding: encoding.into(),
            options: ConvertOptions::default(),
        }
    }

    /// Replace the conversion options.
    #[must_use]
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Convert a decoded source BOM into a graph document.
    ///
    /// All-or-nothing: on any failure the aggregated error list comes back
    /// and no document is produced. With `fail_fast` set the first failure
    /// returns alone.
    pub fn convert(&self, bom: &SourceBom) -> Result<Document> {
        let mut errors = ConvertErrors::new();

        let metadata = metadata::build_metadata(&bom.id, &bom.version);
        let nodes = self.build_nodes(bom, &mut errors)?;
        let raw_edges = self.build_edges(bom, &mut errors)?;

        let mut canonical = dedupe_edges(raw_edges);
        if self.options.sorted_edges {
            edges::sort_edges(&mut canonical);
        }

        validate::check_references(&nodes, &canonical, &mut errors);
        if !errors.is_empty() {
            if self.options.fail_fast {
                errors.truncate(1);
            }
            return Err(errors);
        }

        tracing::debug!(
            bom_id = %bom.id,
            nodes = nodes.len(),
            edges = canonical.len(),
            "converted source BOM"
        );

        Ok(Document {
            metadata,
            node_list: NodeList {
                nodes,
                edges: canonical,
                root_elements: Vec::new(),
            },
        })
    }

    /// Decode a JSON source BOM from a reader and convert it.
    ///
    /// Decode failures surface as a single `Decode` error; they originate at
    /// the loader boundary and are passed through unchanged.
    pub fn convert_reader<R: Read>(&self, reader: R) -> Result<Document> {
        let bom = SourceBom::from_reader(reader).map_err(ConvertErrors::from)?;
        self.convert(&bom)
    }

    /// Build one node per component, hardware entries first, then software,
    /// each in source order. Collects every per-record failure; duplicate
    /// node ids are rejected rather than silently overwritten.
    fn build_nodes(&self, bom: &SourceBom, errors: &mut ConvertErrors) -> Result<Vec<Node>> {
        let mut nodes = Vec::with_capacity(bom.components.len());
        let mut seen: HashSet<NodeId> = HashSet::with_capacity(bom.components.len());

        for (index, component) in bom.components_in_order().enumerate() {
            match nodes::build_node(index, component) {
                Ok(node) => {
                    if seen.insert(node.id.clone()) {
                        nodes.push(node);
                    } else {
                        errors.push(ConvertError::invalid_component(
                            index,
                            ComponentErrorKind::DuplicateId {
                                id: node.id.value().to_string(),
                            },
                        ));
                    }
                }
                Err(e) => errors.push(e),
            }
            if self.options.fail_fast && !errors.is_empty() {
                return Err(std::mem::take(errors));
            }
        }
        Ok(nodes)
    }

    /// Build one raw edge per relationship, in source order.
    fn build_edges(
        &self,
        bom: &SourceBom,
        errors: &mut ConvertErrors,
    ) -> Result<Vec<crate::model::Edge>> {
        let mut raw = Vec::with_capacity(bom.relationships.len());

        for (index, relationship) in bom.relationships.iter().enumerate() {
            match edges::build_edge(index, relationship) {
                Ok(edge) => raw.push(edge),
                Err(e) => errors.push(e),
            }
            if self.options.fail_fast && !errors.is_empty() {
                return Err(std::mem::take(errors));
            }
        }
        Ok(raw)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new("", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SourceComponent, SourceRelationship};

    fn sample_bom() -> SourceBom {
        let mut bom = SourceBom::new("bom-1", "2");
        bom.components.push(SourceComponent::hardware("hw-1", "board"));
        bom.components.push(SourceComponent::software("sw-1", "firmware"));
        bom.relationships
            .push(SourceRelationship::new("hw-1", "sw-1", "runs"));
        bom
    }

    #[test]
    fn test_convert_produces_nodes_and_edges() {
        let doc = Converter::default().convert(&sample_bom()).expect("convert");
        assert_eq!(doc.node_count(), 2);
        assert_eq!(doc.edge_count(), 1);
        assert!(doc.node_list.root_elements.is_empty());
        assert_eq!(doc.metadata.id, "bom-1");
        assert_eq!(doc.metadata.version, "2");
    }

    #[test]
    fn test_convert_rejects_duplicate_component_ids() {
        let mut bom = sample_bom();
        bom.components.push(SourceComponent::software("hw-1", "clone"));

        let errors = Converter::default().convert(&bom).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ConvertError::InvalidComponent {
                kind: ComponentErrorKind::DuplicateId { id },
                ..
            } if id == "hw-1"
        )));
    }

    #[test]
    fn test_fail_fast_returns_single_error() {
        let mut bom = sample_bom();
        bom.components.push(SourceComponent::hardware("", "anon-1"));
        bom.components.push(SourceComponent::hardware("", "anon-2"));

        let errors = Converter::default()
            .with_options(ConvertOptions::new().fail_fast(true))
            .convert(&bom)
            .unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_fail_fast_applies_to_reference_checks() {
        let mut bom = sample_bom();
        bom.relationships
            .push(SourceRelationship::new("hw-1", "ghost-1", "runs"));
        bom.relationships
            .push(SourceRelationship::new("sw-1", "ghost-2", "runs"));

        let errors = Converter::default()
            .with_options(ConvertOptions::new().fail_fast(true))
            .convert(&bom)
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors.iter().next(),
            Some(ConvertError::DanglingReference { missing, .. }) if missing == "ghost-1"
        ));
    }

    #[test]
    fn test_collects_all_errors_by_default() {
        let mut bom = sample_bom();
        bom.components.push(SourceComponent::hardware("", "anon-1"));
        bom.components.push(SourceComponent::software("", "anon-2"));
        bom.relationships
            .push(SourceRelationship::new("", "sw-1", "runs"));

        let errors = Converter::default().convert(&bom).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_sorted_edges_option() {
        let mut bom = sample_bom();
        bom.components.push(SourceComponent::software("sw-0", "extra"));
        bom.relationships
            .push(SourceRelationship::new("sw-1", "hw-1", "used-by"));
        bom.relationships
            .push(SourceRelationship::new("hw-1", "sw-0", "runs"));

        let doc = Converter::default()
            .with_options(ConvertOptions::new().sorted_edges(true))
            .convert(&bom)
            .expect("convert");

        let froms: Vec<_> = doc
            .node_list
            .edges
            .iter()
            .map(|e| e.from.value().to_string())
            .collect();
        let mut sorted = froms.clone();
        sorted.sort();
        assert_eq!(froms, sorted);
    }
}
