//! Post-conversion invariant checks on the node and edge sets.

use crate::error::{ConvertError, ConvertErrors};
use crate::model::{Edge, Node, NodeId};
use std::collections::HashSet;

/// Check that every edge endpoint names an existing node.
///
/// The edge builder deliberately skips this (it sees one relationship at a
/// time); here the full node set is known, so dangling `from` ids and
/// dangling `to` ids are each reported as their own error. A canonical edge
/// with an empty target set cannot be produced by the deduplicator and is
/// reported as an invariant violation rather than silently dropped.
pub(crate) fn check_references(nodes: &[Node], edges: &[Edge], errors: &mut ConvertErrors) {
    let known: HashSet<&NodeId> = nodes.iter().map(|n| &n.id).collect();

    for edge in edges {
        if edge.to.is_empty() {
            errors.push(ConvertError::InternalInvariant(format!(
                "canonical edge from '{}' has an empty target set",
                edge.from
            )));
        }
        if !known.contains(&edge.from) {
            errors.push(ConvertError::dangling(edge.from.value(), edge.from.value()));
        }
        for to in &edge.to {
            if !known.contains(to) {
                errors.push(ConvertError::dangling(edge.from.value(), to.value()));
            }
        }
    }
}
