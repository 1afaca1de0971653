//! Edge construction and canonical deduplication.

use crate::error::{ConvertError, RelationshipErrorKind};
use crate::model::{Edge, EdgeKind, NodeId, SourceRelationship};
use indexmap::IndexMap;

/// Map a free-form source relation string to an edge kind.
///
/// Every source relation currently collapses to [`EdgeKind::Unknown`].
// TODO: map the source relationship taxonomy onto EdgeKind variants once the
// target model carries them.
pub(crate) fn map_relation_kind(_relation_kind: &str) -> EdgeKind {
    EdgeKind::Unknown
}

/// Map one source relationship record to a raw, possibly-duplicate edge.
///
/// Whether the endpoints name existing nodes is not checked here; that is a
/// separate validation pass over the finished node and edge sets.
pub(crate) fn build_edge(
    index: usize,
    relationship: &SourceRelationship,
) -> Result<Edge, ConvertError> {
    if relationship.from_id.is_empty() {
        return Err(ConvertError::invalid_relationship(
            index,
            RelationshipErrorKind::EmptyFromId,
        ));
    }
    if relationship.to_id.is_empty() {
        return Err(ConvertError::invalid_relationship(
            index,
            RelationshipErrorKind::EmptyToId,
        ));
    }

    let mut edge = Edge::new(
        map_relation_kind(&relationship.relation_kind),
        NodeId::new(&relationship.from_id),
    );
    edge.add_target(NodeId::new(&relationship.to_id));
    Ok(edge)
}

/// Merge raw edges sharing the same (from, kind) key into canonical edges.
///
/// The key is a genuine composite tuple, so ids or kind names containing any
/// particular separator character cannot collide. Target ids are deduplicated
/// on merge as well, keeping each canonical `to` set free of repeats.
/// Canonical edges come out in first-seen order, which is deterministic for a
/// fixed raw edge list; the operation is idempotent.
#[must_use]
pub fn dedupe_edges(raw: Vec<Edge>) -> Vec<Edge> {
    let raw_count = raw.len();
    let mut canonical: IndexMap<(NodeId, EdgeKind), Edge> = IndexMap::new();

    for edge in raw {
        let key = (edge.from.clone(), edge.kind);
        let entry = canonical
            .entry(key)
            .or_insert_with(|| Edge::new(edge.kind, edge.from.clone()));
        for to in edge.to {
            entry.add_target(to);
        }
    }

    if canonical.len() < raw_count {
        tracing::debug!(
            raw = raw_count,
            canonical = canonical.len(),
            "merged raw edges into canonical set"
        );
    }

    canonical.into_values().collect()
}

/// Sort canonical edges by (from, kind) for callers that want a stable
/// order independent of the source relationship order.
pub(crate) fn sort_edges(edges: &mut [Edge]) {
    edges.sort_by(|a, b| a.from.cmp(&b.from).then(a.kind.cmp(&b.kind)));
}
