//! Node construction from source component records.

use crate::error::{ComponentErrorKind, ConvertError};
use crate::model::{Node, NodeId, SourceComponent};

/// Map one source component record to a graph node.
///
/// Construction is identical for hardware and software records: the shared
/// fields are all the target node consumes today. Both categories map to the
/// generic package kind; whether they should become distinct node kinds is an
/// unresolved question of the source taxonomy, so nothing is guessed here.
///
/// `index` is the record's position in the conversion order and is only used
/// for error reporting.
pub(crate) fn build_node(index: usize, component: &SourceComponent) -> Result<Node, ConvertError> {
    if component.id.is_empty() {
        return Err(ConvertError::invalid_component(
            index,
            ComponentErrorKind::EmptyId,
        ));
    }

    let mut node = Node::new(NodeId::new(&component.id), component.name.clone());
    node.description = component.description_or_default().to_string();
    Ok(node)
}
