// root extraction + output shape
use crate::core::graph::LineageGraph;
use crate::core::types::NodeId;

/// The shape of the output document, resolved explicitly instead of by
/// indexing into the root list.
///
/// Exactly one root serializes as a single object; anything else (many
/// roots, or none at all) serializes as an array. Zero roots happens when
/// every name is also a child somewhere, or when the input had no accepted
/// rows, and yields an empty array rather than a crash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeDocument {
    Single(NodeId),
    Forest(Vec<NodeId>),
}

impl LineageGraph {
    /// Every node that never appeared as a child, in first-seen order.
    ///
    /// Computed after all edges are attached, never incrementally.
    pub fn roots(&self) -> Vec<NodeId> {
        (0..self.node_count() as NodeId)
            .filter(|id| !self.attached.contains(id))
            .collect()
    }

    pub fn document(&self) -> TreeDocument {
        let mut roots = self.roots();
        if roots.len() == 1 {
            TreeDocument::Single(roots.remove(0))
        } else {
            TreeDocument::Forest(roots)
        }
    }
}
