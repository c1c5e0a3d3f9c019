// two-pass graph construction
/*

Pass 1 (resolve_nodes): walk the triples in order and make sure every name
owns exactly one arena slot. A name first seen as a parent gets rank = None;
a name first seen as a child gets that row's rank. A parent-created
placeholder is backfilled on its first child mention; a rank set earlier is
never replaced (first-write-wins).

Pass 2 (attach_edges): walk the SAME triples in order and append each child
id to its parent's children, recording the child in the attached set.

The passes stay separate on purpose: rank resolution must see the whole
input before any rank is considered final, and collapsing the passes would
change the observable resolution order. Duplicate parent-child pairs yield
duplicate children entries, no deduplication.

*/
use crate::core::graph::{GraphError, LineageGraph};
use crate::core::types::Triple;

impl LineageGraph {
    /// Pass 1: instantiate every node and settle ranks, first-write-wins.
    pub fn resolve_nodes(&mut self, triples: &[Triple]) {
        for t in triples {
            self.get_or_insert(&t.parent, None);

            match self.node_id(&t.child) {
                None => {
                    self.get_or_insert(&t.child, Some(t.rank.clone()));
                }
                Some(id) => {
                    //backfill a placeholder, never overwrite an earlier rank
                    let node = &mut self.nodes[id as usize];
                    if node.rank.is_none() {
                        node.rank = Some(t.rank.clone());
                    }
                }
            }
        }
    }

    /// Pass 2: wire parent -> child edges in input row order.
    pub fn attach_edges(&mut self, triples: &[Triple]) -> Result<(), GraphError> {
        for t in triples {
            let parent = self
                .node_id(&t.parent)
                .ok_or_else(|| GraphError::NameNotResolved(t.parent.clone()))?;
            let child = self
                .node_id(&t.child)
                .ok_or_else(|| GraphError::NameNotResolved(t.child.clone()))?;

            self.node_mut(parent)?.children.push(child);
            self.attached.insert(child);
        }
        Ok(())
    }

    /// Build a complete graph from accepted triples: pass 1 then pass 2.
    pub fn from_triples(triples: &[Triple]) -> Result<Self, GraphError> {
        let mut g = Self::new();
        g.resolve_nodes(triples);
        g.attach_edges(triples)?;
        Ok(g)
    }
}
