// arena-backed lineage graph
//one Node per distinct name, identity by name not by row.
//children hold arena ids, never owned subtrees, so a name reached through
//two parents can never alias two different allocations.
use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::core::types::NodeId;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("record on line {line} has {fields} fields, expected 3")]
    MalformedRecord { line: u64, fields: usize },

    #[error("cannot read input {path}")]
    MissingInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output {path}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("csv read failed")]
    Csv(#[from] csv::Error),

    #[error("json render failed")]
    Render(#[from] serde_json::Error),

    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("name {0:?} was never resolved to a node")]
    NameNotResolved(String),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    /// Classification label, `None` until the name first appears as a child.
    pub rank: Option<String>,
    /// Arena ids in attachment (input row) order, duplicates allowed.
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn new(name: impl Into<String>, rank: Option<String>) -> Self {
        Self {
            name: name.into(),
            rank,
            children: Vec::new(),
        }
    }
}

/// The shared graph store: arena of nodes plus a name-to-slot index.
///
/// Arena order is first-seen order across the whole input, which is what
/// root extraction and serialization rely on.
#[derive(Debug, Default)]
pub struct LineageGraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) index: HashMap<String, NodeId>,
    //every node that appeared as a child of an accepted edge
    pub(crate) attached: HashSet<NodeId>,
}

impl LineageGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node under `name` if absent, returning its arena id either way.
    /// Freshly created nodes start with the given rank; existing nodes keep theirs.
    pub fn get_or_insert(&mut self, name: &str, rank: Option<String>) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.nodes.len() as NodeId;
        self.nodes.push(Node::new(name, rank));
        self.index.insert(name.to_string(), id);
        id
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.nodes.get(id as usize).ok_or(GraphError::NodeNotFound(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, GraphError> {
        self.nodes.get_mut(id as usize).ok_or(GraphError::NodeNotFound(id))
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    //for reports
    pub fn iter_nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (i as NodeId, n))
    }
}
