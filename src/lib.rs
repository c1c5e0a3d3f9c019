// csv lineage table -> nested json tree
pub mod core;

pub use crate::core::graph::{GraphError, LineageGraph, Node};
pub use crate::core::parser::{read_triples, read_triples_from_path};
pub use crate::core::roots::TreeDocument;
pub use crate::core::types::{NodeId, Triple};
