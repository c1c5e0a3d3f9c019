// shared ids + input records
pub type NodeId = u32;

/// One accepted input row, already trimmed. Self-loop rows never make it this far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub parent: String,
    pub child: String,
    pub rank: String,
}

impl Triple {
    pub fn new(parent: impl Into<String>, child: impl Into<String>, rank: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
            rank: rank.into(),
        }
    }
}
