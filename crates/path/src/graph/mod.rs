use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::linked_data::Cid;

/**
 * Graph nodes
 * ===========
 * A node is a read-only description of named links to
 *  other nodes in the DAG. Link order is significant:
 *  nothing forbids two links sharing a name, and lookup
 *  always takes the first match in node order.
 * How nodes are encoded on disk or on the wire is the
 *  block store's business, not ours.
 */

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedLink {
    pub name: String,
    pub target: Cid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GraphNode {
    links: Vec<NamedLink>,
}

impl GraphNode {
    pub fn new() -> Self {
        GraphNode { links: Vec::new() }
    }

    /// Append a link. Duplicate names are kept as-is.
    pub fn insert(&mut self, name: impl Into<String>, target: Cid) {
        self.links.push(NamedLink {
            name: name.into(),
            target,
        });
    }

    /// First link with a matching name, in node order.
    pub fn get_link(&self, name: &str) -> Option<&NamedLink> {
        self.links.iter().find(|l| l.name == name)
    }

    pub fn links(&self) -> &[NamedLink] {
        &self.links
    }

    pub fn size(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("node not found: {0}")]
    NodeNotFound(Cid),
    #[error("transport error: {0}")]
    Transport(#[from] anyhow::Error),
}

/// Read-only handle on a content-addressed object graph,
///  implemented by the storage subsystem.
#[async_trait]
pub trait ObjectGraph: Send + Sync {
    /// Fetch the node identified by `id`.
    async fn get_node(&self, id: &Cid) -> Result<GraphNode, GraphError>;
}
