//! Lightweight in-memory object graph for tests.
//!
//! `MemGraph` keeps nodes in a map and counts fetches so tests
//! can assert exactly how many graph accesses a resolution made.
//!
//! # Example
//!
//! ```rust,ignore
//! use ipfs_path::prelude::*;
//! use ipfs_path::testkit::{cid_for, MemGraph};
//!
//! #[tokio::test]
//! async fn test_resolve() {
//!     let graph = MemGraph::new();
//!     let root = cid_for(b"root");
//!     graph.insert(root, GraphNode::new());
//!
//!     let cid = resolve_ipfs_path(&graph, root.to_string().as_str())
//!         .await
//!         .unwrap();
//!     assert_eq!(cid, root);
//!     assert_eq!(graph.fetch_count(), 0);
//! }
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use multihash::Multihash;
use parking_lot::Mutex;
use sha2::{Digest, Sha256};

use crate::graph::{GraphError, GraphNode, ObjectGraph};
use crate::linked_data::Cid;

const SHA2_256_CODE: u64 = 0x12;
const DAG_CBOR_CODEC: u64 = 0x71;

/// Mint a deterministic CIDv1 from a label.
///  Tests never hand-write CID strings.
pub fn cid_for(label: &[u8]) -> Cid {
    let digest = Sha256::digest(label);
    let hash = Multihash::<64>::wrap(SHA2_256_CODE, &digest)
        .expect("sha2-256 digest fits a 64-byte multihash");
    Cid::new_v1(DAG_CBOR_CODEC, hash)
}

/// In-memory [`ObjectGraph`] with a fetch counter.
#[derive(Debug, Default)]
pub struct MemGraph {
    nodes: Mutex<HashMap<Cid, GraphNode>>,
    fetches: AtomicUsize,
}

impl MemGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: Cid, node: GraphNode) {
        self.nodes.lock().insert(id, node);
    }

    /// Number of `get_node` calls made so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectGraph for MemGraph {
    async fn get_node(&self, id: &Cid) -> Result<GraphNode, GraphError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.nodes
            .lock()
            .get(id)
            .cloned()
            .ok_or(GraphError::NodeNotFound(*id))
    }
}
