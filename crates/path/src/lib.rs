/**
 * Object graph interface.
 *  Read-only view over a content-addressed DAG:
 *  nodes with named, ordered outbound links, fetched
 *  by CID through the `ObjectGraph` trait. The actual
 *  block store lives behind that trait.
 */
pub mod graph;
/**
 * Internal wrapper around the `cid` crate, renamed to
 *  something a little more down-to-earth.
 * Handles decoding and validating content identifiers
 *  in both textual and raw-byte form.
 */
pub mod linked_data;
/**
 * Content path parsing.
 *  Turns `<cid>/a/b` (optionally `/ipfs/`-prefixed)
 *  into a structured root + link-name sequence.
 *  Pure, no I/O.
 */
pub mod path;
/**
 * Path resolution.
 *  Walks a parsed path's link names against an object
 *  graph, one fetch per link, many paths concurrently.
 */
pub mod resolve;
/**
 * Lightweight in-memory graph for tests.
 */
pub mod testkit;

pub mod prelude {
    pub use crate::graph::{GraphError, GraphNode, NamedLink, ObjectGraph};
    pub use crate::linked_data::{Cid, CidError};
    pub use crate::path::{parse_ipfs_path, InvalidPathError, IpfsPath};
    pub use crate::resolve::{
        resolve_ipfs_path, resolve_ipfs_paths, try_resolve_ipfs_paths, ResolveBatchError,
        ResolveError, ResolveInput,
    };
}
