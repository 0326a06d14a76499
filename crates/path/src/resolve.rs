use futures::future;

use crate::graph::{GraphError, ObjectGraph};
use crate::linked_data::{decode_cid_bytes, Cid, CidError};
use crate::path::{parse_ipfs_path, InvalidPathError, IpfsPath};

/**
 * Resolution
 * ==========
 * Each input is classified exactly once into one of the
 *  variants below, then resolved on its own: parse if
 *  textual, then follow the link names against the graph
 *  one fetch at a time. Inputs in a batch never share
 *  state and never abort each other; results come back
 *  in input order.
 */

/// One resolution input, classified at the call boundary.
#[derive(Debug, Clone)]
pub enum ResolveInput {
    /// A textual path, parsed via [`parse_ipfs_path`].
    Text(String),
    /// A raw binary identifier. Validated as CID bytes,
    ///  never text-parsed, and resolves to itself.
    Bytes(Vec<u8>),
    /// An already-decoded identifier. Trusted as-is.
    Cid(Cid),
    /// An already-parsed path. Skips straight to link-following.
    Parsed(IpfsPath),
}

impl From<&str> for ResolveInput {
    fn from(s: &str) -> Self {
        ResolveInput::Text(s.to_string())
    }
}

impl From<String> for ResolveInput {
    fn from(s: String) -> Self {
        ResolveInput::Text(s)
    }
}

impl From<&String> for ResolveInput {
    fn from(s: &String) -> Self {
        ResolveInput::Text(s.clone())
    }
}

impl From<Vec<u8>> for ResolveInput {
    fn from(b: Vec<u8>) -> Self {
        ResolveInput::Bytes(b)
    }
}

impl From<Cid> for ResolveInput {
    fn from(cid: Cid) -> Self {
        ResolveInput::Cid(cid)
    }
}

impl From<IpfsPath> for ResolveInput {
    fn from(path: IpfsPath) -> Self {
        ResolveInput::Parsed(path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("invalid path: {0}")]
    InvalidPath(#[from] InvalidPathError),
    #[error("invalid identifier bytes: {0}")]
    InvalidCid(#[from] CidError),
    #[error("no link named {name:?} under {node}")]
    LinkNotFound { name: String, node: Cid },
    // accessor errors pass through unmodified
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Failure report for a batch call. Successful siblings still
///  ran to completion; `failures` lists every failing input by
///  its position in the batch.
#[derive(Debug, thiserror::Error)]
#[error("{} of {} paths failed to resolve", .failures.len(), .total)]
pub struct ResolveBatchError {
    pub total: usize,
    pub failures: Vec<(usize, ResolveError)>,
}

/// Resolve a single path-like input to the CID it names.
pub async fn resolve_ipfs_path<G, I>(graph: &G, input: I) -> Result<Cid, ResolveError>
where
    G: ObjectGraph + ?Sized,
    I: Into<ResolveInput>,
{
    resolve_one(graph, input.into()).await
}

/// Resolve many inputs, gathering every per-input outcome.
///
/// Inputs run concurrently and independently: one failure never
///  cancels or delays the others, and results come back in input
///  order regardless of completion order.
pub async fn try_resolve_ipfs_paths<G, I>(graph: &G, inputs: I) -> Vec<Result<Cid, ResolveError>>
where
    G: ObjectGraph + ?Sized,
    I: IntoIterator,
    I::Item: Into<ResolveInput>,
{
    let futs = inputs
        .into_iter()
        .map(|input| resolve_one(graph, input.into()));
    future::join_all(futs).await
}

/// Resolve many inputs, requiring every one to succeed.
///
/// On success the CIDs come back in input order. Otherwise every
///  failing input is reported, with its batch position, in one
///  [`ResolveBatchError`] (gather-all: siblings of a failing input
///  still resolve).
pub async fn resolve_ipfs_paths<G, I>(graph: &G, inputs: I) -> Result<Vec<Cid>, ResolveBatchError>
where
    G: ObjectGraph + ?Sized,
    I: IntoIterator,
    I::Item: Into<ResolveInput>,
{
    let results = try_resolve_ipfs_paths(graph, inputs).await;
    let total = results.len();

    let mut cids = Vec::with_capacity(total);
    let mut failures = Vec::new();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(cid) => cids.push(cid),
            Err(err) => failures.push((index, err)),
        }
    }

    if failures.is_empty() {
        Ok(cids)
    } else {
        Err(ResolveBatchError { total, failures })
    }
}

async fn resolve_one<G>(graph: &G, input: ResolveInput) -> Result<Cid, ResolveError>
where
    G: ObjectGraph + ?Sized,
{
    match input {
        // already an identifier: no parsing, no graph access
        ResolveInput::Cid(cid) => Ok(cid),
        ResolveInput::Bytes(bytes) => Ok(decode_cid_bytes(&bytes)?),
        ResolveInput::Text(raw) => {
            let path = parse_ipfs_path(&raw)?;
            follow_links(graph, &path).await
        }
        ResolveInput::Parsed(path) => follow_links(graph, &path).await,
    }
}

/// Walk a parsed path's link names against the graph.
///
/// Carries the current CID as loop state: each iteration fetches
///  the current node, looks up the next unconsumed link name
///  (first match in node order wins), and advances to its target.
///  Exactly one fetch per link traversed; the last target is the
///  terminal node's own identifier. A root-only path never
///  touches the graph.
async fn follow_links<G>(graph: &G, path: &IpfsPath) -> Result<Cid, ResolveError>
where
    G: ObjectGraph + ?Sized,
{
    let mut current = *path.root_cid();
    for name in path.links() {
        tracing::debug!(node = %current, link = %name, "following link");
        let node = graph.get_node(&current).await?;
        let link = node.get_link(name).ok_or_else(|| ResolveError::LinkNotFound {
            name: name.clone(),
            node: current,
        })?;
        current = link.target;
    }
    Ok(current)
}
