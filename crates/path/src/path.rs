use std::fmt;
use std::str::FromStr;

use crate::linked_data::{decode_cid, Cid, CidError};

/// Namespace marker a content path may carry in front of its root.
pub const IPFS_PATH_PREFIX: &str = "/ipfs/";

/// A parsed content path: a root identifier plus the ordered
///  link names to follow from it.
///  The root keeps the caller's textual encoding; the decoded
///  CID is fixed at parse time so resolution never re-parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpfsPath {
    root: String,
    cid: Cid,
    links: Vec<String>,
}

impl IpfsPath {
    /// The root segment as the caller wrote it.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The decoded root identifier.
    pub fn root_cid(&self) -> &Cid {
        &self.cid
    }

    /// Link names in traversal order. May be empty.
    pub fn links(&self) -> &[String] {
        &self.links
    }
}

impl fmt::Display for IpfsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", IPFS_PATH_PREFIX, self.root)?;
        for link in &self.links {
            write!(f, "/{}", link)?;
        }
        Ok(())
    }
}

impl FromStr for IpfsPath {
    type Err = InvalidPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ipfs_path(s)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InvalidPathError {
    #[error("empty path")]
    Empty,
    #[error("empty segment in path: {0}")]
    EmptySegment(String),
    #[error("invalid root cid in path {path}: {source}")]
    InvalidRoot {
        path: String,
        #[source]
        source: CidError,
    },
}

/// Parse a content path.
///
/// Accepts `<cid>`, `<cid>/a/b`, and the `/ipfs/`-prefixed forms
///  of both, with at most one trailing `/`. Rejects empty input,
///  empty segments, and a root that is not a valid CID.
///
/// Pure: no I/O, identical input always gives identical output.
pub fn parse_ipfs_path(raw: &str) -> Result<IpfsPath, InvalidPathError> {
    let rest = raw.strip_prefix(IPFS_PATH_PREFIX).unwrap_or(raw);
    let rest = rest.strip_suffix('/').unwrap_or(rest);

    if rest.is_empty() {
        return Err(InvalidPathError::Empty);
    }

    let mut segments = rest.split('/');

    // split of a non-empty string always yields at least one item
    let root = segments
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| InvalidPathError::EmptySegment(raw.to_string()))?;

    let cid = decode_cid(root).map_err(|source| InvalidPathError::InvalidRoot {
        path: raw.to_string(),
        source,
    })?;

    let mut links = Vec::new();
    for segment in segments {
        if segment.is_empty() {
            return Err(InvalidPathError::EmptySegment(raw.to_string()));
        }
        links.push(segment.to_string());
    }

    Ok(IpfsPath {
        root: root.to_string(),
        cid,
        links,
    })
}
