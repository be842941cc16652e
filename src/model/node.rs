//! Graph node and edge types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use xxhash_rust::xxh3::xxh3_64;

use crate::model::DedupKey;

/// Stable node identifier, derived deterministically from a [`DedupKey`].
///
/// The encoding is a human-readable sanitized prefix plus an xxh3-64 suffix
/// of the key's byte form. Identical keys always yield identical ids;
/// distinct keys collide only if xxh3 collides on their (distinct) byte
/// encodings, which is an accepted edge-case limitation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    /// Derive the id for a dedup key.
    #[must_use]
    pub fn from_key(key: &DedupKey) -> Self {
        let hash = xxh3_64(&key.to_bytes());
        let id = match key {
            DedupKey::Package { name, version } => {
                format!("pkg_{}_{}_{hash:016x}", sanitize(name), sanitize(version))
            }
            DedupKey::File { path } => format!("file_{}_{hash:016x}", sanitize(path)),
        };
        Self(id)
    }

    /// The underlying identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replace characters outside `[A-Za-z0-9]` with underscores so the readable
/// prefix is safe as a DOT identifier fragment. Uniqueness comes from the
/// hash suffix, not from this prefix.
fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Whether a node represents a package or a file. Drives visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Package,
    File,
}

/// A deduplicated graph node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Stable identifier
    pub id: NodeId,
    /// Package or file
    pub kind: NodeKind,
    /// Display label (name + version, or file path)
    pub label: String,
    /// Extra display attributes (tooltip text, record type)
    pub attributes: IndexMap<String, String>,
}

/// A directed dependency edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node id (the parent)
    pub source: NodeId,
    /// Target node id (the child)
    pub target: NodeId,
    /// Relationship type carried through from the input document
    pub label: String,
}

/// The finalized graph handed to the rendering backend.
///
/// Nodes are immutable once built; reduction only removes edges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    /// Nodes indexed by id, in first-seen order
    pub nodes: IndexMap<NodeId, Node>,
    /// Surviving edges, in first-seen order
    pub edges: Vec<Edge>,
}

impl Graph {
    /// True if every edge endpoint references a registered node.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.edges
            .iter()
            .all(|e| self.nodes.contains_key(&e.source) && self.nodes.contains_key(&e.target))
    }
}
