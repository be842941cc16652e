//! Node registry: one stable node per unique dedup key.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::model::{ArtifactRecord, DedupKey, FileRecord, Node, NodeId, NodeKind};

/// Assigns one node identity per unique [`DedupKey`] and remembers which
/// node every raw record id resolved to.
///
/// Node metadata (label, attributes) is taken from the first record observed
/// for a given key; later duplicates map to the existing node and do not
/// overwrite it. The registry is built in a single pass over the document
/// and is read-only afterwards.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    /// Nodes in first-seen order
    nodes: IndexMap<NodeId, Node>,
    /// Dedup key -> node id
    keys: HashMap<DedupKey, NodeId>,
    /// Raw record id -> node id
    raw_ids: HashMap<String, NodeId>,
    /// Duplicate package records collapsed
    duplicate_packages: usize,
    /// Duplicate file records collapsed
    duplicate_files: usize,
}

impl NodeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a package record, returning the node id for its dedup key.
    pub fn register_artifact(&mut self, record: &ArtifactRecord) -> NodeId {
        let key = DedupKey::from_artifact(record);
        let node_id = match self.keys.get(&key) {
            Some(existing) => {
                self.duplicate_packages += 1;
                tracing::debug!(
                    raw_id = %record.id,
                    node_id = %existing,
                    "Duplicate package record, reusing node"
                );
                existing.clone()
            }
            None => {
                let id = NodeId::from_key(&key);
                let mut node = Node {
                    id: id.clone(),
                    kind: NodeKind::Package,
                    label: format!("{}\n{}", record.name, record.version),
                    attributes: IndexMap::new(),
                };
                node.attributes
                    .insert("type".to_string(), record.package_type.clone());
                self.nodes.insert(id.clone(), node);
                self.keys.insert(key, id.clone());
                id
            }
        };
        self.raw_ids.insert(record.id.clone(), node_id.clone());
        node_id
    }

    /// Register a file record, returning the node id for its dedup key.
    pub fn register_file(&mut self, record: &FileRecord) -> NodeId {
        let key = DedupKey::from_file(record);
        let node_id = match self.keys.get(&key) {
            Some(existing) => {
                self.duplicate_files += 1;
                tracing::debug!(
                    raw_id = %record.id,
                    node_id = %existing,
                    "Duplicate file record, reusing node"
                );
                existing.clone()
            }
            None => {
                let id = NodeId::from_key(&key);
                let mut node = Node {
                    id: id.clone(),
                    kind: NodeKind::File,
                    label: record.location.path.clone(),
                    attributes: IndexMap::new(),
                };
                node.attributes
                    .insert("type".to_string(), record.file_type.clone());
                self.nodes.insert(id.clone(), node);
                self.keys.insert(key, id.clone());
                id
            }
        };
        self.raw_ids.insert(record.id.clone(), node_id.clone());
        node_id
    }

    /// Resolve a raw record id to its node id, if that id was ever declared.
    #[must_use]
    pub fn resolve(&self, raw_id: &str) -> Option<&NodeId> {
        self.raw_ids.get(raw_id)
    }

    /// Registered nodes in first-seen order.
    #[must_use]
    pub fn nodes(&self) -> &IndexMap<NodeId, Node> {
        &self.nodes
    }

    /// Consume the registry, keeping only the node map.
    #[must_use]
    pub fn into_nodes(self) -> IndexMap<NodeId, Node> {
        self.nodes
    }

    /// Number of unique nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Duplicate package records collapsed so far.
    #[must_use]
    pub fn duplicate_packages(&self) -> usize {
        self.duplicate_packages
    }

    /// Duplicate file records collapsed so far.
    #[must_use]
    pub fn duplicate_files(&self) -> usize {
        self.duplicate_files
    }
}
