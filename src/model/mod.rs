//! Core data model: raw SBOM records, dedup keys, and graph types.

mod document;
mod key;
mod node;

pub use document::{ArtifactRecord, FileLocation, FileRecord, RelationshipRecord, SbomDocument};
pub use key::DedupKey;
pub use node::{Edge, Graph, Node, NodeId, NodeKind};
