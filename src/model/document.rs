//! Raw SBOM document structures.
//!
//! Mirrors the Syft-style JSON layout: `artifacts` (packages), `files`, and
//! `artifactRelationships`. Every field is defaulted so that partially
//! populated documents parse cleanly; missing fields become empty strings,
//! which still yield well-defined (if degenerate) dedup keys.

use serde::{Deserialize, Serialize};

/// A parsed SBOM document, prior to graph construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SbomDocument {
    /// Package records
    #[serde(default)]
    pub artifacts: Vec<ArtifactRecord>,
    /// File records
    #[serde(default)]
    pub files: Vec<FileRecord>,
    /// Parent/child relationships between record ids
    #[serde(default, rename = "artifactRelationships")]
    pub relationships: Vec<RelationshipRecord>,
}

impl SbomDocument {
    /// Total number of raw records (packages + files)
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.artifacts.len() + self.files.len()
    }
}

/// A raw package record.
///
/// Source ids are unique within one document, but two distinct records may
/// describe the same real-world package (same name and version).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// Document-local identifier
    #[serde(default)]
    pub id: String,
    /// Package name
    #[serde(default)]
    pub name: String,
    /// Package version
    #[serde(default)]
    pub version: String,
    /// Package type (e.g. "rpm", "deb")
    #[serde(default, rename = "type")]
    pub package_type: String,
}

/// A raw file record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileRecord {
    /// Document-local identifier
    #[serde(default)]
    pub id: String,
    /// Where the file lives on disk
    #[serde(default)]
    pub location: FileLocation,
    /// File type (e.g. "RegularFile")
    #[serde(default, rename = "type")]
    pub file_type: String,
}

/// File location within the scanned artifact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileLocation {
    /// Filesystem path
    #[serde(default)]
    pub path: String,
}

/// A raw parent/child relationship between two record ids.
///
/// May contain duplicates, self-references, and ids that were never declared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationshipRecord {
    /// Raw id of the parent record
    #[serde(default)]
    pub parent: String,
    /// Raw id of the child record
    #[serde(default)]
    pub child: String,
    /// Relationship type (e.g. "dependency-of", "contains")
    #[serde(default, rename = "type")]
    pub relationship_type: String,
}
