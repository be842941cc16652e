//! Canonical dedup keys for raw SBOM records.
//!
//! Two raw records with equal keys denote the same real-world entity and
//! collapse to a single graph node. Keys are explicit enum values compared
//! field-by-field, never formatted strings, so a name containing punctuation
//! cannot collide with a different (name, version) pair.

use crate::model::{ArtifactRecord, FileRecord};

/// Canonical identity of a raw record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DedupKey {
    /// A package, identified by name and version
    Package { name: String, version: String },
    /// A file, identified by its normalized path
    File { path: String },
}

impl DedupKey {
    /// Derive the key for a package record. Pure, never fails; missing
    /// fields were already defaulted to empty strings at parse time.
    #[must_use]
    pub fn from_artifact(record: &ArtifactRecord) -> Self {
        Self::Package {
            name: record.name.clone(),
            version: record.version.clone(),
        }
    }

    /// Derive the key for a file record.
    #[must_use]
    pub fn from_file(record: &FileRecord) -> Self {
        Self::File {
            path: normalize_path(&record.location.path),
        }
    }

    /// Stable byte encoding used for node-id hashing.
    ///
    /// A kind discriminant plus NUL-separated fields. NUL cannot appear in
    /// the source JSON strings we care about, so distinct keys map to
    /// distinct byte strings.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        match self {
            Self::Package { name, version } => {
                bytes.push(b'p');
                bytes.push(0);
                bytes.extend_from_slice(name.as_bytes());
                bytes.push(0);
                bytes.extend_from_slice(version.as_bytes());
            }
            Self::File { path } => {
                bytes.push(b'f');
                bytes.push(0);
                bytes.extend_from_slice(path.as_bytes());
            }
        }
        bytes
    }
}

/// Normalize a file path for dedup comparison: trim whitespace and collapse
/// repeated separators. Paths are compared case-sensitively.
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut prev_sep = false;
    for c in trimmed.chars() {
        if c == '/' {
            if !prev_sep {
                out.push(c);
            }
            prev_sep = true;
        } else {
            out.push(c);
            prev_sep = false;
        }
    }
    out
}
