//! SBOM document loading.
//!
//! Reads a Syft-style JSON document into [`SbomDocument`]. Malformed input
//! is fatal; absent fields are tolerated and defaulted by the model types.

use std::path::Path;

use crate::error::{Result, SbomVizError};
use crate::model::SbomDocument;

/// Parse an SBOM document from a JSON string.
pub fn parse_sbom_str(content: &str) -> Result<SbomDocument> {
    let doc: SbomDocument = serde_json::from_str(content)?;
    Ok(doc)
}

/// Load and parse an SBOM document from a file.
pub fn parse_sbom(path: &Path) -> Result<SbomDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| SbomVizError::io(path, e))?;
    let doc = parse_sbom_str(&content)?;
    tracing::debug!(
        artifacts = doc.artifacts.len(),
        files = doc.files.len(),
        relationships = doc.relationships.len(),
        "Parsed SBOM document"
    );
    Ok(doc)
}
