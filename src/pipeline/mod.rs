//! Graph construction and render pipeline.
//!
//! Single-threaded, synchronous: parse the document, register nodes, filter
//! relationships, reduce (unless disabled), hand the result to the renderer.
//! Nodes and the raw-id map are built once and never mutated afterwards; the
//! reducer only removes edges.

use std::path::PathBuf;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::graph::{
    drop_self_loops, filter_relationships, transitive_reduction, FilterStats, NodeRegistry,
};
use crate::model::{Graph, SbomDocument};
use crate::parsers::parse_sbom;
use crate::render::{generate_dot, open_viewer, render_graph};

/// Summary of one graph build, for diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphStats {
    /// Raw package records in the document
    pub total_packages: usize,
    /// Raw file records in the document
    pub total_files: usize,
    /// Unique nodes after dedup
    pub unique_nodes: usize,
    /// Raw relationships in the document
    pub total_relationships: usize,
    /// Edges surviving filtering and reduction
    pub surviving_edges: usize,
    /// Edges removed as redundant by the reducer
    pub redundant_edges: usize,
    /// Filter discard counters
    pub filter: FilterStats,
}

/// Build the deduplicated, optionally reduced graph from a parsed document.
#[must_use]
pub fn build_graph(doc: &SbomDocument, reduce: bool) -> (Graph, GraphStats) {
    let mut registry = NodeRegistry::new();
    for artifact in &doc.artifacts {
        registry.register_artifact(artifact);
    }
    for file in &doc.files {
        registry.register_file(file);
    }

    tracing::info!(
        packages = doc.artifacts.len(),
        files = doc.files.len(),
        unique_nodes = registry.node_count(),
        duplicate_packages = registry.duplicate_packages(),
        duplicate_files = registry.duplicate_files(),
        "Deduplicated records"
    );

    let filtered = filter_relationships(&registry, &doc.relationships);
    let candidate_count = filtered.edges.len();

    let edges = if reduce {
        transitive_reduction(&filtered.edges)
    } else {
        drop_self_loops(&filtered.edges)
    };

    let stats = GraphStats {
        total_packages: doc.artifacts.len(),
        total_files: doc.files.len(),
        unique_nodes: registry.node_count(),
        total_relationships: doc.relationships.len(),
        surviving_edges: edges.len(),
        redundant_edges: candidate_count.saturating_sub(edges.len()),
        filter: filtered.stats,
    };

    tracing::info!(
        relationships = stats.total_relationships,
        dangling = stats.filter.dangling,
        duplicates = stats.filter.duplicates,
        surviving = stats.surviving_edges,
        redundant = stats.redundant_edges,
        "Filtered and reduced relationships"
    );

    let graph = Graph {
        nodes: registry.into_nodes(),
        edges,
    };
    debug_assert!(graph.is_consistent());
    (graph, stats)
}

/// Run the full pipeline: parse, build, render, optionally open the result.
/// Returns the path of the rendered file.
pub fn run_render(config: &RenderConfig) -> Result<PathBuf> {
    let doc = parse_sbom(&config.input)?;
    let (graph, _stats) = build_graph(&doc, config.reduce);

    let dot_source = generate_dot(&graph);
    let output = config.output_path();
    render_graph(&dot_source, &output, config.format)?;
    tracing::info!(output = %output.display(), "Rendered dependency graph");

    if config.open {
        open_viewer(&output);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_sbom_str;

    fn doc(json: &str) -> SbomDocument {
        parse_sbom_str(json).expect("fixture should parse")
    }

    #[test]
    fn test_build_graph_dedups_and_reduces() {
        let doc = doc(r#"{
            "artifacts": [
                {"id": "a1", "name": "libfoo", "version": "1.0"},
                {"id": "a2", "name": "libfoo", "version": "1.0"}
            ],
            "files": [
                {"id": "f1", "location": {"path": "/lib/libfoo.so.1"}}
            ],
            "artifactRelationships": [
                {"parent": "a1", "child": "f1", "type": "contains"},
                {"parent": "a2", "child": "f1", "type": "contains"}
            ]
        }"#);
        let (graph, stats) = build_graph(&doc, true);
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(stats.unique_nodes, 2);
        assert_eq!(stats.filter.duplicates, 1);
        assert!(graph.is_consistent());
    }

    #[test]
    fn test_no_reduce_keeps_redundant_edges() {
        let doc = doc(r#"{
            "artifacts": [
                {"id": "a", "name": "a", "version": "1"},
                {"id": "b", "name": "b", "version": "1"},
                {"id": "c", "name": "c", "version": "1"}
            ],
            "artifactRelationships": [
                {"parent": "a", "child": "b", "type": "dependency-of"},
                {"parent": "b", "child": "c", "type": "dependency-of"},
                {"parent": "a", "child": "c", "type": "dependency-of"}
            ]
        }"#);
        let (reduced, _) = build_graph(&doc, true);
        let (literal, _) = build_graph(&doc, false);
        assert_eq!(reduced.edges.len(), 2);
        assert_eq!(literal.edges.len(), 3);
    }
}
