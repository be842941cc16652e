//! Relationship filtering.
//!
//! Translates raw parent/child relationships into node-identity edges.
//! Relationships whose endpoints never resolved to a registered node are
//! dropped with a warning; duplicate (source, target) pairs collapse to one
//! edge keeping the first-seen label. Self-loops survive this stage (the
//! reducer treats them as trivially redundant) so the working adjacency
//! matches the source document.

use std::collections::HashSet;

use crate::graph::NodeRegistry;
use crate::model::{Edge, NodeId, RelationshipRecord};

/// Counters describing what the filter discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Relationships referencing an undeclared raw id
    pub dangling: usize,
    /// Repeated (source, target) pairs collapsed
    pub duplicates: usize,
    /// Relationships resolving to a self-loop
    pub self_loops: usize,
}

/// Filtered relationships plus discard counters.
#[derive(Debug, Clone, Default)]
pub struct FilteredRelationships {
    /// Surviving edges in input order, one per (source, target) pair
    pub edges: Vec<Edge>,
    /// What was dropped along the way
    pub stats: FilterStats,
}

/// Resolve raw relationships through the registry into edges.
#[must_use]
pub fn filter_relationships(
    registry: &NodeRegistry,
    relationships: &[RelationshipRecord],
) -> FilteredRelationships {
    let mut edges = Vec::new();
    let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut stats = FilterStats::default();

    for rel in relationships {
        let (Some(source), Some(target)) =
            (registry.resolve(&rel.parent), registry.resolve(&rel.child))
        else {
            stats.dangling += 1;
            tracing::warn!(
                parent = %rel.parent,
                child = %rel.child,
                "Dropping relationship with undeclared endpoint"
            );
            continue;
        };

        if source == target {
            stats.self_loops += 1;
        }

        let pair = (source.clone(), target.clone());
        if !seen.insert(pair) {
            stats.duplicates += 1;
            continue;
        }

        edges.push(Edge {
            source: source.clone(),
            target: target.clone(),
            label: rel.relationship_type.clone(),
        });
    }

    FilteredRelationships { edges, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArtifactRecord;

    fn relationship(parent: &str, child: &str, kind: &str) -> RelationshipRecord {
        RelationshipRecord {
            parent: parent.to_string(),
            child: child.to_string(),
            relationship_type: kind.to_string(),
        }
    }

    fn registry_with(names: &[(&str, &str)]) -> NodeRegistry {
        let mut registry = NodeRegistry::new();
        for (id, name) in names {
            registry.register_artifact(&ArtifactRecord {
                id: (*id).to_string(),
                name: (*name).to_string(),
                version: "1.0".to_string(),
                package_type: String::new(),
            });
        }
        registry
    }

    #[test]
    fn test_dangling_relationship_dropped() {
        let registry = registry_with(&[("a1", "foo")]);
        let filtered = filter_relationships(
            &registry,
            &[
                relationship("a1", "missing", "dependency-of"),
                relationship("missing", "a1", "dependency-of"),
            ],
        );
        assert!(filtered.edges.is_empty());
        assert_eq!(filtered.stats.dangling, 2);
    }

    #[test]
    fn test_duplicate_pairs_keep_first_label() {
        let registry = registry_with(&[("a1", "foo"), ("a2", "bar")]);
        let filtered = filter_relationships(
            &registry,
            &[
                relationship("a1", "a2", "dependency-of"),
                relationship("a1", "a2", "contains"),
            ],
        );
        assert_eq!(filtered.edges.len(), 1);
        assert_eq!(filtered.edges[0].label, "dependency-of");
        assert_eq!(filtered.stats.duplicates, 1);
    }

    #[test]
    fn test_duplicate_raw_ids_collapse_to_one_pair() {
        // Two raw records for the same package, each related to the same child:
        // after dedup both relationships resolve to the same (source, target).
        let registry = registry_with(&[("a1", "libfoo"), ("a2", "libfoo"), ("b1", "bar")]);
        let filtered = filter_relationships(
            &registry,
            &[
                relationship("a1", "b1", "dependency-of"),
                relationship("a2", "b1", "dependency-of"),
            ],
        );
        assert_eq!(filtered.edges.len(), 1);
        assert_eq!(filtered.stats.duplicates, 1);
    }

    #[test]
    fn test_self_loops_survive_filter() {
        let registry = registry_with(&[("a1", "foo")]);
        let filtered = filter_relationships(&registry, &[relationship("a1", "a1", "contains")]);
        assert_eq!(filtered.edges.len(), 1);
        assert_eq!(filtered.stats.self_loops, 1);
    }
}
