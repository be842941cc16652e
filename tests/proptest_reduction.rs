//! Property-based tests for transitive reduction.
//!
//! The contract is reachability equivalence with the input graph, not a
//! canonical minimum edge set: the surviving edges may differ under edge
//! reordering, so order-shuffle tests compare reachability relations, never
//! edge sets.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use sbom_viz::graph::is_reachable;
use sbom_viz::{transitive_reduction, DedupKey, Edge, NodeId};

const POOL: usize = 8;

fn node(index: usize) -> NodeId {
    NodeId::from_key(&DedupKey::Package {
        name: format!("pkg{index}"),
        version: "1".to_string(),
    })
}

fn edges_from_pairs(pairs: &[(usize, usize)]) -> Vec<Edge> {
    pairs
        .iter()
        .map(|(s, t)| Edge {
            source: node(s % POOL),
            target: node(t % POOL),
            label: "dependency-of".to_string(),
        })
        .collect()
}

fn adjacency(edges: &[Edge]) -> HashMap<NodeId, HashSet<NodeId>> {
    let mut adj: HashMap<NodeId, HashSet<NodeId>> = HashMap::new();
    for edge in edges {
        adj.entry(edge.source.clone())
            .or_default()
            .insert(edge.target.clone());
    }
    adj
}

/// Reachability relation over all distinct node pairs in the pool.
fn reachability(edges: &[Edge]) -> HashSet<(usize, usize)> {
    let adj = adjacency(edges);
    let mut relation = HashSet::new();
    for a in 0..POOL {
        for b in 0..POOL {
            if a != b && is_reachable(&adj, &node(a), &node(b)) {
                relation.insert((a, b));
            }
        }
    }
    relation
}

fn edge_pairs() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..POOL, 0..POOL), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn reduction_preserves_reachability(pairs in edge_pairs()) {
        let edges = edges_from_pairs(&pairs);
        let reduced = transitive_reduction(&edges);
        prop_assert_eq!(reachability(&edges), reachability(&reduced));
    }

    #[test]
    fn reduction_is_idempotent(pairs in edge_pairs()) {
        let edges = edges_from_pairs(&pairs);
        let once = transitive_reduction(&edges);
        let twice = transitive_reduction(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn no_surviving_edge_is_redundant(pairs in edge_pairs()) {
        let edges = edges_from_pairs(&pairs);
        let reduced = transitive_reduction(&edges);
        for edge in &reduced {
            let mut adj = adjacency(&reduced);
            if let Some(targets) = adj.get_mut(&edge.source) {
                targets.remove(&edge.target);
            }
            prop_assert!(
                !is_reachable(&adj, &edge.source, &edge.target),
                "edge {} -> {} is still implied by the rest",
                edge.source,
                edge.target
            );
        }
    }

    #[test]
    fn reordered_input_gives_equivalent_reachability(
        pairs in edge_pairs().prop_shuffle().prop_flat_map(|shuffled| {
            (Just(shuffled.clone()), Just(shuffled).prop_shuffle())
        })
    ) {
        let (original, shuffled) = pairs;
        let reduced_a = transitive_reduction(&edges_from_pairs(&original));
        let reduced_b = transitive_reduction(&edges_from_pairs(&shuffled));
        // Edge sets may legitimately differ; the reachability relation may not.
        prop_assert_eq!(reachability(&reduced_a), reachability(&reduced_b));
    }

    #[test]
    fn self_loops_never_survive(pairs in edge_pairs()) {
        let edges = edges_from_pairs(&pairs);
        let reduced = transitive_reduction(&edges);
        prop_assert!(reduced.iter().all(|e| e.source != e.target));
    }

    #[test]
    fn output_is_subset_of_input(pairs in edge_pairs()) {
        let edges = edges_from_pairs(&pairs);
        let input_pairs: HashSet<(NodeId, NodeId)> = edges
            .iter()
            .map(|e| (e.source.clone(), e.target.clone()))
            .collect();
        for edge in transitive_reduction(&edges) {
            prop_assert!(input_pairs.contains(&(edge.source, edge.target)));
        }
    }
}
