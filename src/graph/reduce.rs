//! Transitive reduction of the dependency edge set.
//!
//! Removes every edge (u, v) for which an alternate directed path from u to
//! v exists using the remaining edges, preserving the reachability relation
//! of the input graph. Edges are processed in input order with the adjacency
//! mutated incrementally, so when several edges are only redundant in
//! combination (e.g. a cycle of mutually implied edges) the surviving set can
//! depend on input order. That is accepted: the contract is reachability
//! equivalence, not a canonical minimum.
//!
//! Redundancy testing is a single visited-set BFS per candidate edge, which
//! terminates on cyclic graphs and keeps the overall cost at O(E * (V + E)).

use std::collections::{HashMap, HashSet, VecDeque};

use crate::model::{Edge, NodeId};

/// Reduce an edge list to its non-redundant subset, in input order.
///
/// Duplicate (source, target) pairs beyond the first and self-loops are
/// treated as trivially redundant and never survive.
#[must_use]
pub fn transitive_reduction(edges: &[Edge]) -> Vec<Edge> {
    let mut adj: HashMap<NodeId, HashSet<NodeId>> = HashMap::new();
    let mut candidates = Vec::with_capacity(edges.len());
    let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();

    for edge in edges {
        if edge.source == edge.target {
            tracing::debug!(node = %edge.source, "Skipping self-loop");
            continue;
        }
        if !seen.insert((edge.source.clone(), edge.target.clone())) {
            continue;
        }
        adj.entry(edge.source.clone())
            .or_default()
            .insert(edge.target.clone());
        candidates.push(edge);
    }

    let mut kept = Vec::with_capacity(candidates.len());
    for edge in candidates {
        // Remove the edge, test whether the target is still reachable, and
        // restore only if it is not. A redundant edge stays removed so later
        // checks run against the shrinking graph.
        if let Some(targets) = adj.get_mut(&edge.source) {
            targets.remove(&edge.target);
        }
        if is_reachable(&adj, &edge.source, &edge.target) {
            tracing::debug!(
                source = %edge.source,
                target = %edge.target,
                "Dropping redundant edge"
            );
        } else {
            adj.entry(edge.source.clone())
                .or_default()
                .insert(edge.target.clone());
            kept.push(edge.clone());
        }
    }

    kept
}

/// Drop self-loops and duplicate pairs without reducing.
///
/// Used when reduction is disabled: self-loops never reach the exported edge
/// set regardless of mode.
#[must_use]
pub fn drop_self_loops(edges: &[Edge]) -> Vec<Edge> {
    let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();
    edges
        .iter()
        .filter(|e| e.source != e.target)
        .filter(|e| seen.insert((e.source.clone(), e.target.clone())))
        .cloned()
        .collect()
}

/// Breadth-first reachability with a visited set; terminates on cycles.
#[must_use]
pub fn is_reachable(adj: &HashMap<NodeId, HashSet<NodeId>>, start: &NodeId, goal: &NodeId) -> bool {
    let mut visited: HashSet<&NodeId> = HashSet::new();
    let mut queue: VecDeque<&NodeId> = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let Some(targets) = adj.get(current) else {
            continue;
        };
        for next in targets {
            if next == goal {
                return true;
            }
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
    false
}
