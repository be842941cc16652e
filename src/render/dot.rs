//! DOT source generation.
//!
//! Pure translation of a finalized [`Graph`] into Graphviz DOT text.
//! Packages render as light-blue boxes, files as light-green ellipses;
//! edges carry the relationship type as label and tooltip. Layout itself
//! belongs to Graphviz.

use std::fmt::Write as _;

use crate::model::{Graph, NodeKind};

/// Render a graph to DOT source.
#[must_use]
pub fn generate_dot(graph: &Graph) -> String {
    let mut out = String::new();
    out.push_str("digraph sbom {\n");
    out.push_str("  rankdir=LR;\n");
    out.push_str("  node [fontname=\"Arial\"];\n");

    for node in graph.nodes.values() {
        let (shape, fillcolor) = match node.kind {
            NodeKind::Package => ("box", "lightblue"),
            NodeKind::File => ("ellipse", "lightgreen"),
        };
        let tooltip = node
            .attributes
            .get("type")
            .map_or_else(String::new, |t| format!("Type: {t}"));
        let _ = writeln!(
            out,
            "  {} [label=\"{}\", shape={shape}, style=filled, fillcolor={fillcolor}, tooltip=\"{}\"];",
            node.id,
            escape(&node.label),
            escape(&tooltip),
        );
    }

    for edge in &graph.edges {
        let label = escape(&edge.label);
        let _ = writeln!(
            out,
            "  {} -> {} [label=\"{label}\", tooltip=\"{label}\", color=gray];",
            edge.source, edge.target,
        );
    }

    out.push_str("}\n");
    out
}

/// Escape a string for use inside a DOT double-quoted literal.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
