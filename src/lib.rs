//! **SBOM dependency graph visualizer.**
//!
//! `sbom-viz` turns a Syft-style SBOM JSON document into a simplified
//! directed dependency graph and renders it with Graphviz. The pipeline:
//!
//! 1. Parse the document ([`parsers`]) into raw package/file records.
//! 2. Deduplicate records into nodes ([`graph::NodeRegistry`]): packages
//!    collapse on (name, version), files on normalized path.
//! 3. Filter relationships ([`graph::filter_relationships`]): dangling
//!    references are dropped with a warning, duplicate pairs collapse.
//! 4. Transitively reduce the edge set ([`graph::transitive_reduction`]):
//!    an edge is removed when the remaining edges already provide a
//!    directed path between its endpoints.
//! 5. Emit DOT and invoke the `dot` backend ([`render`]).
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use sbom_viz::{build_graph, parse_sbom};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let doc = parse_sbom(Path::new("host.syft.json"))?;
//!     let (graph, stats) = build_graph(&doc, true);
//!
//!     println!(
//!         "{} nodes, {} edges ({} redundant removed)",
//!         graph.nodes.len(),
//!         graph.edges.len(),
//!         stats.redundant_edges
//!     );
//!     Ok(())
//! }
//! ```

#![warn(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod graph;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod render;

pub use config::RenderConfig;
pub use error::{Result, SbomVizError};
pub use graph::{filter_relationships, transitive_reduction, NodeRegistry};
pub use model::{DedupKey, Edge, Graph, Node, NodeId, NodeKind, SbomDocument};
pub use parsers::{parse_sbom, parse_sbom_str};
pub use pipeline::{build_graph, run_render, GraphStats};
pub use render::{generate_dot, render_graph, ImageFormat};
