//! Graph construction: node deduplication, relationship filtering, and
//! transitive reduction.

mod filter;
mod reduce;
mod registry;

pub use filter::{filter_relationships, FilterStats, FilteredRelationships};
pub use reduce::{drop_self_loops, is_reachable, transitive_reduction};
pub use registry::NodeRegistry;
