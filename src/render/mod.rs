//! Rendering: DOT source generation and Graphviz backend invocation.

mod dot;
mod graphviz;

pub use dot::generate_dot;
pub use graphviz::{open_viewer, render_graph, ImageFormat};
