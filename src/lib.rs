//! adjacency-graph: adjacency-list graphs over integer vertices.
//!
//! An [`AdjacencyGraph`] maps each vertex to an ordered list of neighbors and
//! keeps per-vertex degrees plus vertex and edge counts in step with every
//! mutation. Undirected graphs must be symmetric: every neighbor relation is
//! listed on both endpoints.

pub mod cli;
pub mod data;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::AdjacencyReader;
pub use graph::{check_symmetry, AdjacencyGraph, GraphBuilder, GraphStats};
pub use types::{AdjacencyList, Directedness, GraphError, GraphResult, VertexId};
