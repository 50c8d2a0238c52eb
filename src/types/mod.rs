//! Shared data types for the adjacency-graph library.

pub mod directedness;
pub mod error;

pub use directedness::Directedness;
pub use error::{GraphError, GraphResult};

/// Vertex identifier: a unique integer key into the adjacency mapping.
pub type VertexId = i64;

/// Owned adjacency mapping in insertion order, as produced by the input
/// readers and consumed by [`crate::graph::AdjacencyGraph::from_adjacency`].
pub type AdjacencyList = Vec<(VertexId, Vec<VertexId>)>;
