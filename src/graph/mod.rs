//! In-memory adjacency graph, the core data structure.

pub mod adjacency_graph;
pub mod builder;
pub mod stats;

pub use adjacency_graph::{check_symmetry, AdjacencyGraph};
pub use builder::GraphBuilder;
pub use stats::GraphStats;
