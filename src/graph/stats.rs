//! Serializable snapshot of a graph's derived statistics.

use serde::Serialize;

use crate::types::{Directedness, VertexId};

use super::AdjacencyGraph;

/// Vertex count, edge count and degrees at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// `None` for a graph that was reset and has not received an edge since.
    pub directedness: Option<Directedness>,
    pub n_vertices: usize,
    pub n_edges: usize,
    /// `(vertex, degree)` in insertion order.
    pub degrees: Vec<(VertexId, usize)>,
    pub max_degree: Option<usize>,
    pub min_degree: Option<usize>,
}

impl GraphStats {
    /// Collect statistics from a graph.
    pub fn from_graph(graph: &AdjacencyGraph) -> Self {
        let degrees: Vec<(VertexId, usize)> = graph.degrees().collect();
        Self {
            directedness: graph.directedness(),
            n_vertices: graph.vertex_count(),
            n_edges: graph.edge_count(),
            max_degree: degrees.iter().map(|&(_, d)| d).max(),
            min_degree: degrees.iter().map(|&(_, d)| d).min(),
            degrees,
        }
    }

    /// Sum of all degrees.
    pub fn total_degree(&self) -> usize {
        self.degrees.iter().map(|&(_, d)| d).sum()
    }
}
