//! Small named example graphs.

use crate::graph::AdjacencyGraph;
use crate::types::{AdjacencyList, Directedness, GraphResult};

/// Names accepted by [`by_name`].
pub const PRESET_NAMES: [&str; 3] = ["example", "house", "rock_paper_scissors"];

/// Six-vertex undirected graph: 6 vertices, 7 edges.
pub fn example_adjacency() -> AdjacencyList {
    vec![
        (0, vec![1, 4, 5]),
        (1, vec![0, 2, 4]),
        (2, vec![1, 3]),
        (3, vec![2, 4]),
        (4, vec![0, 1, 3]),
        (5, vec![0]),
    ]
}

/// The six-vertex example graph.
pub fn example() -> GraphResult<AdjacencyGraph> {
    AdjacencyGraph::from_adjacency(example_adjacency(), Directedness::Undirected)
}

/// House graph: edges 0-1, 0-4, 1-2, 1-4, 2-3, 3-4.
pub fn house() -> GraphResult<AdjacencyGraph> {
    AdjacencyGraph::from_adjacency(
        vec![
            (0, vec![1, 4]),
            (1, vec![0, 2, 4]),
            (2, vec![1, 3]),
            (3, vec![2, 4]),
            (4, vec![0, 1, 3]),
        ],
        Directedness::Undirected,
    )
}

/// Directed three-cycle 0 -> 1 -> 2 -> 0.
pub fn rock_paper_scissors() -> GraphResult<AdjacencyGraph> {
    AdjacencyGraph::from_adjacency(
        vec![(0, vec![1]), (1, vec![2]), (2, vec![0])],
        Directedness::Directed,
    )
}

/// Look up a preset by name.
pub fn by_name(name: &str) -> Option<GraphResult<AdjacencyGraph>> {
    match name.to_lowercase().as_str() {
        "example" => Some(example()),
        "house" => Some(house()),
        "rock_paper_scissors" | "rps" => Some(rock_paper_scissors()),
        _ => None,
    }
}
