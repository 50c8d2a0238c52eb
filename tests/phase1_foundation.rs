//! Phase 1 tests: construction, validation, derived statistics.

use std::collections::{BTreeMap, HashMap};

use adjacency_graph::data;
use adjacency_graph::graph::AdjacencyGraph;
use adjacency_graph::types::{Directedness, GraphError, VertexId};

fn example_map() -> BTreeMap<VertexId, Vec<VertexId>> {
    data::example_adjacency().into_iter().collect()
}

// ==================== Construction Tests ====================

#[test]
fn test_example_graph_counts() {
    let graph = AdjacencyGraph::from_adjacency(example_map(), Directedness::Undirected).unwrap();
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 7);
    assert_eq!(graph.degree(0), Some(3));
    assert_eq!(graph.degree(5), Some(1));
    assert_eq!(graph.directedness(), Some(Directedness::Undirected));
}

#[test]
fn test_degrees_match_listed_neighbors() {
    let mapping = example_map();
    let graph =
        AdjacencyGraph::from_adjacency(mapping.clone(), Directedness::Undirected).unwrap();
    for (v, neighbors) in &mapping {
        assert_eq!(graph.degree(*v), Some(neighbors.len()));
    }
}

#[test]
fn test_hashmap_input() {
    let mapping: HashMap<VertexId, Vec<VertexId>> = data::example_adjacency().into_iter().collect();
    let graph = AdjacencyGraph::from_adjacency(mapping, Directedness::Undirected).unwrap();
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 7);
}

#[test]
fn test_vertices_follow_input_order() {
    let graph = AdjacencyGraph::from_adjacency(
        vec![(9, vec![]), (-3, vec![]), (4, vec![])],
        Directedness::Undirected,
    )
    .unwrap();
    assert_eq!(graph.vertices(), vec![9, -3, 4]);
}

#[test]
fn test_empty_graph() {
    let graph = AdjacencyGraph::default();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.vertices().is_empty());
    assert_eq!(graph.directedness(), Some(Directedness::Undirected));
}

#[test]
fn test_empty_constructors_do_not_share_state() {
    let mut a = AdjacencyGraph::undirected();
    let b = AdjacencyGraph::undirected();
    a.add_vertex(1);
    assert_eq!(a.vertex_count(), 1);
    assert_eq!(b.vertex_count(), 0);
}

// ==================== Symmetry Validation Tests ====================

#[test]
fn test_one_sided_pair_rejected() {
    let result = AdjacencyGraph::from_adjacency(
        vec![(0, vec![1]), (1, vec![])],
        Directedness::Undirected,
    );
    match result.unwrap_err() {
        GraphError::Asymmetric { u, v, missing } => {
            assert_eq!((u, v), (0, 1));
            assert_eq!(missing, 1);
        }
        e => panic!("Expected Asymmetric error, got {:?}", e),
    }
}

#[test]
fn test_neighbor_without_key_rejected() {
    let result = AdjacencyGraph::from_adjacency(vec![(0, vec![3])], Directedness::Undirected);
    match result.unwrap_err() {
        GraphError::Asymmetric { u: 0, v: 3, .. } => {}
        e => panic!("Expected Asymmetric(0, 3), got {:?}", e),
    }
}

#[test]
fn test_all_one_sided_pairs_counted() {
    let result = AdjacencyGraph::from_adjacency(
        vec![(0, vec![1, 2]), (1, vec![]), (2, vec![])],
        Directedness::Undirected,
    );
    match result.unwrap_err() {
        GraphError::Asymmetric { missing: 2, .. } => {}
        e => panic!("Expected two one-sided pairs, got {:?}", e),
    }
}

#[test]
fn test_asymmetry_error_message_names_pair() {
    let err = AdjacencyGraph::from_adjacency(
        vec![(2, vec![7]), (7, vec![])],
        Directedness::Undirected,
    )
    .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("2 lists 7"));
}

#[test]
fn test_directed_skips_symmetry() {
    let graph = AdjacencyGraph::from_adjacency(
        vec![(0, vec![1, 2]), (1, vec![2]), (2, vec![])],
        Directedness::Directed,
    )
    .unwrap();
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.degree(0), Some(2));
    assert_eq!(graph.degree(2), Some(0));
}

#[test]
fn test_directed_neighbor_need_not_be_key() {
    let graph =
        AdjacencyGraph::from_adjacency(vec![(0, vec![5])], Directedness::Directed).unwrap();
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.edge_count(), 1);
    assert!(!graph.contains_vertex(5));
}

#[test]
fn test_duplicate_key_rejected() {
    let result = AdjacencyGraph::from_adjacency(
        vec![(1, vec![]), (1, vec![])],
        Directedness::Directed,
    );
    match result.unwrap_err() {
        GraphError::DuplicateVertex(1) => {}
        e => panic!("Expected DuplicateVertex(1), got {:?}", e),
    }
}

// ==================== Edge Count Tests ====================

#[test]
fn test_undirected_edge_count_halves_degree_sum() {
    let graph = data::house().unwrap();
    let total: usize = graph.degrees().map(|(_, d)| d).sum();
    assert_eq!(graph.edge_count(), total / 2);
}

#[test]
fn test_directed_edge_count_is_degree_sum() {
    let graph = AdjacencyGraph::from_adjacency(
        vec![(0, vec![1, 1, 2]), (1, vec![0]), (2, vec![])],
        Directedness::Directed,
    )
    .unwrap();
    let total: usize = graph.degrees().map(|(_, d)| d).sum();
    assert_eq!(total, 4);
    assert_eq!(graph.edge_count(), total);
}

#[test]
fn test_parallel_edges_and_self_loops_permitted() {
    let graph = AdjacencyGraph::from_adjacency(
        vec![(0, vec![1, 1, 0]), (1, vec![0, 0])],
        Directedness::Undirected,
    )
    .unwrap();
    assert_eq!(graph.degree(0), Some(3));
    assert_eq!(graph.degree(1), Some(2));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_degree_sequence_sorted_descending() {
    let graph = data::example().unwrap();
    assert_eq!(graph.degree_sequence(), vec![3, 3, 3, 2, 2, 1]);
}

#[test]
fn test_degree_map() {
    let graph = data::example().unwrap();
    let degrees = graph.degree_map();
    assert_eq!(degrees.len(), 6);
    assert_eq!(degrees[&4], 3);
    assert_eq!(degrees[&2], 2);
}

// ==================== Reset Tests ====================

#[test]
fn test_reset_clears_everything() {
    let mut graph = data::example().unwrap();
    graph.reset();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.degree_map().is_empty());
    assert!(graph.vertices().is_empty());
    assert_eq!(graph.directedness(), None);
    assert_eq!(graph.degree(0), None);
}

#[test]
fn test_reset_then_rebuild() {
    let mut graph = data::rock_paper_scissors().unwrap();
    graph.reset();
    graph.add_undirected_edge(10, 11).unwrap();
    assert_eq!(graph.directedness(), Some(Directedness::Undirected));
    assert_eq!(graph.vertices(), vec![10, 11]);
    assert_eq!(graph.edge_count(), 1);
}

// ==================== Stats Tests ====================

#[test]
fn test_stats_snapshot() {
    let stats = data::example().unwrap().stats();
    assert_eq!(stats.n_vertices, 6);
    assert_eq!(stats.n_edges, 7);
    assert_eq!(stats.max_degree, Some(3));
    assert_eq!(stats.min_degree, Some(1));
    assert_eq!(stats.total_degree(), 14);
    assert_eq!(stats.degrees[0], (0, 3));
}
