//! Core graph structure: vertices with ordered neighbor lists and degrees.

use std::collections::HashMap;

use crate::types::{Directedness, GraphError, GraphResult, VertexId};

use super::stats::GraphStats;

/// Adjacency-list graph over integer vertices.
///
/// Vertices keep their insertion order. Neighbor lists keep insertion order
/// and may contain repeated entries (parallel edges) or the vertex itself
/// (self-loops). There is no removal; [`AdjacencyGraph::reset`] clears
/// everything at once.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyGraph {
    /// `None` only after [`AdjacencyGraph::reset`], until the next edge.
    directedness: Option<Directedness>,
    /// Vertex ids in insertion order.
    vertices: Vec<VertexId>,
    /// Neighbor lists, parallel to `vertices`.
    adjacency: Vec<Vec<VertexId>>,
    /// Stored entry counts, parallel to `vertices`.
    degrees: Vec<usize>,
    /// Vertex id -> slot in the parallel vectors.
    index: HashMap<VertexId, usize>,
    n_vertices: usize,
    n_edges: usize,
}

impl AdjacencyGraph {
    /// Create a new empty graph with the given directedness.
    pub fn new(directedness: Directedness) -> Self {
        Self {
            directedness: Some(directedness),
            vertices: Vec::new(),
            adjacency: Vec::new(),
            degrees: Vec::new(),
            index: HashMap::new(),
            n_vertices: 0,
            n_edges: 0,
        }
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(Directedness::Directed)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(Directedness::Undirected)
    }

    /// Build a graph from a vertex -> neighbors mapping.
    ///
    /// Any iterable of `(vertex, neighbors)` pairs is accepted, so a
    /// `HashMap<i64, Vec<i64>>`, a `BTreeMap`, or a plain vector of pairs all
    /// work. Vertices are stored in the iteration order of `mapping`.
    ///
    /// For an undirected graph every pair `(u, v)` must be mutually listed;
    /// otherwise [`GraphError::Asymmetric`] names the first one-sided pair and
    /// nothing is constructed. A key that appears twice yields
    /// [`GraphError::DuplicateVertex`].
    pub fn from_adjacency<I, N>(mapping: I, directedness: Directedness) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (VertexId, N)>,
        N: IntoIterator<Item = VertexId>,
    {
        let mut graph = Self::new(directedness);

        for (vertex, neighbors) in mapping {
            if graph.index.contains_key(&vertex) {
                return Err(GraphError::DuplicateVertex(vertex));
            }
            graph.index.insert(vertex, graph.vertices.len());
            graph.vertices.push(vertex);
            graph.adjacency.push(neighbors.into_iter().collect());
        }

        if directedness == Directedness::Undirected {
            let one_sided = find_one_sided(graph.adjacency(), |v| graph.neighbors(v));
            if let Some(&(u, v)) = one_sided.first() {
                for &(a, b) in &one_sided {
                    log::warn!("One-sided relation in undirected graph: {} -> {}", a, b);
                }
                return Err(GraphError::Asymmetric {
                    u,
                    v,
                    missing: one_sided.len(),
                });
            }
        }

        graph.recompute_stats();
        log::debug!(
            "Built {} graph with {} vertices and {} edges",
            directedness,
            graph.n_vertices,
            graph.n_edges
        );
        Ok(graph)
    }

    /// Clear all state, including the directedness.
    ///
    /// The next [`AdjacencyGraph::add_edge`] call configures the directedness
    /// again from the kind of edge it adds.
    pub fn reset(&mut self) {
        self.directedness = None;
        self.vertices.clear();
        self.adjacency.clear();
        self.degrees.clear();
        self.index.clear();
        self.recompute_stats();
    }

    /// Recompute vertex count, degrees and edge count from the neighbor lists.
    fn recompute_stats(&mut self) {
        self.n_vertices = self.vertices.len();
        self.degrees = self.adjacency.iter().map(Vec::len).collect();
        let total: usize = self.degrees.iter().sum();
        self.n_edges = if self.is_directed() { total } else { total / 2 };
    }

    /// Configured directedness, `None` after a reset.
    pub fn directedness(&self) -> Option<Directedness> {
        self.directedness
    }

    /// True if the graph is configured as directed.
    pub fn is_directed(&self) -> bool {
        self.directedness.is_some_and(|d| d.is_directed())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.n_vertices
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.n_edges
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.n_vertices == 0
    }

    /// Vertex ids in insertion order. Collected fresh on each call.
    pub fn vertices(&self) -> Vec<VertexId> {
        self.vertices.clone()
    }

    /// Whether `v` is a vertex of the graph.
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.index.contains_key(&v)
    }

    /// Neighbor list of `v`, or `None` if `v` is not a vertex.
    pub fn neighbors(&self, v: VertexId) -> Option<&[VertexId]> {
        self.index.get(&v).map(|&slot| self.adjacency[slot].as_slice())
    }

    /// Degree of `v`, or `None` if `v` is not a vertex.
    pub fn degree(&self, v: VertexId) -> Option<usize> {
        self.index.get(&v).map(|&slot| self.degrees[slot])
    }

    /// `(vertex, degree)` pairs in insertion order.
    pub fn degrees(&self) -> impl Iterator<Item = (VertexId, usize)> + '_ {
        self.vertices.iter().copied().zip(self.degrees.iter().copied())
    }

    /// Degree mapping keyed by vertex.
    pub fn degree_map(&self) -> HashMap<VertexId, usize> {
        self.degrees().collect()
    }

    /// All degrees sorted from largest to smallest.
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut seq = self.degrees.clone();
        seq.sort_unstable_by(|a, b| b.cmp(a));
        seq
    }

    /// `(vertex, neighbors)` pairs in insertion order.
    pub fn adjacency(&self) -> impl Iterator<Item = (VertexId, &[VertexId])> + '_ {
        self.vertices
            .iter()
            .copied()
            .zip(self.adjacency.iter().map(Vec::as_slice))
    }

    /// Snapshot of the derived statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats::from_graph(self)
    }

    /// Add a vertex with no neighbors.
    ///
    /// Returns `false` and leaves the graph untouched if `v` already exists.
    pub fn add_vertex(&mut self, v: VertexId) -> bool {
        if self.index.contains_key(&v) {
            log::debug!("No vertex added, vertex {} already present", v);
            return false;
        }
        self.index.insert(v, self.vertices.len());
        self.vertices.push(v);
        self.adjacency.push(Vec::new());
        self.degrees.push(0);
        self.n_vertices += 1;
        log::debug!("Added vertex {}", v);
        true
    }

    /// Add an edge from `x` to `y`, creating either endpoint if needed.
    ///
    /// `kind` must match the graph's directedness; a mismatch is rejected
    /// before anything changes. An undirected edge is stored on both
    /// endpoints. Repeated calls add parallel edges.
    pub fn add_edge(&mut self, x: VertexId, y: VertexId, kind: Directedness) -> GraphResult<()> {
        match self.directedness {
            Some(configured) if configured != kind => {
                return Err(GraphError::DirectednessMismatch {
                    requested: kind,
                    configured,
                });
            }
            Some(_) => {}
            None => self.directedness = Some(kind),
        }

        self.add_vertex(x);
        self.add_vertex(y);
        let sx = self.index[&x];
        let sy = self.index[&y];

        self.adjacency[sx].push(y);
        self.degrees[sx] += 1;
        if kind == Directedness::Undirected {
            self.adjacency[sy].push(x);
            self.degrees[sy] += 1;
        }
        self.n_edges += 1;
        log::debug!("Added {} edge {} -> {}", kind, x, y);
        Ok(())
    }

    /// Add a directed edge `x -> y`.
    pub fn add_directed_edge(&mut self, x: VertexId, y: VertexId) -> GraphResult<()> {
        self.add_edge(x, y, Directedness::Directed)
    }

    /// Add an undirected edge `x -- y`.
    pub fn add_undirected_edge(&mut self, x: VertexId, y: VertexId) -> GraphResult<()> {
        self.add_edge(x, y, Directedness::Undirected)
    }
}

impl Default for AdjacencyGraph {
    fn default() -> Self {
        Self::undirected()
    }
}

/// List every one-sided relation in an undirected adjacency mapping.
///
/// A pair `(u, v)` is reported when `v` is among `u`'s neighbors but `u` is
/// not among `v`'s, including when `v` is not a key at all. Pairs come out in
/// mapping order; an empty result means the mapping is symmetric.
pub fn check_symmetry(mapping: &[(VertexId, Vec<VertexId>)]) -> Vec<(VertexId, VertexId)> {
    let lookup: HashMap<VertexId, &[VertexId]> = mapping
        .iter()
        .map(|(v, ns)| (*v, ns.as_slice()))
        .collect();
    find_one_sided(
        mapping.iter().map(|(v, ns)| (*v, ns.as_slice())),
        |v| lookup.get(&v).copied(),
    )
}

fn find_one_sided<'a, I, F>(entries: I, lookup: F) -> Vec<(VertexId, VertexId)>
where
    I: IntoIterator<Item = (VertexId, &'a [VertexId])>,
    F: Fn(VertexId) -> Option<&'a [VertexId]>,
{
    let mut one_sided = Vec::new();
    for (u, neighbors) in entries {
        for &v in neighbors {
            let mutual = lookup(v).is_some_and(|back| back.contains(&u));
            if !mutual {
                one_sided.push((u, v));
            }
        }
    }
    one_sided
}
