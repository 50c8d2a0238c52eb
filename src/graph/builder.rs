//! Fluent API for building AdjacencyGraph instances.

use std::collections::HashMap;

use crate::types::{Directedness, GraphResult, VertexId};

use super::AdjacencyGraph;

/// Fluent builder for constructing an [`AdjacencyGraph`].
///
/// Nothing is checked while building; [`GraphBuilder::build`] runs the same
/// validation as [`AdjacencyGraph::from_adjacency`].
pub struct GraphBuilder {
    directedness: Directedness,
    vertices: Vec<VertexId>,
    lists: HashMap<VertexId, Vec<VertexId>>,
}

impl GraphBuilder {
    /// Create a new builder with the given directedness.
    pub fn new(directedness: Directedness) -> Self {
        Self {
            directedness,
            vertices: Vec::new(),
            lists: HashMap::new(),
        }
    }

    /// Create a builder for a directed graph.
    pub fn directed() -> Self {
        Self::new(Directedness::Directed)
    }

    /// Create a builder for an undirected graph.
    pub fn undirected() -> Self {
        Self::new(Directedness::Undirected)
    }

    fn list_mut(&mut self, v: VertexId) -> &mut Vec<VertexId> {
        if !self.lists.contains_key(&v) {
            self.vertices.push(v);
        }
        self.lists.entry(v).or_default()
    }

    /// Add a vertex (no-op if it is already present).
    pub fn vertex(&mut self, v: VertexId) -> &mut Self {
        self.list_mut(v);
        self
    }

    /// Replace the neighbor list of `v`.
    ///
    /// The list is taken as-is, so an undirected builder fed one-sided lists
    /// will fail in [`GraphBuilder::build`].
    pub fn neighbors<N>(&mut self, v: VertexId, neighbors: N) -> &mut Self
    where
        N: IntoIterator<Item = VertexId>,
    {
        *self.list_mut(v) = neighbors.into_iter().collect();
        self
    }

    /// Add an edge; stored on both endpoints when the builder is undirected.
    pub fn edge(&mut self, x: VertexId, y: VertexId) -> &mut Self {
        self.list_mut(x).push(y);
        if self.directedness == Directedness::Undirected {
            self.list_mut(y).push(x);
        } else {
            self.list_mut(y);
        }
        self
    }

    /// Build the final graph.
    pub fn build(&mut self) -> GraphResult<AdjacencyGraph> {
        let mut lists = std::mem::take(&mut self.lists);
        let mapping: Vec<(VertexId, Vec<VertexId>)> = std::mem::take(&mut self.vertices)
            .into_iter()
            .map(|v| {
                let neighbors = lists.remove(&v).unwrap_or_default();
                (v, neighbors)
            })
            .collect();
        AdjacencyGraph::from_adjacency(mapping, self.directedness)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::undirected()
    }
}
