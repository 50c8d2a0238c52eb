//! Error types for the adjacency-graph library.

use thiserror::Error;

use super::{Directedness, VertexId};

/// All errors that can occur in the adjacency-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Construction input is not a mapping from vertex to neighbors.
    #[error("Expected a mapping from vertex to neighbor list, got {0}")]
    NotAMapping(String),

    /// A vertex's neighbors are not given as a sequence.
    #[error("Neighbors of vertex {vertex} must be a sequence, got {found}")]
    NotASequence { vertex: VertexId, found: String },

    /// A vertex identifier is not an integer.
    #[error("Invalid vertex identifier: {0}")]
    InvalidVertexId(String),

    /// The same vertex appears twice as a key in the input mapping.
    #[error("Vertex {0} is listed more than once")]
    DuplicateVertex(VertexId),

    /// Undirected input where some neighbor relation is one-sided.
    #[error(
        "Missing edges in undirected graph: {u} lists {v} but {v} does not list {u} \
         ({missing} one-sided relation(s) in total)"
    )]
    Asymmetric {
        u: VertexId,
        v: VertexId,
        missing: usize,
    },

    /// Edge kind contradicts the graph's configured directedness.
    #[error("Cannot add {requested} edge to {configured} graph")]
    DirectednessMismatch {
        requested: Directedness,
        configured: Directedness,
    },

    /// No built-in graph has this name.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// True for errors raised by the graph's consistency rules, as opposed to
    /// malformed input or I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Asymmetric { .. } | Self::DirectednessMismatch { .. } | Self::DuplicateVertex(_)
        )
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
