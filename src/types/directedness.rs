//! Directed / undirected mode of a graph or an edge.

use serde::Serialize;

/// Whether edges are one-way or two-way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Directedness {
    /// Edges run from source to target only; no symmetry is required.
    Directed,
    /// Every edge is stored on both endpoints and must be mutually listed.
    #[default]
    Undirected,
}

impl Directedness {
    /// Map a boolean `directed` flag onto a mode.
    pub fn from_flag(directed: bool) -> Self {
        if directed {
            Self::Directed
        } else {
            Self::Undirected
        }
    }

    /// True for [`Directedness::Directed`].
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed)
    }

    /// Return a human-readable name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }

    /// Parse a mode from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "directed" | "digraph" => Some(Self::Directed),
            "undirected" | "graph" => Some(Self::Undirected),
            _ => None,
        }
    }
}

impl std::fmt::Display for Directedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
