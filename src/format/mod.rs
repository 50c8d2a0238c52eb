//! Input readers for adjacency mappings.

pub mod reader;

pub use reader::AdjacencyReader;
