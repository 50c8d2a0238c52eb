//! Reads JSON adjacency mappings (`{"0": [1, 4], "1": [0]}`).

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::graph::AdjacencyGraph;
use crate::types::{AdjacencyList, Directedness, GraphError, GraphResult, VertexId};

/// Reader for JSON adjacency input.
///
/// Keys are vertex ids written as strings (JSON object keys are always
/// strings); values are arrays of integers. Key order in the file becomes the
/// vertex order of the graph.
pub struct AdjacencyReader;

impl AdjacencyReader {
    /// Read a JSON adjacency file into an adjacency list.
    pub fn read_from_file(path: &Path) -> GraphResult<AdjacencyList> {
        let data = std::fs::read_to_string(path)?;
        let mapping = Self::parse_str(&data)?;
        log::info!(
            "Loaded {} vertices from {}",
            mapping.len(),
            path.display()
        );
        Ok(mapping)
    }

    /// Read from any reader into an adjacency list.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<AdjacencyList> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Self::parse_str(&data)
    }

    /// Parse JSON text into an adjacency list.
    pub fn parse_str(text: &str) -> GraphResult<AdjacencyList> {
        let value: Value = serde_json::from_str(text)?;
        Self::parse_value(&value)
    }

    /// Convert an already-parsed JSON value into an adjacency list.
    pub fn parse_value(value: &Value) -> GraphResult<AdjacencyList> {
        let object = value
            .as_object()
            .ok_or_else(|| GraphError::NotAMapping(json_kind(value).to_string()))?;

        let mut mapping = Vec::with_capacity(object.len());
        for (key, neighbors) in object {
            let vertex = parse_key(key)?;
            let items = neighbors.as_array().ok_or_else(|| GraphError::NotASequence {
                vertex,
                found: json_kind(neighbors).to_string(),
            })?;
            let list = items
                .iter()
                .map(parse_neighbor)
                .collect::<GraphResult<Vec<VertexId>>>()?;
            mapping.push((vertex, list));
        }
        Ok(mapping)
    }

    /// Read a file and construct a validated graph from it.
    pub fn load_graph(path: &Path, directedness: Directedness) -> GraphResult<AdjacencyGraph> {
        let mapping = Self::read_from_file(path)?;
        AdjacencyGraph::from_adjacency(mapping, directedness)
    }
}

fn parse_key(key: &str) -> GraphResult<VertexId> {
    key.trim()
        .parse::<VertexId>()
        .map_err(|_| GraphError::InvalidVertexId(format!("{:?}", key)))
}

fn parse_neighbor(value: &Value) -> GraphResult<VertexId> {
    value
        .as_i64()
        .ok_or_else(|| GraphError::InvalidVertexId(value.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
