//! CLI command implementations.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::data;
use crate::format::AdjacencyReader;
use crate::graph::{check_symmetry, AdjacencyGraph};
use crate::types::{Directedness, GraphError, GraphResult, VertexId};

/// Where a command takes its graph from.
#[derive(Debug, Clone)]
pub enum GraphSource {
    /// JSON adjacency file, read with the given directedness.
    File(PathBuf, Directedness),
    /// Built-in preset; carries its own directedness.
    Preset(String),
}

impl GraphSource {
    /// Load and validate the graph.
    pub fn load(&self) -> GraphResult<AdjacencyGraph> {
        match self {
            Self::File(path, directedness) => AdjacencyReader::load_graph(path, *directedness),
            Self::Preset(name) => data::by_name(name)
                .unwrap_or_else(|| Err(GraphError::UnknownPreset(name.clone()))),
        }
    }

    fn label(&self) -> String {
        match self {
            Self::File(path, _) => path.display().to_string(),
            Self::Preset(name) => format!("preset:{}", name),
        }
    }
}

/// Display vertex count, edge count and degree extremes.
pub fn cmd_info(out: &mut impl Write, source: &GraphSource, json: bool) -> GraphResult<()> {
    let graph = source.load()?;
    let stats = graph.stats();

    if json {
        let info = serde_json::json!({
            "source": source.label(),
            "directedness": stats.directedness,
            "vertices": stats.n_vertices,
            "edges": stats.n_edges,
            "max_degree": stats.max_degree,
            "min_degree": stats.min_degree,
            "degree_sequence": graph.degree_sequence(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        let mode = stats.directedness.map_or("unset", |d| d.name());
        writeln!(out, "Source: {}", source.label())?;
        writeln!(out, "Mode: {}", mode)?;
        writeln!(out, "Vertices: {}", stats.n_vertices)?;
        writeln!(out, "Edges: {}", stats.n_edges)?;
        if let (Some(max), Some(min)) = (stats.max_degree, stats.min_degree) {
            writeln!(out, "Degree range: {}..={}", min, max)?;
        }
    }
    Ok(())
}

/// List vertices in insertion order.
pub fn cmd_vertices(out: &mut impl Write, source: &GraphSource, json: bool) -> GraphResult<()> {
    let graph = source.load()?;
    let vertices = graph.vertices();

    if json {
        writeln!(out, "{}", serde_json::to_string(&vertices)?)?;
    } else {
        for v in vertices {
            writeln!(out, "{}", v)?;
        }
    }
    Ok(())
}

/// List every vertex with its degree and neighbors.
pub fn cmd_degrees(out: &mut impl Write, source: &GraphSource, json: bool) -> GraphResult<()> {
    let graph = source.load()?;

    if json {
        let rows: Vec<serde_json::Value> = graph
            .adjacency()
            .map(|(v, neighbors)| {
                serde_json::json!({
                    "vertex": v,
                    "degree": neighbors.len(),
                    "neighbors": neighbors,
                })
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
    } else {
        for (v, neighbors) in graph.adjacency() {
            let listed: Vec<String> = neighbors.iter().map(|n| n.to_string()).collect();
            writeln!(out, "{}\t{}\t[{}]", v, neighbors.len(), listed.join(", "))?;
        }
    }
    Ok(())
}

/// Check a JSON adjacency file for one-sided relations.
///
/// Every one-sided pair is printed; the result is an
/// [`GraphError::Asymmetric`] error if there is at least one.
pub fn cmd_validate(out: &mut impl Write, path: &Path, json: bool) -> GraphResult<()> {
    let mapping = AdjacencyReader::read_from_file(path)?;
    let one_sided = check_symmetry(&mapping);

    if json {
        let pairs: Vec<[VertexId; 2]> = one_sided.iter().map(|&(u, v)| [u, v]).collect();
        let report = serde_json::json!({
            "file": path.display().to_string(),
            "symmetric": one_sided.is_empty(),
            "one_sided": pairs,
        });
        writeln!(out, "{}", report)?;
    } else if one_sided.is_empty() {
        writeln!(out, "{}: symmetric ({} vertices)", path.display(), mapping.len())?;
    } else {
        for (u, v) in &one_sided {
            writeln!(out, "Missing: {} lists {} but {} does not list {}", u, v, v, u)?;
        }
    }

    match one_sided.first() {
        Some(&(u, v)) => Err(GraphError::Asymmetric {
            u,
            v,
            missing: one_sided.len(),
        }),
        None => Ok(()),
    }
}

/// List the built-in presets.
pub fn cmd_presets(out: &mut impl Write, json: bool) -> GraphResult<()> {
    if json {
        let mut rows = Vec::new();
        for name in data::PRESET_NAMES {
            if let Some(graph) = data::by_name(name) {
                let graph = graph?;
                rows.push(serde_json::json!({
                    "name": name,
                    "directedness": graph.directedness(),
                    "vertices": graph.vertex_count(),
                    "edges": graph.edge_count(),
                }));
            }
        }
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
    } else {
        for name in data::PRESET_NAMES {
            if let Some(graph) = data::by_name(name) {
                let graph = graph?;
                writeln!(
                    out,
                    "{:<22}{:<12}{} vertices, {} edges",
                    name,
                    graph.directedness().map_or("unset", |d| d.name()),
                    graph.vertex_count(),
                    graph.edge_count()
                )?;
            }
        }
    }
    Ok(())
}

/// Process exit code for an error.
pub fn exit_code(err: &GraphError) -> i32 {
    match err {
        GraphError::Io(_) => 1,
        GraphError::Json(_)
        | GraphError::NotAMapping(_)
        | GraphError::NotASequence { .. }
        | GraphError::InvalidVertexId(_)
        | GraphError::UnknownPreset(_) => 2,
        GraphError::Asymmetric { .. }
        | GraphError::DirectednessMismatch { .. }
        | GraphError::DuplicateVertex(_) => 3,
    }
}
