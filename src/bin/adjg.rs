//! CLI entry point for the `adjg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use adjacency_graph::cli::{commands, exit_code, GraphSource};
use adjacency_graph::types::Directedness;

#[derive(Parser)]
#[command(
    name = "adjg",
    about = "Inspect adjacency-list graphs: counts, degrees, symmetry"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Graph input shared by the inspection commands.
#[derive(Args)]
struct Input {
    /// Path to a JSON adjacency file ({"0": [1, 2], ...})
    #[arg(required_unless_present = "preset")]
    file: Option<PathBuf>,
    /// Use a built-in graph instead of a file
    #[arg(long, conflicts_with = "file")]
    preset: Option<String>,
    /// Treat the file as a directed graph (no symmetry check)
    #[arg(long)]
    directed: bool,
}

impl Input {
    fn into_source(self) -> GraphSource {
        match (self.file, self.preset) {
            (_, Some(name)) => GraphSource::Preset(name),
            (Some(path), None) => GraphSource::File(path, Directedness::from_flag(self.directed)),
            (None, None) => unreachable!("clap requires a file or --preset"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Display vertex and edge counts
    Info(Input),
    /// List vertices in insertion order
    Vertices(Input),
    /// List each vertex with its degree and neighbors
    Degrees(Input),
    /// Report one-sided relations in an undirected adjacency file
    Validate {
        /// Path to a JSON adjacency file
        file: PathBuf,
    },
    /// List built-in graphs
    Presets,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Info(input) => commands::cmd_info(&mut stdout, &input.into_source(), json),
        Commands::Vertices(input) => {
            commands::cmd_vertices(&mut stdout, &input.into_source(), json)
        }
        Commands::Degrees(input) => commands::cmd_degrees(&mut stdout, &input.into_source(), json),
        Commands::Validate { file } => commands::cmd_validate(&mut stdout, &file, json),
        Commands::Presets => commands::cmd_presets(&mut stdout, json),
    };
    drop(stdout);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(exit_code(&e));
    }
}
