//! CLI surface: argument parsing and the single `resolve` entry point the
//! binary calls. Lives in the library so it can be exercised from
//! integration tests without shelling out to the built binary.

use clap::Parser;

use crate::error::ResolveError;
use crate::loader::{self, LoadedGraph};
use crate::parser::parse_dep_str;
use crate::project::{build_records, render_json, render_nodes, render_paths};
use crate::resolver::resolve;

#[derive(Parser, Debug)]
#[command(name = "resolve-deps")]
#[command(about = "Resolve a minimum, dependency-ordered node set from a dep graph")]
pub struct Args {
    /// One or more dep strings; joined with ',' and parsed as the roots.
    #[arg(required = true)]
    pub roots: Vec<String>,

    /// Colon-separated list of dep sources: a directory (scanned for
    /// `*/deps` files), a regular file, or `-` for stdin — both read as JSON.
    #[arg(short = 'p', long = "path", env = "RESOLVE_DEPS_PATH", default_value = "./")]
    pub path: String,

    /// Output format.
    #[arg(long = "format", env = "RESOLVE_DEPS_FORMAT", default_value = "nodes")]
    pub format: Format,

    /// Raise log verbosity by one step per occurrence (warn -> info -> debug).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Nodes,
    Paths,
    Json,
}

/// The default filter level `main` installs in `env_logger`, one step per
/// `-v` occurrence.
pub fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Load the graph, resolve `args.roots`, and render in `args.format`.
pub fn run(args: &Args) -> Result<String, ResolveError> {
    let LoadedGraph { graph, metadata } = loader::load_path_list(&args.path)?;

    let root_str = args.roots.join(",");
    let roots = parse_dep_str(&root_str)?;

    let order = resolve(&graph, roots)?;

    Ok(match args.format {
        Format::Nodes => render_nodes(&order),
        Format::Paths => render_paths(&build_records(&order, &graph, &metadata)),
        Format::Json => render_json(&build_records(&order, &graph, &metadata))
            .expect("a Vec<NodeRecord> always serializes"),
    })
}
