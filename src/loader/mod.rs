//! Graph loader — the external collaborator that turns on-disk or JSON
//! sources into a [`DepGraph`] plus per-node metadata for the projector.
//!
//! This module is deliberately outside the core resolver: it is the only
//! place that touches the filesystem, and it is what the CLI drives based
//! on `-p`/`--path`.

mod directory;
mod json;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::graph::DepGraph;
use crate::parser::ParseError;

pub use directory::DEFAULT_DEP_FILE_NAME;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: invalid JSON: {source}")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: top-level JSON value must be an object")]
    NotAnObject { path: String },

    #[error("{path}: node {node:?} has a non-array, non-null dep value")]
    InvalidDepValue { path: String, node: String },

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("duplicate node {node:?} defined in both {first} and {second}")]
    DuplicateNode {
        node: String,
        first: String,
        second: String,
    },
}

/// Per-node origin metadata, used by the result projector.
#[derive(Debug, Clone, Default)]
pub struct NodeMeta {
    /// Where this node's dep list came from: a `dir/deps` file path, or the
    /// JSON source path (`-` for stdin).
    pub path: String,
}

#[derive(Debug, Default)]
pub struct LoadedGraph {
    pub graph: DepGraph,
    pub metadata: HashMap<String, NodeMeta>,
}

/// Load and merge every element of a colon-separated `-p`/`--path` list.
///
/// Each element is a directory (scanned per [`directory::scan`]), `-`
/// (JSON from stdin), or a regular file (JSON from that file).
pub fn load_path_list(path_list: &str) -> Result<LoadedGraph, LoadError> {
    let mut loaded = LoadedGraph::default();

    for element in path_list.split(':').filter(|s| !s.is_empty()) {
        let source = Path::new(element);
        let chunk = if source.is_dir() {
            directory::scan(source)?
        } else {
            json::load(element)?
        };
        merge(&mut loaded, chunk)?;
    }

    log::info!(
        "loaded {} node(s) from {} source(s)",
        loaded.graph.len(),
        path_list.split(':').filter(|s| !s.is_empty()).count()
    );
    Ok(loaded)
}

fn merge(into: &mut LoadedGraph, from: LoadedGraph) -> Result<(), LoadError> {
    for (node, deps) in from.graph {
        if let Some(existing) = into.metadata.get(&node) {
            let second = from
                .metadata
                .get(&node)
                .map(|m| m.path.clone())
                .unwrap_or_default();
            return Err(LoadError::DuplicateNode {
                node,
                first: existing.path.clone(),
                second,
            });
        }
        into.graph.insert(node.clone(), deps);
        if let Some(meta) = from.metadata.get(&node) {
            into.metadata.insert(node, meta.clone());
        }
    }
    Ok(())
}
