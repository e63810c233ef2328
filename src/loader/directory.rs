//! Directory source: one node per immediate subdirectory, its dep list
//! taken from a `deps` file inside it (empty if the file is absent).

use std::collections::HashMap;
use std::path::Path;

use super::{LoadError, LoadedGraph, NodeMeta};
use crate::graph::DepGraph;
use crate::parser::parse_dep_str;

pub const DEFAULT_DEP_FILE_NAME: &str = "deps";

pub fn scan(dir: &Path) -> Result<LoadedGraph, LoadError> {
    let mut graph = DepGraph::new();
    let mut metadata = HashMap::new();

    let entries = std::fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let sub = entry.path();
        if !sub.is_dir() {
            continue;
        }
        let Some(name) = sub.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let dep_file = sub.join(DEFAULT_DEP_FILE_NAME);
        let (deps, path) = if dep_file.is_file() {
            let contents = std::fs::read_to_string(&dep_file).map_err(|source| LoadError::Io {
                path: dep_file.clone(),
                source,
            })?;
            (parse_dep_str(&contents)?, dep_file.display().to_string())
        } else {
            (Vec::new(), sub.display().to_string())
        };

        graph.insert(name.to_string(), deps);
        metadata.insert(name.to_string(), NodeMeta { path });
    }

    log::debug!("scanned {}: {} node(s)", dir.display(), graph.len());
    Ok(LoadedGraph { graph, metadata })
}
