//! Result projector
//!
//! Takes the ordered cover plus the loader's per-node metadata and exposes
//! the three output projections the CLI can choose between. Nodes in the
//! order but absent from the loaded metadata (referenced but never
//! defined) are projected with empty metadata.

use serde::Serialize;

use crate::graph::DepGraph;
use crate::loader::NodeMeta;
use crate::parser::render_atom;
use std::collections::HashMap;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct NodeRecord {
    pub node: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub deps: Vec<String>,
}

/// Build one record per name in `order`, looking up its path in `metadata`
/// and its dep list in `graph`. Both lookups miss together for a node that
/// was only ever referenced, never defined.
pub fn build_records(
    order: &[String],
    graph: &DepGraph,
    metadata: &HashMap<String, NodeMeta>,
) -> Vec<NodeRecord> {
    order
        .iter()
        .map(|name| {
            let path = metadata.get(name).map(|m| m.path.clone());
            let deps = graph
                .get(name)
                .map(|atoms| atoms.iter().map(render_atom).collect())
                .unwrap_or_default();
            NodeRecord {
                node: name.clone(),
                path,
                deps,
            }
        })
        .collect()
}

/// `nodes` format: space-separated names on one line.
pub fn render_nodes(order: &[String]) -> String {
    order.join(" ")
}

/// `paths` format: one `name=path` line per name, empty path for undefined nodes.
pub fn render_paths(records: &[NodeRecord]) -> String {
    records
        .iter()
        .map(|r| format!("{}={}", r.node, r.path.as_deref().unwrap_or("")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `json` format: a JSON array of per-node records.
pub fn render_json(records: &[NodeRecord]) -> serde_json::Result<String> {
    serde_json::to_string(records)
}
