//! Orchestration: normalize -> cover search -> topological sort.
//!
//! This is the core the rest of the crate (loader, CLI, projector) treats
//! as an external collaborator's client: it never touches the filesystem,
//! JSON, or `clap`.

pub mod cover;
pub mod normalize;
pub mod toposort;

use std::collections::HashSet;

use crate::atom::{DepList, START};
use crate::error::ResolveError;
use crate::graph::DepGraph;

/// Resolve `roots` (the already-parsed dep list bound to the synthetic
/// `:START` node) against `graph`, returning the dependency-ordered cover
/// with every sentinel stripped.
pub fn resolve(graph: &DepGraph, roots: DepList) -> Result<Vec<String>, ResolveError> {
    let mut bound = graph.clone();
    bound.insert(START.to_string(), roots);

    let normalized = normalize::normalize(&bound);
    let cover = cover::find_min_cover(&normalized.strong_graph, START)?;
    log::info!("resolved a cover of {} node(s)", cover.len());
    let ordered = toposort::order(&normalized.order_graph, &cover)?;

    Ok(ordered.into_iter().filter(|n| n != START).collect())
}

/// The minimum cover alone, without topological ordering — exposed for
/// callers (and tests) that only need membership, such as the projector
/// deciding which referenced-but-undefined nodes to report.
pub fn cover_only(graph: &DepGraph, roots: DepList) -> Result<HashSet<String>, ResolveError> {
    let mut bound = graph.clone();
    bound.insert(START.to_string(), roots);

    let normalized = normalize::normalize(&bound);
    let mut cover = cover::find_min_cover(&normalized.strong_graph, START)?;
    cover.remove(START);
    Ok(cover)
}
