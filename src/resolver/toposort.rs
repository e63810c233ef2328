//! Topological ordering restricted to the chosen cover
//!
//! Builds a working dependency graph over just the cover (dependent -> its
//! in-cover dependencies) and runs Kahn's algorithm over a private working
//! copy, so the caller's normalized graph is never mutated. The Kahn pass
//! itself already emits dependencies before dependents (it seeds `ready`
//! from nodes with no remaining deps, i.e. leaves), so the result is
//! returned as-is.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

#[derive(Debug, thiserror::Error)]
#[error("dependency cycle detected involving: {}", .nodes.join(", "))]
pub struct CycleError {
    pub nodes: Vec<String>,
}

/// Order `cover` so that every dependency precedes the nodes that need it.
///
/// `order_graph` maps a node to every name any of its atoms mentions (not
/// yet restricted to the cover); this function does the restriction itself.
pub fn order(
    order_graph: &HashMap<String, HashSet<String>>,
    cover: &HashSet<String>,
) -> Result<Vec<String>, CycleError> {
    // dep_graph[k] = set of names in `cover` that k's atoms mention.
    let mut dep_graph: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for name in cover {
        let deps = order_graph
            .get(name)
            .map(|names| names.iter().filter(|n| cover.contains(*n)).cloned().collect())
            .unwrap_or_default();
        dep_graph.insert(name.clone(), deps);
    }

    kahn_sort(&dep_graph, cover.len())
}

/// Kahn's algorithm: repeatedly emit a node with no remaining dependencies,
/// then drop it from every other node's dependency set. Operates entirely
/// on a local working copy owned by this function. `remaining` and `ready`
/// are ordered maps/sets so the tie-break among simultaneously-ready nodes
/// is a deterministic, lexicographically-least pick rather than depending
/// on a `HashMap`'s per-run iteration order.
fn kahn_sort(
    dep_graph: &BTreeMap<String, BTreeSet<String>>,
    total: usize,
) -> Result<Vec<String>, CycleError> {
    let mut remaining: BTreeMap<String, BTreeSet<String>> = dep_graph.clone();
    let mut ready: BTreeSet<String> = remaining
        .iter()
        .filter(|(_, deps)| deps.is_empty())
        .map(|(name, _)| name.clone())
        .collect();

    let mut emitted = Vec::with_capacity(total);

    while let Some(node) = ready.iter().next().cloned() {
        ready.remove(&node);
        if remaining.remove(&node).is_none() {
            continue;
        }
        emitted.push(node.clone());

        for (other, deps) in remaining.iter_mut() {
            if deps.remove(&node) && deps.is_empty() {
                ready.insert(other.clone());
            }
        }
    }

    if emitted.len() != total {
        let stuck: Vec<String> = remaining.into_keys().collect();
        return Err(CycleError { nodes: stuck });
    }

    Ok(emitted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_cover_orders_to_empty() {
        let order_graph = HashMap::new();
        let cover = HashSet::new();
        assert_eq!(order(&order_graph, &cover).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn linear_chain_orders_dependencies_first() {
        let mut order_graph = HashMap::new();
        order_graph.insert("a".to_string(), set(&["b"]));
        order_graph.insert("b".to_string(), set(&["c"]));
        order_graph.insert("c".to_string(), HashSet::new());
        let cover = set(&["a", "b", "c"]);

        let result = order(&order_graph, &cover).unwrap();
        assert_eq!(result, vec!["c".to_string(), "b".to_string(), "a".to_string()]);
    }

    #[test]
    fn order_graph_entries_outside_cover_are_ignored() {
        let mut order_graph = HashMap::new();
        order_graph.insert("a".to_string(), set(&["b", "unrelated"]));
        order_graph.insert("b".to_string(), HashSet::new());
        let cover = set(&["a", "b"]);

        let result = order(&order_graph, &cover).unwrap();
        assert_eq!(result, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn cycle_is_reported() {
        let mut order_graph = HashMap::new();
        order_graph.insert("x".to_string(), set(&["y"]));
        order_graph.insert("y".to_string(), set(&["x"]));
        let cover = set(&["x", "y"]);

        let err = order(&order_graph, &cover).unwrap_err();
        let mut nodes = err.nodes.clone();
        nodes.sort();
        assert_eq!(nodes, vec!["x".to_string(), "y".to_string()]);
    }
}
