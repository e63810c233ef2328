//! Graph normalization
//!
//! Splits a loaded dep graph into a **strong graph** (the `Required`/
//! `Alternation` atoms that the cover search must satisfy) and an **order
//! graph** (every name any atom of any kind mentions, used later to derive
//! precedence once the cover is fixed).

use std::collections::{HashMap, HashSet};

use crate::atom::DepAtom;
use crate::graph::DepGraph;

pub struct Normalized {
    pub strong_graph: HashMap<String, Vec<DepAtom>>,
    pub order_graph: HashMap<String, HashSet<String>>,
}

pub fn normalize(graph: &DepGraph) -> Normalized {
    let mut strong_graph = HashMap::with_capacity(graph.len());
    let mut order_graph = HashMap::with_capacity(graph.len());

    for (name, deps) in graph {
        let strong: Vec<DepAtom> = deps
            .iter()
            .filter(|atom| !matches!(atom, DepAtom::Weak(_)))
            .cloned()
            .collect();
        strong_graph.insert(name.clone(), strong);

        let order: HashSet<String> = deps
            .iter()
            .flat_map(|atom| atom.names())
            .map(String::from)
            .collect();
        order_graph.insert(name.clone(), order);
    }

    Normalized {
        strong_graph,
        order_graph,
    }
}
