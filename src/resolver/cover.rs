//! Alternation cover search
//!
//! Enumerates covers reachable from the synthetic start node through hard
//! (`Required`/`Alternation`) edges and returns one of minimum cardinality.
//!
//! Implemented with an explicit work stack and an explicit visited set per
//! branch rather than native recursion, so the branching structure is a
//! first-class value instead of borrowed from the call stack.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::atom::{DepAtom, DepList, BEGIN};

/// Upper bound on enumerated branch states before giving up. Real dep
/// graphs carry only a handful of alternation atoms; this exists purely as
/// a backstop against pathological input, per the resource-model notes.
const MAX_SEARCH_STATES: usize = 1_000_000;

#[derive(Debug, thiserror::Error)]
pub enum CoverError {
    #[error("alternation search produced zero covers")]
    Unsatisfiable,

    #[error("cover search exceeded {0} enumerated branch states")]
    SearchSpaceExceeded(usize),
}

struct SearchState {
    result: Vec<String>,
    visited: HashSet<String>,
    pending: VecDeque<DepAtom>,
}

/// Find the minimum-cardinality cover reachable from `start` through the
/// strong graph. `start` itself is included in the returned set.
pub fn find_min_cover(
    strong_graph: &HashMap<String, DepList>,
    start: &str,
) -> Result<HashSet<String>, CoverError> {
    let begin_children = vec![DepAtom::Required(start.to_string())];
    let lookup = |name: &str| -> &[DepAtom] {
        if name == BEGIN {
            begin_children.as_slice()
        } else {
            strong_graph.get(name).map(Vec::as_slice).unwrap_or(&[])
        }
    };

    let mut stack: Vec<SearchState> = vec![SearchState {
        result: Vec::new(),
        visited: HashSet::new(),
        pending: VecDeque::from(vec![DepAtom::Required(BEGIN.to_string())]),
    }];

    let mut covers: Vec<Vec<String>> = Vec::new();
    let mut states_seen = 0usize;

    while let Some(SearchState {
        result,
        visited,
        mut pending,
    }) = stack.pop()
    {
        states_seen += 1;
        if states_seen > MAX_SEARCH_STATES {
            log::warn!(
                "alternation cover search exceeded {MAX_SEARCH_STATES} states, aborting"
            );
            return Err(CoverError::SearchSpaceExceeded(MAX_SEARCH_STATES));
        }

        let Some(atom) = pending.pop_front() else {
            covers.push(result);
            continue;
        };

        match atom {
            DepAtom::Alternation(alts) => {
                // Push branches in reverse so the first-listed alternative
                // ends up on top of the stack and is fully explored first,
                // matching the left-to-right tie-break the spec requires.
                for alt in alts.iter().rev() {
                    let (branch_result, branch_visited) = if visited.contains(alt) {
                        (result.clone(), visited.clone())
                    } else {
                        let mut r = result.clone();
                        r.push(alt.clone());
                        let mut v = visited.clone();
                        v.insert(alt.clone());
                        (r, v)
                    };
                    let mut branch_pending = pending.clone();
                    branch_pending.push_front(DepAtom::Required(alt.clone()));
                    stack.push(SearchState {
                        result: branch_result,
                        visited: branch_visited,
                        pending: branch_pending,
                    });
                }
            }
            DepAtom::Required(n) | DepAtom::Weak(n) => {
                let newly_added = !visited.contains(&n);
                let mut new_result = result;
                if newly_added {
                    new_result.push(n.clone());
                }
                let mut new_visited = visited;
                new_visited.insert(n.clone());

                for child in lookup(&n) {
                    let skip = matches!(
                        child,
                        DepAtom::Required(cn) | DepAtom::Weak(cn) if new_visited.contains(cn)
                    );
                    if !skip {
                        pending.push_back(child.clone());
                    }
                }

                stack.push(SearchState {
                    result: new_result,
                    visited: new_visited,
                    pending,
                });
            }
        }
    }

    let (idx, _) = covers
        .iter()
        .enumerate()
        .min_by_key(|(_, c)| c.len())
        .ok_or(CoverError::Unsatisfiable)?;

    log::debug!(
        "cover search enumerated {} candidate cover(s), chose one of size {}",
        covers.len(),
        covers[idx].len() - 1
    );

    // First element is always the synthetic BEGIN sentinel.
    let chosen = covers.swap_remove(idx);
    Ok(chosen.into_iter().skip(1).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(pairs: &[(&str, Vec<DepAtom>)]) -> HashMap<String, DepList> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn req(n: &str) -> DepAtom {
        DepAtom::Required(n.to_string())
    }

    fn alt(ns: &[&str]) -> DepAtom {
        DepAtom::Alternation(ns.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn single_node_cover() {
        let g = graph(&[]);
        let cover = find_min_cover(&g, "a").unwrap();
        assert_eq!(cover, HashSet::from(["a".to_string()]));
    }

    #[test]
    fn linear_chain_cover() {
        let g = graph(&[("a", vec![req("b")]), ("b", vec![req("c")])]);
        let cover = find_min_cover(&g, "a").unwrap();
        assert_eq!(
            cover,
            HashSet::from(["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn alternation_picks_shortest_branch() {
        // A: B, [C, D]; B: E, F; C: G; D: G, H  -> choose C (smaller cover).
        let g = graph(&[
            ("A", vec![req("B"), alt(&["C", "D"])]),
            ("B", vec![req("E"), req("F")]),
            ("C", vec![req("G")]),
            ("D", vec![req("G"), req("H")]),
        ]);
        let cover = find_min_cover(&g, "A").unwrap();
        let expected: HashSet<String> = ["A", "B", "C", "E", "F", "G"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(cover, expected);
    }

    #[test]
    fn alternation_satisfied_by_already_required_node() {
        // A: B, C; B: [C, D] -> C already required, so B's alt is free.
        let g = graph(&[("A", vec![req("B"), req("C")]), ("B", vec![alt(&["D", "C"])])]);
        let cover = find_min_cover(&g, "A").unwrap();
        let expected: HashSet<String> = ["A", "B", "C"].into_iter().map(String::from).collect();
        assert_eq!(cover, expected);
    }
}
