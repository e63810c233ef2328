//! The tagged dep-atom type shared by every pipeline stage.
//!
//! The original notation conflates "bare string", "list", and "map with a
//! single key" in the same textual position. We reshape that into one
//! explicit tag with three cases so every consumer dispatches on it instead
//! of re-deriving the shape from context.

/// One entry in a node's dep list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepAtom {
    /// The containing node hard-requires this node.
    Required(String),
    /// The containing node hard-requires at least one of these, preferring
    /// the first listed when cost is tied.
    Alternation(Vec<String>),
    /// Ordering only: if `name` ends up in the cover, the containing node is
    /// ordered after it. Never forces `name` into the cover.
    Weak(String),
}

impl DepAtom {
    /// Every node name this atom could contribute to the order graph.
    pub fn names(&self) -> Vec<&str> {
        match self {
            DepAtom::Required(n) => vec![n.as_str()],
            DepAtom::Weak(n) => vec![n.as_str()],
            DepAtom::Alternation(ns) => ns.iter().map(String::as_str).collect(),
        }
    }
}

/// An ordered sequence of dep atoms, as produced by the parser for a single node.
pub type DepList = Vec<DepAtom>;

/// Synthetic root representing the user's requested roots.
pub const START: &str = ":START";

/// Synthetic root used inside the cover search.
pub const BEGIN: &str = ":-BEGIN-";

/// Reserved sentinel names that must never appear in user-supplied node names.
pub const SENTINELS: [&str; 2] = [START, BEGIN];
