//! The dep graph type shared across the loader, normalizer, and resolver.

use std::collections::HashMap;

use crate::atom::DepList;

/// A mapping from node name to its ordered dep list, as produced by the
/// parser (for a single node) or the loader (for a whole source).
pub type DepGraph = HashMap<String, DepList>;
