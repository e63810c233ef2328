//! resolve-deps - minimum-cardinality dependency order resolver
//!
//! Given a dependency graph whose edges may be ordinary (hard),
//! alternation (at-least-one-of), or weak (ordering only), resolves a
//! minimal set of nodes that satisfies a set of requested roots and
//! returns them in dependency-first order.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       resolve-deps                        │
//! ├──────────────┬──────────────────────────┬─────────────────┤
//! │  Dep Parser  │   Loader (dir / JSON)     │    Projector    │
//! ├──────────────┴──────────────────────────┴─────────────────┤
//! │        Resolver (normalize → cover search → toposort)      │
//! └───────────────────────────────────────────────────────────┘
//! ```

pub mod atom;
pub mod cli;
pub mod error;
pub mod graph;
pub mod loader;
pub mod parser;
pub mod project;
pub mod resolver;

pub use atom::DepAtom;
pub use error::ResolveError;
pub use graph::DepGraph;
