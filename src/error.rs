//! Crate-level error taxonomy
//!
//! Every pipeline stage owns a narrow error type local to that stage; this
//! enum composes them with `#[from]` so `?` threads through the whole
//! pipeline without manual mapping, while still letting an embedder match
//! on which stage actually failed.

use crate::loader::LoadError;
use crate::parser::ParseError;
use crate::resolver::cover::CoverError;
use crate::resolver::toposort::CycleError;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("load error: {0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Cycle(#[from] CycleError),

    #[error("cover search failed: {0}")]
    Cover(#[from] CoverError),
}
