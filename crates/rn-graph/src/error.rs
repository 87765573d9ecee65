//! Graph-subsystem error type.
//!
//! Every load/parse failure aborts the load as a whole: the loader never
//! returns a partially constructed network.  Line numbers refer to the
//! unstripped input (comment lines count).

use thiserror::Error;

/// Errors produced by `rn-graph`.
#[derive(Debug, Error)]
pub enum NetError {
    #[error("line {line}: expected `<intersection count> <connection count>` in the header")]
    Header { line: usize },

    #[error("line {line}: expected `<name> <x> <y>` with numeric coordinates")]
    Intersection { line: usize },

    #[error("line {line}: expected the road count repeated as a single number")]
    RoadCount { line: usize },

    #[error("line {line}: road count {found} does not match the header value {expected}")]
    CountMismatch { line: usize, expected: usize, found: usize },

    #[error("line {line}: expected `<nameA> <nameB>` road definition")]
    Road { line: usize },

    #[error("line {line}: unknown intersection {name:?} in road definition")]
    UnknownIntersection { line: usize, name: String },

    #[error("line {line}: duplicate intersection name {name:?}")]
    DuplicateName { line: usize, name: String },

    #[error("unexpected end of input while reading {wanted}")]
    Truncated { wanted: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetResult<T> = Result<T, NetError>;
