//! Error taxonomy shared by all fallible operations in the crate.
//!
//! Every error is detected eagerly at the offending call and reported to the
//! caller; nothing is clamped, retried, or deferred. A [`Error::Format`]
//! raised mid-stream leaves no usable graph behind.

use crate::{Node, NumNodes};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Semantically invalid input, e.g. an empty multi-source set or an
    /// out-of-range vertex id inside an edge-list stream.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A vertex id outside `[0, n)` passed directly to a graph or index operation.
    #[error("vertex {vertex} is out of range for a graph with {len} vertices")]
    OutOfRange { vertex: Node, len: NumNodes },

    /// Truncated or non-integer edge-list input.
    #[error("malformed edge list: {0}")]
    Format(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the crate
pub type Result<T> = std::result::Result<T, Error>;
