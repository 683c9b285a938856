//! Error types shared by the graph stores, primitives and traversal engines.
//!
//! Every fallible public operation returns [`Result`]. Errors surface
//! immediately to the caller of the offending accessor; traversal runs are
//! all-or-nothing, so there is no partial state to recover.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for graph construction, traversal queries and the
/// queue/heap primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A node id outside `[0, node_count)` was passed to an API.
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    Range {
        /// The offending node id.
        node: usize,
        /// Number of nodes in the graph the id was checked against.
        node_count: usize,
    },

    /// A path or weight was requested for a node the run never reached.
    #[error("node {node} was not reached by the traversal")]
    Unreachable {
        /// The node that has no traversal record.
        node: usize,
    },

    /// An edge weight that is NaN or not below [`MAXWEIGHT`](crate::MAXWEIGHT),
    /// which the stores could not tell apart from "no edge".
    #[error("edge {from} -> {to} has a weight that is NaN or not below MAXWEIGHT")]
    Weight {
        /// Tail of the rejected edge.
        from: usize,
        /// Head of the rejected edge.
        to: usize,
    },

    /// Pop or peek on an empty container.
    #[error("{0} is empty")]
    Empty(&'static str),
}

impl Error {
    /// Returns `Ok(())` when `node < node_count`, otherwise [`Error::Range`].
    #[inline]
    pub(crate) fn check_node(node: usize, node_count: usize) -> Result<()> {
        if node < node_count {
            Ok(())
        } else {
            Err(Error::Range { node, node_count })
        }
    }
}
