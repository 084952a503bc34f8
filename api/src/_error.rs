//! Error and result type for graph validation.

use thiserror::Error;

/// Type alias for `Result` with default error `InvalidGraph`.
///
/// Can be used like `std::result::Result` as well.
pub type Result<T, E = InvalidGraph> = std::result::Result<T, E>;

/// This error is raised when a graph breaks its structural invariant,
/// i.e. when an edge endpoint is not a valid vertex index.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("edge #{edge} endpoint {endpoint} is out of range (graph has {order} vertices)")]
pub struct InvalidGraph {
    /// Position of the offending edge in the edge list.
    pub edge: usize,
    /// The out-of-range endpoint (`src` or `dst`).
    pub endpoint: usize,
    /// Number of vertices in the graph.
    pub order: usize,
}
