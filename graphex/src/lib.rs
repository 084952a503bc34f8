//! This crate is the facade of Graphex,
//! a toolkit for authoring and grading graph exercises in Rust.
//!
//! An exercise author draws a *reference graph*;
//! a learner submits a *candidate graph*.
//! Both are plain [`Graph`](api::Graph) records
//! (vertices, edges, and three feature flags:
//! direction, weights, labels).
//! Grading asks a single question:
//! is the candidate the same graph as the reference,
//! up to renaming of the vertices?
//!
//! # Getting started
//!
//! ```
//! use graphex::api::Graph;
//! use graphex::isomorphism::isomorphic_graphs;
//!
//! // the reference: a labeled path a - b - c
//! let mut reference = Graph::new(false, false, true);
//! let a = reference.add_labeled_vertex("a");
//! let b = reference.add_labeled_vertex("b");
//! let c = reference.add_labeled_vertex("c");
//! reference.add_edge(a, b);
//! reference.add_edge(b, c);
//!
//! // the submission: same path, drawn in a different vertex order
//! let mut candidate = Graph::new(false, false, true);
//! let c = candidate.add_labeled_vertex("c");
//! let a = candidate.add_labeled_vertex("a");
//! let b = candidate.add_labeled_vertex("b");
//! candidate.add_edge(b, c);
//! candidate.add_edge(a, b);
//!
//! assert!(isomorphic_graphs(&reference, &candidate)?);
//! # Ok::<(), graphex::api::InvalidGraph>(())
//! ```

#![deny(missing_docs)]

/// The graph data model
/// (re-exported from [`graphex_api`]).
pub mod api {
    pub use graphex_api::*;
}

/// The isomorphism checker
/// (re-exported from [`graphex_isomorphism`]).
pub mod isomorphism {
    pub use graphex_isomorphism::*;
}
