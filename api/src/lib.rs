//! This crate is part of [Graphex],
//! a toolkit for authoring and grading graph exercises in Rust.
//!
//! It provides the graph data model shared by all Graphex crates:
//! [`Graph`], [`Vertex`] and [`Edge`].
//! A [`Graph`] is the plain record exchanged with the surrounding system
//! (exercise store, submission capture);
//! it carries three feature flags
//! (`is_directed`, `is_weighted`, `is_labeled`)
//! that downstream consumers use to decide
//! which attributes participate in comparisons.
//!
//! With the default `serde` feature,
//! all three types (de)serialize from the JSON shape
//! used by submission payloads
//! (camelCase keys, `weight` defaulting to 1).
//!
//! [Graphex]: https://docs.rs/graphex/latest/graphex/

#![deny(missing_docs)]

mod _error;
pub use self::_error::*;
mod _graph;
pub use self::_graph::*;
