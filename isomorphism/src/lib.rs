//! This crate is part of [Graphex],
//! a toolkit for authoring and grading graph exercises in Rust.
//!
//! This crate provides a function to check whether a learner's submitted
//! graph is [isomorphic] to the reference graph of an exercise,
//! taking the exercise's feature flags
//! (direction, weights, labels) into account.
//!
//! [Graphex]: https://docs.rs/graphex/latest/graphex/
//! [isomorphic]: https://en.wikipedia.org/wiki/Graph_isomorphism

#![deny(missing_docs)]

mod graph;
mod search;

pub use graph::isomorphic_graphs;


#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
