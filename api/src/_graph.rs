//! I define the concrete graph types used across Graphex.
//!
//! My public members are transparently re-exported by the crate root.

use crate::{InvalidGraph, Result};

/// A vertex of a [`Graph`].
///
/// The `x`/`y` coordinates record where the vertex was drawn on the canvas;
/// they are purely cosmetic and never participate in any comparison.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    /// Vertex label; the empty string means "no label".
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: String,
    /// Horizontal canvas coordinate.
    #[cfg_attr(feature = "serde", serde(default))]
    pub x: f64,
    /// Vertical canvas coordinate.
    #[cfg_attr(feature = "serde", serde(default))]
    pub y: f64,
}

/// An edge of a [`Graph`].
///
/// `src` and `dst` are indices into the owning graph's vertex list.
/// Self-loops (`src == dst`) and parallel edges
/// (the same endpoint pair occurring several times)
/// are both representable.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Index of the source vertex.
    pub src: usize,
    /// Index of the destination vertex.
    pub dst: usize,
    /// Edge weight; 1 for unweighted graphs.
    #[cfg_attr(feature = "serde", serde(default = "default_weight"))]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// A graph as drawn in an exercise:
/// an ordered vertex list, an edge multiset,
/// and three flags declaring which features the exercise uses.
///
/// Vertex order defines index identity only;
/// two graphs never share vertices or edges.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Graph {
    /// The vertices; edges refer to them by position.
    pub vertices: Vec<Vertex>,
    /// The edges, with multiset semantics (order is irrelevant).
    pub edges: Vec<Edge>,
    /// Whether edge direction is significant.
    pub is_directed: bool,
    /// Whether edge weights are significant.
    pub is_weighted: bool,
    /// Whether vertex labels are significant.
    pub is_labeled: bool,
}

impl Graph {
    /// Create an empty graph with the given feature flags.
    pub fn new(is_directed: bool, is_weighted: bool, is_labeled: bool) -> Self {
        Graph {
            is_directed,
            is_weighted,
            is_labeled,
            ..Graph::default()
        }
    }

    /// Append an unlabeled vertex at the origin, returning its index.
    pub fn add_vertex(&mut self) -> usize {
        self.add_labeled_vertex("")
    }

    /// Append a vertex with the given label at the origin, returning its index.
    pub fn add_labeled_vertex(&mut self, label: impl Into<String>) -> usize {
        self.vertices.push(Vertex {
            label: label.into(),
            x: 0.0,
            y: 0.0,
        });
        self.vertices.len() - 1
    }

    /// Append an edge of weight 1 between the given vertex indices.
    pub fn add_edge(&mut self, src: usize, dst: usize) {
        self.add_weighted_edge(src, dst, 1.0);
    }

    /// Append an edge with an explicit weight between the given vertex indices.
    pub fn add_weighted_edge(&mut self, src: usize, dst: usize, weight: f64) {
        self.edges.push(Edge { src, dst, weight });
    }

    /// The number of vertices.
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// The number of edges, counting parallel edges with multiplicity.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Verify the structural invariant:
    /// every edge endpoint is a valid index into the vertex list.
    ///
    /// Callers constructing graphs from untrusted payloads
    /// should run this once before handing the graph
    /// to any consumer that assumes well-formed input.
    pub fn check(&self) -> Result<()> {
        let order = self.order();
        for (i, e) in self.edges.iter().enumerate() {
            for endpoint in [e.src, e.dst] {
                if endpoint >= order {
                    return Err(InvalidGraph {
                        edge: i,
                        endpoint,
                        order,
                    });
                }
            }
        }
        Ok(())
    }
}
