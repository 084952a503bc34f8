//! Backtracking search for a structure-preserving vertex permutation.
//!
//! The search assigns candidate vertices to reference vertices in index
//! order, pruning on label compatibility and on the edges between the
//! newly assigned vertex and the already-assigned prefix.

use graphex_api::{Edge, Graph};
use log::trace;

/// State of one isomorphism search.
///
/// `mapping[c]` is the reference vertex assigned to candidate vertex `c`;
/// only the first `depth` entries are meaningful at depth `depth`.
/// `used` marks reference vertices already in the mapping's range.
pub(crate) struct Matcher<'a> {
    reference: &'a Graph,
    candidate: &'a Graph,
    directed: bool,
    weighted: bool,
    labeled: bool,
    mapping: Vec<usize>,
    used: Vec<bool>,
}

impl<'a> Matcher<'a> {
    /// Both graphs must have the same order and size
    /// (guaranteed by the caller's quick-return checks).
    pub(crate) fn new(reference: &'a Graph, candidate: &'a Graph) -> Self {
        let n = reference.order();
        Matcher {
            reference,
            candidate,
            // the reference graph's flags are authoritative
            directed: reference.is_directed,
            weighted: reference.is_weighted,
            labeled: reference.is_labeled,
            mapping: vec![0; n],
            used: vec![false; n],
        }
    }

    pub(crate) fn run(mut self) -> bool {
        self.assign(0)
    }

    /// Try to extend the mapping to candidate vertex `depth` and beyond.
    fn assign(&mut self, depth: usize) -> bool {
        if depth == self.candidate.order() {
            trace!("complete mapping: {:?}", self.mapping);
            return true;
        }
        for r in 0..self.reference.order() {
            if self.used[r] || !self.labels_match(depth, r) {
                continue;
            }
            self.mapping[depth] = r;
            if self.edges_consistent(depth) {
                self.used[r] = true;
                trace!("assign {} -> {}", depth, r);
                if self.assign(depth + 1) {
                    return true;
                }
                self.used[r] = false;
                trace!("backtrack {}", depth);
            }
        }
        false
    }

    fn labels_match(&self, c: usize, r: usize) -> bool {
        !self.labeled || self.candidate.vertices[c].label == self.reference.vertices[r].label
    }

    /// Check all candidate edges incident to the newly assigned vertex
    /// whose other endpoint is already assigned.
    ///
    /// Each unordered endpoint pair is checked exactly once over the
    /// whole search (when its later endpoint is assigned), so once the
    /// mapping is complete, every candidate edge has claimed a distinct
    /// reference edge; together with the equal edge counts this makes
    /// the correspondence a bijection of edge multisets.
    fn edges_consistent(&self, new: usize) -> bool {
        (0..=new).all(|other| self.pair_matches(new, other))
    }

    /// Multiset match of the edges between one candidate vertex pair and
    /// the edges between the corresponding reference vertex pair.
    ///
    /// Every candidate edge of the pair must claim a reference edge of
    /// the pair that no earlier candidate edge has claimed; this counts
    /// parallel edges with multiplicity. Self-loops are the `new == other`
    /// pair.
    fn pair_matches(&self, new: usize, other: usize) -> bool {
        let ckey = endpoints(new, other);
        let rkey = endpoints(self.mapping[new], self.mapping[other]);

        let pool: Vec<&Edge> = self
            .reference
            .edges
            .iter()
            .filter(|e| endpoints(e.src, e.dst) == rkey)
            .collect();
        let mut claimed = vec![false; pool.len()];

        for ce in self
            .candidate
            .edges
            .iter()
            .filter(|e| endpoints(e.src, e.dst) == ckey)
        {
            let matched = (0..pool.len()).find(|&i| !claimed[i] && self.edge_matches(ce, pool[i]));
            match matched {
                Some(i) => claimed[i] = true,
                None => return false,
            }
        }
        true
    }

    /// Whether reference edge `re` is an admissible image of candidate
    /// edge `ce`, given that both connect the same (mapped) vertex pair.
    fn edge_matches(&self, ce: &Edge, re: &Edge) -> bool {
        if self.directed && (self.mapping[ce.src], self.mapping[ce.dst]) != (re.src, re.dst) {
            return false;
        }
        !self.weighted || ce.weight == re.weight
    }
}

/// Normalized endpoint pair, so that an edge and its reverse compare equal.
fn endpoints(u: usize, v: usize) -> (usize, usize) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}
