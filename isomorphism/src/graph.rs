use graphex_api::{Graph, InvalidGraph};

use crate::search::Matcher;

/// Computes whether `candidate` is isomorphic to `reference`.
///
/// The two graphs are isomorphic if the candidate's vertices can be
/// relabeled (permuted) so that its edge multiset becomes exactly the
/// reference's edge multiset.
/// The reference graph's feature flags are authoritative:
/// edge direction, edge weights and vertex labels each participate in
/// the comparison only when the corresponding flag is set on `reference`.
///
/// Parallel edges are matched with multiplicity:
/// two parallel edges in the candidate need two distinct
/// counterparts in the reference.
/// Self-loops and isolated vertices are handled like any other
/// edge or vertex.
///
/// # Error
/// If either graph contains an edge endpoint that is not a valid vertex
/// index, an [`InvalidGraph`] error is returned.
///
/// # Performance
/// Backtracking search, worst case factorial in the number of vertices.
/// Exercise graphs are small and hand-drawn, so this is never a concern
/// in practice; do not use this function on large machine-generated
/// graphs.
pub fn isomorphic_graphs(reference: &Graph, candidate: &Graph) -> Result<bool, InvalidGraph> {
    reference.check()?;
    candidate.check()?;

    // quick return conditions
    // -----------------------
    // Both are necessary for isomorphism, so the search can be skipped.
    // Raw edge-list lengths are comparable even for undirected graphs:
    // an edge and its reverse are the same edge, not two.
    if reference.order() != candidate.order() {
        return Ok(false);
    }
    if reference.size() != candidate.size() {
        return Ok(false);
    }

    Ok(Matcher::new(reference, candidate).run())
}
