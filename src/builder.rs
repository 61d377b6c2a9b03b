//! Spanning tree construction: required edges first, then greedy selection.

use crate::error::MstError;
use crate::tree::SpanningTree;
use crate::types::Edge;
use crate::union_find::UnionFind;

/// Incremental builder for a constrained spanning tree.
///
/// The required pass must run before the greedy pass so that the unions of
/// required edges are already reflected in the disjoint-set when greedy
/// selection starts; `compute_with` drives the passes in that order. Edges
/// are only ever added, never removed.
pub(crate) struct TreeBuilder {
    components: UnionFind,
    chosen: Vec<Edge>,
    merges: u32,
    num_vertices: u32,
}

impl TreeBuilder {
    pub fn new(num_vertices: u32) -> Self {
        // Slot 0 is unused so vertex identifiers index directly.
        Self {
            components: UnionFind::new(num_vertices as usize + 1),
            chosen: Vec::new(),
            merges: 0,
            num_vertices,
        }
    }

    /// Add every edge flagged as required to the tree, unconditionally.
    ///
    /// With `check` set, a required edge whose endpoints are already
    /// connected is rejected: no tree can contain the whole required set.
    /// Without it the edge is still included and the cycle is left for the
    /// validator to report.
    pub fn add_required(&mut self, edges: &[Edge], check: bool) -> Result<(), MstError> {
        for (i, &e) in edges.iter().enumerate() {
            if !e.required {
                continue;
            }
            if self.components.union(e.u, e.v) {
                self.merges += 1;
            } else if check {
                return Err(MstError::RequiredEdgeCycle {
                    edge_index: i,
                    u: e.u,
                    v: e.v,
                });
            }
            self.chosen.push(e);
        }
        Ok(())
    }

    /// Greedy weight-ordered selection over the candidate edges.
    ///
    /// Sorts ascending by weight (ties in unspecified order) and takes each
    /// edge iff its endpoints are in different components. Required edges
    /// reappear here with their endpoints already connected, so the same
    /// test skips them.
    pub fn extend_greedy(&mut self, edges: &mut [Edge]) {
        edges.sort_unstable_by_key(|e| e.weight);
        for &e in edges.iter() {
            if self.components.union(e.u, e.v) {
                self.merges += 1;
                self.chosen.push(e);
            }
        }
    }

    /// Number of connected components induced by the chosen edges.
    ///
    /// Every accepted edge merges exactly two components, so this is a
    /// counter, not a scan. One component means the result spans the graph.
    pub fn num_components(&self) -> usize {
        (self.num_vertices - self.merges) as usize
    }

    /// Freeze the chosen edges into a `SpanningTree`.
    pub fn finish(self) -> SpanningTree {
        SpanningTree::from_parts(self.num_vertices, self.chosen)
    }
}
