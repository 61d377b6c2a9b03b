//! Structural validation for spanning trees.
//!
//! Verifies that a chosen edge set actually forms a spanning tree of its
//! graph: acyclic, and reaching every vertex from vertex 1. Useful for
//! testing, and for callers that disable the required-edge cycle check and
//! want to inspect what they got.

use crate::tree::SpanningTree;
use rustc_hash::FxHashSet;

/// Detailed validation report for a spanning tree candidate.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Number of vertices in the underlying graph.
    pub num_vertices: usize,
    /// Number of edges in the candidate tree.
    pub num_tree_edges: usize,
    /// Vertices reachable from vertex 1, counting vertex 1 itself.
    pub reached_vertices: usize,
    /// Independent cycles found in the traversed component.
    pub back_edges: usize,
    /// Edges repeating an unordered endpoint pair already used.
    pub duplicate_edges: usize,
    /// Edges joining a vertex to itself.
    pub self_loops: usize,
}

impl ValidationReport {
    /// True if the traversal found any cycle.
    pub fn has_cycle(&self) -> bool {
        self.back_edges > 0 || self.self_loops > 0
    }

    /// True if every vertex is reachable from vertex 1.
    pub fn is_spanning(&self) -> bool {
        self.reached_vertices == self.num_vertices
    }

    /// True iff the candidate is a genuine spanning tree: acyclic, spanning,
    /// and exactly V - 1 edges.
    pub fn is_spanning_tree(&self) -> bool {
        !self.has_cycle() && self.is_spanning() && self.num_tree_edges + 1 == self.num_vertices
    }

    /// Format a summary of any issues found.
    pub fn summary(&self) -> String {
        if self.is_spanning_tree() {
            return "Spanning tree".to_string();
        }

        let mut issues = Vec::new();

        if self.back_edges > 0 {
            issues.push(format!("{} back-edges", self.back_edges));
        }
        if self.self_loops > 0 {
            issues.push(format!("{} self-loops", self.self_loops));
        }
        if self.duplicate_edges > 0 {
            issues.push(format!("{} duplicate edges", self.duplicate_edges));
        }
        if !self.is_spanning() {
            issues.push(format!(
                "reaches {} of {} vertices",
                self.reached_vertices, self.num_vertices
            ));
        }
        if self.num_tree_edges + 1 != self.num_vertices {
            issues.push(format!(
                "{} edges (expected {})",
                self.num_tree_edges,
                self.num_vertices.saturating_sub(1)
            ));
        }

        issues.join(", ")
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ValidationReport {{ V={}, E={}, reached={}, {} }}",
            self.num_vertices,
            self.num_tree_edges,
            self.reached_vertices,
            self.summary()
        )
    }
}

/// Validate that `tree` is a spanning tree of its graph.
///
/// Builds an adjacency index over the chosen edges and runs one depth-first
/// traversal from vertex 1. Cycle evidence is aggregated across the whole
/// traversal, and the incoming edge is tracked by edge id rather than by
/// parent vertex, so a second edge between the same endpoints still counts
/// as a cycle. Connectivity falls out of the same pass.
pub fn validate(tree: &SpanningTree) -> ValidationReport {
    let num_vertices = tree.num_vertices();
    let edges = tree.edges();

    let mut self_loops = 0usize;
    let mut duplicate_edges = 0usize;
    let mut seen_pairs: FxHashSet<(u32, u32)> = FxHashSet::default();
    for e in edges {
        if !seen_pairs.insert(e.endpoints()) {
            duplicate_edges += 1;
        }
        if e.is_self_loop() {
            self_loops += 1;
        }
    }

    // Flat adjacency: per-vertex slices into one entry buffer, an entry per
    // direction per edge. Self-loops are left out; they are already counted.
    let mut offsets = vec![0u32; num_vertices + 2];
    for e in edges {
        if e.is_self_loop() {
            continue;
        }
        offsets[e.u as usize + 1] += 1;
        offsets[e.v as usize + 1] += 1;
    }
    for v in 1..=num_vertices + 1 {
        offsets[v] += offsets[v - 1];
    }
    let mut entries = vec![(0u32, 0u32); offsets[num_vertices + 1] as usize];
    let mut cursor = offsets.clone();
    for (id, e) in edges.iter().enumerate() {
        if e.is_self_loop() {
            continue;
        }
        entries[cursor[e.u as usize] as usize] = (e.v, id as u32);
        cursor[e.u as usize] += 1;
        entries[cursor[e.v as usize] as usize] = (e.u, id as u32);
        cursor[e.v as usize] += 1;
    }

    // Iterative DFS. Every non-tree edge inside the reached component is
    // sighted exactly once from each endpoint, so halving the sighting
    // count gives the number of independent cycles.
    let mut visited = vec![false; num_vertices + 1];
    let mut reached_vertices = 0usize;
    let mut sightings = 0usize;
    if num_vertices >= 1 {
        let mut stack = vec![(1u32, u32::MAX)];
        visited[1] = true;
        reached_vertices = 1;
        while let Some((v, via)) = stack.pop() {
            let lo = offsets[v as usize] as usize;
            let hi = offsets[v as usize + 1] as usize;
            for &(to, eid) in &entries[lo..hi] {
                if eid == via {
                    continue;
                }
                if visited[to as usize] {
                    sightings += 1;
                } else {
                    visited[to as usize] = true;
                    reached_vertices += 1;
                    stack.push((to, eid));
                }
            }
        }
    }

    ValidationReport {
        num_vertices,
        num_tree_edges: edges.len(),
        reached_vertices,
        back_edges: sightings / 2,
        duplicate_edges,
        self_loops,
    }
}
