//! Minimum spanning trees with required edges.
//!
//! This crate computes a minimum-weight spanning tree of a weighted
//! undirected graph, subject to the constraint that a caller-designated
//! subset of edges (flagged `required`) must be part of the result.
//! Required edges are applied first; the rest of the tree is then completed
//! greedily in ascending weight order, with a disjoint-set structure
//! rejecting any edge that would close a cycle.
//!
//! # Example
//!
//! ```
//! use constrained_mst::compute;
//!
//! // (u, v, weight, required)
//! let edges = [
//!     (1, 2, 1, false),
//!     (2, 3, 2, false),
//!     (3, 4, 3, false),
//!     (1, 4, 4, false),
//!     (1, 3, 5, true),
//! ];
//!
//! let output = compute(4, &edges).expect("computation should succeed");
//! assert!(output.diagnostics.is_clean());
//! assert_eq!(output.tree.total_weight(), 9);
//! ```

mod builder;
mod error;
mod parse;
mod tree;
mod types;
mod union_find;
pub mod validation;

pub use error::MstError;
pub use parse::{parse_graph, ParseError};
pub use tree::SpanningTree;
pub use types::{Edge, EdgeLike};

use builder::TreeBuilder;

/// Output from spanning tree computation, including tree and diagnostics.
#[derive(Debug, Clone)]
pub struct MstOutput {
    /// The computed tree (a forest, when the input is disconnected).
    pub tree: SpanningTree,
    /// Diagnostic information about the computation.
    pub diagnostics: MstDiagnostics,
}

/// Diagnostic information from spanning tree computation.
///
/// A connected input always yields one component. More than one means the
/// graph cannot be spanned at all and the result is only a minimum spanning
/// forest; whether that is fatal is the caller's call.
#[derive(Debug, Clone)]
pub struct MstDiagnostics {
    /// Connected components induced by the chosen edges.
    pub num_components: usize,
}

impl MstDiagnostics {
    /// Returns true if the chosen edges span the whole graph.
    pub fn is_clean(&self) -> bool {
        self.num_components == 1
    }
}

/// Configuration for spanning tree computation.
#[derive(Debug, Clone)]
pub struct MstConfig {
    /// If true, reject a required set that contains a cycle.
    ///
    /// This catches inconsistent inputs up front with a descriptive error.
    /// When disabled the required set is trusted as-is; a cyclic set then
    /// produces an edge set that is not a tree, which
    /// [`validation::validate`] will report.
    pub check_required: bool,
}

impl Default for MstConfig {
    fn default() -> Self {
        Self {
            check_required: true,
        }
    }
}

/// Compute a constrained spanning tree with default settings.
///
/// Errors are reserved for invalid inputs (no vertices, out-of-range
/// endpoints, a cyclic required set). A disconnected graph is not an error;
/// it is reported through [`MstDiagnostics`].
pub fn compute<E: EdgeLike>(num_vertices: u32, edges: &[E]) -> Result<MstOutput, MstError> {
    compute_with(num_vertices, edges, MstConfig::default())
}

/// Compute a constrained spanning tree with explicit configuration.
pub fn compute_with<E: EdgeLike>(
    num_vertices: u32,
    edges: &[E],
    config: MstConfig,
) -> Result<MstOutput, MstError> {
    if num_vertices == 0 {
        return Err(MstError::NoVertices);
    }

    // Materialize and range-check the input before any state is touched.
    let mut candidates: Vec<Edge> = Vec::with_capacity(edges.len());
    for (i, e) in edges.iter().enumerate() {
        let e = Edge::from_like(e);
        for vertex in [e.u, e.v] {
            if vertex == 0 || vertex > num_vertices {
                return Err(MstError::VertexOutOfRange {
                    edge_index: i,
                    vertex,
                    num_vertices,
                });
            }
        }
        candidates.push(e);
    }

    let mut builder = TreeBuilder::new(num_vertices);
    builder.add_required(&candidates, config.check_required)?;
    builder.extend_greedy(&mut candidates);

    let diagnostics = MstDiagnostics {
        num_components: builder.num_components(),
    };

    Ok(MstOutput {
        tree: builder.finish(),
        diagnostics,
    })
}
