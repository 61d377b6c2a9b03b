//! Error types for spanning tree computation.

use std::fmt;

/// Errors that can occur while building a constrained spanning tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MstError {
    /// The graph has no vertices, so there is nothing to span.
    NoVertices,

    /// An edge references a vertex outside `[1, num_vertices]`.
    /// Vertex identifiers are 1-based; 0 is never a valid vertex.
    VertexOutOfRange {
        edge_index: usize,
        vertex: u32,
        num_vertices: u32,
    },

    /// The required edges contain a cycle among themselves, so no tree can
    /// include all of them. Reported for the first required edge whose
    /// endpoints were already connected by earlier required edges.
    RequiredEdgeCycle { edge_index: usize, u: u32, v: u32 },
}

impl fmt::Display for MstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MstError::NoVertices => {
                write!(f, "graph has no vertices")
            }
            MstError::VertexOutOfRange {
                edge_index,
                vertex,
                num_vertices,
            } => {
                write!(
                    f,
                    "edge {} references vertex {} outside 1..={}",
                    edge_index, vertex, num_vertices
                )
            }
            MstError::RequiredEdgeCycle { edge_index, u, v } => {
                write!(
                    f,
                    "required edge {} ({}, {}) closes a cycle in the required set",
                    edge_index, u, v
                )
            }
        }
    }
}

impl std::error::Error for MstError {}
