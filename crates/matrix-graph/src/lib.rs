use std::{error::Error, fmt::Display};

pub mod builder;
pub mod graph;

#[macro_use]
mod macros;
pub mod types;

pub use graph::matrix::{AdjacencyMatrix, MatrixGraph};
pub use types::VertexIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The vertex is negative or not smaller than the vertex count.
    VertexOutOfRange { vertex: i128, vertex_count: usize },
    /// The operation is declared by [`UnweightedGraph`] but never succeeds on this graph.
    Unsupported(&'static str),
}

impl Error for GraphError {}

impl Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VertexOutOfRange {
                vertex,
                vertex_count,
            } => write!(
                f,
                "vertex_id: {} out of range for graph with {} vertices",
                vertex, vertex_count
            ),
            Self::Unsupported(operation) => {
                write!(f, "operation \'{}\' is not supported", operation)
            }
        }
    }
}

impl GraphError {
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::VertexOutOfRange { .. })
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

/// Unweighted graph whose vertices are the dense ids `0..vertex_count()`.
///
/// Every operation taking a vertex fails with [`GraphError::VertexOutOfRange`]
/// before touching the graph if the vertex is negative or `>= vertex_count()`.
pub trait UnweightedGraph {
    /// Adds a vertex and returns its id, which is the vertex count before the call.
    fn add_vertex(&mut self) -> usize;

    /// Returns `true` if there is an edge from `begin` to `end`.
    fn has_edge<V: VertexIndex>(&self, begin: V, end: V) -> Result<bool, GraphError>;

    /// Inserts the edge `begin -> end` (both directions in an undirected graph).
    ///
    /// Returns `false` if the edge was already in the graph.
    fn add_edge<V: VertexIndex>(&mut self, begin: V, end: V) -> Result<bool, GraphError>;

    /// Out-degree of `vertex`.
    fn degree<V: VertexIndex>(&self, vertex: V) -> Result<usize, GraphError>;

    fn in_degree<V: VertexIndex>(&self, vertex: V) -> Result<usize, GraphError>;

    /// Every `u` with an edge `vertex -> u`, in ascending order.
    ///
    /// The returned ids are owned and stay valid when the graph changes afterwards.
    fn neighbors<V: VertexIndex>(&self, vertex: V) -> Result<Vec<usize>, GraphError>;

    fn vertex_count(&self) -> usize;

    /// Number of edges, counting an undirected edge once.
    fn edge_count(&self) -> Result<usize, GraphError>;

    fn is_directed(&self) -> bool;

    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Removes all vertices and edges.
    fn clear(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GraphError::VertexOutOfRange {
            vertex: -5,
            vertex_count: 18,
        };
        assert_eq!(
            err.to_string(),
            "vertex_id: -5 out of range for graph with 18 vertices"
        );
        assert_eq!(
            GraphError::Unsupported("edge_count").to_string(),
            "operation 'edge_count' is not supported"
        );
    }

    #[test]
    fn error_kinds() {
        let out_of_range = GraphError::VertexOutOfRange {
            vertex: 150,
            vertex_count: 18,
        };
        assert!(out_of_range.is_out_of_range());
        assert!(!out_of_range.is_unsupported());

        let unsupported = GraphError::Unsupported("in_degree");
        assert!(unsupported.is_unsupported());
        assert!(!unsupported.is_out_of_range());
    }
}
