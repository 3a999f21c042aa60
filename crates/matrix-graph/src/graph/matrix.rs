use std::fmt::Display;

use fixedbitset::FixedBitSet;
use log::{debug, trace};

use crate::{GraphError, UnweightedGraph, VertexIndex};

/// Square boolean matrix, one bit row per vertex.
///
/// `rows[i]` has bit `j` set iff there is an edge from `i` to `j`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    rows: Vec<FixedBitSet>,
}

impl AdjacencyMatrix {
    pub fn new() -> AdjacencyMatrix {
        Self { rows: Vec::new() }
    }

    /// Create an empty matrix with room for `vertices` rows.
    pub fn with_capacity(vertices: usize) -> AdjacencyMatrix {
        Self {
            rows: Vec::with_capacity(vertices),
        }
    }

    /// Number of rows, which is also the number of columns.
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Append one row and one column of unset bits.
    ///
    /// Returns the index of the new row.
    pub fn grow(&mut self) -> usize {
        let index = self.rows.len();
        self.rows.iter_mut().for_each(|row| row.grow(index + 1));
        self.rows.push(FixedBitSet::with_capacity(index + 1));

        index
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.rows[row].contains(column)
    }

    /// Set the bit at `(row, column)`.
    ///
    /// Returns `false` if it was already set.
    pub fn insert(&mut self, row: usize, column: usize) -> bool {
        !self.rows[row].put(column)
    }

    /// Number of set bits in `row`.
    pub fn row_count(&self, row: usize) -> usize {
        self.rows[row].count_ones(..)
    }

    /// Columns of the set bits in `row`, ascending.
    pub fn row_ones(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows[row].ones()
    }

    pub fn is_symmetric(&self) -> bool {
        self.rows
            .iter()
            .enumerate()
            .all(|(i, row)| row.ones().all(|j| self.rows[j].contains(i)))
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

impl Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows.iter() {
            for column in 0..self.rows.len() {
                write!(f, "{}", if row.contains(column) { '1' } else { '0' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Unweighted graph backed by an [`AdjacencyMatrix`].
///
/// In an undirected graph every insertion sets both `(a, b)` and `(b, a)`,
/// so the matrix stays symmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGraph {
    directed: bool,
    matrix: AdjacencyMatrix,
}

impl MatrixGraph {
    pub fn new(directed: bool) -> MatrixGraph {
        Self::with_capacity(directed, 0)
    }

    /// Create an empty graph that can take `vertices` vertices before reallocating its rows.
    pub fn with_capacity(directed: bool, vertices: usize) -> MatrixGraph {
        debug!(
            "Created {} matrix graph (capacity: {})",
            if directed { "directed" } else { "undirected" },
            vertices
        );

        Self {
            directed,
            matrix: AdjacencyMatrix::with_capacity(vertices),
        }
    }

    /// Returns `true` if `(a, b)` and `(b, a)` agree for every pair of vertices.
    ///
    /// Always holds for an undirected graph.
    pub fn is_symmetric(&self) -> bool {
        self.matrix.is_symmetric()
    }

    fn index<V: VertexIndex>(&self, vertex: V) -> Result<usize, GraphError> {
        let vertex_count = self.vertex_count();
        vertex
            .to_index()
            .filter(|&index| index < vertex_count)
            .ok_or_else(|| GraphError::VertexOutOfRange {
                vertex: vertex.to_signed(),
                vertex_count,
            })
    }
}

impl Default for MatrixGraph {
    fn default() -> Self {
        MatrixGraph::new(false)
    }
}

impl Display for MatrixGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.matrix, f)
    }
}

impl UnweightedGraph for MatrixGraph {
    fn add_vertex(&mut self) -> usize {
        let vertex = self.matrix.grow();
        trace!("added vertex {}", vertex);

        vertex
    }

    fn has_edge<V: VertexIndex>(&self, begin: V, end: V) -> Result<bool, GraphError> {
        let begin = self.index(begin)?;
        let end = self.index(end)?;

        Ok(self.matrix.contains(begin, end))
    }

    fn add_edge<V: VertexIndex>(&mut self, begin: V, end: V) -> Result<bool, GraphError> {
        // Both endpoints are checked before any cell changes.
        let begin = self.index(begin)?;
        let end = self.index(end)?;

        if !self.matrix.insert(begin, end) {
            return Ok(false);
        }
        if !self.directed {
            self.matrix.insert(end, begin);
        }
        trace!("added edge ({}, {})", begin, end);

        Ok(true)
    }

    fn degree<V: VertexIndex>(&self, vertex: V) -> Result<usize, GraphError> {
        let vertex = self.index(vertex)?;

        Ok(self.matrix.row_count(vertex))
    }

    fn in_degree<V: VertexIndex>(&self, _vertex: V) -> Result<usize, GraphError> {
        Err(GraphError::Unsupported("in_degree"))
    }

    fn neighbors<V: VertexIndex>(&self, vertex: V) -> Result<Vec<usize>, GraphError> {
        let vertex = self.index(vertex)?;

        Ok(self.matrix.row_ones(vertex).collect())
    }

    fn vertex_count(&self) -> usize {
        self.matrix.dimension()
    }

    fn edge_count(&self) -> Result<usize, GraphError> {
        Err(GraphError::Unsupported("edge_count"))
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn clear(&mut self) {
        debug!("Cleared graph ({} vertices dropped)", self.vertex_count());
        self.matrix.clear();
    }
}
