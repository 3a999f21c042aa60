use crate::{GraphError, MatrixGraph, UnweightedGraph};

pub struct Uninitialized {
    directed: bool,
}

pub struct WithVertices {
    directed: bool,
    vertex_count: usize,
}

pub struct FromEdges {
    directed: bool,
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

/// Builds a [`MatrixGraph`] with a fixed number of vertices and an optional edge list.
///
/// ```
/// use matrix_graph::{UnweightedGraph, builder::GraphBuilder};
///
/// let graph = GraphBuilder::new()
///     .directed(true)
///     .vertices(3)
///     .edges([(0, 1), (1, 2)])
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.neighbors(1).unwrap(), vec![2]);
/// ```
#[derive(Debug)]
pub struct GraphBuilder<State> {
    state: State,
}

impl GraphBuilder<Uninitialized> {
    pub fn new() -> Self {
        Self {
            state: Uninitialized { directed: false },
        }
    }

    pub fn directed(self, directed: bool) -> Self {
        Self {
            state: Uninitialized { directed },
        }
    }

    pub fn vertices(self, vertex_count: usize) -> GraphBuilder<WithVertices> {
        GraphBuilder {
            state: WithVertices {
                directed: self.state.directed,
                vertex_count,
            },
        }
    }
}

impl Default for GraphBuilder<Uninitialized> {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder<WithVertices> {
    pub fn edges<I>(self, edges: I) -> GraphBuilder<FromEdges>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        GraphBuilder {
            state: FromEdges {
                directed: self.state.directed,
                vertex_count: self.state.vertex_count,
                edges: edges.into_iter().collect(),
            },
        }
    }

    pub fn build(self) -> Result<MatrixGraph, GraphError> {
        Ok(with_vertices(self.state.directed, self.state.vertex_count))
    }
}

impl GraphBuilder<FromEdges> {
    /// Fails on the first edge with an endpoint outside `0..vertex_count`.
    pub fn build(self) -> Result<MatrixGraph, GraphError> {
        let mut graph = with_vertices(self.state.directed, self.state.vertex_count);

        for (begin, end) in self.state.edges {
            graph.add_edge(begin, end)?;
        }

        Ok(graph)
    }
}

fn with_vertices(directed: bool, vertex_count: usize) -> MatrixGraph {
    let mut graph = MatrixGraph::with_capacity(directed, vertex_count);
    for _ in 0..vertex_count {
        graph.add_vertex();
    }

    graph
}
