use matrix_graph::{MatrixGraph, UnweightedGraph};

pub const VERTEX_COUNT: usize = 18;

/// Undirected graph with an edge from every even vertex to every other vertex,
/// leaving out the last vertex.
pub fn setup() -> MatrixGraph {
    let mut graph = MatrixGraph::new(false);
    for _ in 0..VERTEX_COUNT {
        graph.add_vertex();
    }

    for i in (0..VERTEX_COUNT - 1).step_by(2) {
        for j in (0..VERTEX_COUNT - 1).filter(|&j| j != i) {
            graph.add_edge(i, j).unwrap();
        }
    }

    graph
}
