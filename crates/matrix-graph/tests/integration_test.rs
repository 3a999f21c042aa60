use matrix_graph::{MatrixGraph, UnweightedGraph};

mod common;

#[test]
fn vertex_ids() {
    let mut graph = MatrixGraph::new(false);
    assert!(graph.is_empty(), "Newly created graph is not empty.");
    assert_eq!(graph.vertex_count(), 0);

    for i in 0..common::VERTEX_COUNT {
        assert_eq!(graph.add_vertex(), i);
        assert_eq!(graph.vertex_count(), i + 1);
    }
}

#[test]
fn symmetric_edges() {
    let graph = common::setup();

    for i in (0..common::VERTEX_COUNT - 1).step_by(2) {
        for j in (0..common::VERTEX_COUNT - 1).filter(|&j| j != i) {
            assert_eq!(graph.has_edge(i, j), Ok(true), "Edge ({i}, {j}).");
            assert_eq!(graph.has_edge(j, i), Ok(true), "Edge ({j}, {i}).");
        }
    }
    assert!(graph.is_symmetric());
}

#[test]
fn degrees() {
    let graph = common::setup();

    for i in 0..common::VERTEX_COUNT {
        let expected = if i == 17 {
            0
        } else if i % 2 == 0 {
            16
        } else {
            9
        };

        let neighbors = graph.neighbors(i).unwrap();
        assert_eq!(neighbors.len(), expected, "Neighbors of vertex {i}.");
        assert_eq!(graph.degree(i), Ok(expected), "Degree of vertex {i}.");

        for v in neighbors {
            assert!(
                !(i % 2 == 1 && v % 2 == 1) && i != 17 && v != 17,
                "Found an unexpected edge between {i} and {v}"
            );
        }
    }
}

#[test]
fn out_of_range() {
    let graph = common::setup();

    assert!(graph.degree(150).unwrap_err().is_out_of_range());
    assert!(graph.degree(-5).unwrap_err().is_out_of_range());
    assert!(graph.neighbors(150).unwrap_err().is_out_of_range());
    assert!(graph.neighbors(-5).unwrap_err().is_out_of_range());
}

#[test]
fn out_of_range_empty() {
    let graph = MatrixGraph::new(true);

    assert!(graph.has_edge(0, 0).unwrap_err().is_out_of_range());
    assert!(graph.degree(0).unwrap_err().is_out_of_range());
    assert!(graph.neighbors(-1).unwrap_err().is_out_of_range());
}

#[test]
fn clear() {
    let mut graph = common::setup();
    graph.clear();

    assert_eq!(graph.vertex_count(), 0);
    assert!(graph.is_empty());
}
