use matrix_graph::{MatrixGraph, UnweightedGraph};
use tracing::{info, instrument};

use crate::report::Report;

/// Offset past the last vertex used for the too-large index, 150 for 18 vertices.
const TOO_LARGE_OFFSET: i64 = 132;
const TOO_SMALL: i64 = -5;

/// Fills a graph with an edge from every even vertex to every other vertex,
/// leaving out the last vertex, and checks what the graph reports back.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    directed: bool,
    vertices: usize,
}

impl Scenario {
    pub fn new(directed: bool, vertices: usize) -> Self {
        Self { directed, vertices }
    }

    fn last(&self) -> usize {
        self.vertices - 1
    }

    /// Whether the edge `source -> target` exists once the edge loop reached `(i, _)`.
    ///
    /// Only even sources below the last vertex get edges, in ascending order.
    fn inserted_before(source: usize, i: usize) -> bool {
        source % 2 == 0 && source < i
    }

    pub fn expected_degree(&self, vertex: usize) -> usize {
        if vertex == self.last() {
            0
        } else if vertex % 2 == 0 {
            self.vertices - 2
        } else if self.directed {
            0
        } else {
            self.vertices / 2
        }
    }

    fn allowed_neighbor(&self, vertex: usize, neighbor: usize) -> bool {
        let last = self.last();
        if vertex == last || neighbor == last || vertex == neighbor {
            return false;
        }
        if self.directed {
            vertex % 2 == 0
        } else {
            vertex % 2 == 0 || neighbor % 2 == 0
        }
    }

    /// Runs every check on `graph`, which must be freshly created.
    ///
    /// The graph is left populated so it can be inspected afterwards.
    #[instrument(skip(graph))]
    pub fn run(&self, graph: &mut MatrixGraph) -> Report {
        let mut report = Report::new(self.directed, self.vertices);

        self.check_empty(graph, &mut report);
        self.add_vertices(graph, &mut report);
        self.add_edges(graph, &mut report);
        self.check_vertices(graph, &mut report);
        self.check_out_of_range(graph, &mut report);
        self.check_contract(graph, &mut report);

        info!(
            "{} checks, {} failed",
            report.checks,
            report.failures.len()
        );
        report
    }

    fn check_empty(&self, graph: &MatrixGraph, report: &mut Report) {
        report.check(graph.is_empty(), || {
            "Newly created graph is not empty".to_string()
        });
        report.check(graph.vertex_count() == 0, || {
            format!(
                "Expected 0 vertices for a new graph, found: {}",
                graph.vertex_count()
            )
        });
        report.check(graph.is_directed() == self.directed, || {
            format!("Graph should report directed = {}", self.directed)
        });
    }

    fn add_vertices(&self, graph: &mut MatrixGraph, report: &mut Report) {
        for i in 0..self.vertices {
            let vertex = graph.add_vertex();
            report.check(graph.vertex_count() == i + 1, || {
                format!(
                    "Added {} vertices, but graph says it has {} vertices.",
                    i + 1,
                    graph.vertex_count()
                )
            });
            report.check(vertex == i, || {
                format!(
                    "Added vertex that should have index {} but had index {}.",
                    i, vertex
                )
            });
        }
    }

    fn add_edges(&self, graph: &mut MatrixGraph, report: &mut Report) {
        let last = self.last();
        for i in (0..last).step_by(2) {
            for j in (0..last).filter(|&j| j != i) {
                let expected_new = self.directed || !Self::inserted_before(j, i);
                let added = graph.add_edge(i, j);
                report.check(added == Ok(expected_new), || {
                    format!(
                        "Adding edge ({}, {}) returned {:?}, expected {}.",
                        i, j, added, expected_new
                    )
                });

                report.check(graph.has_edge(i, j) == Ok(true), || {
                    format!("Added edge ({}, {}), but hasEdge returned false.", i, j)
                });

                let expected_reverse = !self.directed || Self::inserted_before(j, i);
                report.check(graph.has_edge(j, i) == Ok(expected_reverse), || {
                    format!(
                        "Added edge ({}, {}), but hasEdge for opposite order did not return {}.",
                        i, j, expected_reverse
                    )
                });
            }
        }
    }

    fn check_vertices(&self, graph: &MatrixGraph, report: &mut Report) {
        for i in 0..self.vertices {
            let expected = self.expected_degree(i);

            match graph.neighbors(i) {
                Ok(neighbors) => {
                    for &v in neighbors.iter() {
                        report.check(self.allowed_neighbor(i, v), || {
                            format!("Found an unexpected edge between {} and {}", i, v)
                        });
                    }
                    report.check(neighbors.len() == expected, || {
                        format!(
                            "vertex: {}; expected {} neighbors, but found {}",
                            i,
                            expected,
                            neighbors.len()
                        )
                    });
                }
                Err(err) => report.check(false, || format!("neighbors({}) failed: {}", i, err)),
            }

            let degree = graph.degree(i);
            report.check(degree == Ok(expected), || {
                format!("Expected degree {} but found degree {:?}", expected, degree)
            });
        }
    }

    fn check_out_of_range(&self, graph: &MatrixGraph, report: &mut Report) {
        let too_large = self.vertices as i64 + TOO_LARGE_OFFSET;

        for (vertex, size) in [(too_large, "large"), (TOO_SMALL, "small")] {
            report.check(
                graph
                    .degree(vertex)
                    .is_err_and(|err| err.is_out_of_range()),
                || {
                    format!(
                        "Called degree with too {} of a vertex ({}) and no out of range error was returned.",
                        size, vertex
                    )
                },
            );
            report.check(
                graph
                    .neighbors(vertex)
                    .is_err_and(|err| err.is_out_of_range()),
                || {
                    format!(
                        "Called neighbors with too {} of a vertex ({}) and no out of range error was returned.",
                        size, vertex
                    )
                },
            );
        }
    }

    fn check_contract(&self, graph: &MatrixGraph, report: &mut Report) {
        if !self.directed {
            report.check(graph.is_symmetric(), || {
                "Undirected graph has an asymmetric adjacency matrix".to_string()
            });
        }
        report.check(
            graph.in_degree(0).is_err_and(|err| err.is_unsupported()),
            || "in_degree should report an unsupported operation".to_string(),
        );
        report.check(
            graph.edge_count().is_err_and(|err| err.is_unsupported()),
            || "edge_count should report an unsupported operation".to_string(),
        );
    }

    /// Clears `graph` and checks that nothing is left.
    pub fn check_clear(&self, graph: &mut MatrixGraph, report: &mut Report) {
        graph.clear();
        report.check(graph.is_empty() && graph.vertex_count() == 0, || {
            format!(
                "Cleared graph still has {} vertices",
                graph.vertex_count()
            )
        });
        report.check(graph.is_directed() == self.directed, || {
            "Clearing the graph changed its directedness".to_string()
        });
    }
}
