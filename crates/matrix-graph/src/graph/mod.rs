//! Graph representations implementing [`UnweightedGraph`](crate::UnweightedGraph).

pub mod matrix;
