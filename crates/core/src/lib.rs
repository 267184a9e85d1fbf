pub mod bellman_ford;
pub mod comparator;
pub mod floyd_warshall;
pub mod graph;
pub mod matrix;
pub mod traits;

pub use graph::Graph;
pub use matrix::{DistanceMatrix, ShortestPaths};
