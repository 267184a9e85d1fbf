use super::graph::Graph;
use super::matrix::ShortestPaths;

/// Trait for solvers computing shortest-path distances between every pair of vertices.
pub trait AllPairsSolver {
    /// Short human-readable name, used to label log spans.
    fn name(&self) -> &'static str;

    /// Computes all-pairs distances over `graph`.
    ///
    /// Returns `ShortestPaths::Distances` with a complete matrix, or
    /// `ShortestPaths::NegativeCycle` if any distance is unbounded below.
    fn solve(&self, graph: &Graph) -> ShortestPaths;
}
