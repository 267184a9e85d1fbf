use common::distance::Distance;
use tracing::debug;

use super::graph::Graph;
use super::matrix::{DistanceMatrix, ShortestPaths};
use super::traits::AllPairsSolver;

/// All-pairs solver that runs single-source Bellman-Ford relaxation from every vertex.
pub struct BellmanFordSolver;

impl BellmanFordSolver {
    /// Shortest distances from `source` to every vertex.
    ///
    /// Performs exactly `n - 1` full relaxation rounds over every edge, then one
    /// extra pass. If that pass can still lower any distance, a negative cycle is
    /// reachable from `source` and `None` is returned. A relaxation whose cost
    /// overflows is also a negative cycle: no shortest path leaves the `Cost` range.
    ///
    /// Panics if `source` is not a vertex of `graph`.
    pub fn shortest_from(&self, graph: &Graph, source: usize) -> Option<Vec<Distance>> {
        let num_vertices = graph.vertex_count();
        assert!(source < num_vertices, "source {source} is not a vertex");

        // Collected once; every round visits the same edge set.
        let edges: Vec<_> = graph.edges().collect();

        let mut distance = vec![Distance::Infinite; num_vertices];
        distance[source] = Distance::ZERO;

        let found_cycle = |reason: &str| -> Option<Vec<Distance>> {
            debug!(source, reason, "negative cycle reachable from source");
            None
        };

        for _ in 0..num_vertices.saturating_sub(1) {
            for &(u, v, weight) in &edges {
                let Some(candidate) = distance[u].extend(weight) else {
                    return found_cycle("cost overflow");
                };
                if candidate < distance[v] {
                    distance[v] = candidate;
                }
            }
        }

        for &(u, v, weight) in &edges {
            match distance[u].extend(weight) {
                Some(candidate) if candidate >= distance[v] => {}
                Some(_) => return found_cycle("still relaxable"),
                None => return found_cycle("cost overflow"),
            }
        }

        Some(distance)
    }
}

impl AllPairsSolver for BellmanFordSolver {
    fn name(&self) -> &'static str {
        "bellman-ford"
    }

    /// One source at a time; the first negative cycle found aborts the whole computation.
    fn solve(&self, graph: &Graph) -> ShortestPaths {
        let mut rows = Vec::with_capacity(graph.vertex_count());

        for source in 0..graph.vertex_count() {
            match self.shortest_from(graph, source) {
                Some(row) => rows.push(row),
                None => return ShortestPaths::NegativeCycle,
            }
        }

        ShortestPaths::Distances(DistanceMatrix::from_rows(rows))
    }
}
