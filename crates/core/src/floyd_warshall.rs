use common::distance::Distance;
use tracing::debug;

use super::graph::Graph;
use super::matrix::{DistanceMatrix, ShortestPaths};
use super::traits::AllPairsSolver;

/// All-pairs solver using the Floyd-Warshall dynamic program.
///
/// Only two `n * n` layers are kept alive: the previous intermediate-vertex
/// layer `D^(k-1)` and the one being filled, `D^k`. They are swapped after
/// each `k`.
pub struct FloydWarshallSolver;

impl FloydWarshallSolver {
    /// Layer `D^0`: direct edge weights, zero on the diagonal.
    ///
    /// An explicit negative self-loop seeds the diagonal below zero so that it
    /// is reported as a negative cycle; non-negative self-loops never beat the
    /// empty path.
    fn initial_layer(graph: &Graph) -> Vec<Distance> {
        let n = graph.vertex_count();
        let mut layer = Vec::with_capacity(n * n);

        for i in 0..n {
            for j in 0..n {
                let weight = graph.weight(i, j);
                layer.push(if i == j {
                    weight.min(Distance::ZERO)
                } else {
                    weight
                });
            }
        }

        layer
    }
}

impl AllPairsSolver for FloydWarshallSolver {
    fn name(&self) -> &'static str {
        "floyd-warshall"
    }

    fn solve(&self, graph: &Graph) -> ShortestPaths {
        let n = graph.vertex_count();
        let mut previous = Self::initial_layer(graph);
        let mut current = vec![Distance::Infinite; n * n];

        for k in 0..n {
            for i in 0..n {
                let via_k = previous[i * n + k];
                for j in 0..n {
                    // Without a negative cycle every entry is a simple-path cost,
                    // so an overflowing sum can only come from one.
                    let Some(through_k) = via_k.join(previous[k * n + j]) else {
                        debug!(k, "cost overflow while relaxing through vertex");
                        return ShortestPaths::NegativeCycle;
                    };
                    current[i * n + j] = previous[i * n + j].min(through_k);
                }
            }
            std::mem::swap(&mut previous, &mut current);
        }

        if let Some(vertex) = (0..n).find(|&i| previous[i * n + i] < Distance::ZERO) {
            debug!(vertex, "negative cycle through vertex");
            return ShortestPaths::NegativeCycle;
        }

        ShortestPaths::Distances(DistanceMatrix::from_cells(n, previous))
    }
}
