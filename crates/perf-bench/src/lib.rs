// ----------------------------
// Benchmark graph generation
// ----------------------------

use apsp_core::Graph;
use apsp_core::ShortestPaths;
use common::distance::Distance;
use common::error::Error;
use common::types::Edge;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const NUM_VERTICES: usize = 200;
pub const EDGE_DENSITY: f64 = 0.1;
pub const SEED: u64 = 0x5eed;

/// Generates a random dense-ish graph with negative edges but no negative cycle.
///
/// Every edge weight is `cost + p[u] - p[v]` with a non-negative `cost`; the
/// vertex potentials `p` cancel around any cycle.
pub fn generate_benchmark_edges(num_vertices: usize, density: f64, seed: u64) -> Vec<Edge> {
    let mut rng = SmallRng::seed_from_u64(seed);

    let potentials: Vec<i64> = (0..num_vertices)
        .map(|_| rng.random_range(-50..=50))
        .collect();

    let mut edges = Vec::new();
    for u in 0..num_vertices {
        for v in 0..num_vertices {
            if u != v && rng.random_bool(density) {
                let cost: i64 = rng.random_range(0..=100);
                edges.push((u, v, cost + potentials[u] - potentials[v]));
            }
        }
    }
    edges
}

pub fn generate_benchmark_graph() -> Result<Graph, Error> {
    let edges = generate_benchmark_edges(NUM_VERTICES, EDGE_DENSITY, SEED);
    Graph::new(NUM_VERTICES, &edges)
}

/// Sum of all finite distances, so the solve cannot be optimized away.
pub fn checksum(outcome: &ShortestPaths) -> i128 {
    outcome.distances().map_or(0, |matrix| {
        matrix
            .rows()
            .flatten()
            .filter_map(|d| Distance::finite(*d))
            .fold(0i128, i128::wrapping_add)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use apsp_core::bellman_ford::BellmanFordSolver;
    use apsp_core::traits::AllPairsSolver;

    #[test]
    fn generated_graph_has_no_negative_cycle() {
        let edges = generate_benchmark_edges(30, 0.3, SEED);
        let graph = Graph::new(30, &edges).unwrap();

        assert!(edges.iter().any(|&(_, _, w)| w < 0));
        assert!(!BellmanFordSolver.solve(&graph).is_negative_cycle());
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        assert_eq!(
            generate_benchmark_edges(20, 0.2, 7),
            generate_benchmark_edges(20, 0.2, 7)
        );
    }
}
