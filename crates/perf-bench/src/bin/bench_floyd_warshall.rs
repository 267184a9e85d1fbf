use std::hint::black_box;
use std::time::Instant;

use apsp_core::floyd_warshall::FloydWarshallSolver;
use apsp_core::traits::AllPairsSolver;
use common::error::Error;
use perf_bench::*;

fn main() -> Result<(), Error> {
    let graph = generate_benchmark_graph()?;

    let start_time = Instant::now();
    let outcome = FloydWarshallSolver.solve(black_box(&graph));
    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(checksum(&outcome));

    println!(
        "--- Floyd-Warshall Benchmark Results ({} Vertices, {} Edges) ---",
        graph.vertex_count(),
        graph.edge_count()
    );
    println!("Negative cycle: {}", outcome.is_negative_cycle());
    println!("Checksum: {}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);

    Ok(())
}
