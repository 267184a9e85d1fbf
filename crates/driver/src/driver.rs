use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, info_span, warn};

use super::config::Algorithm;
use super::error::Error;
use apsp_core::bellman_ford::BellmanFordSolver;
use apsp_core::comparator::{Agreement, compare};
use apsp_core::floyd_warshall::FloydWarshallSolver;
use apsp_core::traits::AllPairsSolver;
use apsp_core::{Graph, ShortestPaths};

/// What a run produced: the result of record, plus the cross-check verdict
/// when both solvers ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub outcome: ShortestPaths,
    pub agreement: Option<Agreement>,
}

/// Selects and runs the solver(s) for one graph.
#[derive(Debug, Clone, Copy)]
pub struct Driver {
    algorithm: Algorithm,
    profile: bool,
}

impl Driver {
    pub fn new(algorithm: Algorithm, profile: bool) -> Self {
        Driver { algorithm, profile }
    }

    /// Runs the configured solver(s) back to back on the calling thread.
    pub fn run(&self, graph: &Graph) -> Report {
        match self.algorithm {
            Algorithm::BellmanFord => self.single(&BellmanFordSolver, graph),
            Algorithm::FloydWarshall => self.single(&FloydWarshallSolver, graph),
            Algorithm::Both => {
                let bellman_ford = instrumented(&BellmanFordSolver, graph, self.profile);
                let floyd_warshall = instrumented(&FloydWarshallSolver, graph, self.profile);
                reconcile(bellman_ford, floyd_warshall)
            }
        }
    }

    /// Like `run`, but solving never happens on the async worker thread. A single
    /// solver runs as one blocking task; with `Algorithm::Both` each solver gets
    /// its own, and both are joined before the results are compared.
    pub async fn run_concurrently(&self, graph: Arc<Graph>) -> Result<Report, Error> {
        if self.algorithm != Algorithm::Both {
            let driver = *self;
            return tokio::task::spawn_blocking(move || driver.run(&graph))
                .await
                .map_err(|e| Error::SolverTaskFailed(e.to_string()));
        }

        let profile = self.profile;
        let bf_graph = Arc::clone(&graph);
        let bellman_ford = tokio::task::spawn_blocking(move || {
            instrumented(&BellmanFordSolver, &bf_graph, profile)
        });
        let floyd_warshall = tokio::task::spawn_blocking(move || {
            instrumented(&FloydWarshallSolver, &graph, profile)
        });

        let (bellman_ford, floyd_warshall) = tokio::join!(bellman_ford, floyd_warshall);
        let bellman_ford = bellman_ford.map_err(|e| Error::SolverTaskFailed(e.to_string()))?;
        let floyd_warshall = floyd_warshall.map_err(|e| Error::SolverTaskFailed(e.to_string()))?;

        Ok(reconcile(bellman_ford, floyd_warshall))
    }

    fn single<S: AllPairsSolver>(&self, solver: &S, graph: &Graph) -> Report {
        Report {
            outcome: instrumented(solver, graph, self.profile),
            agreement: None,
        }
    }
}

/// Solver entry/exit boundary: wraps the call in a span and, when profiling,
/// logs its wall-clock time.
pub fn instrumented<S: AllPairsSolver>(solver: &S, graph: &Graph, profile: bool) -> ShortestPaths {
    let _span = info_span!("solve", solver = solver.name()).entered();
    debug!(vertices = graph.vertex_count(), "solver started");

    let start = Instant::now();
    let outcome = solver.solve(graph);

    if profile {
        info!(
            elapsed = ?start.elapsed(),
            negative_cycle = outcome.is_negative_cycle(),
            "solver finished"
        );
    }

    outcome
}

/// Cross-checks both results; Bellman-Ford stays the result of record either way.
fn reconcile(bellman_ford: ShortestPaths, floyd_warshall: ShortestPaths) -> Report {
    let agreement = compare(&bellman_ford, &floyd_warshall);

    if agreement.is_agree() {
        debug!("Floyd-Warshall and Bellman-Ford agree");
    } else {
        warn!(
            detail = %agreement,
            "Floyd-Warshall and Bellman-Ford did not produce the same result"
        );
    }

    Report {
        outcome: bellman_ford,
        agreement: Some(agreement),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apsp_core::DistanceMatrix;
    use common::distance::Distance::{Finite, Infinite};

    fn triangle_graph() -> Graph {
        Graph::new(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 5)]).unwrap()
    }

    fn expected_triangle_matrix() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![Finite(0), Finite(1), Finite(3)],
            vec![Infinite, Finite(0), Finite(2)],
            vec![Infinite, Infinite, Finite(0)],
        ])
    }

    #[test]
    fn both_solvers_agree_and_report_matrix() {
        let report = Driver::new(Algorithm::Both, false).run(&triangle_graph());

        assert_eq!(report.agreement, Some(Agreement::Agree));
        assert_eq!(report.outcome, ShortestPaths::Distances(expected_triangle_matrix()));
    }

    #[test]
    fn single_algorithm_skips_comparison() {
        for algorithm in [Algorithm::BellmanFord, Algorithm::FloydWarshall] {
            let report = Driver::new(algorithm, true).run(&triangle_graph());

            assert_eq!(report.agreement, None);
            assert_eq!(report.outcome, ShortestPaths::Distances(expected_triangle_matrix()));
        }
    }

    #[test]
    fn negative_cycle_is_a_normal_outcome() {
        let graph = Graph::new(2, &[(0, 1, -1), (1, 0, -1)]).unwrap();

        let report = Driver::new(Algorithm::Both, false).run(&graph);

        assert_eq!(report.outcome, ShortestPaths::NegativeCycle);
        assert_eq!(report.agreement, Some(Agreement::Agree));
    }

    #[test]
    fn disagreement_keeps_bellman_ford_result() {
        let matrix = ShortestPaths::Distances(DistanceMatrix::from_rows(vec![vec![Finite(0)]]));

        let report = reconcile(matrix.clone(), ShortestPaths::NegativeCycle);

        assert_eq!(report.outcome, matrix);
        assert_eq!(report.agreement, Some(Agreement::OutcomeMismatch));
    }

    #[tokio::test]
    async fn concurrent_run_matches_sequential_run() {
        let graph = Arc::new(Graph::new(4, &[(0, 1, 3), (1, 2, -2), (2, 3, 4), (3, 0, -1)]).unwrap());
        let driver = Driver::new(Algorithm::Both, false);

        let concurrent = driver
            .run_concurrently(Arc::clone(&graph))
            .await
            .expect("solver tasks should not fail");

        assert_eq!(concurrent, driver.run(&graph));
        assert_eq!(concurrent.agreement, Some(Agreement::Agree));
    }

    #[tokio::test]
    async fn concurrent_run_with_single_algorithm() {
        let graph = Arc::new(triangle_graph());

        let report = Driver::new(Algorithm::FloydWarshall, false)
            .run_concurrently(graph)
            .await
            .unwrap();

        assert_eq!(report.agreement, None);
    }

    #[tokio::test]
    async fn concurrent_single_solver_matches_sequential_run() {
        let graph = Arc::new(triangle_graph());

        for algorithm in [Algorithm::BellmanFord, Algorithm::FloydWarshall] {
            let driver = Driver::new(algorithm, true);

            let concurrent = driver
                .run_concurrently(Arc::clone(&graph))
                .await
                .expect("solver task should not fail");

            assert_eq!(concurrent, driver.run(&graph));
            assert_eq!(concurrent.outcome, ShortestPaths::Distances(expected_triangle_matrix()));
        }
    }
}
