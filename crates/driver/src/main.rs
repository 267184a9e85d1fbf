pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod reader;
pub mod writer;

use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::config::Config;
use crate::driver::Driver;
use crate::error::Error;
use crate::writer::{Writer, default_output_path};
use apsp_core::ShortestPaths;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match crate::config::load_config(args.config.as_deref()) {
        Ok(config) => args.apply_to(config),
        Err(e) => {
            init_logging(args.verbose);
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(config.verbose);

    match run(&args, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_malformed_input() {
                error!(file = %args.filename.display(), "{}", e);
            } else {
                error!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr. `RUST_LOG` wins when set; otherwise `info`, or `debug`
/// for the workspace crates when verbose.
fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "info,apsp=debug,apsp_core=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse, solve, write. The output file is only created once the input has
/// been parsed and the computation has finished.
async fn run(args: &Args, config: &Config) -> Result<(), Error> {
    let graph = Arc::new(crate::reader::read_graph_file(&args.filename)?);
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        algorithm = %config.algorithm,
        "graph loaded"
    );

    let driver = Driver::new(config.algorithm, config.profile);
    let report = if config.parallel {
        driver.run_concurrently(graph).await?
    } else {
        driver.run(&graph)
    };

    match &report.outcome {
        ShortestPaths::NegativeCycle => info!("graph contains a negative cycle"),
        ShortestPaths::Distances(matrix) => debug!("shortest distances:\n{}", matrix),
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.filename, &config.output.file_suffix));

    Writer::new(&config.output).write_to_path(&output_path, &report.outcome)?;
    info!(path = %output_path.display(), "results written");

    Ok(())
}
