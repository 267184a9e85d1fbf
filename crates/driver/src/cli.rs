use clap::Parser;
use std::path::PathBuf;

use super::config::{Algorithm, Config};

/// Calculate the shortest path between all pairs of vertices in a graph
#[derive(Debug, Parser)]
#[command(name = "apsp", version)]
pub struct Args {
    /// Algorithm to run: (a)ll, (b)ellman-ford only or (f)loyd-warshall only [default: all]
    #[arg(long)]
    pub algorithm: Option<Algorithm>,

    /// Log debug detail, including the resulting distance matrix
    #[arg(short, long)]
    pub verbose: bool,

    /// Log wall-clock time spent in each solver
    #[arg(long)]
    pub profile: bool,

    /// Run both solvers concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Output file [default: <filename without extension>_shortestPaths.txt]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Configuration file [default: ./apsp.toml if present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Input file containing graph
    #[arg(value_name = "filename")]
    pub filename: PathBuf,
}

impl Args {
    /// Command-line flags take precedence over configuration values.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        config.verbose |= self.verbose;
        config.profile |= self.profile;
        config.parallel |= self.parallel;
        config
    }
}
