use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::config::OutputConfig;
use super::error::Error;
use apsp_core::ShortestPaths;
use common::distance::Distance;

/// Serializes a solver outcome in the text output format.
///
/// One line per source vertex with space-separated distances in vertex order,
/// or a single failure token when the computation hit a negative cycle.
pub struct Writer<'a> {
    tokens: &'a OutputConfig,
}

impl<'a> Writer<'a> {
    pub fn new(tokens: &'a OutputConfig) -> Self {
        Self { tokens }
    }

    fn render(&self, distance: Distance) -> String {
        match distance {
            Distance::Finite(value) => value.to_string(),
            Distance::Infinite => self.tokens.unreachable_token.clone(),
        }
    }

    pub fn write<W: Write>(&self, mut out: W, outcome: &ShortestPaths) -> Result<(), Error> {
        match outcome {
            ShortestPaths::NegativeCycle => {
                writeln!(out, "{}", self.tokens.negative_cycle_token)?;
            }
            ShortestPaths::Distances(matrix) => {
                for row in matrix.rows() {
                    let line: Vec<String> = row.iter().map(|&d| self.render(d)).collect();
                    writeln!(out, "{}", line.join(" "))?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Creates (or truncates) `path` and writes `outcome` into it.
    pub fn write_to_path(&self, path: &Path, outcome: &ShortestPaths) -> Result<(), Error> {
        let file = File::create(path)?;
        self.write(BufWriter::new(file), outcome)
    }
}

/// Output path derived from the input: extension stripped, `suffix` appended.
///
/// `graphs/road.txt` with `_shortestPaths.txt` becomes `graphs/road_shortestPaths.txt`.
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut path: OsString = input.with_extension("").into_os_string();
    path.push(suffix);
    PathBuf::from(path)
}
