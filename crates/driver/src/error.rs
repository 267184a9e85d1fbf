use thiserror::Error;

use common::error::Error as GraphModelError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },

    #[error("Graph construction error: {0}")]
    GraphError(#[from] GraphModelError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read input records: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    ConfigLoadError(String),

    #[error("Solver task failed: {0}")]
    SolverTaskFailed(String),
}

impl Error {
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    /// True for every error class that means the input file itself is unusable.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Error::MalformedInput { .. } | Error::GraphError(_) | Error::CsvError(_)
        )
    }
}
