use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::error::Error;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "apsp.toml";

/// Which all-pairs solver(s) a run executes.
///
/// Config values go through the same `FromStr` as the command line.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(try_from = "String")]
pub enum Algorithm {
    /// Run both solvers and cross-check; Bellman-Ford is the result of record.
    #[default]
    Both,
    BellmanFord,
    FloydWarshall,
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" | "all" | "both" => Ok(Algorithm::Both),
            "b" | "B" | "bellman-ford" => Ok(Algorithm::BellmanFord),
            "f" | "F" | "floyd-warshall" => Ok(Algorithm::FloydWarshall),
            other => Err(format!(
                "unknown algorithm '{}': expected (a)ll, (b)ellman-ford or (f)loyd-warshall",
                other
            )),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Both => write!(f, "both"),
            Algorithm::BellmanFord => write!(f, "bellman-ford"),
            Algorithm::FloydWarshall => write!(f, "floyd-warshall"),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub unreachable_token: String,
    pub negative_cycle_token: String,
    pub file_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            unreachable_token: "inf".to_string(),
            negative_cycle_token: "False".to_string(),
            file_suffix: "_shortestPaths.txt".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub algorithm: Algorithm,
    pub verbose: bool,
    pub profile: bool,
    /// Run both solvers on separate blocking tasks instead of back to back.
    pub parallel: bool,
    pub output: OutputConfig,
}

/// Loads configuration from an optional TOML file and `APSP_*` environment variables.
///
/// An explicitly named file must exist; the default `apsp.toml` may be absent.
/// Nested keys use `__` in the environment, e.g. `APSP_OUTPUT__UNREACHABLE_TOKEN`.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config, Error> {
    let (path, required) = match explicit_path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };

    if required && !path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at path: {}",
            path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(path).required(required))
        .add_source(
            Environment::with_prefix("APSP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
