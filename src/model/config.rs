use crate::model::comparison_mode::ComparisonMode;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;
pub const DEFAULT_MAX_FILE_OPERATIONS: usize = 64;

/// Fully resolved settings; every value is typed, nothing is left to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source_path: PathBuf,
    pub replica_path: PathBuf,
    pub log_file: PathBuf,
    pub interval: Duration,
    pub max_concurrency: usize,   // number of directory workers
    pub max_file_operations: usize, // number of in-flight file system calls
    pub comparison_mode: ComparisonMode,
    pub log_level: tracing::Level,
    pub run_once: bool,
}

#[derive(Debug, Deserialize)]
pub struct ConfigTable {
    #[serde(rename = "Config")]
    pub config: ConfigFile,
}

/// The `[Config]` table of a TOML file; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub source_path: Option<PathBuf>,
    pub replica_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub interval: Option<IntervalValue>,
    pub max_concurrency: Option<usize>,
    pub max_file_operations: Option<usize>,
    pub comparison_mode: Option<ComparisonMode>,
    pub log_level: Option<String>,
}

/// `interval = 2`, `interval = 0.5` or `interval = "250ms"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IntervalValue {
    Seconds(f64),
    Text(String),
}
