use crate::model::comparison_mode::ComparisonMode;
use crate::utils::duration::parse_interval;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Periodically mirror a source directory onto a replica directory
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "folder-mirror")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to mirror from
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Directory to mirror into; created if absent
    #[arg(short, long, value_name = "DIR")]
    pub replica: Option<PathBuf>,

    /// Append-only action log
    #[arg(short, long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Pause between passes, e.g. `1`, `0.5`, `250ms`, `2m`
    #[arg(short, long, value_parser = parse_interval)]
    pub interval: Option<Duration>,

    /// TOML file with a `[Config]` table
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory pairs reconciled in parallel
    #[arg(short = 'j', long)]
    pub workers: Option<usize>,

    /// File system calls allowed in flight at once
    #[arg(long)]
    pub max_file_operations: Option<usize>,

    /// File comparison: content, md5, sha3, sha256, blake2b, blake2s or blake3
    #[arg(long)]
    pub compare: Option<ComparisonMode>,

    /// Run a single pass and exit
    #[arg(long)]
    pub once: bool,

    /// Debug-level diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}
