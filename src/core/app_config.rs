use crate::cli::Cli;
use crate::model::config::{
    Config, ConfigFile, ConfigTable, DEFAULT_INTERVAL, DEFAULT_MAX_CONCURRENCY,
    DEFAULT_MAX_FILE_OPERATIONS, IntervalValue,
};
use crate::model::error::system::SystemError;
use crate::platform::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILE, DEFAULT_REPLICA_DIR, DEFAULT_SOURCE_DIR,
};
use crate::utils::duration::{interval_from_seconds, parse_interval};
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Settings resolved from defaults, an optional TOML file and the command line,
/// in increasing order of precedence.
#[derive(Debug, Clone)]
pub struct AppConfig {
    config: Config,
}

impl AppConfig {
    pub fn new(cli: &Cli) -> Result<Self, SystemError> {
        let file = match &cli.config {
            Some(path) => Self::load_config_file(path)?,
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Self::load_config_file(implicit)?
                } else {
                    ConfigFile::default()
                }
            }
        };
        let config = Self::merge(cli, file, &Self::base_directory())?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, SystemError> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn load_config_file(path: &Path) -> Result<ConfigFile, SystemError> {
        let toml_string = fs::read_to_string(path).map_err(|_| SystemError::ConfigNotFound {
            path: path.to_path_buf(),
        })?;
        Self::parse_config_file(&toml_string)
    }

    fn parse_config_file(toml_string: &str) -> Result<ConfigFile, SystemError> {
        let config = toml::from_str::<ConfigTable>(toml_string)
            .map_err(|err| SystemError::InvalidConfig {
                reason: err.to_string(),
            })?
            .config;
        Ok(config)
    }

    /// Defaults live next to the executable, falling back to the working directory.
    fn base_directory() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn merge(cli: &Cli, file: ConfigFile, base: &Path) -> Result<Config, SystemError> {
        let invalid = |reason: String| SystemError::InvalidConfig { reason };

        let interval = match (cli.interval, file.interval) {
            (Some(interval), _) => interval,
            (None, Some(IntervalValue::Seconds(seconds))) => {
                interval_from_seconds(seconds).map_err(invalid)?
            }
            (None, Some(IntervalValue::Text(text))) => parse_interval(&text).map_err(invalid)?,
            (None, None) => DEFAULT_INTERVAL,
        };

        let log_level = if cli.verbose {
            tracing::Level::DEBUG
        } else {
            match file.log_level {
                Some(level) => level
                    .parse()
                    .map_err(|_| invalid(format!("unknown log level '{level}'")))?,
                None => tracing::Level::INFO,
            }
        };

        Ok(Config {
            source_path: cli
                .source
                .clone()
                .or(file.source_path)
                .unwrap_or_else(|| base.join(DEFAULT_SOURCE_DIR)),
            replica_path: cli
                .replica
                .clone()
                .or(file.replica_path)
                .unwrap_or_else(|| base.join(DEFAULT_REPLICA_DIR)),
            log_file: cli
                .log_file
                .clone()
                .or(file.log_file)
                .unwrap_or_else(|| base.join(DEFAULT_LOG_FILE)),
            interval,
            max_concurrency: cli
                .workers
                .or(file.max_concurrency)
                .unwrap_or(DEFAULT_MAX_CONCURRENCY),
            max_file_operations: cli
                .max_file_operations
                .or(file.max_file_operations)
                .unwrap_or(DEFAULT_MAX_FILE_OPERATIONS),
            comparison_mode: cli.compare.or(file.comparison_mode).unwrap_or_default(),
            log_level,
            run_once: cli.once,
        })
    }

    fn validate(config: &Config) -> Result<(), SystemError> {
        let invalid = |reason: String| Err(SystemError::InvalidConfig { reason });

        if config.max_concurrency == 0 {
            return invalid("max_concurrency must be at least 1".to_string());
        }
        if config.max_file_operations == 0 {
            return invalid("max_file_operations must be at least 1".to_string());
        }

        let source = Self::normalize(&config.source_path);
        let replica = Self::normalize(&config.replica_path);
        if source == replica {
            return invalid(format!(
                "source and replica are the same directory: {}",
                source.display()
            ));
        }
        if replica.starts_with(&source) {
            return invalid(format!(
                "replica {} lies inside source {}",
                replica.display(),
                source.display()
            ));
        }
        if source.starts_with(&replica) {
            return invalid(format!(
                "source {} lies inside replica {}",
                source.display(),
                replica.display()
            ));
        }
        Ok(())
    }

    fn normalize(path: &Path) -> PathBuf {
        path.canonicalize()
            .or_else(|_| std::path::absolute(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

impl Deref for AppConfig {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}
