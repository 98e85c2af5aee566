pub const DEFAULT_SOURCE_DIR: &str = "source";
pub const DEFAULT_REPLICA_DIR: &str = "replica";
pub const DEFAULT_LOG_FILE: &str = "log_file.txt";
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
