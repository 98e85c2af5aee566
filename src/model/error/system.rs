use macros::loggable;
use std::path::PathBuf;

loggable! {
    SystemError {
        #[error("Source root {} is missing or not a directory", .path.display())]
        SourceRootUnavailable { path: PathBuf } => tracing::Level::ERROR,

        #[error("Replica root {} is missing or not a directory", .path.display())]
        ReplicaRootUnavailable { path: PathBuf } => tracing::Level::ERROR,

        #[error("Configuration not found: {}", .path.display())]
        ConfigNotFound { path: PathBuf } => tracing::Level::ERROR,

        #[error("Invalid configuration: {reason}")]
        InvalidConfig { reason: String } => tracing::Level::ERROR,

        #[error("Failed to open log file {}: {message}", .path.display())]
        OpenLogFileFailed { path: PathBuf, message: String } => tracing::Level::ERROR,

        #[error("Failed to prepare directory {}: {message}", .path.display())]
        BootstrapFailed { path: PathBuf, message: String } => tracing::Level::ERROR,

        #[error("Worker thread panicked: {message}")]
        ThreadPanic { message: String } => tracing::Level::ERROR,
    }
}
