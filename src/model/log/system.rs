use macros::loggable;
use std::path::PathBuf;

loggable! {
    SystemLog {
        #[error("Initializing")]
        Initializing => tracing::Level::INFO,

        #[error("Initialization completed")]
        InitializeComplete => tracing::Level::INFO,

        #[error("Mirroring {} to {} every {interval:?}", .source_root.display(), .replica_root.display())]
        Online { source_root: PathBuf, replica_root: PathBuf, interval: std::time::Duration } => tracing::Level::INFO,

        #[error("Created replica root {}", .path.display())]
        ReplicaRootCreated { path: PathBuf } => tracing::Level::INFO,

        #[error("Pass {pass} started")]
        PassStarted { pass: String } => tracing::Level::DEBUG,

        #[error("Pass {pass} completed: {summary}")]
        PassCompleted { pass: String, summary: String } => tracing::Level::DEBUG,

        #[error("Pass {pass} changed the replica: {summary}")]
        PassChanged { pass: String, summary: String } => tracing::Level::INFO,

        #[error("Pass {pass} finished with {failed} failed entries: {summary}")]
        PassDegraded { pass: String, failed: usize, summary: String } => tracing::Level::WARN,

        #[error("Shutdown requested")]
        ShutdownRequested => tracing::Level::INFO,

        #[error("Termination in process")]
        Terminating => tracing::Level::INFO,

        #[error("Termination completed")]
        TerminateComplete => tracing::Level::INFO,
    }
}
