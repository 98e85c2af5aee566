use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Diagnostic logging on stderr. The action log is separate, see `core::action_log`.
pub struct Logging;

impl Logging {
    /// Installs the global subscriber; the returned guard must live until shutdown
    /// or buffered lines are lost.
    pub fn initialize(level: tracing::Level) -> WorkerGuard {
        let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();

        let layer = fmt::layer()
            .with_writer(writer)
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false);

        // A second call (tests, embedding) keeps the first subscriber.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init();

        log_panics::init();

        guard
    }
}
