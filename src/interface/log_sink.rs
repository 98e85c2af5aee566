/// Destination of the human-readable action log.
///
/// Implementations are shared across workers and must keep each line whole.
pub trait LogSink: Send + Sync {
    fn emit(&self, line: &str);
}
