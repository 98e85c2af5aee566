use crate::interface::log_sink::LogSink;
use crate::model::error::system::SystemError;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// The append-only action log: every line goes to stdout and to the log file.
///
/// The file is opened once and each line is flushed before the lock is released,
/// so lines from concurrent workers never interleave.
pub struct ActionLog {
    path: PathBuf,
    file: Mutex<File>,
    console: bool,
}

impl ActionLog {
    /// Opens (creating if absent, never truncating) the log file.
    pub fn open(path: &Path) -> Result<Self, SystemError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|err| SystemError::OpenLogFileFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
            console: true,
        })
    }

    /// Stops echoing lines to stdout.
    pub fn without_console(mut self) -> Self {
        self.console = false;
        self
    }

    fn write_line(&self, file: &mut MutexGuard<'_, File>, line: &str) -> io::Result<()> {
        if self.console {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{line}")?;
            stdout.flush()?;
        }
        writeln!(file, "{line}")?;
        file.flush()
    }
}

impl LogSink for ActionLog {
    fn emit(&self, line: &str) {
        let mut file = self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(err) = self.write_line(&mut file, line) {
            tracing::error!(path = %self.path.display(), "Failed to write action log: {err}");
        }
    }
}

/// Keeps lines in memory, for embedding and tests.
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Returns the lines collected so far and starts over.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for MemorySink {
    fn emit(&self, line: &str) {
        self.lock().push(line.to_string());
    }
}
