use macros::loggable;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

loggable! {
    IOError {
        #[error("Semaphore has been closed")]
        SemaphoreClosed => tracing::Level::ERROR,

        #[error("Skipped {}: entry no longer exists", .path.display())]
        EntryNotFound { path: PathBuf } => tracing::Level::WARN,

        #[error("Skipped {}: permission denied", .path.display())]
        PermissionDenied { path: PathBuf } => tracing::Level::ERROR,

        #[error("Skipped {}: unsupported entry type", .path.display())]
        UnsupportedEntry { path: PathBuf } => tracing::Level::WARN,

        #[error("Failed to remove directory {}: directory is not empty", .path.display())]
        DirectoryNotEmpty { path: PathBuf } => tracing::Level::ERROR,

        #[error("Failed to read directory {}: {message}", .path.display())]
        ReadDirectoryFailed { path: PathBuf, message: String } => tracing::Level::ERROR,

        #[error("Failed to create directory {}: {message}", .path.display())]
        CreateDirectoryFailed { path: PathBuf, message: String } => tracing::Level::ERROR,

        #[error("Failed to read file {}: {message}", .path.display())]
        ReadFileFailed { path: PathBuf, message: String } => tracing::Level::ERROR,

        #[error("Failed to copy file from {} to {}: {message}", .src.display(), .dst.display())]
        CopyFileFailed { src: PathBuf, dst: PathBuf, message: String } => tracing::Level::ERROR,

        #[error("Failed to delete file {}: {message}", .path.display())]
        DeleteFileFailed { path: PathBuf, message: String } => tracing::Level::ERROR,

        #[error("Failed to delete directory {}: {message}", .path.display())]
        DeleteDirectoryFailed { path: PathBuf, message: String } => tracing::Level::ERROR,

        #[error("Failed to get metadata of {}: {message}", .path.display())]
        GetMetadataFailed { path: PathBuf, message: String } => tracing::Level::ERROR,
    }
}

impl IOError {
    /// Maps an OS error onto the taxonomy, falling back to the operation-specific variant.
    pub fn classify(err: io::Error, path: &Path, otherwise: impl FnOnce(String) -> Self) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            ErrorKind::NotFound => Self::EntryNotFound { path },
            ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            ErrorKind::DirectoryNotEmpty => Self::DirectoryNotEmpty { path },
            _ => otherwise(err.to_string()),
        }
    }

    /// Entries that vanished mid-pass are skips, not failures.
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Self::EntryNotFound { .. } | Self::UnsupportedEntry { .. }
        )
    }
}
