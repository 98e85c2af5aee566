use macros::loggable;
use std::path::PathBuf;

loggable! {
    /// One line per completed mutation of the replica tree.
    MirrorLog {
        #[error("File {} copied", .path.display())]
        FileCopied { path: PathBuf } => tracing::Level::INFO,

        #[error("File {} modified", .path.display())]
        FileModified { path: PathBuf } => tracing::Level::INFO,

        #[error("File {} removed", .path.display())]
        FileRemoved { path: PathBuf } => tracing::Level::INFO,

        #[error("Directory {} created", .path.display())]
        DirectoryCreated { path: PathBuf } => tracing::Level::INFO,

        #[error("Directory {} removed", .path.display())]
        DirectoryRemoved { path: PathBuf } => tracing::Level::INFO,
    }
}
