use std::io;
use std::path::Path;

/// Removes a file, or a symbolic link itself rather than its target.
pub async fn remove_file(path: &Path) -> io::Result<()> {
    tokio::fs::remove_file(path).await
}
