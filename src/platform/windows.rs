use std::io;
use std::os::windows::fs::FileTypeExt;
use std::path::Path;

/// Removes a file, or a symbolic link itself rather than its target. Directory links and
/// junctions need `remove_dir` on Windows.
pub async fn remove_file(path: &Path) -> io::Result<()> {
    let metadata = tokio::fs::symlink_metadata(path).await?;
    if metadata.file_type().is_symlink_dir() {
        tokio::fs::remove_dir(path).await
    } else {
        tokio::fs::remove_file(path).await
    }
}
