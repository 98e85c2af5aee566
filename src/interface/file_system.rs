use crate::model::comparison_mode::HashType;
use crate::model::entry::EntryKind;
use crate::model::error::io::IOError;
use crate::platform;
use crate::utils::{file_compare, file_hash};
use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReadDirStream;

/// File system primitives used by the mirror. Every call holds a permit of the
/// shared semaphore for its duration.
#[async_trait]
pub trait FileSystemTrait: Send + Sync {
    fn semaphore(&self) -> Arc<Semaphore>;

    async fn acquire(&self) -> Result<OwnedSemaphorePermit, IOError> {
        self.semaphore()
            .acquire_owned()
            .await
            .map_err(|_| IOError::SemaphoreClosed)
    }

    /// Names of the immediate children of `path`, in no particular order.
    async fn list_directory(&self, path: &Path) -> Result<Vec<OsString>, IOError> {
        let _permit = self.acquire().await?;
        let fail = |message| IOError::ReadDirectoryFailed {
            path: path.to_path_buf(),
            message,
        };
        let reader = fs::read_dir(path)
            .await
            .map_err(|err| IOError::classify(err, path, fail))?;
        let mut entries = ReadDirStream::new(reader);
        let mut names = Vec::new();
        while let Some(entry) = entries.next().await {
            let entry = entry.map_err(|err| IOError::classify(err, path, fail))?;
            names.push(entry.file_name());
        }
        Ok(names)
    }

    /// Kind of `path`, following symbolic links.
    async fn entry_kind(&self, path: &Path) -> Result<EntryKind, IOError> {
        let _permit = self.acquire().await?;
        match fs::metadata(path).await {
            Ok(metadata) => Ok(platform::entry_kind(&metadata.file_type())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(EntryKind::Missing),
            Err(err) => Err(IOError::classify(err, path, |message| {
                IOError::GetMetadataFailed {
                    path: path.to_path_buf(),
                    message,
                }
            })),
        }
    }

    /// Kind of `path` without following links.
    async fn replica_kind(&self, path: &Path) -> Result<EntryKind, IOError> {
        let _permit = self.acquire().await?;
        match fs::symlink_metadata(path).await {
            Ok(metadata) => Ok(platform::entry_kind(&metadata.file_type())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(EntryKind::Missing),
            Err(err) => Err(IOError::classify(err, path, |message| {
                IOError::GetMetadataFailed {
                    path: path.to_path_buf(),
                    message,
                }
            })),
        }
    }

    async fn file_len(&self, path: &Path) -> Result<u64, IOError> {
        let _permit = self.acquire().await?;
        let metadata = fs::metadata(path).await.map_err(|err| {
            IOError::classify(err, path, |message| IOError::GetMetadataFailed {
                path: path.to_path_buf(),
                message,
            })
        })?;
        Ok(metadata.len())
    }

    /// Creates a single directory; its parent must already exist.
    async fn create_directory(&self, path: &Path) -> Result<(), IOError> {
        let _permit = self.acquire().await?;
        fs::create_dir(path).await.map_err(|err| {
            IOError::classify(err, path, |message| IOError::CreateDirectoryFailed {
                path: path.to_path_buf(),
                message,
            })
        })
    }

    /// A vanished source is a skip; any other error names both ends, since the
    /// OS error does not say which side it came from.
    async fn copy_file(&self, source: &Path, destination: &Path) -> Result<(), IOError> {
        let _permit = self.acquire().await?;
        match fs::copy(source, destination).await {
            Ok(_) => Ok(()),
            Err(err)
                if err.kind() == ErrorKind::NotFound
                    && !fs::try_exists(source).await.unwrap_or(true) =>
            {
                Err(IOError::EntryNotFound {
                    path: source.to_path_buf(),
                })
            }
            Err(err) => Err(IOError::CopyFileFailed {
                src: source.to_path_buf(),
                dst: destination.to_path_buf(),
                message: err.to_string(),
            }),
        }
    }

    /// Removes a file or a link (not its target).
    async fn delete_file(&self, path: &Path) -> Result<(), IOError> {
        let _permit = self.acquire().await?;
        platform::remove_file(path).await.map_err(|err| {
            IOError::classify(err, path, |message| IOError::DeleteFileFailed {
                path: path.to_path_buf(),
                message,
            })
        })
    }

    /// Removes an empty directory.
    async fn delete_directory(&self, path: &Path) -> Result<(), IOError> {
        let _permit = self.acquire().await?;
        fs::remove_dir(path).await.map_err(|err| {
            IOError::classify(err, path, |message| IOError::DeleteDirectoryFailed {
                path: path.to_path_buf(),
                message,
            })
        })
    }

    async fn compare_content(&self, left: &Path, right: &Path) -> Result<bool, IOError> {
        let _permit = self.acquire().await?;
        file_compare::same_content(left, right).await.map_err(|err| {
            IOError::classify(err, left, |message| IOError::ReadFileFailed {
                path: left.to_path_buf(),
                message,
            })
        })
    }

    async fn hash_file(&self, path: &Path, hash_type: HashType) -> Result<Vec<u8>, IOError> {
        let _permit = self.acquire().await?;
        file_hash::hash_file(path, hash_type).await.map_err(|err| {
            IOError::classify(err, path, |message| IOError::ReadFileFailed {
                path: path.to_path_buf(),
                message,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::file_system::FileSystem;
    use pretty_assertions::assert_eq;

    fn file_system() -> FileSystem {
        FileSystem::new(Arc::new(Semaphore::new(2)))
    }

    #[tokio::test]
    async fn copy_failure_names_both_paths() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.txt");
        let destination = dir.path().join("occupied");
        std::fs::write(&source, "a").unwrap();
        std::fs::create_dir(&destination).unwrap();

        let err = file_system().copy_file(&source, &destination).await.unwrap_err();
        match err {
            IOError::CopyFileFailed { src, dst, .. } => {
                assert_eq!(src, source);
                assert_eq!(dst, destination);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn copy_of_vanished_source_is_a_skip() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("gone.txt");

        let err = file_system()
            .copy_file(&source, &dir.path().join("copy.txt"))
            .await
            .unwrap_err();
        assert_eq!(err, IOError::EntryNotFound { path: source });
        assert!(err.is_skip());
    }

    #[tokio::test]
    async fn copy_into_missing_directory_blames_the_destination() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.txt");
        let destination = dir.path().join("missing").join("a.txt");
        std::fs::write(&source, "a").unwrap();

        let err = file_system().copy_file(&source, &destination).await.unwrap_err();
        assert!(matches!(err, IOError::CopyFileFailed { ref dst, .. } if *dst == destination));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn replica_kind_reports_links() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("target");
        let link = dir.path().join("link");
        std::fs::create_dir(&target).unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let file_system = file_system();
        assert_eq!(file_system.replica_kind(&link).await.unwrap(), EntryKind::Link);
        assert_eq!(file_system.entry_kind(&link).await.unwrap(), EntryKind::Directory);
    }
}
