use crate::core::io_manager::IOManager;
use crate::core::mirror::journal::Journal;
use crate::model::entry::EntryKind;
use crate::model::error::io::IOError;
use crate::model::log::mirror::MirrorLog;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Deletes replica entries, directories depth-first with an explicit stack.
pub struct Remover {
    io_manager: Arc<IOManager>,
}

impl Remover {
    pub fn new(io_manager: Arc<IOManager>) -> Self {
        Self { io_manager }
    }

    /// Removes `path` and everything below it. Returns whether `path` is gone.
    pub async fn remove(&self, path: &Path, journal: &mut Journal) -> bool {
        match self.io_manager.replica_kind(path).await {
            Ok(EntryKind::Directory) => self.remove_tree(path, journal).await,
            Ok(EntryKind::Missing) => {
                journal.failure(IOError::EntryNotFound {
                    path: path.to_path_buf(),
                });
                false
            }
            Ok(EntryKind::File | EntryKind::Link | EntryKind::Other) => {
                self.remove_file(path, journal).await
            }
            Err(err) => {
                journal.failure(err);
                false
            }
        }
    }

    async fn remove_file(&self, path: &Path, journal: &mut Journal) -> bool {
        match self.io_manager.delete_file(path).await {
            Ok(()) => {
                journal.action(MirrorLog::FileRemoved {
                    path: path.to_path_buf(),
                });
                true
            }
            Err(err) => {
                journal.failure(err);
                false
            }
        }
    }

    // Post-order: a directory is removed only after the walk has come back from
    // all of its children, so removal lines go leaves first.
    async fn remove_tree(&self, root: &Path, journal: &mut Journal) -> bool {
        let io_manager = &self.io_manager;

        let mut root_removed = false;
        let mut stack: Vec<(PathBuf, bool)> = vec![(root.to_path_buf(), false)];

        while let Some((directory, emptied)) = stack.pop() {
            if emptied {
                match io_manager.delete_directory(&directory).await {
                    Ok(()) => {
                        root_removed |= directory == root;
                        journal.action(MirrorLog::DirectoryRemoved { path: directory });
                    }
                    Err(err) => journal.failure(err),
                }
                continue;
            }

            let mut names = match io_manager.list_directory(&directory).await {
                Ok(names) => names,
                Err(err) => {
                    journal.failure(err);
                    continue;
                }
            };
            names.sort();

            stack.push((directory.clone(), true));
            for name in names {
                let child = directory.join(name);
                match io_manager.replica_kind(&child).await {
                    Ok(EntryKind::Directory) => stack.push((child, false)),
                    Ok(EntryKind::Missing) => {
                        journal.failure(IOError::EntryNotFound { path: child });
                    }
                    Ok(EntryKind::File | EntryKind::Link | EntryKind::Other) => {
                        self.remove_file(&child, journal).await;
                    }
                    Err(err) => journal.failure(err),
                }
            }
        }

        root_removed
    }
}
