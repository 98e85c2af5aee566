use crate::interface::file_system::FileSystemTrait;
use crate::platform::file_system::FileSystem;
use std::ops::Deref;
use std::sync::Arc;
use tokio::sync::Semaphore;

pub struct IOManager {
    file_system: Arc<dyn FileSystemTrait>,
}

impl IOManager {
    pub fn new(max_file_operations: usize) -> Self {
        let semaphore = Arc::new(Semaphore::new(max_file_operations));
        Self {
            file_system: Arc::new(FileSystem::new(semaphore)),
        }
    }

    /// Runs the mirror over another file system implementation.
    pub fn with_file_system(file_system: Arc<dyn FileSystemTrait>) -> Self {
        Self { file_system }
    }

    /// Pending and future operations fail with `SemaphoreClosed`.
    pub fn terminate(&self) {
        self.file_system.semaphore().close();
    }
}

impl Deref for IOManager {
    type Target = dyn FileSystemTrait;

    fn deref(&self) -> &Self::Target {
        self.file_system.as_ref()
    }
}
