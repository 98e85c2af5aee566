use crate::interface::file_system::FileSystemTrait;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// The host file system, throttled by a shared semaphore.
pub struct FileSystem {
    semaphore: Arc<Semaphore>,
}

impl FileSystem {
    pub fn new(semaphore: Arc<Semaphore>) -> Self {
        FileSystem { semaphore }
    }
}

#[async_trait]
impl FileSystemTrait for FileSystem {
    fn semaphore(&self) -> Arc<Semaphore> {
        self.semaphore.clone()
    }
}
