use std::ffi::OsStr;
use std::path::PathBuf;

/// What a path currently is, answered by one status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Missing,
    // Only reported when links are not followed
    Link,
    // FIFOs, sockets, devices
    Other,
}

/// Corresponding locations in the source and replica trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPair {
    pub source: PathBuf,
    pub replica: PathBuf,
}

impl DirectoryPair {
    pub fn new(source: impl Into<PathBuf>, replica: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            replica: replica.into(),
        }
    }

    pub fn child(&self, name: &OsStr) -> Self {
        Self {
            source: self.source.join(name),
            replica: self.replica.join(name),
        }
    }
}
