#![allow(dead_code)]

use folder_mirror::core::action_log::MemorySink;
use folder_mirror::core::io_manager::IOManager;
use folder_mirror::core::mirror::reconciler::Reconciler;
use folder_mirror::interface::file_system::FileSystemTrait;
use folder_mirror::model::comparison_mode::ComparisonMode;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// A source and a replica directory under one temporary root.
pub struct Fixture {
    _temp: TempDir,
    pub source: PathBuf,
    pub replica: PathBuf,
    pub sink: Arc<MemorySink>,
}

impl Fixture {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().unwrap();
        let source = temp.path().join("source");
        let replica = temp.path().join("replica");
        fs::create_dir(&source).unwrap();
        fs::create_dir(&replica).unwrap();
        Self {
            _temp: temp,
            source,
            replica,
            sink: Arc::new(MemorySink::new()),
        }
    }

    pub fn outside(&self, name: &str) -> PathBuf {
        self._temp.path().join(name)
    }

    pub fn reconciler(&self, workers: usize) -> Reconciler {
        self.reconciler_with(Arc::new(IOManager::new(16)), ComparisonMode::Content, workers)
    }

    pub fn reconciler_with(
        &self,
        io_manager: Arc<IOManager>,
        comparison_mode: ComparisonMode,
        workers: usize,
    ) -> Reconciler {
        Reconciler::new(io_manager, self.sink.clone(), comparison_mode, workers)
    }

    pub fn reconciler_over(&self, file_system: Arc<dyn FileSystemTrait>) -> Reconciler {
        self.reconciler_with(
            Arc::new(IOManager::with_file_system(file_system)),
            ComparisonMode::Content,
            1,
        )
    }

    pub fn src(&self, relative: &str) -> PathBuf {
        self.source.join(relative)
    }

    pub fn rep(&self, relative: &str) -> PathBuf {
        self.replica.join(relative)
    }

    /// The action line the reconciler writes for a replica path.
    pub fn line(&self, kind: &str, relative: &str, verb: &str) -> String {
        format!("{kind} {} {verb}", self.rep(relative).display())
    }
}

pub fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Relative path to file contents, `None` for directories.
pub fn snapshot(root: &Path) -> BTreeMap<String, Option<String>> {
    let mut entries = BTreeMap::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(directory) = stack.pop() {
        for entry in fs::read_dir(&directory).unwrap() {
            let path = entry.unwrap().path();
            let relative = path
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            if path.is_dir() {
                entries.insert(relative, None);
                stack.push(path);
            } else {
                entries.insert(relative, Some(fs::read_to_string(&path).unwrap()));
            }
        }
    }
    entries
}
