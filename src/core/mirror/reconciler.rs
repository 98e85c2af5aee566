use crate::core::io_manager::IOManager;
use crate::core::mirror::comparator::Comparator;
use crate::core::mirror::journal::Journal;
use crate::core::mirror::remover::Remover;
use crate::interface::log_sink::LogSink;
use crate::model::comparison_mode::ComparisonMode;
use crate::model::entry::{DirectoryPair, EntryKind};
use crate::model::error::Error;
use crate::model::error::io::IOError;
use crate::model::error::system::SystemError;
use crate::model::log::mirror::MirrorLog;
use crate::model::pass_report::PassReport;
use crossbeam_queue::SegQueue;
use futures::future::join_all;
use macros::log;
use std::path::Path;
use std::sync::Arc;

/// Makes a replica tree match a source tree.
///
/// Directory pairs are processed one level at a time. The root pair runs inline
/// so that a failure to read either root aborts the pass; every deeper level is
/// drained by up to `max_concurrency` workers sharing one queue. A worker handles
/// a whole pair (stale, then new, then common), which keeps operations on one
/// name ordered delete-then-create.
pub struct Reconciler {
    io_manager: Arc<IOManager>,
    sink: Arc<dyn LogSink>,
    comparison_mode: ComparisonMode,
    max_concurrency: usize,
}

impl Reconciler {
    pub fn new(
        io_manager: Arc<IOManager>,
        sink: Arc<dyn LogSink>,
        comparison_mode: ComparisonMode,
        max_concurrency: usize,
    ) -> Self {
        Self {
            io_manager,
            sink,
            comparison_mode,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Runs one full pass. Only structural failures are returned; everything
    /// else is logged per entry and counted in the report.
    pub async fn reconcile(&self, source_root: &Path, replica_root: &Path) -> Result<PassReport, Error> {
        self.check_root(source_root, |path| SystemError::SourceRootUnavailable { path })
            .await?;
        self.check_root(replica_root, |path| SystemError::ReplicaRootUnavailable { path })
            .await?;

        let root = DirectoryPair::new(source_root, replica_root);
        let mut journal = Journal::new(self.sink.clone());
        let mut current_level = self
            .to_worker()
            .reconcile_pair(&root, &mut journal)
            .await
            .map_err(|err| {
                self.sink.emit(&err.to_string());
                Error::from(err)
            })?;
        let mut report = journal.into_report();

        while !current_level.is_empty() {
            let queue = Arc::new(SegQueue::new());
            let worker_count = self.max_concurrency.min(current_level.len());
            for pair in current_level.drain(..) {
                queue.push(pair);
            }

            let handles = (0..worker_count).map(|_| {
                let worker = self.to_worker();
                let queue = queue.clone();
                tokio::spawn(async move { worker.run(queue).await })
            });

            let mut next_level = Vec::new();
            for result in join_all(handles).await {
                match result {
                    Ok((worker_next_level, worker_report)) => {
                        next_level.extend(worker_next_level);
                        report.merge(worker_report);
                    }
                    Err(err) => {
                        log!(SystemError::ThreadPanic {
                            message: err.to_string()
                        });
                        report.failed += 1;
                    }
                }
            }
            current_level = next_level;
        }

        Ok(report)
    }

    async fn check_root(
        &self,
        path: &Path,
        unavailable: impl FnOnce(std::path::PathBuf) -> SystemError,
    ) -> Result<(), Error> {
        match self.io_manager.entry_kind(path).await {
            Ok(EntryKind::Directory) => Ok(()),
            Ok(_) | Err(_) => {
                let err = unavailable(path.to_path_buf());
                self.sink.emit(&err.to_string());
                Err(err.into())
            }
        }
    }

    fn to_worker(&self) -> Worker {
        let io_manager = self.io_manager.clone();
        Worker {
            comparator: Comparator::new(io_manager.clone(), self.comparison_mode),
            remover: Remover::new(io_manager.clone()),
            sink: self.sink.clone(),
            io_manager,
        }
    }
}

struct Worker {
    io_manager: Arc<IOManager>,
    sink: Arc<dyn LogSink>,
    comparator: Comparator,
    remover: Remover,
}

impl Worker {
    async fn run(&self, queue: Arc<SegQueue<DirectoryPair>>) -> (Vec<DirectoryPair>, PassReport) {
        let mut journal = Journal::new(self.sink.clone());
        let mut next_level = Vec::new();

        while let Some(pair) = queue.pop() {
            match self.reconcile_pair(&pair, &mut journal).await {
                Ok(children) => next_level.extend(children),
                Err(err) => journal.failure(err),
            }
        }

        (next_level, journal.into_report())
    }

    /// Reconciles the immediate entries of one pair and returns the subdirectory
    /// pairs still to be visited.
    async fn reconcile_pair(
        &self,
        pair: &DirectoryPair,
        journal: &mut Journal,
    ) -> Result<Vec<DirectoryPair>, IOError> {
        let io_manager = &self.io_manager;

        let source_names = io_manager.list_directory(&pair.source).await?;
        let replica_names = io_manager.list_directory(&pair.replica).await?;
        let classification = Comparator::classify(source_names, replica_names);

        for name in &classification.stale {
            self.remover.remove(&pair.replica.join(name), journal).await;
        }

        let mut children = Vec::new();

        for name in &classification.new {
            if let Some(child) = self.sync_entry(pair.child(name), EntryKind::Missing, journal).await {
                children.push(child);
            }
        }

        for name in &classification.common {
            let child = pair.child(name);
            let replica_kind = match io_manager.replica_kind(&child.replica).await {
                Ok(kind) => kind,
                Err(err) => {
                    journal.failure(err);
                    continue;
                }
            };
            if let Some(child) = self.sync_entry(child, replica_kind, journal).await {
                children.push(child);
            }
        }

        Ok(children)
    }

    /// Brings one replica entry in line with its source entry. Returns the pair
    /// when it is a directory pair whose contents still need reconciling.
    async fn sync_entry(
        &self,
        pair: DirectoryPair,
        replica_kind: EntryKind,
        journal: &mut Journal,
    ) -> Option<DirectoryPair> {
        let source_kind = match self.io_manager.entry_kind(&pair.source).await {
            Ok(kind) => kind,
            Err(err) => {
                journal.failure(err);
                return None;
            }
        };

        match (source_kind, replica_kind) {
            (EntryKind::Missing, _) => {
                journal.failure(IOError::EntryNotFound { path: pair.source });
                None
            }
            // Source kinds follow links, so `Link` only shows up here if a custom
            // file system reports one.
            (EntryKind::Other | EntryKind::Link, _) => {
                journal.failure(IOError::UnsupportedEntry { path: pair.source });
                None
            }
            (EntryKind::File, EntryKind::Missing) => {
                self.copy_file(&pair, journal).await;
                None
            }
            (EntryKind::Directory, EntryKind::Missing) => self.create_directory(pair, journal).await,
            (EntryKind::File, EntryKind::File) => {
                self.update_file(&pair, journal).await;
                None
            }
            (EntryKind::Directory, EntryKind::Directory) => Some(pair),
            // Kind mismatch, including a replica link: replace the replica entry
            // with one of the source's kind.
            (EntryKind::File, _) => {
                if self.remover.remove(&pair.replica, journal).await {
                    self.copy_file(&pair, journal).await;
                }
                None
            }
            (EntryKind::Directory, _) => {
                if self.remover.remove(&pair.replica, journal).await {
                    self.create_directory(pair, journal).await
                } else {
                    None
                }
            }
        }
    }

    async fn copy_file(&self, pair: &DirectoryPair, journal: &mut Journal) {
        match self.io_manager.copy_file(&pair.source, &pair.replica).await {
            Ok(()) => journal.action(MirrorLog::FileCopied {
                path: pair.replica.clone(),
            }),
            Err(err) => journal.failure(err),
        }
    }

    async fn create_directory(&self, pair: DirectoryPair, journal: &mut Journal) -> Option<DirectoryPair> {
        match self.io_manager.create_directory(&pair.replica).await {
            Ok(()) => {
                journal.action(MirrorLog::DirectoryCreated {
                    path: pair.replica.clone(),
                });
                Some(pair)
            }
            Err(err) => {
                journal.failure(err);
                None
            }
        }
    }

    async fn update_file(&self, pair: &DirectoryPair, journal: &mut Journal) {
        let io_manager = &self.io_manager;

        match self.comparator.identical(&pair.source, &pair.replica).await {
            Ok(true) => {}
            Ok(false) => {
                let replaced = match io_manager.delete_file(&pair.replica).await {
                    Ok(()) => io_manager.copy_file(&pair.source, &pair.replica).await,
                    Err(err) => Err(err),
                };
                match replaced {
                    Ok(()) => journal.action(MirrorLog::FileModified {
                        path: pair.replica.clone(),
                    }),
                    Err(err) => journal.failure(err),
                }
            }
            Err(err) => journal.failure(err),
        }
    }
}
