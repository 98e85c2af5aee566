use crate::model::error::io::IOError;
use crate::model::log::mirror::MirrorLog;
use std::fmt;

/// Tally of one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassReport {
    pub copied: usize,
    pub modified: usize,
    pub created: usize,
    pub removed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl PassReport {
    pub fn record_action(&mut self, action: &MirrorLog) {
        match action {
            MirrorLog::FileCopied { .. } => self.copied += 1,
            MirrorLog::FileModified { .. } => self.modified += 1,
            MirrorLog::DirectoryCreated { .. } => self.created += 1,
            MirrorLog::FileRemoved { .. } | MirrorLog::DirectoryRemoved { .. } => self.removed += 1,
        }
    }

    pub fn record_failure(&mut self, error: &IOError) {
        if error.is_skip() {
            self.skipped += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn merge(&mut self, other: PassReport) {
        self.copied += other.copied;
        self.modified += other.modified;
        self.created += other.created;
        self.removed += other.removed;
        self.skipped += other.skipped;
        self.failed += other.failed;
    }

    pub fn changes(&self) -> usize {
        self.copied + self.modified + self.created + self.removed
    }
}

impl fmt::Display for PassReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} copied, {} modified, {} created, {} removed, {} skipped, {} failed",
            self.copied, self.modified, self.created, self.removed, self.skipped, self.failed
        )
    }
}
