use crate::core::io_manager::IOManager;
use crate::model::classification::Classification;
use crate::model::comparison_mode::ComparisonMode;
use crate::model::error::io::IOError;
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;

pub struct Comparator {
    io_manager: Arc<IOManager>,
    comparison_mode: ComparisonMode,
}

impl Comparator {
    pub fn new(io_manager: Arc<IOManager>, comparison_mode: ComparisonMode) -> Self {
        Self {
            io_manager,
            comparison_mode,
        }
    }

    /// Splits two directory listings into stale, new and common names.
    pub fn classify(
        source_names: impl IntoIterator<Item = OsString>,
        replica_names: impl IntoIterator<Item = OsString>,
    ) -> Classification {
        let source: BTreeSet<OsString> = source_names.into_iter().collect();
        let replica: BTreeSet<OsString> = replica_names.into_iter().collect();

        Classification {
            stale: replica.difference(&source).cloned().collect(),
            new: source.difference(&replica).cloned().collect(),
            common: source.intersection(&replica).cloned().collect(),
        }
    }

    /// Whether two regular files hold the same bytes.
    pub async fn identical(&self, source: &Path, replica: &Path) -> Result<bool, IOError> {
        let io_manager = &self.io_manager;

        let source_len = io_manager.file_len(source).await?;
        let replica_len = io_manager.file_len(replica).await?;
        if source_len != replica_len {
            return Ok(false);
        }

        match self.comparison_mode {
            ComparisonMode::Content => io_manager.compare_content(source, replica).await,
            ComparisonMode::Hash(hash_type) => {
                let source_hash = io_manager.hash_file(source, hash_type).await?;
                let replica_hash = io_manager.hash_file(replica, hash_type).await?;
                Ok(source_hash == replica_hash)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    fn set(list: &[&str]) -> BTreeSet<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn classify_splits_by_side() {
        let classification = Comparator::classify(
            names(&["a.txt", "sub", "new.txt"]),
            names(&["c.txt", "a.txt", "sub"]),
        );

        assert_eq!(classification.stale, set(&["c.txt"]));
        assert_eq!(classification.new, set(&["new.txt"]));
        assert_eq!(classification.common, set(&["a.txt", "sub"]));
    }

    #[test]
    fn classify_ignores_listing_order() {
        let forward = Comparator::classify(names(&["x", "y", "z"]), names(&["z", "w"]));
        let backward = Comparator::classify(names(&["z", "y", "x"]), names(&["w", "z"]));
        assert_eq!(forward, backward);
    }

    #[test]
    fn classify_empty_sides() {
        let only_source = Comparator::classify(names(&["a"]), Vec::new());
        assert_eq!(only_source.new, set(&["a"]));
        assert!(only_source.stale.is_empty() && only_source.common.is_empty());

        let only_replica = Comparator::classify(Vec::new(), names(&["a"]));
        assert_eq!(only_replica.stale, set(&["a"]));
        assert!(only_replica.new.is_empty() && only_replica.common.is_empty());
    }

    #[tokio::test]
    async fn identical_compares_bytes_not_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        let c = dir.path().join("c");
        let d = dir.path().join("d");
        std::fs::write(&a, b"hello").unwrap();
        std::fs::write(&b, b"hello").unwrap();
        std::fs::write(&c, b"hellO").unwrap();
        std::fs::write(&d, b"hello, world").unwrap();

        for mode in ["content", "blake3", "md5"] {
            let comparator =
                Comparator::new(Arc::new(IOManager::new(4)), mode.parse().unwrap());
            assert!(comparator.identical(&a, &b).await.unwrap(), "{mode}");
            assert!(!comparator.identical(&a, &c).await.unwrap(), "{mode}");
            assert!(!comparator.identical(&a, &d).await.unwrap(), "{mode}");
        }
    }

    #[tokio::test]
    async fn identical_reports_vanished_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        std::fs::write(&a, b"hello").unwrap();

        let comparator = Comparator::new(Arc::new(IOManager::new(4)), ComparisonMode::Content);
        let err = comparator
            .identical(&a, &dir.path().join("gone"))
            .await
            .unwrap_err();
        assert!(matches!(err, IOError::EntryNotFound { .. }));
    }
}
