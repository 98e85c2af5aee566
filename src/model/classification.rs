use std::collections::BTreeSet;
use std::ffi::OsString;

/// Names of one directory pair split by which side lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Only in the replica.
    pub stale: BTreeSet<OsString>,
    /// Only in the source.
    pub new: BTreeSet<OsString>,
    /// In both; still needs a kind and content check.
    pub common: BTreeSet<OsString>,
}
