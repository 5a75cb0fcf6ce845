//! Storage backend descriptors for the mirrored study.
//!
//! The mirror does not implement storage; it only records which backend the
//! optimizer used so a later [reload](crate::load_study_from_run) knows
//! whether to deserialize a snapshot blob or reconnect to a database.

use serde::{Deserialize, Serialize};

/// Storage type tag written for in-memory studies.
pub(crate) const IN_MEMORY_TAG: &str = "InMemoryStorage";
/// Placeholder URL written for unrecognized backends.
pub(crate) const UNKNOWN_URL: &str = "unknown storage url";

/// The kind of storage backend a study lives in.
///
/// Cached relational storage is a write-through cache in front of a
/// relational database, so it resolves to the same descriptor as direct
/// relational storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[allow(clippy::module_name_repetitions)]
pub enum StorageKind {
    /// Trials held in process memory; snapshot blobs are the only way to
    /// persist such a study.
    InMemory,
    /// A Redis key-value store.
    Redis {
        /// Connection URL.
        url: String,
    },
    /// A relational database behind a caching layer.
    RdbCached {
        /// Connection URL of the backing database.
        url: String,
    },
    /// A relational database accessed directly.
    Rdb {
        /// Connection URL.
        url: String,
    },
    /// Anything the mirror does not recognize.
    Unknown,
}

impl StorageKind {
    /// Pure mapping to the `(storage_type, storage_url)` pair recorded in
    /// the run.
    ///
    /// # Examples
    ///
    /// ```
    /// use study_mirror::StorageKind;
    ///
    /// let kind = StorageKind::RdbCached { url: "postgresql://db/studies".into() };
    /// assert_eq!(kind.descriptor(), ("RDBStorage", Some("postgresql://db/studies")));
    /// assert_eq!(StorageKind::InMemory.descriptor(), ("InMemoryStorage", None));
    /// ```
    #[must_use]
    pub fn descriptor(&self) -> (&'static str, Option<&str>) {
        match self {
            StorageKind::InMemory => (IN_MEMORY_TAG, None),
            StorageKind::Redis { url } => ("RedisStorage", Some(url)),
            StorageKind::RdbCached { url } | StorageKind::Rdb { url } => ("RDBStorage", Some(url)),
            StorageKind::Unknown => ("unknown storage type", None),
        }
    }

    /// Returns `true` for in-memory storage.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        matches!(self, StorageKind::InMemory)
    }
}
