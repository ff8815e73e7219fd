//! In-memory document store for testing.

use std::time::{Duration, SystemTime};

use crate::store::{DocumentRecord, DocumentStore, StoreError};

/// In-memory [`DocumentStore`] backed by a fixed list of records.
///
/// Available behind the `mock` feature for use in consumer tests.
#[derive(Debug, Default)]
pub struct MockStore {
    records: Vec<DocumentRecord>,
}

impl MockStore {
    /// Create an empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock store with the given records.
    #[must_use]
    pub fn with_records(records: Vec<DocumentRecord>) -> Self {
        Self { records }
    }

    /// Add a document with a modification time offset in seconds from the
    /// Unix epoch, so tests control relative recency deterministically.
    pub fn push(&mut self, title: &str, path: &str, modified_secs: u64) {
        self.records.push(DocumentRecord {
            title: title.to_owned(),
            path: path.to_owned(),
            modified: SystemTime::UNIX_EPOCH + Duration::from_secs(modified_secs),
        });
    }
}

impl DocumentStore for MockStore {
    fn scan(&self) -> Result<Vec<DocumentRecord>, StoreError> {
        Ok(self.records.clone())
    }
}
