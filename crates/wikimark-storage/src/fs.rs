//! Filesystem document store.
//!
//! Scans a root directory recursively for `document.md` files and extracts
//! titles from the first H1 heading. Unreadable entries are skipped so a
//! scan always produces a best-effort result.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::store::{DocumentRecord, DocumentStore, StoreError, format_dir_name};

/// File name that marks a directory as a wiki document.
const DOCUMENT_FILE: &str = "document.md";

/// Filesystem implementation of [`DocumentStore`].
///
/// # Example
///
/// ```ignore
/// use wikimark_storage::{DocumentStore, FsStore};
///
/// let store = FsStore::new("data/documents");
/// let docs = store.scan()?;
/// ```
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store rooted at `root`.
    ///
    /// A missing root is not an error; scans of it return an empty list.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn walk(&self, dir: &Path, records: &mut Vec<DocumentRecord>) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(dir = %dir.display(), %err, "skipping unreadable directory");
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                self.walk(&path, records);
            } else if path.file_name().is_some_and(|name| name == DOCUMENT_FILE) {
                if let Some(record) = self.record_for(&path) {
                    records.push(record);
                }
            }
        }
    }

    fn record_for(&self, file: &Path) -> Option<DocumentRecord> {
        let modified = match fs::metadata(file).and_then(|meta| meta.modified()) {
            Ok(modified) => modified,
            Err(err) => {
                debug!(file = %file.display(), %err, "skipping document without mtime");
                return None;
            }
        };

        let dir = file.parent()?;
        let rel = dir.strip_prefix(&self.root).unwrap_or(dir);
        let path = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");

        let title = extract_title(file).unwrap_or_else(|| {
            let dir_name = dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            format_dir_name(&dir_name)
        });

        Some(DocumentRecord {
            title,
            path,
            modified,
        })
    }
}

impl DocumentStore for FsStore {
    fn scan(&self) -> Result<Vec<DocumentRecord>, StoreError> {
        let mut records = Vec::new();
        if self.root.is_dir() {
            self.walk(&self.root, &mut records);
        }
        Ok(records)
    }
}

/// Extract the first `# ` heading from a markdown file.
fn extract_title(file: &Path) -> Option<String> {
    let content = fs::read_to_string(file).ok()?;
    content
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_owned())
}
