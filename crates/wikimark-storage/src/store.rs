//! Document store trait and descriptor types.

use std::time::SystemTime;

/// Descriptor for a single wiki document discovered by a store scan.
///
/// Constructed transiently during a scan; never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Title resolved from the first `# ` heading in the document file,
    /// falling back to the formatted directory name.
    pub title: String,
    /// Path of the document directory relative to the store root,
    /// `/`-separated. `""` is the root document.
    pub path: String,
    /// Last modification time of the document file.
    pub modified: SystemTime,
}

/// Error returned when a scan cannot run at all.
///
/// Per-document read failures never surface here: stores skip those entries
/// and report only failures that prevent the scan itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error accessing the document tree root.
    #[error("I/O error scanning document tree: {0}")]
    Io(#[from] std::io::Error),
}

/// Read-only view over a tree of wiki documents.
///
/// Implementations must be safe to share across concurrent render calls;
/// the renderer never mutates the store.
pub trait DocumentStore: Send + Sync {
    /// Scan and return all documents in the tree.
    ///
    /// The result is best-effort: individual unreadable documents are
    /// skipped, not reported.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only when the scan itself cannot run.
    fn scan(&self) -> Result<Vec<DocumentRecord>, StoreError>;
}

/// Format a directory name for display: dashes become spaces and each word
/// is title-cased (`"getting-started"` → `"Getting Started"`).
#[must_use]
pub fn format_dir_name(name: &str) -> String {
    name.replace('-', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_dir_name_dashes() {
        assert_eq!(format_dir_name("getting-started"), "Getting Started");
    }

    #[test]
    fn test_format_dir_name_single_word() {
        assert_eq!(format_dir_name("tutorials"), "Tutorials");
    }

    #[test]
    fn test_format_dir_name_already_cased() {
        assert_eq!(format_dir_name("API-Reference"), "API Reference");
    }

    #[test]
    fn test_format_dir_name_empty() {
        assert_eq!(format_dir_name(""), "");
    }

    #[test]
    fn test_format_dir_name_collapses_extra_dashes() {
        assert_eq!(format_dir_name("a--b"), "A B");
    }

    #[test]
    fn test_document_record_fields() {
        let record = DocumentRecord {
            title: "Intro".to_owned(),
            path: "tutorials/intro".to_owned(),
            modified: SystemTime::UNIX_EPOCH,
        };

        assert_eq!(record.title, "Intro");
        assert_eq!(record.path, "tutorials/intro");
    }

    #[test]
    fn test_store_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StoreError>();
    }
}
