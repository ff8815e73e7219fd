//! Storage abstraction for the wikimark wiki engine.
//!
//! This crate provides a [`DocumentStore`] trait for read-only scanning of
//! the wiki's document tree, decoupling consumers (the statistics subsystem
//! in particular) from the underlying storage backend. This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Backend flexibility** (filesystem today, anything else tomorrow)
//!
//! # Document model
//!
//! A wiki document is a directory containing a `document.md` file. The
//! document's path is the directory path relative to the store root,
//! `/`-separated; its title is the first `# ` heading in the file, falling
//! back to the formatted directory name.
//!
//! # Example
//!
//! ```ignore
//! use wikimark_storage::{DocumentStore, FsStore};
//!
//! let store = FsStore::new("data/documents");
//! for doc in store.scan()? {
//!     println!("{}: {}", doc.path, doc.title);
//! }
//! ```

mod fs;
mod html;
#[cfg(feature = "mock")]
mod mock;
mod store;

pub use fs::FsStore;
pub use html::escape_html;
#[cfg(feature = "mock")]
pub use mock::MockStore;
pub use store::{DocumentRecord, DocumentStore, StoreError, format_dir_name};
