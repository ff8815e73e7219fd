//! Local-reference destination rewriting.
//!
//! Links, images, and mp4 paths that point inside the wiki's own storage
//! are rewritten to go through the file-serving endpoint. External URLs
//! are never touched.

/// Default URL prefix under which document files are served.
pub const DEFAULT_FILES_PREFIX: &str = "/api/files";

/// Whether a destination points inside the wiki rather than at an
/// external URL. Empty destinations are not local.
pub fn is_local_reference(dest: &str) -> bool {
    let dest = dest.trim();
    !dest.is_empty()
        && !dest.starts_with("http://")
        && !dest.starts_with("https://")
        && !dest.starts_with("ftp://")
        && !dest.contains("://")
}

/// Rewrite a local destination to its file-serving URL.
///
/// Absolute destinations (leading `/`) resolve against the wiki root;
/// relative ones resolve against the current document's directory.
/// Backslashes are normalized to forward slashes.
pub fn rewrite_local_reference(dest: &str, document_path: &str, files_prefix: &str) -> String {
    let rewritten = if let Some(absolute) = dest.strip_prefix('/') {
        format!("{files_prefix}/{absolute}")
    } else {
        format!("{files_prefix}/{document_path}/{dest}")
    };
    rewritten.replace('\\', "/")
}
