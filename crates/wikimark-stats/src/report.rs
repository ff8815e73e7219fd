//! HTML report rendering for count and recent-edit requests.

use std::fmt::Write as _;

use chrono::{DateTime, Local};
use tracing::warn;
use wikimark_storage::{DocumentRecord, DocumentStore, escape_html, format_dir_name};

use crate::shortcode::CountScope;

/// Render a document-count card into `out`.
pub fn render_count(store: &dyn DocumentStore, scope: &CountScope, out: &mut String) {
    let docs = scan_or_empty(store);

    let (count, title, description) = match scope {
        CountScope::All => (
            docs.len(),
            "Total Documents".to_owned(),
            "Total number of documents in the wiki".to_owned(),
        ),
        CountScope::Folder(folder) => {
            let norm = folder.trim_matches('/');
            let count = docs
                .iter()
                .filter(|doc| doc.path == norm || doc.path.starts_with(&format!("{norm}/")))
                .count();
            let display = format_dir_name(norm);
            (
                count,
                format!("Documents in {display}"),
                format!("Number of documents in the {display} section"),
            )
        }
    };

    let _ = write!(
        out,
        "<div class=\"wiki-stats doc-count\">\n\
         <h4>{title}</h4>\n\
         <div class=\"count-container\">\n\
         <div class=\"count-number\">{count}</div>\n\
         <div class=\"count-description\">{description}</div>\n\
         </div>\n\
         </div>\n",
        title = escape_html(&title),
        description = escape_html(&description),
    );
}

/// Render a recently-edited list into `out`, newest first.
pub fn render_recent(store: &dyn DocumentStore, limit: usize, out: &mut String) {
    let mut docs = scan_or_empty(store);
    docs.sort_by(|a, b| b.modified.cmp(&a.modified));
    docs.truncate(limit);

    out.push_str("<div class=\"wiki-stats recent-edits\">\n<h4>Recently Edited Documents</h4>\n");

    if docs.is_empty() {
        out.push_str("<p>No recently edited documents found.</p>\n");
    } else {
        out.push_str("<ul>\n");
        for doc in &docs {
            let edited = DateTime::<Local>::from(doc.modified)
                .format("%Y-%m-%d %H:%M")
                .to_string();
            let _ = write!(
                out,
                "<li>\n  <div class=\"doc-info\">\n    \
                 <a href=\"/{path}\">{title}</a>\n    \
                 <span class=\"doc-path\">/{path}</span>\n  </div>\n  \
                 <span class=\"edit-date\">{edited}</span>\n</li>\n",
                path = doc.path,
                title = escape_html(&doc.title),
            );
        }
        out.push_str("</ul>\n");
    }

    out.push_str("</div>\n");
}

/// Scan the store, degrading to an empty list on failure.
fn scan_or_empty(store: &dyn DocumentStore) -> Vec<DocumentRecord> {
    match store.scan() {
        Ok(docs) => docs,
        Err(err) => {
            warn!(%err, "document scan failed, rendering empty stats");
            Vec::new()
        }
    }
}
