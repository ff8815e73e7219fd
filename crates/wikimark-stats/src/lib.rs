//! Document statistics shortcodes.
//!
//! Expands `:::stats key=value:::` directives found in document text into
//! HTML fragments, backed by a read-only [`DocumentStore`] scan:
//!
//! - `:::stats count=*:::` (or `count=all`) — total document count
//! - `:::stats count=<folder>:::` — count restricted to one subtree
//! - `:::stats recent=<N>:::` — the N most recently edited documents
//!
//! Results are best-effort: a failed store scan renders an empty aggregate,
//! unknown parameters render an inline error fragment, and nothing here
//! ever aborts a render.
//!
//! # Deduplication
//!
//! Callers pass a per-render set of already-expanded shortcode literals.
//! A shortcode whose **exact source text** was expanded before is left in
//! the text untouched. The key is the literal string, so two spellings of
//! the same request (differing whitespace) expand twice; this matches the
//! historical behavior and is relied upon by existing documents.

mod report;
mod shortcode;

use std::collections::HashSet;

use wikimark_storage::DocumentStore;

use crate::shortcode::{SHORTCODE_RE, StatsRequest, parse_request};

/// Cheap pre-filter marker; text without it cannot contain a shortcode.
pub const STATS_MARKER: &str = ":::stats";

/// Result of expanding the shortcodes in one text fragment.
#[derive(Debug, PartialEq, Eq)]
pub struct Expansion {
    /// HTML for every newly expanded shortcode, in source order.
    pub html: String,
    /// The fragment text with newly expanded shortcodes removed.
    /// Previously seen shortcodes remain in place verbatim.
    pub remaining: String,
}

/// Expands stats shortcodes against a document store.
pub struct StatsRenderer<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> StatsRenderer<'a> {
    #[must_use]
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Expand all unseen shortcodes in `text`.
    ///
    /// Returns `None` when the text contains no shortcode that needed
    /// expanding (either none matched, or all were seen before).
    #[must_use]
    pub fn expand(&self, text: &str, seen: &mut HashSet<String>) -> Option<Expansion> {
        if !text.contains(STATS_MARKER) {
            return None;
        }

        let mut html = String::new();
        let mut remaining = String::new();
        let mut last = 0;
        let mut expanded = false;

        for caps in SHORTCODE_RE.captures_iter(text) {
            let full = caps.get(0).expect("match group 0 always present");
            let literal = full.as_str();

            if seen.contains(literal) {
                // Already rendered once this call: keep the literal in the text.
                remaining.push_str(&text[last..full.end()]);
                last = full.end();
                continue;
            }
            seen.insert(literal.to_owned());
            expanded = true;

            remaining.push_str(&text[last..full.start()]);
            last = full.end();

            let params = caps.get(1).map_or("", |m| m.as_str());
            match parse_request(params) {
                StatsRequest::Count(scope) => report::render_count(self.store, &scope, &mut html),
                StatsRequest::Recent(limit) => report::render_recent(self.store, limit, &mut html),
                StatsRequest::Invalid => {
                    tracing::warn!(shortcode = literal, "invalid stats shortcode parameters");
                    html.push_str(
                        "<div class=\"wiki-stats-error\">Invalid stats shortcode parameters. \
                         Use count=* or recent=N.</div>",
                    );
                }
            }
        }

        remaining.push_str(&text[last..]);
        expanded.then_some(Expansion { html, remaining })
    }
}
