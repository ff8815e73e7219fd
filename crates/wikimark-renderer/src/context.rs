//! Per-render state.

use std::collections::HashSet;

/// State scoped to a single render call.
///
/// Created fresh per call and threaded through dispatch, including the
/// recursive re-parses done by collapsible and direction blocks, so
/// concurrent renders never share mutable state.
#[derive(Debug, Default)]
pub(crate) struct RenderContext {
    /// Directory path of the document being rendered, `/`-separated and
    /// relative to the wiki root. Empty when no path was supplied, which
    /// disables local-reference rewriting.
    pub document_path: String,
    /// Exact source text of every stats shortcode expanded so far in this
    /// render call. Keyed on the literal string, not parsed meaning.
    pub seen_shortcodes: HashSet<String>,
}

impl RenderContext {
    pub fn new(document_path: &str) -> Self {
        Self {
            document_path: document_path.to_owned(),
            seen_shortcodes: HashSet::new(),
        }
    }
}
