//! Render entry points.

use std::sync::Arc;

use pulldown_cmark::{Event, Options, Parser, html};
use tracing::debug;
use wikimark_storage::DocumentStore;

use crate::context::RenderContext;
use crate::dispatch;
use crate::inline::links::DEFAULT_FILES_PREFIX;
use crate::preprocess::preprocess;

/// Wiki markdown renderer.
///
/// Stateless across calls: per-render state lives in an internal context,
/// so one renderer can serve concurrent requests.
///
/// # Example
///
/// ```
/// use wikimark_renderer::WikiRenderer;
///
/// let renderer = WikiRenderer::new();
/// let html = renderer.render_with_path("![logo](img.png)", "tutorials/intro");
/// assert!(html.contains("/api/files/tutorials/intro/img.png"));
/// ```
pub struct WikiRenderer {
    files_prefix: String,
    store: Option<Arc<dyn DocumentStore>>,
}

impl WikiRenderer {
    /// Create a renderer with the default file-serving prefix and no
    /// document store (stats shortcodes pass through as plain text).
    #[must_use]
    pub fn new() -> Self {
        Self {
            files_prefix: DEFAULT_FILES_PREFIX.to_owned(),
            store: None,
        }
    }

    /// Override the URL prefix used for local-reference rewriting.
    #[must_use]
    pub fn with_files_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.files_prefix = prefix.into();
        self
    }

    /// Attach a document store, enabling stats shortcode expansion.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Render markdown without a document path. Local references are left
    /// untouched.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        self.render_with_path(markdown, "")
    }

    /// Render markdown for the document at `document_path` (directory path
    /// relative to the wiki root, `/`-separated).
    #[must_use]
    pub fn render_with_path(&self, markdown: &str, document_path: &str) -> String {
        debug!(path = document_path, bytes = markdown.len(), "rendering document");
        let preprocessed = preprocess(markdown);
        let mut ctx = RenderContext::new(document_path);
        render_fragment(&preprocessed, self, &mut ctx)
    }

    pub(crate) fn files_prefix(&self) -> &str {
        &self.files_prefix
    }

    pub(crate) fn store(&self) -> Option<&dyn DocumentStore> {
        self.store.as_deref()
    }
}

impl Default for WikiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse and render one markdown fragment through the dispatch pipeline.
///
/// Also the reentry point for collapsible/direction blocks, which re-parse
/// their literal content with the same context (but without preprocessing,
/// since their content already went through it as part of the document).
pub(crate) fn render_fragment(
    markdown: &str,
    renderer: &WikiRenderer,
    ctx: &mut RenderContext,
) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let events: Vec<Event<'_>> = Parser::new_ext(markdown, options).collect();
    let events = dispatch::transform(events, renderer, ctx);

    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, events.into_iter());
    out
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use wikimark_storage::MockStore;

    use super::*;

    fn renderer_with_store() -> WikiRenderer {
        let mut store = MockStore::new();
        store.push("Introduction", "tutorials/intro", 1_000);
        store.push("Setup", "tutorials/setup", 3_000);
        WikiRenderer::new().with_store(Arc::new(store))
    }

    #[test]
    fn test_basic_markdown() {
        let html = WikiRenderer::new().render("# Title\n\nSome **bold** text.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_typography_applied() {
        let html = WikiRenderer::new().render("Copyright (c) 2024");
        assert!(html.contains("© 2024"));
    }

    #[test]
    fn test_typography_protected_in_code() {
        let html = WikiRenderer::new().render("`(c)`");
        assert!(html.contains("<code>(c)</code>"));
    }

    #[test]
    fn test_highlight_span() {
        let html = WikiRenderer::new().render("a ==b== c");
        assert!(html.contains("a <mark>b</mark> c"));
    }

    #[test]
    fn test_task_list_items() {
        let html = WikiRenderer::new().render("- [ ] buy milk\n- [x] done");
        assert!(html.contains("task-checkbox\" disabled"));
        assert!(html.contains("task-checkbox\" checked disabled"));
    }

    #[test]
    fn test_nested_task_item() {
        let html = WikiRenderer::new().render("- [ ] top\n  - [x] nested");
        assert!(html.contains("data-indent-level=\"1\""));
    }

    #[test]
    fn test_mermaid_block() {
        let html = WikiRenderer::new().render("```mermaid\ngraph TD;\nA-->B;\n```");
        assert!(html.contains("<div class=\"mermaid\">\ngraph TD;\nA-->B;\n</div>"));
        assert!(!html.contains("<pre>"));
    }

    #[test]
    fn test_youtube_block() {
        let html = WikiRenderer::new().render("```youtube\nabc12345678\n```");
        assert!(html.contains("youtube.com/embed/abc12345678"));
        assert!(html.contains("video-print-placeholder"));
    }

    #[test]
    fn test_youtube_block_invalid_id_falls_through() {
        let html = WikiRenderer::new().render("```youtube\n???\n```");
        assert!(html.contains("<pre>"));
        assert!(!html.contains("iframe"));
    }

    #[test]
    fn test_vimeo_block() {
        let html = WikiRenderer::new().render("```vimeo\n92060047\n```");
        assert!(html.contains("player.vimeo.com/video/92060047"));
    }

    #[test]
    fn test_mp4_block_rewrites_local_path() {
        let renderer = WikiRenderer::new();
        let html = renderer.render_with_path("```mp4\ndemo.mp4\n```", "tutorials/intro");
        assert!(html.contains("src=\"/api/files/tutorials/intro/demo.mp4\""));
    }

    #[test]
    fn test_mp4_block_external_url_untouched() {
        let html = WikiRenderer::new().render("```mp4\nhttps://cdn.example.com/demo.mp4\n```");
        assert!(html.contains("src=\"https://cdn.example.com/demo.mp4\""));
    }

    #[test]
    fn test_details_block() {
        let html = WikiRenderer::new().render("```details Install Steps\nRun **make**.\n```");
        assert!(html.contains("<details id=\"details-install-steps\" class=\"markdown-details\">"));
        assert!(html.contains("<summary>Install Steps</summary>"));
        assert!(html.contains("<strong>make</strong>"));
    }

    #[test]
    fn test_details_block_default_title() {
        let html = WikiRenderer::new().render("```details\nhidden\n```");
        assert!(html.contains("<summary>Details</summary>"));
        assert!(html.contains("id=\"details-details\""));
    }

    #[test]
    fn test_details_block_nested_list_after_paragraph() {
        let html = WikiRenderer::new().render("```details Steps\nDo these:\n- first\n- second\n```");
        assert!(html.contains("<ul>"));
        assert!(html.contains("first"));
    }

    #[test]
    fn test_rtl_block() {
        let html = WikiRenderer::new().render("```rtl\nشلوم\n```");
        assert!(html.contains("<div class=\"rtl\">"));
        assert!(!html.contains("<pre>"));
    }

    #[test]
    fn test_code_block_in_list_is_minimal() {
        let html = WikiRenderer::new().render("- item\n```rust\nlet x = 1;\n```");
        assert!(html.contains("<pre><code class=\"language-rust\">let x = 1;</code></pre>"));
    }

    #[test]
    fn test_regular_code_block_untouched() {
        let html = WikiRenderer::new().render("```rust\nlet x = 1;\n```");
        assert!(html.contains("language-rust"));
        assert!(html.contains("let x = 1;"));
    }

    #[test]
    fn test_paragraph_in_list_item_unwrapped() {
        let html = WikiRenderer::new().render("- one\n\n- two\n");
        assert!(!html.contains("<li><p>"));
        assert!(html.contains("<li>one"));
    }

    #[test]
    fn test_local_link_rewritten_with_path() {
        let html = WikiRenderer::new().render_with_path("[file](doc.pdf)", "guides");
        assert!(html.contains("href=\"/api/files/guides/doc.pdf\""));
    }

    #[test]
    fn test_local_image_rewritten_with_path() {
        let html = WikiRenderer::new().render_with_path("![img](img.png)", "tutorials/intro");
        assert!(html.contains("src=\"/api/files/tutorials/intro/img.png\""));
    }

    #[test]
    fn test_absolute_local_reference() {
        let html = WikiRenderer::new().render_with_path("![img](/img.png)", "tutorials/intro");
        assert!(html.contains("src=\"/api/files/img.png\""));
    }

    #[test]
    fn test_external_link_untouched() {
        let html = WikiRenderer::new().render_with_path("[x](https://x.com/a.png)", "docs");
        assert!(html.contains("href=\"https://x.com/a.png\""));
    }

    #[test]
    fn test_no_path_leaves_local_links() {
        let html = WikiRenderer::new().render("[file](doc.pdf)");
        assert!(html.contains("href=\"doc.pdf\""));
    }

    #[test]
    fn test_custom_files_prefix() {
        let renderer = WikiRenderer::new().with_files_prefix("/static");
        let html = renderer.render_with_path("![img](img.png)", "docs");
        assert!(html.contains("src=\"/static/docs/img.png\""));
    }

    #[test]
    fn test_stats_count_with_store() {
        let html = renderer_with_store().render(":::stats count=*:::");
        assert!(html.contains("wiki-stats doc-count"));
        assert!(html.contains("<div class=\"count-number\">2</div>"));
    }

    #[test]
    fn test_stats_recent_with_store() {
        let html = renderer_with_store().render(":::stats recent=1:::");
        assert!(html.contains("Recently Edited Documents"));
        assert!(html.contains("Setup"));
        assert!(!html.contains("Introduction"));
    }

    #[test]
    fn test_stats_dedupe_same_literal() {
        let html = renderer_with_store().render(":::stats count=*:::\n\n:::stats count=*:::");
        assert_eq!(html.matches("doc-count").count(), 1);
    }

    #[test]
    fn test_stats_without_store_passes_through() {
        let html = WikiRenderer::new().render(":::stats count=*:::");
        assert!(html.contains(":::stats count=*:::"));
        assert!(!html.contains("doc-count"));
    }

    #[test]
    fn test_stats_invalid_params_render_error() {
        let html = renderer_with_store().render(":::stats bogus=1:::");
        assert!(html.contains("wiki-stats-error"));
    }

    #[test]
    fn test_table_nested_in_list() {
        let html = WikiRenderer::new().render("- item\n| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        let table_pos = html.find("<table>").unwrap();
        let item_close = html.rfind("</li>").unwrap();
        assert!(table_pos < item_close);
    }

    #[test]
    fn test_note_alert_renders_content_as_markdown() {
        let html = WikiRenderer::new().render("> [!NOTE]\n> This is a **note**.");
        assert!(html.contains("markdown-alert markdown-alert-note"));
        assert!(html.contains("<strong>note</strong>"));
        assert!(!html.contains("[!NOTE]"));
    }

    #[test]
    fn test_alert_with_list_content() {
        let html = WikiRenderer::new().render("> [!WARNING]\n> Be careful:\n> - Item 1\n> - Item 2");
        assert!(html.contains("markdown-alert-warning"));
        assert!(html.contains("<ul>"));
        assert!(html.contains("Item 1"));
    }

    #[test]
    fn test_regular_blockquote_unchanged() {
        let html = WikiRenderer::new().render("> just a quote");
        assert!(html.contains("<blockquote>"));
        assert!(!html.contains("markdown-alert"));
    }

    #[test]
    fn test_strikethrough_enabled() {
        let html = WikiRenderer::new().render("~~gone~~");
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_render_never_panics_on_odd_input() {
        let renderer = WikiRenderer::new();
        for input in ["", "```", "```youtube", "==", ":::stats", "- [ ]", "|"] {
            let _ = renderer.render(input);
        }
    }
}
