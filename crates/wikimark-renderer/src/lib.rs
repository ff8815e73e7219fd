//! Wiki markdown rendering pipeline.
//!
//! Turns wiki-flavored markdown into HTML in three stages:
//!
//! 1. **Preprocess** ([`preprocess`]): typographic shortcodes, task-list
//!    conversion, and structural repair of list/table/fence nesting.
//! 2. **Parse**: [`pulldown_cmark`] with tables, strikethrough, and
//!    footnotes enabled.
//! 3. **Dispatch + render**: special fenced blocks (`mermaid`, `youtube`,
//!    `vimeo`, `mp4`, `details`, `ltr`/`rtl`), `==highlight==` spans,
//!    `:::stats ...:::` shortcodes, and local link/image rewriting are
//!    applied to the event stream before generic HTML rendering.
//!
//! Rendering never fails: malformed input degrades to generic markdown
//! output rather than an error.

mod blocks;
mod context;
mod dispatch;
mod inline;
mod preprocess;
mod renderer;

pub use inline::links::DEFAULT_FILES_PREFIX;
pub use preprocess::preprocess;
pub use renderer::WikiRenderer;
