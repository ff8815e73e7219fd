//! Event-stream dispatch for wiki extensions.
//!
//! The parser's event stream is transformed before generic HTML rendering:
//! special code blocks are claimed in a fixed precedence order and replaced
//! with pre-rendered HTML events, text nodes get stats expansion and
//! highlighting, and link/image destinations are rewritten in place.
//! Everything unclaimed passes through untouched.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use tracing::trace;
use wikimark_stats::{STATS_MARKER, StatsRenderer};
use wikimark_storage::escape_html;

use crate::blocks::{collapsible, diagram, direction, video};
use crate::context::RenderContext;
use crate::inline::{highlight, links};
use crate::renderer::{WikiRenderer, render_fragment};

/// Block containers tracked while walking the event stream. Only whether
/// the container is a list item matters to dispatch decisions.
#[derive(Debug, PartialEq, Eq)]
enum Container {
    Item,
    Other,
}

/// Transform a parsed event stream, applying all wiki extensions.
pub(crate) fn transform<'a>(
    events: Vec<Event<'a>>,
    renderer: &WikiRenderer,
    ctx: &mut RenderContext,
) -> Vec<Event<'a>> {
    let mut out: Vec<Event<'a>> = Vec::with_capacity(events.len());
    let mut containers: Vec<Container> = Vec::new();
    // Suppression decisions for open paragraphs, innermost last.
    let mut paragraphs: Vec<bool> = Vec::new();
    let mut image_depth = 0_usize;

    let mut iter = events.into_iter();
    while let Some(event) = iter.next() {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                // Collect the whole block so a claiming renderer can consume
                // it; unclaimed blocks are re-emitted verbatim.
                let mut buffered = vec![Event::Start(Tag::CodeBlock(kind.clone()))];
                let mut literal = String::new();
                for inner in iter.by_ref() {
                    let done = matches!(inner, Event::End(TagEnd::CodeBlock));
                    if let Event::Text(ref text) = inner {
                        literal.push_str(text);
                    }
                    buffered.push(inner);
                    if done {
                        break;
                    }
                }

                let info = match &kind {
                    CodeBlockKind::Fenced(info) => info.trim().to_owned(),
                    CodeBlockKind::Indented => String::new(),
                };
                let in_list_item = containers.contains(&Container::Item);

                match dispatch_code_block(&info, &literal, in_list_item, renderer, ctx) {
                    Some(html) => out.push(Event::Html(html.into())),
                    None => out.extend(buffered),
                }
            }
            Event::Start(Tag::Item) => {
                containers.push(Container::Item);
                out.push(Event::Start(Tag::Item));
            }
            Event::End(TagEnd::Item) => {
                containers.pop();
                out.push(Event::End(TagEnd::Item));
            }
            Event::Start(tag @ (Tag::BlockQuote(_) | Tag::List(_) | Tag::FootnoteDefinition(_))) => {
                containers.push(Container::Other);
                out.push(Event::Start(tag));
            }
            Event::End(end @ (TagEnd::BlockQuote(_) | TagEnd::List(_) | TagEnd::FootnoteDefinition)) => {
                containers.pop();
                out.push(Event::End(end));
            }
            Event::Start(Tag::Paragraph) => {
                // Paragraphs directly inside a list item render without
                // wrapper tags to avoid spurious block spacing.
                let suppress = containers.last() == Some(&Container::Item);
                paragraphs.push(suppress);
                if !suppress {
                    out.push(Event::Start(Tag::Paragraph));
                }
            }
            Event::End(TagEnd::Paragraph) => {
                if !paragraphs.pop().unwrap_or(false) {
                    out.push(Event::End(TagEnd::Paragraph));
                }
            }
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => {
                let dest_url = rewrite_destination(dest_url, renderer, ctx);
                out.push(Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                }));
            }
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) => {
                image_depth += 1;
                let dest_url = rewrite_destination(dest_url, renderer, ctx);
                out.push(Event::Start(Tag::Image {
                    link_type,
                    dest_url,
                    title,
                    id,
                }));
            }
            Event::End(TagEnd::Image) => {
                image_depth = image_depth.saturating_sub(1);
                out.push(Event::End(TagEnd::Image));
            }
            Event::Text(text) => {
                if image_depth > 0 {
                    // Inside alt text; no HTML may be injected here.
                    out.push(Event::Text(text));
                } else {
                    dispatch_text(text, renderer, ctx, &mut out);
                }
            }
            other => out.push(other),
        }
    }

    out
}

/// Claim a code block by info-string, in fixed precedence order.
///
/// Returns the replacement HTML, or `None` to fall back to generic code
/// rendering. Video tags with unextractable IDs fall through as well.
fn dispatch_code_block(
    info: &str,
    literal: &str,
    in_list_item: bool,
    renderer: &WikiRenderer,
    ctx: &mut RenderContext,
) -> Option<String> {
    if info == diagram::MERMAID_TAG {
        return Some(diagram::render(literal));
    }

    if info == "youtube" {
        let id = video::extract_youtube_id(literal);
        if !id.is_empty() {
            return Some(video::render_youtube(&id));
        }
        trace!("youtube block without extractable id, falling through");
    }

    if info == "vimeo" {
        let id = video::extract_vimeo_id(literal);
        if !id.is_empty() {
            return Some(video::render_vimeo(&id));
        }
        trace!("vimeo block without extractable id, falling through");
    }

    if info == "mp4" {
        let mut path = literal.trim().to_owned();
        if !path.is_empty() {
            if links::is_local_reference(&path) && !ctx.document_path.is_empty() {
                path = links::rewrite_local_reference(
                    &path,
                    &ctx.document_path,
                    renderer.files_prefix(),
                );
            }
            return Some(video::render_mp4(&path));
        }
    }

    if let Some(rest) = info.strip_prefix("details") {
        let title = rest.trim();
        let title = if title.is_empty() { "Details" } else { title };
        let content = literal.replace("\r\n", "\n");
        let inner = render_fragment(&content, renderer, ctx);
        return Some(collapsible::wrap(title, &inner));
    }

    if let Some(dir) = direction::parse(info) {
        let content = literal.replace("\r\n", "\n");
        let inner = render_fragment(content.trim(), renderer, ctx);
        return Some(direction::wrap(dir, &inner));
    }

    if in_list_item {
        // Minimal rendering keeps the surrounding list tight.
        let class = if info.is_empty() {
            String::new()
        } else {
            format!(" class=\"language-{}\"", escape_html(info))
        };
        return Some(format!(
            "<pre><code{class}>{}</code></pre>",
            escape_html(literal.trim())
        ));
    }

    None
}

/// Expand stats shortcodes and highlight markers in one text node.
fn dispatch_text<'a>(
    text: CowStr<'a>,
    renderer: &WikiRenderer,
    ctx: &mut RenderContext,
    out: &mut Vec<Event<'a>>,
) {
    let mut current = text;

    if let Some(store) = renderer.store() {
        if current.contains(STATS_MARKER) {
            if let Some(expansion) =
                StatsRenderer::new(store).expand(&current, &mut ctx.seen_shortcodes)
            {
                out.push(Event::Html(expansion.html.into()));
                if expansion.remaining.is_empty() {
                    return;
                }
                current = CowStr::from(expansion.remaining);
            }
        }
    }

    if highlight::has_marker(&current) {
        let html = highlight::apply(&escape_html(&current));
        out.push(Event::InlineHtml(html.into()));
    } else {
        out.push(Event::Text(current));
    }
}

/// Rewrite a link/image destination when it is a local reference and a
/// document path is set.
fn rewrite_destination<'a>(
    dest: CowStr<'a>,
    renderer: &WikiRenderer,
    ctx: &RenderContext,
) -> CowStr<'a> {
    if ctx.document_path.is_empty() || !links::is_local_reference(&dest) {
        return dest;
    }
    links::rewrite_local_reference(&dest, &ctx.document_path, renderer.files_prefix()).into()
}
