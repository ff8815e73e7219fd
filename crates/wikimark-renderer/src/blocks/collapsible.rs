//! Collapsible `details` blocks.

use wikimark_storage::escape_html;

/// Derive a slug-like element id from a block title.
///
/// Only lowercase alphanumerics and dashes survive, so the result is
/// always safe to interpolate into an `id` attribute.
pub fn slug(title: &str) -> String {
    let mut id = String::with_capacity(title.len() + 8);
    id.push_str("details-");
    for c in title.to_lowercase().chars() {
        match c {
            ' ' => id.push('-'),
            c if c.is_ascii_alphanumeric() || c == '-' => id.push(c),
            _ => {}
        }
    }
    id
}

/// Wrap already-rendered inner HTML in a disclosure element.
pub fn wrap(title: &str, inner_html: &str) -> String {
    format!(
        "<details id=\"{id}\" class=\"markdown-details\">\n\
         <summary>{title}</summary>\n\
         <div class=\"details-content\">\n\
         {inner_html}</div>\n\
         </details>\n",
        id = slug(title),
        title = escape_html(title),
    )
}
