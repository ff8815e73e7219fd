//! Task-list line conversion.
//!
//! Converts `- [ ] text` / `- [x] text` lines into HTML list items with a
//! disabled checkbox, ahead of parsing. The nesting level is derived from
//! the leading indent (two spaces per level) and carried as a
//! `data-indent-level` attribute so stylesheets can indent nested items.

use std::sync::LazyLock;

use regex::Regex;

static UNCHECKED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+\[\s*\]\s+(.*)$").expect("valid unchecked task regex"));

static CHECKED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+\[(?:x|X)\]\s+(.*)$").expect("valid checked task regex"));

/// Convert a task-list line to its HTML replacement.
///
/// `trimmed` is the line without leading whitespace; `indent` is that
/// whitespace. Returns `None` for lines that are not task items.
pub fn convert_task_item(trimmed: &str, indent: &str) -> Option<String> {
    let (text, checked) = if let Some(caps) = UNCHECKED_RE.captures(trimmed) {
        (caps.get(1).map_or("", |m| m.as_str()), false)
    } else if let Some(caps) = CHECKED_RE.captures(trimmed) {
        (caps.get(1).map_or("", |m| m.as_str()), true)
    } else {
        return None;
    };

    let indent_level = indent.len() / 2;
    let checked_attr = if checked { " checked" } else { "" };

    Some(if indent_level > 0 {
        format!(
            "{indent}<li class=\"task-list-item-container\" style=\"list-style-type: none;\" \
             data-indent-level=\"{indent_level}\"><span class=\"task-list-item\">\
             <input type=\"checkbox\" class=\"task-checkbox\"{checked_attr} disabled> \
             <span class=\"task-text\">{text}</span></span></li>"
        )
    } else {
        format!(
            "<li class=\"task-list-item-container\" style=\"list-style-type: none;\">\
             <span class=\"task-list-item\">\
             <input type=\"checkbox\" class=\"task-checkbox\"{checked_attr} disabled> \
             <span class=\"task-text\">{text}</span></span></li>"
        )
    })
}
